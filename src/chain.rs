/*
    Per chain address parameters.

    Every supported chain is the Bitcoin base profile with a few
    fields substituted, so the whole table can be audited here.
*/

use std::str::FromStr;

use crate::{
    encoding::Hrp,
    Error
};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChainId {
    Bitcoin,
    Litecoin,
    Dash
}

impl ChainId {
    pub const ALL: [ChainId; 3] = [ChainId::Bitcoin, ChainId::Litecoin, ChainId::Dash];

    /// SLIP-44 coin type
    pub fn coin_type(self) -> u32 {
        match self {
            ChainId::Bitcoin => 0,
            ChainId::Litecoin => 2,
            ChainId::Dash => 5
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ChainId::Bitcoin => "bitcoin",
            ChainId::Litecoin => "litecoin",
            ChainId::Dash => "dash"
        }
    }

    pub fn names() -> Vec<String> {
        Self::ALL.iter().map(|c| c.name().to_string()).collect()
    }
}

impl FromStr for ChainId {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.name() == name)
            .ok_or_else(|| Error::UnknownChain(name.to_string()))
    }
}

/// Address variant a chain hands out by default.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AddressStyle {
    /// Segwit address of the public key hash (P2WPKH)
    Native,
    /// P2WPKH nested in a script hash address (P2SH-P2WPKH)
    Compatible,
    /// Base58Check public key hash address (P2PKH)
    Legacy
}

impl AddressStyle {
    /// BIP-43 purpose of the derivation scheme that yields this style
    pub fn purpose(self) -> u32 {
        match self {
            AddressStyle::Native => 84,
            AddressStyle::Compatible => 49,
            AddressStyle::Legacy => 44
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ChainProfile {
    chain: ChainId,
    public_key_hash_prefix: u8,
    private_key_prefix: u8,
    script_hash_prefix: u8,
    segwit_hrp: &'static str,
    default_style: AddressStyle
}

impl ChainProfile {
    const fn for_chain(self, chain: ChainId) -> Self {
        Self { chain, ..self }
    }

    const fn with_script_hash_prefix(self, script_hash_prefix: u8) -> Self {
        Self { script_hash_prefix, ..self }
    }

    const fn with_default_style(self, default_style: AddressStyle) -> Self {
        Self { default_style, ..self }
    }

    pub fn chain(&self) -> ChainId {
        self.chain
    }

    /// Version byte of P2PKH addresses
    pub fn public_key_hash_prefix(&self) -> u8 {
        self.public_key_hash_prefix
    }

    /// Version byte of WIF encoded private keys
    pub fn private_key_prefix(&self) -> u8 {
        self.private_key_prefix
    }

    /// Version byte of P2SH addresses
    pub fn script_hash_prefix(&self) -> u8 {
        self.script_hash_prefix
    }

    pub fn segwit_hrp(&self) -> &'static str {
        self.segwit_hrp
    }

    pub fn hrp(&self) -> Hrp {
        Hrp::from_static(self.segwit_hrp)
    }

    pub fn default_style(&self) -> AddressStyle {
        self.default_style
    }
}

const BITCOIN: ChainProfile = ChainProfile {
    chain: ChainId::Bitcoin,
    public_key_hash_prefix: 0x00,
    private_key_prefix: 0x80,
    script_hash_prefix: 0x05,
    segwit_hrp: "bc",
    default_style: AddressStyle::Native
};

const LITECOIN: ChainProfile = BITCOIN
    .for_chain(ChainId::Litecoin)
    .with_script_hash_prefix(0x32);

const DASH: ChainProfile = BITCOIN
    .for_chain(ChainId::Dash)
    .with_script_hash_prefix(0x4C)
    .with_default_style(AddressStyle::Legacy);

static PROFILES: [ChainProfile; 3] = [BITCOIN, LITECOIN, DASH];

/// Parameters of a supported chain. Lives for the whole process.
pub fn profile_for(chain: ChainId) -> &'static ChainProfile {
    match chain {
        ChainId::Bitcoin => &PROFILES[0],
        ChainId::Litecoin => &PROFILES[1],
        ChainId::Dash => &PROFILES[2]
    }
}

/// Every profile in the table
pub fn profiles() -> &'static [ChainProfile] {
    &PROFILES
}
