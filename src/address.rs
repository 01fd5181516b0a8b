use crate::{
    encoding::{
        base58,
        Hrp
    },
    script::{
        Script,
        WitnessProgram
    }
};

/// A decoded or derived address.
///
/// Value type: fully determined by its fields, compared structurally.
/// `Hrp` and `WitnessProgram` can only hold validated values, so every
/// `Address` can be rendered.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Address {
    /// Pay to public key hash, Base58Check encoded
    Legacy {
        version: u8,
        hash: [u8; 20]
    },
    /// Pay to script hash, Base58Check encoded
    ScriptHash {
        version: u8,
        hash: [u8; 20]
    },
    /// Witness program behind a human readable part
    Segwit {
        hrp: Hrp,
        program: WitnessProgram
    }
}

impl Address {
    /// Text form of the address.
    ///
    /// Base58Check for legacy and script hash addresses, bech32/bech32m for
    /// segwit addresses. No chain profile is needed: the version byte or hrp
    /// was fixed when the address was derived or parsed and is stored in it.
    pub fn to_text(&self) -> String {
        match self {
            Address::Legacy { version, hash } |
            Address::ScriptHash { version, hash } => base58::encode_address(*version, hash),
            Address::Segwit { hrp, program } => program.to_address(hrp)
        }
    }

    /**
        Raw form of the address.

        Legacy and script hash: version | hash (21 bytes), read back by
        `AddressFormatter::parse_bytes`.
        Segwit: the witness script pub key, version opcode | length | program,
        read back by `AddressFormatter::parse_script_pubkey`.
    */
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            Address::Legacy { version, hash } |
            Address::ScriptHash { version, hash } => {
                let mut bytes = Vec::with_capacity(21);
                bytes.push(*version);
                bytes.extend_from_slice(hash);
                bytes
            },
            Address::Segwit { program, .. } => program.to_scriptpubkey().into_bytes()
        }
    }

    /// Output script paying to this address
    pub fn script_pubkey(&self) -> Script {
        match self {
            Address::Legacy { hash, .. } => Script::p2pkh(hash),
            Address::ScriptHash { hash, .. } => Script::p2sh(hash),
            Address::Segwit { program, .. } => program.to_scriptpubkey()
        }
    }

    /// Version byte for Base58Check addresses, witness version for segwit
    pub fn version(&self) -> u8 {
        match self {
            Address::Legacy { version, .. } |
            Address::ScriptHash { version, .. } => *version,
            Address::Segwit { program, .. } => program.version()
        }
    }

    /// The hash or witness program the address commits to
    pub fn payload(&self) -> &[u8] {
        match self {
            Address::Legacy { hash, .. } |
            Address::ScriptHash { hash, .. } => &hash[..],
            Address::Segwit { program, .. } => program.program()
        }
    }
}
