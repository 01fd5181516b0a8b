/*
    Derives addresses from public keys and parses addresses back,
    driven by the parameters of a ChainProfile.
*/

use crate::{
    address::Address,
    chain::{
        AddressStyle,
        ChainProfile
    },
    encoding::{
        base58,
        bech32,
        segwit
    },
    hash,
    key::PubKey,
    script::{
        opcodes,
        Script,
        WitnessProgram
    },
    Error
};

/// Address encodings known to the parser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Segwit,
    Base58Check
}

/// Order in which `parse` tries the encodings.
/// Within Base58Check a legacy version byte wins over a script hash one.
pub const PARSE_ORDER: [Encoding; 2] = [Encoding::Segwit, Encoding::Base58Check];

/// Longer text is rejected before any decoding
pub const MAX_TEXT_LEN: usize = bech32::MAX_LENGTH;

/// Length of version | hash in the raw Base58Check form
const RAW_HASH_ADDRESS_LEN: usize = 21;

pub struct AddressFormatter;

impl AddressFormatter {
    /// Address in the chain's default style
    pub fn derive(profile: &ChainProfile, pk: &PubKey) -> Address {
        match profile.default_style() {
            AddressStyle::Native => Self::derive_native(profile, pk),
            AddressStyle::Compatible => Self::derive_compatible(profile, pk),
            AddressStyle::Legacy => Self::derive_legacy_for(profile, pk)
        }
    }

    /**
        Native segwit address (P2WPKH).
        Version 0 program of Hash160( compressed public key ).
    */
    pub fn derive_native(profile: &ChainProfile, pk: &PubKey) -> Address {
        let hash = hash::hash160(pk.compressed());
        Address::Segwit {
            hrp: profile.hrp(),
            program: WitnessProgram::p2wpkh(&hash)
        }
    }

    /**
        P2WPKH nested in P2SH.
        Payload is Hash160( 0x0014 | Hash160( compressed public key ) ).
    */
    pub fn derive_compatible(profile: &ChainProfile, pk: &PubKey) -> Address {
        let redeem_script = Script::p2wpkh(&hash::hash160(pk.compressed()));
        Address::ScriptHash {
            version: profile.script_hash_prefix(),
            hash: redeem_script.hash()
        }
    }

    /**
        Legacy P2PKH address with a caller supplied version byte,
        so any chain's prefix can be used.
    */
    pub fn derive_legacy(pk: &PubKey, version: u8) -> Address {
        Address::Legacy {
            version,
            hash: hash::hash160(pk.compressed())
        }
    }

    /// Legacy address with the profile's public key hash prefix
    pub fn derive_legacy_for(profile: &ChainProfile, pk: &PubKey) -> Address {
        Self::derive_legacy(pk, profile.public_key_hash_prefix())
    }

    /// Parses address text for the given chain, `None` if it is not a valid
    /// address of that chain.
    pub fn parse(profile: &ChainProfile, text: &str) -> Option<Address> {
        match Self::try_parse(profile, text) {
            Ok(address) => Some(address),
            Err(e) => {
                debug!("{}: rejected address {:?}: {}", profile.chain().name(), text, e);
                None
            }
        }
    }

    /**
        Same as `parse` but reports why the text was rejected.

        When every encoding fails, the segwit error is reported if the text
        starts with the chain's `hrp1` or got past the bech32 checksum,
        otherwise the Base58Check error.
    */
    pub fn try_parse(profile: &ChainProfile, text: &str) -> Result<Address, Error> {
        if text.len() > MAX_TEXT_LEN { return Err(Error::InvalidLength(text.len())) }

        let mut reported = None;
        for &encoding in PARSE_ORDER.iter() {
            let attempt = match encoding {
                Encoding::Segwit => Self::parse_segwit(profile, text),
                Encoding::Base58Check => Self::parse_base58(profile, text)
            };

            match attempt {
                Ok(address) => {
                    trace!("{}: {:?} matched {:?}", profile.chain().name(), text, encoding);
                    return Ok(address);
                },
                Err(e) => {
                    if reported.is_none() || !Self::claims_segwit(profile, text, &reported) {
                        reported = Some(e);
                    }
                }
            }
        }

        Err(reported.unwrap_or(Error::InvalidLength(text.len())))
    }

    /// Parses the raw version | hash form of a Base58Check address,
    /// as produced by `Address::to_bytes` for legacy and script hash addresses.
    pub fn parse_bytes(profile: &ChainProfile, bytes: &[u8]) -> Option<Address> {
        match Self::try_parse_bytes(profile, bytes) {
            Ok(address) => Some(address),
            Err(e) => {
                debug!("{}: rejected raw address {:02x?}: {}", profile.chain().name(), bytes, e);
                None
            }
        }
    }

    /**
        Same as `parse_bytes` but reports why the bytes were rejected.

        The buffer must be exactly 21 bytes and its version byte must be
        one of the profile's prefixes. Script pub keys, witness ones
        included, go through `parse_script_pubkey`.
    */
    pub fn try_parse_bytes(profile: &ChainProfile, bytes: &[u8]) -> Result<Address, Error> {
        if bytes.len() != RAW_HASH_ADDRESS_LEN { return Err(Error::InvalidLength(bytes.len())) }

        let mut hash = [0; 20];
        hash.copy_from_slice(&bytes[1..]);
        let address = Self::classify(profile, bytes[0], hash)?;
        trace!("{}: raw address matched {:?}", profile.chain().name(), Encoding::Base58Check);

        Ok(address)
    }

    /// Recovers the address an output script pays to, the inverse of
    /// `Address::script_pubkey`.
    pub fn parse_script_pubkey(profile: &ChainProfile, script: &[u8]) -> Option<Address> {
        match Self::try_parse_script_pubkey(profile, script) {
            Ok(address) => Some(address),
            Err(e) => {
                debug!("{}: rejected script pub key {:02x?}: {}", profile.chain().name(), script, e);
                None
            }
        }
    }

    /**
        Same as `parse_script_pubkey` but reports why the script was rejected.

        P2PKH and P2SH templates take the profile's version bytes, witness
        programs take the profile's hrp. The templates start with different
        opcodes, so at most one of them can match.
    */
    pub fn try_parse_script_pubkey(profile: &ChainProfile, script: &[u8]) -> Result<Address, Error> {
        let p2pkh_len = Script::p2pkh(&[0; 20]).as_bytes().len();
        let p2sh_len = Script::p2sh(&[0; 20]).as_bytes().len();

        let address = if script.len() == p2pkh_len && script[0] == opcodes::OP_DUP.into_u8() {
            let hash = Self::template_hash(script, 3)?;
            if Script::p2pkh(&hash).as_bytes() != script { return Err(Error::InvalidScript) }
            Address::Legacy { version: profile.public_key_hash_prefix(), hash }
        } else if script.len() == p2sh_len && script[0] == opcodes::OP_HASH160.into_u8() {
            let hash = Self::template_hash(script, 2)?;
            if Script::p2sh(&hash).as_bytes() != script { return Err(Error::InvalidScript) }
            Address::ScriptHash { version: profile.script_hash_prefix(), hash }
        } else {
            Address::Segwit {
                hrp: profile.hrp(),
                program: WitnessProgram::from_scriptpubkey(script)?
            }
        };
        trace!("{}: script pub key matched {:?}", profile.chain().name(), address);

        Ok(address)
    }

    //The 20 byte push starting at `offset`
    fn template_hash(script: &[u8], offset: usize) -> Result<[u8; 20], Error> {
        let push = script.get(offset..offset + 20).ok_or(Error::InvalidScript)?;
        let mut hash = [0; 20];
        hash.copy_from_slice(push);
        Ok(hash)
    }

    fn parse_segwit(profile: &ChainProfile, text: &str) -> Result<Address, Error> {
        let (hrp, program) = segwit::decode(text)?;
        if hrp != profile.hrp() { return Err(Error::PrefixMismatch) }

        Ok(Address::Segwit { hrp, program })
    }

    fn parse_base58(profile: &ChainProfile, text: &str) -> Result<Address, Error> {
        let (version, hash) = base58::decode_address(text)?;
        Self::classify(profile, version, hash)
    }

    //Legacy prefix is checked first, so it wins if a chain ever shares the two bytes.
    fn classify(profile: &ChainProfile, version: u8, hash: [u8; 20]) -> Result<Address, Error> {
        if version == profile.public_key_hash_prefix() {
            Ok(Address::Legacy { version, hash })
        } else if version == profile.script_hash_prefix() {
            Ok(Address::ScriptHash { version, hash })
        } else {
            Err(Error::PrefixMismatch)
        }
    }

    //Whether the error kept so far came from text that is meant to be a segwit address.
    fn claims_segwit(profile: &ChainProfile, text: &str, segwit_error: &Option<Error>) -> bool {
        let mut prefix = profile.segwit_hrp().to_string();
        prefix.push(bech32::SEPARATOR);
        let has_prefix = text
            .get(..prefix.len())
            .map_or(false, |head| head.eq_ignore_ascii_case(&prefix));

        let past_checksum = match segwit_error {
            Some(Error::PrefixMismatch) |
            Some(Error::InvalidWitnessVersion(_)) |
            Some(Error::InvalidProgramLength(_)) |
            Some(Error::InvalidPadding) => true,
            _ => false
        };

        has_prefix || past_checksum
    }
}
