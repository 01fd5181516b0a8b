use crate::{
    script::{
        Script,
        ScriptBuilder,
        Opcode,
        opcodes
    },
    encoding::{
        bech32::Variant,
        segwit,
        Hrp
    },
    Error
};

/// Highest witness version
pub const MAX_WITNESS_VERSION: u8 = 16;

/// Witness program length bounds for any version
pub const MIN_PROGRAM_LEN: usize = 2;
pub const MAX_PROGRAM_LEN: usize = 40;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct WitnessProgram {
    version: u8,
    program: Vec<u8>
}

impl WitnessProgram {
    /**
        Creates a new witness program given a version and data.

        For P2WPKH, version is 0 and data is the Hash160 of the public key.
        For P2WSH, version is 0 and data is the SHA256 of the redeem script.
        Other versions take 2 to 40 bytes.
    */
    pub fn new(version: u8, program: Vec<u8>) -> Result<Self, Error> {
        if version > MAX_WITNESS_VERSION { return Err(Error::InvalidWitnessVersion(version)) }

        let len = program.len();
        if len < MIN_PROGRAM_LEN || len > MAX_PROGRAM_LEN { return Err(Error::InvalidProgramLength(len)) }
        if version == 0 && len != 20 && len != 32 { return Err(Error::InvalidProgramLength(len)) }

        Ok(Self {
            version,
            program
        })
    }

    /// Version 0 program of a public key hash
    pub fn p2wpkh(pubkey_hash: &[u8; 20]) -> Self {
        Self {
            version: 0,
            program: pubkey_hash.to_vec()
        }
    }

    pub fn version(&self) -> u8 {
        self.version
    }

    pub fn program(&self) -> &[u8] {
        &self.program
    }

    /// Checksum variant required for this version (BIP-350)
    pub fn variant(&self) -> Variant {
        match self.version {
            0 => Variant::Bech32,
            _ => Variant::Bech32m
        }
    }

    pub fn to_address(&self, hrp: &Hrp) -> String {
        segwit::encode_program(hrp, self)
    }

    pub fn from_address(address: &str) -> Result<(Hrp, Self), Error> {
        segwit::decode(address)
    }

    pub fn to_scriptpubkey(&self) -> Script {
        //new() keeps the version within 0..=16
        let version = Opcode::from_witness_version(self.version).unwrap_or(opcodes::OP_0);

        //Script pub key = version opcode | program len | program
        ScriptBuilder::new()
            .push_opcode(version)
            .push_slice(&self.program)
            .into_script()
    }

    /// Reads back a script produced by `to_scriptpubkey`.
    pub fn from_scriptpubkey(script: &[u8]) -> Result<Self, Error> {
        if script.len() < 2 + MIN_PROGRAM_LEN || script.len() > 2 + MAX_PROGRAM_LEN {
            return Err(Error::InvalidLength(script.len()));
        }

        let version = Opcode::from(script[0])
            .witness_version()
            .ok_or(Error::InvalidScript)?;
        if script[1] as usize != script.len() - 2 { return Err(Error::InvalidLength(script.len())) }

        Self::new(version, script[2..].to_vec())
    }
}
