/*
    Minimal implementation of the output scripts behind each address type
*/

pub mod builder;
pub mod witness_program;

pub use builder::{
    Builder as ScriptBuilder,
    Opcode,
    opcodes
};
pub use witness_program::WitnessProgram;

use crate::hash;

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Script {
    code: Vec<u8>
}

impl Script {
    /**
        Create a new instance of self
    */
    pub fn new(code: Vec<u8>) -> Self {
        Self {
            code
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.code
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.code
    }

    /**
        Hash the script with Hash160
    */
    pub fn hash(&self) -> [u8; 20] {
        hash::hash160(&self.code)
    }

    /// P2PKH script pub key
    /// OP_DUP OP_HASH160 <Pubkey Hash> OP_EQUALVERIFY OP_CHECKSIG
    pub fn p2pkh(pubkey_hash: &[u8; 20]) -> Self {
        ScriptBuilder::new()
            .push_opcode(opcodes::OP_DUP)
            .push_opcode(opcodes::OP_HASH160)
            .push_slice(pubkey_hash)
            .push_opcode(opcodes::OP_EQUALVERIFY)
            .push_opcode(opcodes::OP_CHECKSIG)
            .into_script()
    }

    /// P2SH script pub key
    /// OP_HASH160 <Hash160(redeemScript)> OP_EQUAL
    pub fn p2sh(script_hash: &[u8; 20]) -> Self {
        ScriptBuilder::new()
            .push_opcode(opcodes::OP_HASH160)
            .push_slice(script_hash)
            .push_opcode(opcodes::OP_EQUAL)
            .into_script()
    }

    /// P2WPKH script pub key, also the redeem script of a nested segwit address.
    /// 0x0014 <20-byte-pubkey-hash>
    pub fn p2wpkh(pubkey_hash: &[u8; 20]) -> Self {
        WitnessProgram::p2wpkh(pubkey_hash).to_scriptpubkey()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::{decode_02x, encode_02x};

    fn hash(hex: &str) -> [u8; 20] {
        let mut out = [0; 20];
        out.copy_from_slice(&decode_02x(hex).unwrap());
        out
    }

    #[test]
    fn output_script_templates() {
        let h = hash("751e76e8199196d454941c45d1b3a323f1433bd6");
        assert_eq!(encode_02x(Script::p2pkh(&h).as_bytes()), "76a914751e76e8199196d454941c45d1b3a323f1433bd688ac");
        assert_eq!(encode_02x(Script::p2sh(&h).as_bytes()), "a914751e76e8199196d454941c45d1b3a323f1433bd687");
        assert_eq!(encode_02x(Script::p2wpkh(&h).as_bytes()), "0014751e76e8199196d454941c45d1b3a323f1433bd6");
    }

    #[test]
    /// BIP-49 test vector, the redeem script hash is the address payload
    fn nested_segwit_redeem_script() {
        let redeem = Script::p2wpkh(&hash("38971f73930f6c141d977ac4fd4a727c854935b3"));
        assert_eq!(encode_02x(redeem.as_bytes()), "001438971f73930f6c141d977ac4fd4a727c854935b3");
        assert_eq!(encode_02x(&redeem.hash()), "336caa13e08b96080a32b5d818d59b4ab3b36742");
    }
}
