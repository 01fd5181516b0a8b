/*

    Script builder module.

*/

use super::Script;

#[derive(Debug, Clone, Default)]
pub struct Builder {
    code: Vec<u8>
}

impl Builder {
    /// Return a new instance of self
    pub fn new() -> Self  {
        Self { code: Vec::new() }
    }

    /// Push an opcode into self
    pub fn push_opcode(mut self, opcode: Opcode) -> Self {
        self.code.push(opcode.into_u8());
        self
    }

    /// Push data with the matching OP_PUSHBYTES_n prefix.
    /// Only direct pushes (up to 75 bytes) are needed for output scripts.
    pub fn push_slice(mut self, slice: &[u8]) -> Self {
        debug_assert!(slice.len() <= 75);
        self.code.push(slice.len() as u8);
        self.code.extend_from_slice(slice);
        self
    }

    /// Convert self into a script
    pub fn into_script(self) -> Script {
        Script::new(self.code)
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opcode {
    code: u8
}

impl Opcode {
    pub fn into_u8(self) -> u8 {
        self.code
    }

    /// Small integer opcode for a witness version, OP_0 or OP_1..OP_16.
    pub fn from_witness_version(version: u8) -> Option<Self> {
        match version {
            0 => Some(opcodes::OP_0),
            1..=16 => Some(Self { code: opcodes::OP_PUSHNUM_1.code + version - 1 }),
            _ => None
        }
    }

    /// Inverse of `from_witness_version`.
    pub fn witness_version(self) -> Option<u8> {
        match self.code {
            0x00 => Some(0),
            0x51..=0x60 => Some(self.code - opcodes::OP_PUSHNUM_1.code + 1),
            _ => None
        }
    }
}

impl From<u8> for Opcode {
    fn from(code: u8) -> Self {
        Self { code }
    }
}

// Opcode constants
pub mod opcodes {
    use super::Opcode;

    /// Push an empty array onto the stack
    pub const OP_0: Opcode = Opcode {code: 0x00};
    /// Push the number 1 onto the stack
    pub const OP_PUSHNUM_1: Opcode = Opcode {code: 0x51};
    /// Push the number 16 onto the stack
    pub const OP_PUSHNUM_16: Opcode = Opcode {code: 0x60};
    /// Duplicates the top stack item
    pub const OP_DUP: Opcode = Opcode {code: 0x76};
    /// Pushes 1 if the inputs are exactly equal, 0 otherwise
    pub const OP_EQUAL: Opcode = Opcode {code: 0x87};
    /// Same as OP_EQUAL, but runs OP_VERIFY afterward
    pub const OP_EQUALVERIFY: Opcode = Opcode {code: 0x88};
    /// The input is hashed twice: first with SHA-256 and then with RIPEMD-160
    pub const OP_HASH160: Opcode = Opcode {code: 0xa9};
    /// Checks the signature of the transaction against the public key
    pub const OP_CHECKSIG: Opcode = Opcode {code: 0xac};
}
