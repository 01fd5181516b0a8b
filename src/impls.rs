/**
    This module combines all the boilerplate
    implementations of fmt::Display and more.
*/

use crate::{
    address,
    chain,
    encoding::Hrp,
    error::Error,
    key,
    script,
    util::encode_02x
};
use std::fmt;

/*
    key module impls
*/
impl fmt::Display for key::PubKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", encode_02x(self.as_bytes()))
    }
}

impl fmt::Debug for key::PubKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PubKey")
         .field(&encode_02x(self.as_bytes()))
         .finish()
    }
}

/*
    address module impls
*/
impl fmt::Display for address::Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_text())
    }
}

impl fmt::Display for Hrp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/*
    script module impls
*/
impl fmt::Display for script::Script {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", encode_02x(self.as_bytes()))
    }
}

impl fmt::Debug for script::Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Script")
         .field(&encode_02x(self.as_bytes()))
         .finish()
    }
}

/*
    chain module impls
*/
impl fmt::Display for chain::ChainId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/*
    error impls
*/
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidChecksum => write!(f, "bad checksum"),
            Self::InvalidCharacter(c) => write!(f, "invalid character {:?}", c),
            Self::InvalidLength(x) => write!(f, "invalid length {}", x),
            Self::InvalidSeparator => write!(f, "missing or misplaced separator"),
            Self::InvalidPadding => write!(f, "invalid padding"),
            Self::InvalidHrp => write!(f, "invalid human readable part"),
            Self::InvalidScript => write!(f, "unrecognised output script"),
            Self::InvalidWitnessVersion(x) => write!(f, "invalid witness version {}", x),
            Self::InvalidProgramLength(x) => write!(f, "invalid witness program length {}", x),
            Self::PrefixMismatch => write!(f, "address belongs to another chain"),
            Self::MixedCase => write!(f, "mixed case"),
            Self::InvalidPublicKey(x) => write!(f, "invalid public key length {}", x),
            Self::UnknownChain(x) => write!(f, "unknown chain {}, expected one of {:?}", x, chain::ChainId::names())
        }
    }
}
