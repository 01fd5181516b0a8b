/*
    Library to derive, encode, decode and validate addresses for
    Bitcoin and the chains that share its transaction model.

    Chains differ only by a handful of prefix bytes and the segwit
    human readable part, so they are described by a table of
    ChainProfile records instead of separate types.

    References:
        - BIP-173 (bech32) and BIP-350 (bech32m) for segwit addresses
        - BIP-49 for P2WPKH nested in P2SH
        - The Bitcoin Core base58 implementation and test vectors
*/

#[macro_use]
extern crate log;

//Outward facing modules
pub mod address;
pub mod chain;
pub mod encoding;
pub mod error;
pub mod formatter;
pub mod key;
pub mod prelude;
pub mod script;
pub mod util;

//Modules for internal use
pub mod hash;
mod impls;

//Dependencies
use ripemd160::Ripemd160;
use sha2::{Digest, Sha256};

pub use error::Error;
