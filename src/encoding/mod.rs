/*
    Module that bundles together the various encoding schemes used by addresses
*/

pub mod base58;
pub mod bech32;
pub mod segwit;

pub use bech32::Hrp;
