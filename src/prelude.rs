/*
    This module contains the default imports for the library.

    Import the library using:
        use btc_chainaddress::prelude::*;
    to quickly import the essential parts of the library.
*/

pub use crate::{

    key::PubKey,

    address::Address,

    chain::{
        ChainId,
        ChainProfile,
        AddressStyle,
        profile_for,
        profiles
    },

    formatter::{
        AddressFormatter,
        Encoding,
        PARSE_ORDER
    },

    encoding::Hrp,

    script::{
        Script,
        WitnessProgram
    },

    util::{
        encode_02x,
        decode_02x
    },

    Error

};
