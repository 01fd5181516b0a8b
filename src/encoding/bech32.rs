/*
    Module implements bech32 (BIP-173) and bech32m (BIP-350) encoding
    of 5 bit data groups behind a human readable part.
*/
use crate::Error;

// Encoding character set.
const CHARSET: [char; 32] = [
    'q','p','z','r','y','9','x','8',
    'g','f','2','t','v','d','w','0',
    's','3','j','n','5','4','k','h',
    'c','e','6','m','u','a','7','l'
];

// Reverse lookup of CHARSET for lowercase ASCII.
const CHARSET_REV: [i8; 128] = [
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    15, -1, 10, 17, 21, 20, 26, 30,  7,  5, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, 29, -1, 24, 13, 25,  9,  8, 23, -1, 18, 22, 31, 27, 19, -1,
     1,  0,  3, 16, 11, 28, 12, 14,  6,  4,  2, -1, -1, -1, -1, -1,
];

const GENERATOR: [u32; 5] = [0x3b6a57b2, 0x26508e6d, 0x1ea119fa, 0x3d4233dd, 0x2a1462b3];

/// Separator between the human readable part and the data part
pub const SEPARATOR: char = '1';

/// Longest string a decoder accepts
pub const MAX_LENGTH: usize = 90;

/// Longest human readable part
pub const MAX_HRP_LENGTH: usize = 83;

/// Number of 5 bit groups in the checksum
pub const CHECKSUM_LENGTH: usize = 6;

/// Checksum constant in use.
/// Bech32 for witness version 0, Bech32m for everything above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Bech32,
    Bech32m
}

impl Variant {
    fn constant(self) -> u32 {
        match self {
            Variant::Bech32 => 1,
            Variant::Bech32m => 0x2bc830a3
        }
    }

    fn from_residue(residue: u32) -> Option<Self> {
        match residue {
            1 => Some(Variant::Bech32),
            0x2bc830a3 => Some(Variant::Bech32m),
            _ => None
        }
    }
}

/// Validated, lowercase human readable part.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hrp(String);

impl Hrp {
    /**
        Checks that the human readable part is 1 to 83 printable US-ASCII
        characters without mixed case. Uppercase input is lowercased.
    */
    pub fn new(hrp: &str) -> Result<Self, Error> {
        if hrp.is_empty() || hrp.len() > MAX_HRP_LENGTH { return Err(Error::InvalidHrp) }
        if hrp.bytes().any(|b| b < 33 || b > 126) { return Err(Error::InvalidHrp) }

        let has_lower = hrp.bytes().any(|b| b.is_ascii_lowercase());
        let has_upper = hrp.bytes().any(|b| b.is_ascii_uppercase());
        if has_lower && has_upper { return Err(Error::MixedCase) }

        Ok(Self(hrp.to_ascii_lowercase()))
    }

    /// Used for the static chain table, which is checked by its tests.
    pub(crate) fn from_static(hrp: &'static str) -> Self {
        debug_assert!(Self::new(hrp).is_ok());
        Self(hrp.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    //Each hrp character's high bits, a zero, then each character's low bits.
    fn expand(&self) -> Vec<u8> {
        let bytes = self.0.as_bytes();
        let mut expanded = Vec::with_capacity(bytes.len() * 2 + 1);
        expanded.extend(bytes.iter().map(|b| b >> 5));
        expanded.push(0);
        expanded.extend(bytes.iter().map(|b| b & 0x1f));
        expanded
    }
}

fn polymod(values: &[u8]) -> u32 {
    let mut chk: u32 = 1;
    for v in values {
        let top = chk >> 25;
        chk = ((chk & 0x1ffffff) << 5) ^ (*v as u32);
        for (i, g) in GENERATOR.iter().enumerate() {
            if (top >> i) & 1 == 1 {
                chk ^= g;
            }
        }
    }
    chk
}

fn create_checksum(hrp: &Hrp, data: &[u8], variant: Variant) -> [u8; CHECKSUM_LENGTH] {
    let mut values = hrp.expand();
    values.extend_from_slice(data);
    values.extend_from_slice(&[0; CHECKSUM_LENGTH]);
    let pm = polymod(&values) ^ variant.constant();

    let mut checksum = [0; CHECKSUM_LENGTH];
    for (i, c) in checksum.iter_mut().enumerate() {
        *c = ((pm >> (5 * (5 - i))) & 0x1f) as u8;
    }
    checksum
}

fn verify_checksum(hrp: &Hrp, data: &[u8]) -> Option<Variant> {
    let mut values = hrp.expand();
    values.extend_from_slice(data);
    Variant::from_residue(polymod(&values))
}

/// Renders hrp | '1' | data | checksum. Every data value must be below 32.
pub(crate) fn encode_to_string(hrp: &Hrp, data: &[u8], variant: Variant) -> String {
    let checksum = create_checksum(hrp, data, variant);

    let mut out = String::with_capacity(hrp.len() + 1 + data.len() + CHECKSUM_LENGTH);
    out.push_str(hrp.as_str());
    out.push(SEPARATOR);
    for d in data.iter().chain(checksum.iter()) {
        out.push(CHARSET[*d as usize]);
    }
    out
}

/**
    Encodes 5 bit data groups behind the given human readable part.
    Fails if the hrp is invalid or any value does not fit in 5 bits.
*/
pub fn encode(hrp: &str, data: &[u8], variant: Variant) -> Result<String, Error> {
    let hrp = Hrp::new(hrp)?;
    if let Some(bad) = data.iter().find(|&&d| d > 31) {
        return Err(Error::InvalidCharacter(*bad as char));
    }

    Ok(encode_to_string(&hrp, data, variant))
}

/**
    Decodes a bech32 or bech32m string into its human readable part,
    5 bit data groups (checksum removed) and the checksum variant that matched.
*/
pub fn decode(s: &str) -> Result<(Hrp, Vec<u8>, Variant), Error> {
    if s.len() > MAX_LENGTH { return Err(Error::InvalidLength(s.len())) }
    if let Some(bad) = s.chars().find(|c| !c.is_ascii() || (*c as u32) < 33 || (*c as u32) > 126) {
        return Err(Error::InvalidCharacter(bad));
    }

    let has_lower = s.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = s.bytes().any(|b| b.is_ascii_uppercase());
    if has_lower && has_upper { return Err(Error::MixedCase) }
    let s = s.to_ascii_lowercase();

    //The hrp may itself contain '1', the last one is the separator.
    let pos = s.rfind(SEPARATOR).ok_or(Error::InvalidSeparator)?;
    if pos == 0 || pos + 1 + CHECKSUM_LENGTH > s.len() { return Err(Error::InvalidSeparator) }

    let hrp = Hrp::new(&s[..pos])?;
    let data = s[pos + 1..]
        .chars()
        .map(|c| match CHARSET_REV[c as usize] {
            -1 => Err(Error::InvalidCharacter(c)),
            v => Ok(v as u8)
        })
        .collect::<Result<Vec<u8>, Error>>()?;

    let variant = verify_checksum(&hrp, &data).ok_or(Error::InvalidChecksum)?;

    let payload_len = data.len() - CHECKSUM_LENGTH;
    let mut data = data;
    data.truncate(payload_len);
    Ok((hrp, data, variant))
}

/// Regroups bytes into 5 bit groups, zero padding the last one.
pub(crate) fn to_base32(data: &[u8]) -> Vec<u8> {
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let mut ret = Vec::with_capacity((data.len() * 8 + 4) / 5);

    for byte in data {
        acc = ((acc << 8) | *byte as u32) & 0xfff;
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            ret.push(((acc >> bits) & 0x1f) as u8);
        }
    }
    if bits > 0 {
        ret.push(((acc << (5 - bits)) & 0x1f) as u8);
    }
    ret
}

/**
    Regroups a bit stream, most significant bit first.

    With `pad` the final group is filled with zero bits. Without it the
    leftover bits must be fewer than `from` and all zero.
*/
pub fn convert_bits(data: &[u8], from: u32, to: u32, pad: bool) -> Result<Vec<u8>, Error> {
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let maxv: u32 = (1 << to) - 1;
    let max_acc: u32 = (1 << (from + to - 1)) - 1;
    let mut ret: Vec<u8> = Vec::with_capacity((data.len() * from as usize + to as usize - 1) / to as usize);

    for value in data {
        let v = *value as u32;
        if (v >> from) != 0 { return Err(Error::InvalidCharacter(*value as char)) }

        acc = ((acc << from) | v) & max_acc;
        bits += from;
        while bits >= to {
            bits -= to;
            ret.push(((acc >> bits) & maxv) as u8);
        }
    }

    if pad {
        if bits > 0 {
            ret.push(((acc << (to - bits)) & maxv) as u8);
        }
    } else if bits >= from || ((acc << (to - bits)) & maxv) != 0 {
        return Err(Error::InvalidPadding);
    }

    Ok(ret)
}
