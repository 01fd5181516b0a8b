use crate::{
    hash,
    Error
};

const BASE58_ALPHABET: &'static [u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

const MAP_BASE58: [i8; 128] = [
        -1,-1,-1,-1,-1,-1,-1,-1, -1,-1,-1,-1,-1,-1,-1,-1,
        -1,-1,-1,-1,-1,-1,-1,-1, -1,-1,-1,-1,-1,-1,-1,-1,
        -1,-1,-1,-1,-1,-1,-1,-1, -1,-1,-1,-1,-1,-1,-1,-1,
        -1, 0, 1, 2, 3, 4, 5, 6,  7, 8,-1,-1,-1,-1,-1,-1,
        -1, 9,10,11,12,13,14,15, 16,-1,17,18,19,20,21,-1,
        22,23,24,25,26,27,28,29, 30,31,32,-1,-1,-1,-1,-1,
        -1,33,34,35,36,37,38,39, 40,41,42,43,-1,44,45,46,
        47,48,49,50,51,52,53,54, 55,56,57,-1,-1,-1,-1,-1,
];

/// Length of the checksum appended by `check_encode`
pub const CHECKSUM_LEN: usize = 4;

/// version | hash160 | checksum
pub const ADDRESS_LEN: usize = 1 + 20 + CHECKSUM_LEN;

/// Longest text a 25 byte payload can encode to.
/// Anything longer is rejected before decoding.
pub const MAX_ADDRESS_TEXT_LEN: usize = 35;

/// Encode data in base58 format.
/// Every leading zero byte becomes a leading '1'.
pub fn encode(data: &[u8]) -> String {
    let zcount = data.iter().take_while(|&&b| b == 0).count();

    //Little endian base58 digits of the big endian number in data
    let mut digits: Vec<u8> = Vec::with_capacity(data.len() * 138 / 100 + 1);
    for &byte in &data[zcount..] {
        //digits = digits*256 + byte
        let mut carry = byte as usize;
        for digit in digits.iter_mut() {
            let value = *digit as usize * 256 + carry;
            *digit = (value % 58) as u8;
            carry = value / 58;
        }

        while carry > 0 {
            digits.push((carry % 58) as u8);
            carry /= 58;
        }
    }

    digits.extend(std::iter::repeat(0).take(zcount));
    digits.iter().rev().map(|x| BASE58_ALPHABET[*x as usize] as char).collect()
}

/// Decodes a base58 string into a byte vector.
/// DOES NOT remove the checksum or version prefix if present.
///
/// Whitespace is not skipped, every character must be part of the alphabet.
pub fn decode(encoded: &str) -> Result<Vec<u8>, Error> {
    //Each leading '1' stands for one zero byte
    let zeroes = encoded.bytes().take_while(|&c| c == b'1').count();

    //Allocate enough space in big-endian base256 representation.
    let size = (encoded.len() - zeroes) * 733 / 1000 + 1; // log(58) / log(256), rounded up.
    let mut b256: Vec<u8> = vec![0; size];

    for ch in encoded.chars().skip(zeroes) {
        let digit = if ch.is_ascii() { MAP_BASE58[ch as usize] } else { -1 };
        if digit < 0 { return Err(Error::InvalidCharacter(ch)) }

        //b256 = b256*58 + digit
        let mut carry = digit as u32;
        for byte in b256.iter_mut().rev() {
            carry += 58 * (*byte as u32);
            *byte = (carry % 256) as u8;
            carry /= 256;
        }
    }

    //Strip the zero magnitude bytes the size estimate left in front
    let leading = b256.iter().take_while(|&&b| b == 0).count();

    let mut result = vec![0; zeroes];
    result.extend_from_slice(&b256[leading..]);
    Ok(result)
}

/// Appends the first four bytes of sha256d(version | payload) and encodes the result.
pub fn check_encode(version: u8, payload: &[u8]) -> String {
    let mut bytes = Vec::with_capacity(1 + payload.len() + CHECKSUM_LEN);
    bytes.push(version);
    bytes.extend_from_slice(payload);
    let checksum = hash::sha256d(&bytes);
    bytes.extend_from_slice(&checksum[..CHECKSUM_LEN]);

    encode(&bytes)
}

/// Returns the decoded data with the checksum removed.
/// Version prefix is NOT removed.
pub fn check_decode(encoded: &str) -> Result<Vec<u8>, Error> {
    let mut bytes = decode(encoded)?;
    if bytes.len() < CHECKSUM_LEN { return Err(Error::InvalidLength(bytes.len())) }

    let checksum = bytes.split_off(bytes.len() - CHECKSUM_LEN);
    if hash::sha256d(&bytes)[..CHECKSUM_LEN] != checksum[..] {
        return Err(Error::InvalidChecksum);
    }

    Ok(bytes)
}

/// Decodes a Base58Check address into its version byte and 20 byte hash.
///
/// The decoded data must be exactly version | hash | checksum.
pub fn decode_address(encoded: &str) -> Result<(u8, [u8; 20]), Error> {
    if encoded.len() > MAX_ADDRESS_TEXT_LEN { return Err(Error::InvalidLength(encoded.len())) }

    let bytes = decode(encoded)?;
    if bytes.len() != ADDRESS_LEN { return Err(Error::InvalidLength(bytes.len())) }

    let bytes = check_decode(encoded)?;
    let mut hash = [0; 20];
    hash.copy_from_slice(&bytes[1..]);
    Ok((bytes[0], hash))
}

/// Encodes a version byte and a 20 byte hash as a Base58Check address.
pub fn encode_address(version: u8, hash: &[u8; 20]) -> String {
    check_encode(version, hash)
}


#[cfg(test)]
mod tests {
    use crate::util::decode_02x;
    use super::*;

    #[test]
    /// Tests encoding of data without checksum
    /// Sourced from https://tools.ietf.org/id/draft-msporny-base58-01.html
    fn base58_ietf_test_vectors() {
        assert_eq!(encode(b"Hello World!"), "2NEpo7TZRRrLZSi2U");
        assert_eq!(encode(&[0x00, 0x00, 0x28, 0x7f, 0xb4, 0xcd]), "11233QC4");
        assert_eq!(decode("11233QC4").unwrap(), vec![0x00, 0x00, 0x28, 0x7f, 0xb4, 0xcd]);
    }

    #[test]
    /// Bitcoin Core src/test/data/base58_encode_decode.json
    fn base58_bitcoin_core_test_vectors() {
        let test_data: [(&str, &str); 9] = [
            ("", ""),
            ("61", "2g"),
            ("626262", "a3gV"),
            ("73696d706c792061206c6f6e6720737472696e67", "2cFupjhnEsSn59qHXstmK2ffpLv2"),
            ("00eb15231dfceb60925886b67d065299925915aeb172c06647", "1NS17iag9jJgTHD1VXjvLCEnZuQ3rJDE9L"),
            ("bf4f89001e670274dd", "3SEo3LWLoPntC"),
            ("ecac89cad93923c02321", "EJDM8drfXA6uyA"),
            ("00000000000000000000", "1111111111"),
            ("000111d38e5fc9071ffcd20b4a763cc9ae4f252bb4e48fd66a835e252ada93ff480d6dd43dc62a641155a5", "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz"),
        ];

        for (hex, text) in test_data.iter() {
            let bytes = decode_02x(hex).unwrap();
            assert_eq!(encode(&bytes), *text);
            assert_eq!(decode(text).unwrap(), bytes);
        }
    }

    #[test]
    fn rejects_characters_outside_alphabet() {
        for bad in ["0", "O", "I", "l", "1 2", "3é"].iter() {
            match decode(bad) {
                Err(Error::InvalidCharacter(_)) => {},
                other => panic!("{:?} decoded to {:?}", bad, other)
            }
        }
    }

    #[test]
    fn legacy_address_vector() {
        let hash = decode_02x("751e76e8199196d454941c45d1b3a323f1433bd6").unwrap();
        let mut expected = [0; 20];
        expected.copy_from_slice(&hash);

        assert_eq!(encode_address(0x00, &expected), "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH");
        assert_eq!(decode_address("1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH").unwrap(), (0x00, expected));
    }

    #[test]
    fn decode_address_failures() {
        //Last character changed
        assert_eq!(decode_address("1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMJ"), Err(Error::InvalidChecksum));
        //Valid base58 of the wrong size
        assert_eq!(decode_address("2g"), Err(Error::InvalidLength(1)));
        assert_eq!(decode_address(&check_encode(0x00, &[7; 19])), Err(Error::InvalidLength(24)));
        //Too long to be an address at all
        assert_eq!(decode_address(&"1".repeat(36)), Err(Error::InvalidLength(36)));
        assert!(matches!(decode_address("1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAM0"), Err(Error::InvalidCharacter('0'))));
    }

    #[test]
    fn leading_zero_payloads_round_trip() {
        let hash = [0u8; 20];
        let text = encode_address(0x00, &hash);
        //version byte and the whole hash are zero
        assert!(text.starts_with(&"1".repeat(21)));
        assert_eq!(decode_address(&text).unwrap(), (0x00, hash));
    }

    #[test]
    fn random_round_trips() {
        use rand::{thread_rng, Rng, RngCore};

        let mut rng = thread_rng();
        for _ in 0..64 {
            let version: u8 = rng.gen();
            let mut hash = [0u8; 20];
            rng.fill_bytes(&mut hash);

            let text = encode_address(version, &hash);
            assert!(text.len() <= MAX_ADDRESS_TEXT_LEN);
            assert_eq!(decode_address(&text).unwrap(), (version, hash));
        }
    }

    #[test]
    fn single_character_substitutions_are_detected() {
        let text = "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH";
        for i in 0..text.len() {
            for &replacement in BASE58_ALPHABET.iter() {
                let replacement = replacement as char;
                if text[i..].starts_with(replacement) { continue }

                let mut changed = String::from(&text[..i]);
                changed.push(replacement);
                changed.push_str(&text[i + 1..]);
                assert!(decode_address(&changed).is_err(), "{} accepted", changed);
            }
        }
    }
}
