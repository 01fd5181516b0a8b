/*
    Segwit address codec: a witness version and program behind a
    human readable part, bech32 checksummed for version 0 and
    bech32m checksummed for versions 1 to 16.
*/
use crate::{
    encoding::bech32::{
        self,
        Hrp
    },
    script::WitnessProgram,
    Error
};

/// Renders an already validated program. Cannot fail.
pub(crate) fn encode_program(hrp: &Hrp, program: &WitnessProgram) -> String {
    let mut data = vec![program.version()];
    data.extend(bech32::to_base32(program.program()));

    bech32::encode_to_string(hrp, &data, program.variant())
}

/**
    Encodes a witness program as a segwit address.
    Fails on an invalid hrp, a version above 16 or a bad program length.
*/
pub fn encode(hrp: &str, version: u8, program: &[u8]) -> Result<String, Error> {
    let hrp = Hrp::new(hrp)?;
    let program = WitnessProgram::new(version, program.to_vec())?;

    Ok(encode_program(&hrp, &program))
}

/**
    Decodes a segwit address into its human readable part and witness program.

    The first 5 bit group is the witness version, the rest regroup into the
    program bytes. The checksum variant must match the version.
*/
pub fn decode(address: &str) -> Result<(Hrp, WitnessProgram), Error> {
    let (hrp, data, variant) = bech32::decode(address)?;

    let (&version, groups) = data.split_first().ok_or(Error::InvalidProgramLength(0))?;
    if version > 16 { return Err(Error::InvalidWitnessVersion(version)) }

    let program = bech32::convert_bits(groups, 5, 8, false)?;
    let program = WitnessProgram::new(version, program)?;
    if program.variant() != variant { return Err(Error::InvalidChecksum) }

    Ok((hrp, program))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        encoding::bech32::{CHECKSUM_LENGTH, Variant},
        util::{decode_02x, encode_02x}
    };

    #[test]
    /// BIP-173 and BIP-350 valid addresses with their script pub keys
    fn valid_address_vectors() {
        let vectors = [
            ("BC1QW508D6QEJXTDG4Y5R3ZARVARY0C5XW7KV8F3T4", "0014751e76e8199196d454941c45d1b3a323f1433bd6"),
            ("tb1qrp33g0q5c5txsp9arysrx4k6zdkfs4nce4xj0gdcccefvpysxf3q0sl5k7", "00201863143c14c5166804bd19203356da136c985678cd4d27a1b8c6329604903262"),
            ("tb1qqqqqp399et2xygdj5xreqhjjvcmzhxw4aywxecjdzew6hylgvsesrxh6hy", "0020000000c4a5cad46221b2a187905e5266362b99d5e91c6ce24d165dab93e86433"),
            ("bc1p0xlxvlhemja6c4dqv22uapctqupfhlxm9h8z3k2e72q4k9hcz7vqzk5jj0", "512079be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"),
        ];

        for (address, script) in vectors.iter() {
            let (hrp, program) = decode(address).unwrap();
            assert_eq!(encode_02x(program.to_scriptpubkey().as_bytes()), *script);
            //Encoders always produce lowercase
            assert_eq!(program.to_address(&hrp), address.to_ascii_lowercase());
        }
    }

    #[test]
    fn encodes_known_vector() {
        let program = decode_02x("751e76e8199196d454941c45d1b3a323f1433bd6").unwrap();
        assert_eq!(encode("bc", 0, &program).unwrap(), "bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4");
        assert_eq!(encode("tb", 0, &program).unwrap(), "tb1qw508d6qejxtdg4y5r3zarvary0c5xw7kxpjzsx");
    }

    #[test]
    /// BIP-173 invalid addresses
    fn invalid_address_vectors() {
        assert_eq!(decode("bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t5"), Err(Error::InvalidChecksum));
        assert_eq!(decode("BC13W508D6QEJXTDG4Y5R3ZARVARY0C5XW7KN40WF2"), Err(Error::InvalidWitnessVersion(17)));
        assert_eq!(decode("bc1rw5uspcuh"), Err(Error::InvalidProgramLength(1)));
        assert!(decode("BC1QR508D6QEJXTDG4Y5R3ZARVARYV98GJ9P").is_err());
        assert_eq!(decode("tb1qrp33g0q5c5txsp9arysrx4k6zdkfs4nce4xj0gdcccefvpysxf3q0sL5k7"), Err(Error::MixedCase));
        assert!(decode("bc10w508d6qejxtdg4y5r3zarvary0c5xw7kw508d6qejxtdg4y5r3zarvary0c5xw7kw5rljs90").is_err());
        assert!(decode("tb1qrp33g0q5c5txsp9arysrx4k6zdkfs4nce4xj0gdcccefvpysxf3pjxtptv").is_err());
        assert!(decode("bc1gmk9yu").is_err());
    }

    #[test]
    fn checksum_variant_must_match_version() {
        let program = decode_02x("79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798").unwrap();

        //version 1 with the version 0 checksum
        let mut data = vec![1];
        data.extend(bech32::to_base32(&program));
        let wrong = bech32::encode("bc", &data, Variant::Bech32).unwrap();
        assert_eq!(decode(&wrong), Err(Error::InvalidChecksum));

        //version 0 with the version 1 checksum
        let mut data = vec![0];
        data.extend(bech32::to_base32(&program));
        let wrong = bech32::encode("bc", &data, Variant::Bech32m).unwrap();
        assert_eq!(decode(&wrong), Err(Error::InvalidChecksum));
    }

    #[test]
    fn version_zero_needs_20_or_32_bytes() {
        let mut data = vec![0];
        data.extend(bech32::to_base32(&[0x75; 16]));
        let address = bech32::encode("bc", &data, Variant::Bech32).unwrap();
        assert_eq!(decode(&address), Err(Error::InvalidProgramLength(16)));

        //the same program is fine for version 2
        data[0] = 2;
        let address = bech32::encode("bc", &data, Variant::Bech32m).unwrap();
        assert_eq!(decode(&address).unwrap().1.program(), &[0x75; 16][..]);
    }

    #[test]
    fn encode_validates_inputs() {
        assert_eq!(encode("bc", 17, &[0; 20]), Err(Error::InvalidWitnessVersion(17)));
        assert_eq!(encode("bc", 0, &[0; 19]), Err(Error::InvalidProgramLength(19)));
        assert_eq!(encode("", 0, &[0; 20]), Err(Error::InvalidHrp));
    }

    #[test]
    fn mixed_case_rejected_even_with_valid_checksum() {
        let address = "bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4";
        assert!(decode(address).is_ok());
        assert!(decode(&address.to_ascii_uppercase()).is_ok());

        let mixed: String = address
            .chars()
            .enumerate()
            .map(|(i, c)| if i % 2 == 0 { c.to_ascii_uppercase() } else { c })
            .collect();
        assert_eq!(decode(&mixed), Err(Error::MixedCase));
    }

    #[test]
    fn random_round_trips() {
        use rand::{thread_rng, Rng, RngCore};

        let mut rng = thread_rng();
        for hrp in ["bc", "tb", "ltc"].iter() {
            for version in 0..=16u8 {
                let len = match version {
                    0 => if rng.gen() { 20 } else { 32 },
                    _ => rng.gen_range(2, 41)
                };
                let mut program = vec![0u8; len];
                rng.fill_bytes(&mut program);

                let address = encode(hrp, version, &program).unwrap();
                let (decoded_hrp, decoded) = decode(&address).unwrap();
                assert_eq!(decoded_hrp.as_str(), *hrp);
                assert_eq!(decoded.version(), version);
                assert_eq!(decoded.program(), &program[..]);
            }
        }
    }

    #[test]
    fn single_character_substitutions_are_detected() {
        let address = "bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4";
        let data_start = address.rfind('1').unwrap() + 1;
        let charset = "qpzry9x8gf2tvdw0s3jn54khce6mua7l";

        for i in data_start..address.len() {
            for replacement in charset.chars() {
                if address[i..].starts_with(replacement) { continue }

                let mut changed = String::from(&address[..i]);
                changed.push(replacement);
                changed.push_str(&address[i + 1..]);
                assert!(decode(&changed).is_err(), "{} accepted", changed);
            }
        }
        assert!(address.len() - data_start > CHECKSUM_LENGTH);
    }
}
