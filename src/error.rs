/// Errors reported by the codecs, the chain table and the address parser.
///
/// The parser collapses all of these into `None`, the `try_*` parsing
/// entry points surface them for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Checksum does not match the data it protects
    InvalidChecksum,
    /// Character outside of the encoding alphabet
    InvalidCharacter(char),
    /// Decoded data or input text has the wrong length
    InvalidLength(usize),
    /// Missing separator, empty human readable part or truncated data part
    InvalidSeparator,
    /// Non zero or oversized padding when regrouping 5 bit data into bytes
    InvalidPadding,
    /// Human readable part is empty, too long or contains bad characters
    InvalidHrp,
    /// Bytes that do not form a recognised output script
    InvalidScript,
    /// Witness version above 16
    InvalidWitnessVersion(u8),
    /// Witness program length outside of 2..=40, or not 20/32 for version 0
    InvalidProgramLength(usize),
    /// Well formed address that belongs to another chain profile
    PrefixMismatch,
    /// Segwit address mixing upper and lower case characters
    MixedCase,
    /// Public key bytes that are neither 33 byte compressed nor 65 byte uncompressed
    InvalidPublicKey(usize),
    /// Chain name not present in the chain table
    UnknownChain(String),
}

impl std::error::Error for Error {}
