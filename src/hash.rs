/*
    Hash module include hash function necessary to hash
    a public key or a script into an address payload.
*/

use crate::{
    Ripemd160, Sha256, Digest
};

/*
    Takes in a byte array and returns the sha256 hash of it
*/
pub fn sha256<T>(input: T) -> [u8; 32]
where T: AsRef<[u8]>
{
    let mut r = Sha256::new();
    r.update(input);
    let mut out = [0; 32];
    out.copy_from_slice(&r.finalize());
    out
}

/// Sha256 applied twice. The first four bytes are the Base58Check checksum.
pub fn sha256d<T>(input: T) -> [u8; 32]
where T: AsRef<[u8]>
{
    sha256(sha256(input))
}

/*
    Takes in a byte array and returns the ripemd160 hash of it
*/
pub fn ripemd160<T>(input: T) -> [u8; 20]
where T: AsRef<[u8]>
{
    let mut r = Ripemd160::new();
    r.update(input);
    let mut out = [0; 20];
    out.copy_from_slice(&r.finalize());
    out
}

/// Ripemd160( Sha256( input ) ), the payload of every address type handled here.
///
/// Accepts input of any length and never fails.
pub fn hash160<T>(input: T) -> [u8; 20]
where T: AsRef<[u8]>
{
    ripemd160(sha256(input))
}
