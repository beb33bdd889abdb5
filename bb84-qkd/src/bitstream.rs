//! Random bit string generation.
//!
//! Each protocol run draws three independent strings from the same injected
//! randomness source: Alice's key bits, Alice's bases, Bob's bases. The
//! source is always passed in explicitly so a run can be reproduced under
//! test with a seeded rng.

use rand::Rng;

use crate::error::ProtocolError;

/// An ordered sequence of bits.
pub type BitString = Vec<bool>;

/// Generate `len` independent uniformly random bits.
///
/// The protocol is undefined for an empty string, so `len == 0` is an
/// invalid argument.
pub fn random_bits<R: Rng>(rng: &mut R, len: usize) -> Result<BitString, ProtocolError> {
    if len == 0 {
        return Err(ProtocolError::InvalidArgument(
            "bit string length must be positive".to_string(),
        ));
    }
    Ok((0..len).map(|_| rng.gen()).collect())
}
