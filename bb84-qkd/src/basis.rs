//! Measurement bases.

use rand::Rng;
use std::fmt;

use crate::bitstream::random_bits;
use crate::error::ProtocolError;

/// One of the two BB84 bases. A basis is the bit that annotates a qubit:
/// 0 selects the computational (rectilinear) basis, 1 the Hadamard
/// (diagonal) basis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Basis {
    Computational,
    Hadamard,
}

impl Basis {
    /// Basis selected by a basis bit.
    pub fn from_bit(bit: bool) -> Self {
        if bit {
            Basis::Hadamard
        } else {
            Basis::Computational
        }
    }

    /// The basis bit.
    pub fn to_bit(self) -> bool {
        self == Basis::Hadamard
    }
}

impl fmt::Display for Basis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Conventional polarization symbols: + rectilinear, x diagonal.
        match self {
            Basis::Computational => f.write_str("+"),
            Basis::Hadamard => f.write_str("x"),
        }
    }
}

/// Generate `len` independent uniformly random basis choices.
pub fn random_bases<R: Rng>(rng: &mut R, len: usize) -> Result<Vec<Basis>, ProtocolError> {
    Ok(random_bits(rng, len)?
        .into_iter()
        .map(Basis::from_bit)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_bit_roundtrip() {
        assert_eq!(Basis::from_bit(false), Basis::Computational);
        assert_eq!(Basis::from_bit(true), Basis::Hadamard);
        assert!(!Basis::Computational.to_bit());
        assert!(Basis::Hadamard.to_bit());
    }

    #[test]
    fn test_both_bases_occur() {
        let mut rng = StdRng::seed_from_u64(21);
        let bases = random_bases(&mut rng, 200).unwrap();
        assert!(bases.iter().any(|&b| b == Basis::Computational));
        assert!(bases.iter().any(|&b| b == Basis::Hadamard));
    }

    #[test]
    fn test_zero_length_is_rejected() {
        let mut rng = StdRng::seed_from_u64(22);
        assert!(random_bases(&mut rng, 0).is_err());
    }
}
