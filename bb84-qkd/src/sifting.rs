//! Key sifting: the classical post-processing step.
//!
//! After the quantum exchange, the parties publicly compare bases and keep
//! only the outcome bits where they chose the same one. Bit order follows
//! ascending qubit index, matching the order in which the bases would be
//! compared over the classical channel.

use crate::basis::Basis;
use crate::bitstream::BitString;
use crate::error::ProtocolError;

/// Indices at which the two basis strings agree, in ascending order.
pub fn matching_positions(alice_bases: &[Basis], bob_bases: &[Basis]) -> Vec<usize> {
    alice_bases
        .iter()
        .zip(bob_bases)
        .enumerate()
        .filter(|(_, (a, b))| a == b)
        .map(|(i, _)| i)
        .collect()
}

/// Sift the outcome string down to the positions where the bases agree.
///
/// The result keeps `outcome[i]` for every i with matching bases, in index
/// order, and discards the rest. All three inputs must share one length;
/// beyond that the sift is total and cannot fail.
pub fn sift_key(
    alice_bases: &[Basis],
    bob_bases: &[Basis],
    outcome: &[bool],
) -> Result<BitString, ProtocolError> {
    let n = alice_bases.len();
    if bob_bases.len() != n || outcome.len() != n {
        return Err(ProtocolError::InvalidArgument(format!(
            "mismatched string lengths: {} sender bases, {} receiver bases, {} outcome bits",
            n,
            bob_bases.len(),
            outcome.len()
        )));
    }

    Ok((0..n)
        .filter(|&i| alice_bases[i] == bob_bases[i])
        .map(|i| outcome[i])
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const C: Basis = Basis::Computational;
    const H: Basis = Basis::Hadamard;

    #[test]
    fn test_sift_keeps_only_matching_positions() {
        let alice = [C, C, H, H];
        let bob = [C, H, H, C];
        let outcome = [false, true, true, true];

        let key = sift_key(&alice, &bob, &outcome).unwrap();
        assert_eq!(key, vec![false, true]); // outcome[0], outcome[2]
        assert_eq!(matching_positions(&alice, &bob), vec![0, 2]);
    }

    #[test]
    fn test_no_agreement_yields_empty_key() {
        let alice = [C, H, C];
        let bob = [H, C, H];
        let key = sift_key(&alice, &bob, &[true, true, true]).unwrap();
        assert!(key.is_empty());
        assert!(matching_positions(&alice, &bob).is_empty());
    }

    #[test]
    fn test_full_agreement_passes_outcome_through() {
        let bases = [H, C, H, C, C];
        let outcome = [true, false, false, true, false];
        let key = sift_key(&bases, &bases, &outcome).unwrap();
        assert_eq!(key, outcome.to_vec());
    }

    #[test]
    fn test_mismatched_lengths_are_rejected() {
        let three = [C, C, C];
        let four = [C, C, C, C];
        assert!(matches!(
            sift_key(&three, &three, &[false; 4]),
            Err(ProtocolError::InvalidArgument(_))
        ));
        assert!(sift_key(&three, &four, &[false; 3]).is_err());
    }

    #[test]
    fn test_sift_preserves_index_order() {
        let alice = [C, H, C, H, C, H];
        let bob = [C, C, C, H, H, H];
        // Matches at 0, 2, 3, 5
        let outcome = [true, false, false, true, false, true];
        let key = sift_key(&alice, &bob, &outcome).unwrap();
        assert_eq!(key, vec![true, false, true, true]);
    }
}
