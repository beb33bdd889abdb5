//! Per-qubit encode and measure-basis operation sequences.
//!
//! Both mappings are pure functions of their bit inputs. The encode map
//! prepares the four BB84 states from |0>:
//!
//! - bit 0, computational: no ops, leaves |0>
//! - bit 1, computational: X, gives |1>
//! - bit 0, Hadamard: H, gives |+>
//! - bit 1, Hadamard: X then H, gives |->
//!
//! The measure map rotates the chosen basis into the computational basis
//! ahead of the standard measurement: a single H for the Hadamard basis,
//! nothing otherwise.

use qubit_sim::Gate;
use smallvec::{smallvec, SmallVec};

use crate::basis::Basis;

/// Ordered single-qubit gate sequence; never longer than two gates.
pub type OpSequence = SmallVec<[Gate; 2]>;

/// Gates that prepare the state encoding `key_bit` in `basis`, applied in
/// order to a qubit starting in |0>.
pub fn encoding_ops(key_bit: bool, basis: Basis) -> OpSequence {
    match (key_bit, basis) {
        (false, Basis::Computational) => smallvec![],
        (true, Basis::Computational) => smallvec![Gate::X],
        (false, Basis::Hadamard) => smallvec![Gate::H],
        (true, Basis::Hadamard) => smallvec![Gate::X, Gate::H],
    }
}

/// Gates that rotate `basis` into the computational basis before the
/// terminal measurement.
pub fn measurement_ops(basis: Basis) -> OpSequence {
    match basis {
        Basis::Computational => smallvec![],
        Basis::Hadamard => smallvec![Gate::H],
    }
}
