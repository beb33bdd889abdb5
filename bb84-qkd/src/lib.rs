//! # bb84-qkd
//!
//! Classical simulation of the BB84 quantum key distribution protocol.
//!
//! Two parties (Alice and Bob) derive a shared secret bit string: Alice
//! encodes random bits in randomly chosen bases (computational or Hadamard),
//! Bob measures each qubit in his own randomly chosen basis, and the two
//! keep only the positions where their bases happened to agree ("sifting").
//! Measuring in the wrong basis yields a statistically random result, which
//! is what the no-cloning security argument rests on.
//!
//! ## Protocol run
//!
//! 1. Generate three independent random bit strings of length N: Alice's
//!    key bits, Alice's bases, Bob's bases.
//! 2. Assemble one N-qubit circuit: per-qubit state preparation, a
//!    transmission barrier, per-qubit measurement-basis rotation, a second
//!    barrier, then a full measurement.
//! 3. Execute the circuit for a single shot against a [`CircuitExecutor`].
//! 4. Sift: keep Bob's outcome bit at every position where the bases match.
//! 5. Summarize the sifted key.
//!
//! This is a single noiseless run between two honest parties; there is no
//! eavesdropper model, error correction, or privacy amplification here.
//!
//! [`CircuitExecutor`]: qubit_sim::CircuitExecutor

pub mod basis;
pub mod bitstream;
pub mod circuit;
pub mod encoding;
pub mod error;
pub mod protocol;
pub mod sifting;
pub mod stats;

pub mod prelude {
    pub use crate::basis::{random_bases, Basis};
    pub use crate::bitstream::{random_bits, BitString};
    pub use crate::circuit::build_exchange_circuit;
    pub use crate::encoding::{encoding_ops, measurement_ops, OpSequence};
    pub use crate::error::ProtocolError;
    pub use crate::protocol::{run_exchange, ExchangeResult};
    pub use crate::sifting::{matching_positions, sift_key};
    pub use crate::stats::{summarize, KeyReport};
}

pub use prelude::*;
