//! Single-run protocol orchestration.
//!
//! One run is strictly sequential: generate the three bit strings, assemble
//! the circuit, execute one shot, sift, summarize. Every entity is created
//! fresh for the run and owned by the returned [`ExchangeResult`]; there is
//! no cross-run state.

use log::debug;
use rand::Rng;

use qubit_sim::{CircuitExecutor, SimulationError};

use crate::basis::{random_bases, Basis};
use crate::bitstream::{random_bits, BitString};
use crate::circuit::build_exchange_circuit;
use crate::error::ProtocolError;
use crate::sifting::{matching_positions, sift_key};
use crate::stats::{summarize, KeyReport};

/// Everything a single exchange produces.
#[derive(Debug, Clone)]
pub struct ExchangeResult {
    /// Alice's raw key bits.
    pub alice_bits: BitString,
    /// Alice's encoding bases.
    pub alice_bases: Vec<Basis>,
    /// Bob's measurement bases.
    pub bob_bases: Vec<Basis>,
    /// Bob's raw measurement outcome, one bit per qubit.
    pub measurements: BitString,
    /// Positions where the bases agreed, ascending.
    pub matching: Vec<usize>,
    /// The sifted key.
    pub sifted_key: BitString,
    /// Summary statistics of the sifted key.
    pub report: KeyReport,
}

/// Run one BB84 exchange over `num_qubits` qubits.
///
/// `rng` supplies all classical randomness (three independent bit strings);
/// `executor` runs the assembled circuit for exactly one shot. A simulator
/// failure or an outcome of the wrong length aborts the run.
pub fn run_exchange<R, E>(
    num_qubits: usize,
    rng: &mut R,
    executor: &mut E,
) -> Result<ExchangeResult, ProtocolError>
where
    R: Rng,
    E: CircuitExecutor,
{
    let alice_bits = random_bits(rng, num_qubits)?;
    let alice_bases = random_bases(rng, num_qubits)?;
    let bob_bases = random_bases(rng, num_qubits)?;

    let circuit = build_exchange_circuit(&alice_bits, &alice_bases, &bob_bases)?;
    let measurements = executor.run_shot(&circuit)?;
    if measurements.len() != num_qubits {
        return Err(SimulationError::OutcomeLength {
            expected: num_qubits,
            actual: measurements.len(),
        }
        .into());
    }

    let sifted_key = sift_key(&alice_bases, &bob_bases, &measurements)?;
    let matching = matching_positions(&alice_bases, &bob_bases);
    debug!(
        "exchange over {} qubits sifted down to {} key bits",
        num_qubits,
        sifted_key.len()
    );

    let report = summarize(&sifted_key);
    Ok(ExchangeResult {
        alice_bits,
        alice_bases,
        bob_bases,
        measurements,
        matching,
        sifted_key,
        report,
    })
}
