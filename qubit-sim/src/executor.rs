//! Circuit execution.
//!
//! [`CircuitExecutor`] is the narrow seam between a protocol and whatever
//! runs its circuits: one program in, one sampled outcome string out.
//! [`LocalSimulator`] is the in-process implementation. Each qubit carries
//! its own 2-amplitude state vector; gates multiply the qubit's amplitudes
//! by the gate matrix, and the terminal measurement samples each qubit
//! independently under the Born rule.

use num_complex::Complex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::error::Error;
use std::fmt;

use crate::circuit::{Circuit, Instruction};
use crate::gate::Matrix2x2;

/// Failure of a simulated execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// A gate addressed a qubit outside the circuit's register.
    QubitOutOfRange { qubit: usize, num_qubits: usize },
    /// The program ended without a measurement, so there is no outcome.
    NoMeasurement,
    /// An executor returned an outcome string of the wrong length.
    OutcomeLength { expected: usize, actual: usize },
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::QubitOutOfRange { qubit, num_qubits } => {
                write!(f, "gate on qubit {} outside register of {} qubits", qubit, num_qubits)
            }
            SimulationError::NoMeasurement => {
                write!(f, "circuit has no measurement instruction")
            }
            SimulationError::OutcomeLength { expected, actual } => {
                write!(f, "expected outcome of {} bits, executor returned {}", expected, actual)
            }
        }
    }
}

impl Error for SimulationError {}

/// Anything that can run a circuit for one shot.
///
/// A shot samples the measurement once; running the same circuit twice
/// yields independently sampled outcome strings.
pub trait CircuitExecutor {
    /// Execute `circuit` once and return one measured bit per qubit,
    /// indexed identically to the circuit's qubits.
    fn run_shot(&mut self, circuit: &Circuit) -> Result<Vec<bool>, SimulationError>;
}

/// In-process product-state executor.
pub struct LocalSimulator {
    rng: StdRng,
}

impl LocalSimulator {
    /// Executor seeded from system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Executor with a fixed seed, for reproducible shots.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for LocalSimulator {
    fn default() -> Self {
        Self::new()
    }
}

/// Left-multiply a qubit's amplitude pair by a gate matrix.
fn apply_matrix(state: &mut [Complex<f64>; 2], m: &Matrix2x2) {
    let top = m[0] * state[0] + m[1] * state[1];
    let bottom = m[2] * state[0] + m[3] * state[1];
    state[0] = top;
    state[1] = bottom;
}

impl CircuitExecutor for LocalSimulator {
    fn run_shot(&mut self, circuit: &Circuit) -> Result<Vec<bool>, SimulationError> {
        let n = circuit.num_qubits();
        let zero = Complex::new(0.0, 0.0);
        let one = Complex::new(1.0, 0.0);

        // Every qubit starts in |0>.
        let mut states: Vec<[Complex<f64>; 2]> = vec![[one, zero]; n];
        let mut outcome: Option<Vec<bool>> = None;

        for instruction in circuit.instructions() {
            match instruction {
                Instruction::Gate { gate, qubit } => {
                    if *qubit >= n {
                        return Err(SimulationError::QubitOutOfRange {
                            qubit: *qubit,
                            num_qubits: n,
                        });
                    }
                    apply_matrix(&mut states[*qubit], &gate.matrix());
                }
                Instruction::Barrier => {}
                Instruction::MeasureAll => {
                    let bits = states
                        .iter()
                        .map(|s| self.rng.gen::<f64>() < s[1].norm_sqr())
                        .collect();
                    outcome = Some(bits);
                }
            }
        }

        outcome.ok_or(SimulationError::NoMeasurement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::Gate;

    #[test]
    fn ground_state_measures_zero() {
        let mut c = Circuit::new(4);
        c.measure_all();
        let mut sim = LocalSimulator::with_seed(1);
        let outcome = sim.run_shot(&c).unwrap();
        assert_eq!(outcome, vec![false; 4]);
    }

    #[test]
    fn x_gate_measures_one() {
        let mut c = Circuit::new(1);
        c.apply(Gate::X, 0);
        c.measure_all();
        let mut sim = LocalSimulator::with_seed(2);
        assert_eq!(sim.run_shot(&c).unwrap(), vec![true]);
    }

    #[test]
    fn double_hadamard_restores_ground_state() {
        let mut c = Circuit::new(1);
        c.apply(Gate::H, 0);
        c.apply(Gate::H, 0);
        c.measure_all();
        let mut sim = LocalSimulator::with_seed(3);
        for _ in 0..50 {
            assert_eq!(sim.run_shot(&c).unwrap(), vec![false]);
        }
    }

    #[test]
    fn hadamard_outcome_is_balanced() {
        let mut c = Circuit::new(1);
        c.apply(Gate::H, 0);
        c.measure_all();
        let mut sim = LocalSimulator::with_seed(4);

        let shots = 2000;
        let ones = (0..shots)
            .filter(|_| sim.run_shot(&c).unwrap()[0])
            .count();
        let ratio = ones as f64 / shots as f64;
        assert!(ratio > 0.4 && ratio < 0.6, "ratio = {}", ratio);
    }

    #[test]
    fn identity_and_barrier_do_nothing() {
        let mut c = Circuit::new(2);
        c.apply(Gate::I, 0);
        c.barrier();
        c.apply(Gate::I, 1);
        c.measure_all();
        let mut sim = LocalSimulator::with_seed(5);
        assert_eq!(sim.run_shot(&c).unwrap(), vec![false, false]);
    }

    #[test]
    fn missing_measurement_is_an_error() {
        let mut c = Circuit::new(1);
        c.apply(Gate::X, 0);
        let mut sim = LocalSimulator::with_seed(6);
        assert_eq!(sim.run_shot(&c), Err(SimulationError::NoMeasurement));
    }

    #[test]
    fn out_of_range_qubit_is_an_error() {
        let mut c = Circuit::new(2);
        c.apply(Gate::X, 2);
        c.measure_all();
        let mut sim = LocalSimulator::with_seed(7);
        assert_eq!(
            sim.run_shot(&c),
            Err(SimulationError::QubitOutOfRange { qubit: 2, num_qubits: 2 })
        );
    }

    #[test]
    fn seeded_shots_are_reproducible() {
        let mut c = Circuit::new(8);
        for q in 0..8 {
            c.apply(Gate::H, q);
        }
        c.measure_all();

        let mut a = LocalSimulator::with_seed(42);
        let mut b = LocalSimulator::with_seed(42);
        assert_eq!(a.run_shot(&c).unwrap(), b.run_shot(&c).unwrap());
    }
}
