//! Full protocol circuit assembly.

use qubit_sim::Circuit;

use crate::basis::Basis;
use crate::encoding::{encoding_ops, measurement_ops};
use crate::error::ProtocolError;

/// Assemble the N-qubit exchange program.
///
/// Per qubit i in ascending order: Alice's encode gates, then (after a
/// barrier marking the hand-off of the qubits from Alice to Bob) Bob's
/// measurement-basis rotation, then one full measurement of all qubits.
/// The barriers have no computational effect; they record that all
/// preparation completes before any receiver-side rotation begins.
///
/// All three strings must have the same positive length. The builder itself
/// performs no randomness and no execution.
pub fn build_exchange_circuit(
    alice_bits: &[bool],
    alice_bases: &[Basis],
    bob_bases: &[Basis],
) -> Result<Circuit, ProtocolError> {
    let n = alice_bits.len();
    if n == 0 {
        return Err(ProtocolError::InvalidArgument(
            "exchange requires at least one qubit".to_string(),
        ));
    }
    if alice_bases.len() != n || bob_bases.len() != n {
        return Err(ProtocolError::InvalidArgument(format!(
            "mismatched string lengths: {} bits, {} sender bases, {} receiver bases",
            n,
            alice_bases.len(),
            bob_bases.len()
        )));
    }

    let mut circuit = Circuit::new(n);

    for (i, (&bit, &basis)) in alice_bits.iter().zip(alice_bases).enumerate() {
        for gate in encoding_ops(bit, basis) {
            circuit.apply(gate, i);
        }
    }

    circuit.barrier();

    for (i, &basis) in bob_bases.iter().enumerate() {
        for gate in measurement_ops(basis) {
            circuit.apply(gate, i);
        }
    }

    circuit.barrier();
    circuit.measure_all();

    Ok(circuit)
}
