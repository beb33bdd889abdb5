//! Run one BB84 exchange and print the classical view of both parties.
//!
//! `RUST_LOG=debug cargo run --example key_exchange` shows the run tracing.

use log::info;
use rand::thread_rng;

use bb84_qkd::prelude::*;
use qubit_sim::LocalSimulator;

fn bit_string(bits: &[bool]) -> String {
    bits.iter().map(|&b| if b { '1' } else { '0' }).collect()
}

fn basis_string(bases: &[Basis]) -> String {
    bases.iter().map(|b| b.to_string()).collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let n = 24;
    let mut rng = thread_rng();
    let mut sim = LocalSimulator::new();

    info!("running one {}-qubit exchange", n);
    let result = run_exchange(n, &mut rng, &mut sim)?;

    println!("BB84 key exchange over {} qubits", n);
    println!("Alice's bits:     {}", bit_string(&result.alice_bits));
    println!("Alice's bases:    {}", basis_string(&result.alice_bases));
    println!("Bob's bases:      {}", basis_string(&result.bob_bases));
    println!("Bob's outcome:    {}", bit_string(&result.measurements));
    println!("Matching indices: {:?}", result.matching);
    println!("Sifted key:       {}", bit_string(&result.sifted_key));
    println!("Key report:       {}", result.report);

    Ok(())
}
