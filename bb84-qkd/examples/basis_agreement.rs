//! How often do two independent basis choices agree?
//!
//! The sifted key keeps only the agreeing positions, so its expected length
//! is half the raw string. This demo measures that fraction empirically.

use rand::thread_rng;

use bb84_qkd::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = thread_rng();
    let n = 1000;

    let alice_bases = random_bases(&mut rng, n)?;
    let bob_bases = random_bases(&mut rng, n)?;

    let matching = matching_positions(&alice_bases, &bob_bases);
    println!("BB84 basis agreement demonstration");
    println!("Raw string length:  {}", n);
    println!("Matching positions: {}", matching.len());
    println!(
        "Agreement fraction: {:.3} (expected ~0.5)",
        matching.len() as f64 / n as f64
    );

    Ok(())
}
