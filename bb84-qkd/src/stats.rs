//! Sifted-key summary statistics.

use std::fmt;

/// Read-only summary of a sifted key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyReport {
    pub length: usize,
    pub zeros: usize,
    pub ones: usize,
}

impl fmt::Display for KeyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} bits ({} zeros, {} ones)",
            self.length, self.zeros, self.ones
        )
    }
}

/// Single-pass summary of a key. `zeros + ones == length` always; the empty
/// key reports all zeros.
pub fn summarize(key: &[bool]) -> KeyReport {
    let ones = key.iter().filter(|&&bit| bit).count();
    KeyReport {
        length: key.len(),
        zeros: key.len() - ones,
        ones,
    }
}
