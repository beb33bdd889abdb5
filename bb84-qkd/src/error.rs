//! Protocol error taxonomy.
//!
//! Two kinds exist: argument faults (bad lengths), which are caller bugs,
//! and simulator faults, which come from the executor. Either aborts the
//! run as a whole; nothing is retried and no partial result is produced.

use qubit_sim::SimulationError;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// An input violated a precondition (non-positive length, mismatched
    /// string lengths).
    InvalidArgument(String),
    /// The circuit executor failed.
    Simulation(SimulationError),
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
            ProtocolError::Simulation(err) => write!(f, "simulation failed: {}", err),
        }
    }
}

impl Error for ProtocolError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ProtocolError::InvalidArgument(_) => None,
            ProtocolError::Simulation(err) => Some(err),
        }
    }
}

impl From<SimulationError> for ProtocolError {
    fn from(err: SimulationError) -> Self {
        ProtocolError::Simulation(err)
    }
}
