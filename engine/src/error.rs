//! Error types for circuit editing.

use thiserror::Error;

use crate::types::{GateKind, Position};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CircuitError {
    /// A position was passed that does not hold a live gate.
    #[error("invalid argument: no gate at {0}")]
    InvalidArgument(Position),

    /// The operation is not defined for this kind of gate.
    #[error("unsupported operation: cannot {op} on a {kind} gate")]
    UnsupportedOperation { op: &'static str, kind: GateKind },
}

pub type Result<T> = std::result::Result<T, CircuitError>;
