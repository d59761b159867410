use std::fmt::Display;

use error_stack::Context;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum KernelError {
    /// A required business field is missing or empty.
    Validation,
    /// A date string matched none of the accepted formats.
    InvalidDateFormat,
    NotFound,
    /// The store rejected the write because it collides with existing data.
    Conflict,
    Timeout,
    /// Any other store-layer failure.
    Persistence,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::Validation => write!(f, "Validation failed"),
            KernelError::InvalidDateFormat => write!(f, "Invalid date format"),
            KernelError::NotFound => write!(f, "Resource not found"),
            KernelError::Conflict => write!(f, "Conflicting resource state"),
            KernelError::Timeout => write!(f, "Process timed out"),
            KernelError::Persistence => write!(f, "Persistence error"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}
