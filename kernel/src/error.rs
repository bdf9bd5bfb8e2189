use std::fmt::Display;

use error_stack::Context;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum KernelError {
    MissingName,
    ReadPageExceedsPageCount,
    NotFound,
    InvalidPayload,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::MissingName => write!(f, "Book name is missing"),
            KernelError::ReadPageExceedsPageCount => {
                write!(f, "readPage must not be greater than pageCount")
            }
            KernelError::NotFound => write!(f, "Book not found"),
            KernelError::InvalidPayload => write!(f, "Malformed request payload"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}
