// mod.rs - buffer module exports

mod grow;
mod raw;

pub use grow::GrowBuf;

use thiserror::Error;

/// Errors reported by the store buffers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("buffer allocation of {bytes} bytes failed")]
    AllocationFailed { bytes: usize },
}
