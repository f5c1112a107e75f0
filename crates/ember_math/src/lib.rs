//! Ember Math
//!
//! Deterministic numeric primitives for embedded animation loops:
//! - Avalanche integer hashing
//! - Hash-based interpolated random fields
//! - Scalar wrap/clamp/map helpers

pub mod hash;
pub mod random;
pub mod scalar;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
