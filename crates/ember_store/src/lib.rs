//! Ember Store
//!
//! Small storage primitives for deterministic embedded loops:
//! - [`Binder`]: a non-owning key/value lookup view
//! - [`GrowBuf`]: an owning growable buffer with a fixed growth increment
//!
//! Neither container locks or blocks. Instances shared across threads or
//! interrupt contexts must be serialized by the caller.

pub mod binder;
pub mod buf;

pub use binder::{Bind, Binder};
pub use buf::{GrowBuf, StoreError};
