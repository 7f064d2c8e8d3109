//! Normalization of permissively-shaped machine descriptions.
//!
//! A raw description is an untyped JSON record whose collections may be
//! given either as lists or as mappings keyed by name. [`normalize`] resolves
//! every shorthand once, merges repeated state declarations, applies defaults,
//! and returns a fresh [`CanonicalFsm`](fsmgen_ir::CanonicalFsm).

#![warn(missing_docs)]

pub mod error;
mod merge;
mod normalizer;
mod shape;

pub use error::NormalizeError;
pub use normalizer::{derive_width, normalize};
