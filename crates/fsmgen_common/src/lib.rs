//! Shared foundational helpers used across the fsmgen workspace.
//!
//! This crate provides compound identifier construction from name-bearing parts
//! and fixed-width column padding for aligned text generation.

#![warn(missing_docs)]

pub mod naming;
pub mod padding;

pub use naming::{compose_name, NamePart, NAME_SEPARATOR};
pub use padding::{column_width, pad, pad_end, pad_to, MIN_COLUMN};
