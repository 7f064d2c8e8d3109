//! The canonical finite-state-machine model shared by every emitter.
//!
//! This crate defines [`CanonicalFsm`] and its parts ([`State`], [`Transition`],
//! [`Actions`], [`Wire`], [`Register`], [`LocalParam`]). A canonical model is
//! produced once by normalization and is only read afterwards.

#![warn(missing_docs)]

pub mod actions;
pub mod fsm;
pub mod signal;
pub mod state;

pub use actions::Actions;
pub use fsm::CanonicalFsm;
pub use signal::{LocalParam, Register, Wire};
pub use state::{State, Transition};
