//! All built-in lint rule implementations.

mod e101;
mod e102;
mod w101;
mod w102;
mod w103;

pub use e101::UnknownInitialState;
pub use e102::DuplicateTransition;
pub use w101::UndeclaredTarget;
pub use w102::UnreachableState;
pub use w103::UndeclaredRegister;

use crate::LintEngine;

/// Registers the built-in lint rules with the engine, warnings first.
pub fn register_builtin_rules(engine: &mut LintEngine) {
    engine.register(Box::new(UndeclaredTarget));
    engine.register(Box::new(UnreachableState));
    engine.register(Box::new(UndeclaredRegister));
    engine.register(Box::new(UnknownInitialState));
    engine.register(Box::new(DuplicateTransition));
}
