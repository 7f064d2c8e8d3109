//! Error types for description normalization.

/// Errors raised when a description item cannot be coerced into the canonical shape.
#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    /// A collection item carries no usable `name`.
    #[error("{path} has no usable name")]
    MissingName {
        /// Location of the offending item, e.g. `states[2]`.
        path: String,
    },

    /// A collection item is neither a record nor a bare name.
    #[error("{path} is neither a record nor a name")]
    InvalidItem {
        /// Location of the offending item.
        path: String,
    },

    /// A required field of an item is absent or not a scalar.
    #[error("{path} is missing required field '{field}'")]
    MissingField {
        /// Location of the offending item.
        path: String,
        /// The missing field name.
        field: &'static str,
    },
}
