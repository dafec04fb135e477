//! Error types for loading action data.
//!
//! Only action data can fail in a recoverable way. A bad candidate id passed
//! to the resolver is a bug upstream and panics instead (see
//! [`CollisionResolver`](crate::resolver::CollisionResolver)).

use thiserror::Error;

use crate::action::ActionId;

/// Errors raised while building action definitions or the action table.
#[derive(Error, Debug)]
pub enum ActionDataError {
    /// A shape dimension was negative, NaN, or infinite.
    #[error("invalid {field} for action definition: {value}")]
    InvalidDimension {
        /// Which dimension was rejected
        field: &'static str,
        /// The rejected value
        value: f32,
    },

    /// The same action id appeared twice.
    #[error("duplicate action id {0} in action table")]
    DuplicateAction(ActionId),

    /// An action table key was not a numeric action id.
    #[error("invalid action id key {0:?}")]
    InvalidActionId(String),

    /// The action table JSON could not be parsed.
    #[error("malformed action table: {0}")]
    Json(#[from] serde_json::Error),

    /// The action table could not be read.
    #[error("failed to read action table: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for action data operations.
pub type Result<T> = std::result::Result<T, ActionDataError>;
