//! Error types for the nimbus-regress crate.

use crate::variable::Variable;

/// Error type for all fallible operations in the nimbus-regress crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegressError {
    /// Returned when a feature the regressor needs is absent from the vector.
    #[error("feature mismatch for {variable}: missing feature '{feature}'")]
    FeatureMismatch {
        /// Variable whose regressor failed.
        variable: Variable,
        /// First missing feature name in schema order.
        feature: String,
    },

    /// Returned when a regressor produces NaN or infinity.
    #[error("{variable} regressor produced a non-finite value ({value})")]
    NonFiniteOutput {
        /// Variable whose regressor failed.
        variable: Variable,
        /// The offending output.
        value: f64,
    },

    /// Returned when model parameters are inconsistent.
    #[error("invalid {variable} model: {reason}")]
    InvalidModel {
        /// Variable the model was declared for.
        variable: Variable,
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a regressor is placed in the slot of another variable.
    #[error("regressor for {found} placed in the {slot} slot")]
    VariableMismatch {
        /// Slot the regressor was assigned to.
        slot: Variable,
        /// Variable the regressor actually predicts.
        found: Variable,
    },

    /// Returned when a set lacks a regressor for a variable.
    #[error("no regressor configured for {variable}")]
    MissingVariable {
        /// The uncovered variable.
        variable: Variable,
    },
}
