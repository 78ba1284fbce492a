//! Error macros for evalio

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::EvalError::invalid_value($context, $value))
    };
}

/// Macro for rejecting a pair of hybrid weights
#[macro_export]
macro_rules! bail_weights {
    ($rubric:expr, $similarity:expr, $reason:expr) => {
        return Err($crate::error::EvalError::invalid_weights(
            $rubric,
            $similarity,
            $reason,
        ))
    };
}
