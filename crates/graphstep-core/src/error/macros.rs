//! Error macros for graphstep

/// Macro for returning an invalid argument error
#[macro_export]
macro_rules! bail_invalid {
    ($argument:expr, $reason:expr) => {
        return Err($crate::error::GraphstepError::invalid_argument(
            $argument, $reason,
        ))
    };
}
