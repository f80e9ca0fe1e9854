//! Error macros for cinerec

/// Macro for returning invalid argument errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::CinerecError::invalid_argument(
            $context, $value,
        ))
    };
}

/// Macro for returning not-found errors
#[macro_export]
macro_rules! bail_not_found {
    ($context:expr, $value:expr) => {
        return Err($crate::error::CinerecError::not_found($context, $value))
    };
}
