//! Result alias for shell operations.

use super::calcpad_error::CalcpadError;

/// Result using [`CalcpadError`].
pub type CalcpadResult<T> = Result<T, CalcpadError>;
