//! Error handling for the terminal shell.
//!
//! The calculator core is infallible: rejected actions return the previous
//! state and arithmetic problems produce sentinel values. Errors only arise
//! around it, while setting up the terminal, opening the log file or reading
//! configuration.
//!
//! | Category | Examples |
//! |----------|----------|
//! | Terminal | raw mode or alternate screen unavailable |
//! | System | log file cannot be opened, event stream I/O |
//! | Configuration | unknown theme name, logger installed twice |

mod calcpad_error;
mod category;
mod result;

pub use calcpad_error::CalcpadError;
pub use category::ErrorCategory;
pub use result::CalcpadResult;
