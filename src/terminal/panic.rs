//! Panic hook for terminal restoration.

use super::setup::emergency_restore;
use std::panic;

/// Install a panic hook that runs [`emergency_restore`] before the previous
/// hook prints the panic, so the message lands on the main screen with raw
/// mode off.
///
/// Call after `color_eyre::install()` so its report is printed to the
/// restored terminal, and before creating the `TerminalManager`.
pub fn setup_panic_hook() {
    let previous_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        previous_hook(panic_info);
    }));
}
