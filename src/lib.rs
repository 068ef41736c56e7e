//! calcpad - a mouse-driven calculator widget for the terminal
//!
//! This library exposes modules for use in integration tests.

pub mod app;
pub mod calculator;
pub mod cli;
pub mod domain;
pub mod error;
pub mod input;
pub mod prelude;
pub mod startup;
pub mod terminal;
pub mod ui;
