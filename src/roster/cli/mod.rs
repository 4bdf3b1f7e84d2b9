//! Console front end: argument parsing, setup, the menu state machine and
//! rendering. Only the binary uses these modules.

pub mod args;
pub mod render;
pub mod setup;
pub mod shell;
pub mod styles;
