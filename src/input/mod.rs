//! Input handling module
//!
//! Translates terminal key events into the logical key vocabulary used by the wizard.

pub mod keys;

pub use keys::Key;
