//! Multi-step wizards

pub mod setup;
