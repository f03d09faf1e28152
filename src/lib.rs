//! gitwise - Interactive terminal setup wizard for git workflow configuration
//!
//! This library provides the wizard state machine, its screens and widgets, and the
//! terminal plumbing used by the `gitwise` binary.

pub mod app;
pub mod config;
pub mod confirm;
pub mod git;
pub mod input;
pub mod logging;
pub mod preview;
pub mod pull_request;
pub mod tui;
pub mod wizards;
