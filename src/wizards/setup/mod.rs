//! Interactive setup wizard
//!
//! A linear sequence of screens that collects a [`Config`](crate::config::Config)
//! and persists it through a [`ConfigStore`](crate::config::ConfigStore).

mod orchestrator;
pub mod screen;
pub mod screens;
pub mod step;

pub use orchestrator::{Transition, Wizard};
pub use screen::{Effect, EffectResult, Outcome, Screen};
pub use screens::ActiveScreen;
pub use step::WizardStep;
