//! Domain layer containing core business logic.
//!
//! This module contains:
//! - Input data types and the decision type
//! - The main-branch push guard
//! - Logger with rotation

mod error;
pub mod guard;
pub mod logger;
mod types;

pub use error::GuardError;
pub use guard::PushGuard;
pub use types::{Decision, HookInput};
