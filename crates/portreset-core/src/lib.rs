//! Orchestration layer between `portreset-api` and the HTTP front door.
//!
//! One entry point: [`reset`] walks the controller conversation
//! (login → sites → clients → power-cycle) for a single MAC address and
//! returns either the operator-facing success message or a
//! [`ResetError`] naming the step that failed.

pub mod error;
pub mod reset;

pub use error::ResetError;
pub use reset::{reset, ControllerSettings};
