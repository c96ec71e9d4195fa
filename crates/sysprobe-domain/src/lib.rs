//! # Sysprobe Domain
//!
//! Core types and contracts shared by every layer of Sysprobe.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`value_objects`] | `SystemInfo` snapshot, command names and parameter bags |
//! | [`ports`] | `Backend` and `CommandInvoker` traits |
//! | [`error`] | `BackendError` and the crate-wide `Error` |
//! | [`constants`] | Command names and route paths |
//!
//! The domain layer performs no I/O. Measurement lives in
//! `sysprobe-providers`, dispatch and presentation in `sysprobe-server`.

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{BackendError, Error, Result};
pub use ports::{Backend, CommandInvoker};
pub use value_objects::{Command, CommandRequest, NoArgs, PathArgs, SystemInfo};
