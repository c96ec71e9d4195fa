//! Value objects
//!
//! Immutable records exchanged between the bridge and the backend.

pub mod command;
pub mod system_info;

pub use command::{Command, CommandRequest, NoArgs, PathArgs};
pub use system_info::SystemInfo;
