//! Backend commands
//!
//! - registry.rs - Command definitions and parameter schemas
//! - router.rs - Command dispatch to a `Backend`

pub mod registry;
pub mod router;

pub use registry::{CommandDefinition, create_command_list};
pub use router::route_command;
