//! Configuration
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`loader`] | Figment-based loading and validation |
//! | [`types`] | Configuration sections |

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::*;
