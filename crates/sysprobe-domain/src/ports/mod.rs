//! Domain ports
//!
//! | Port | Description |
//! |------|-------------|
//! | [`Backend`] | One method per backend command |
//! | [`CommandInvoker`] | Transport-neutral name-based dispatch |

pub mod backend;
pub mod invoker;

pub use backend::Backend;
pub use invoker::CommandInvoker;
