//! Command transports
//!
//! | Transport | Description |
//! |-----------|-------------|
//! | [`LocalInvoker`] | Direct call into an in-process backend |
//! | [`ChannelInvoker`] | Message channel to a [`BackendWorker`] task |

pub mod channel;
pub mod local;

pub use channel::{BackendWorker, ChannelInvoker};
pub use local::LocalInvoker;
