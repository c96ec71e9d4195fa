//! # Sysprobe Server
//!
//! Everything between a caller and the native backend, plus the
//! application shell that presents the results.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`commands`] | Name-based dispatch to a `Backend` and the command registry |
//! | [`transport`] | In-process and message-channel `CommandInvoker`s |
//! | [`bridge`] | Typed async wrappers, one per backend command |
//! | [`routing`] | Static page routes and navigation history |
//! | [`pages`] | Home and introduction pages |
//! | [`shell`] | Application bootstrap: plugins, mounting, navigation |
//! | [`init`] | Process entry point wiring config, logging and the backend |

pub mod bridge;
pub mod commands;
pub mod constants;
pub mod format;
pub mod init;
pub mod pages;
pub mod routing;
pub mod shell;
pub mod transport;

pub use bridge::BackendBridge;
pub use init::{OutputOptions, RunRequest, execute, run};
pub use routing::{HistoryMode, PageRouter, Route, default_routes};
pub use shell::{AppShell, ComponentLibrary, MountedApp};
pub use transport::{BackendWorker, ChannelInvoker, LocalInvoker};
