//! System snapshot collection

pub mod collector;

pub use collector::{SystemInfoCollector, SystemInfoConfig, os_identifier};
