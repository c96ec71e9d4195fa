//! Server layer constants

/// Pending requests buffered by the backend worker channel
pub const WORKER_CHANNEL_CAPACITY: usize = 64;

/// Application title shown by pages
pub const APP_TITLE: &str = "Sysprobe";

/// Width of the label column in rendered fields
pub const FIELD_LABEL_WIDTH: usize = 18;

/// Name under which the component library plugin registers
pub const COMPONENT_LIBRARY_PLUGIN: &str = "component-library";

/// Name under which the page router plugin registers
pub const ROUTER_PLUGIN: &str = "router";
