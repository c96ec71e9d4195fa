//! Application shell
//!
//! Bootstraps the UI once: create the app, install plugins (component
//! library, router), mount into an anchor, then navigate.
//!
//! ```ignore
//! let mut app = AppShell::create(bridge)
//!     .use_plugin(ComponentLibrary::new(Theme::Dark))?
//!     .use_plugin(PageRouter::new(HistoryMode::Web, default_routes())?)?
//!     .mount("#app")?;
//! let page = app.navigate("/").await?;
//! ```

pub mod app;
pub mod component_library;
pub mod plugin;

pub use app::{AppShell, MountedApp, RenderedPage};
pub use component_library::ComponentLibrary;
pub use plugin::{AppContext, Plugin};
