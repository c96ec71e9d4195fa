//! Pages
//!
//! Each page renders itself to text through the installed component
//! library, fetching whatever it needs through the bridge.

pub mod home;
pub mod introduction;

use async_trait::async_trait;
use sysprobe_domain::error::Result;

use crate::bridge::BackendBridge;
use crate::shell::ComponentLibrary;

pub use home::HomePage;
pub use introduction::IntroductionPage;

/// What a page can use while rendering
#[derive(Debug, Clone)]
pub struct PageContext {
    /// Client for backend commands
    pub bridge: BackendBridge,
    /// Installed component library
    pub components: ComponentLibrary,
}

/// A routable page
#[async_trait]
pub trait Page: Send + Sync {
    /// Human readable title
    fn title(&self) -> &'static str;

    /// Render the page body
    async fn render(&self, ctx: &PageContext) -> Result<String>;
}
