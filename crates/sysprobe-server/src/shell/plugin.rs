//! Plugin installation

use sysprobe_domain::error::Result;

use super::component_library::ComponentLibrary;
use crate::routing::PageRouter;

/// Something installable into an application before it mounts
pub trait Plugin {
    /// Unique plugin name; a second install under the same name is ignored
    fn name(&self) -> &'static str;

    /// Register the plugin's capabilities with the application
    fn install(&self, app: &mut AppContext) -> Result<()>;
}

/// Capabilities assembled by plugins
#[derive(Debug, Default)]
pub struct AppContext {
    components: Option<ComponentLibrary>,
    router: Option<PageRouter>,
    installed: Vec<&'static str>,
}

impl AppContext {
    pub fn set_components(&mut self, components: ComponentLibrary) {
        self.components = Some(components);
    }

    pub fn set_router(&mut self, router: PageRouter) {
        self.router = Some(router);
    }

    pub fn components(&self) -> Option<&ComponentLibrary> {
        self.components.as_ref()
    }

    pub fn router(&self) -> Option<&PageRouter> {
        self.router.as_ref()
    }

    /// Names of installed plugins, in installation order
    pub fn installed(&self) -> &[&'static str] {
        &self.installed
    }

    pub(crate) fn is_installed(&self, name: &str) -> bool {
        self.installed.contains(&name)
    }

    pub(crate) fn mark_installed(&mut self, name: &'static str) {
        self.installed.push(name);
    }

    pub(crate) fn into_parts(self) -> (Option<ComponentLibrary>, Option<PageRouter>) {
        (self.components, self.router)
    }
}
