//! Application bootstrap and mounted application

use sysprobe_domain::error::{Error, Result};
use tracing::{info, warn};

use super::component_library::ComponentLibrary;
use super::plugin::{AppContext, Plugin};
use crate::bridge::BackendBridge;
use crate::pages::PageContext;
use crate::routing::{PageRouter, Route, WebHistory};

/// Application under construction
///
/// [`AppShell::mount`] consumes the shell, so an application mounts at most
/// once and cannot be reconfigured afterwards.
#[derive(Debug)]
pub struct AppShell {
    bridge: BackendBridge,
    context: AppContext,
}

impl AppShell {
    /// Create the application root
    pub fn create(bridge: BackendBridge) -> Self {
        Self {
            bridge,
            context: AppContext::default(),
        }
    }

    /// Install a plugin
    pub fn use_plugin<P: Plugin>(mut self, plugin: P) -> Result<Self> {
        let name = plugin.name();
        if self.context.is_installed(name) {
            warn!(plugin = name, "Plugin already installed, ignoring");
            return Ok(self);
        }
        plugin.install(&mut self.context)?;
        self.context.mark_installed(name);
        Ok(self)
    }

    /// Mount into an `#id` anchor
    ///
    /// Fails without an installed router. Without a component library,
    /// plain default components are used.
    pub fn mount(self, target: &str) -> Result<MountedApp> {
        let anchor = target.strip_prefix('#').unwrap_or_default();
        if anchor.is_empty() {
            return Err(Error::shell(format!(
                "Mount target must have the form '#id', got '{target}'"
            )));
        }

        let installed = self.context.installed().to_vec();
        let (components, router) = self.context.into_parts();
        let router = router.ok_or_else(|| Error::shell("Cannot mount without a router"))?;
        let components = components.unwrap_or_default();

        info!(target, plugins = ?installed, "Application mounted");
        Ok(MountedApp {
            target: target.to_string(),
            router,
            history: WebHistory::new(sysprobe_domain::constants::ROUTE_HOME_PATH),
            page_context: PageContext {
                bridge: self.bridge,
                components,
            },
        })
    }
}

/// Result of rendering a route
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    /// Normalized path
    pub path: String,
    /// Route name
    pub name: &'static str,
    /// Page title
    pub title: &'static str,
    /// Rendered text
    pub body: String,
}

/// Mounted application
#[derive(Debug)]
pub struct MountedApp {
    target: String,
    router: PageRouter,
    history: WebHistory,
    page_context: PageContext,
}

impl MountedApp {
    /// Anchor the application is mounted into
    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn router(&self) -> &PageRouter {
        &self.router
    }

    pub fn components(&self) -> &ComponentLibrary {
        &self.page_context.components
    }

    /// Path of the current history entry
    pub fn current_path(&self) -> &str {
        self.history.current()
    }

    /// Navigate to a location and render its page
    ///
    /// Unknown locations fail with `NotFound` and leave history untouched.
    /// Navigating to the current path does not add a history entry.
    pub async fn navigate(&mut self, location: &str) -> Result<RenderedPage> {
        let route = self.lookup(location)?;
        if route.path != self.history.current() {
            self.history.push(route.path);
        }
        self.render(&route).await
    }

    /// Go back one entry and render it; `None` at the first entry
    pub async fn back(&mut self) -> Result<Option<RenderedPage>> {
        let Some(path) = self.history.back().map(str::to_string) else {
            return Ok(None);
        };
        let route = self.lookup(&path)?;
        self.render(&route).await.map(Some)
    }

    /// Go forward one entry and render it; `None` at the last entry
    pub async fn forward(&mut self) -> Result<Option<RenderedPage>> {
        let Some(path) = self.history.forward().map(str::to_string) else {
            return Ok(None);
        };
        let route = self.lookup(&path)?;
        self.render(&route).await.map(Some)
    }

    fn lookup(&self, location: &str) -> Result<Route> {
        self.router
            .resolve(location)
            .cloned()
            .ok_or_else(|| Error::not_found(format!("route {}", self.router.normalize(location))))
    }

    async fn render(&self, route: &Route) -> Result<RenderedPage> {
        let body = route.page.render(&self.page_context).await?;
        Ok(RenderedPage {
            path: route.path.to_string(),
            name: route.name,
            title: route.page.title(),
            body,
        })
    }
}
