//! Page Router
//!
//! Resolves locations to routes. The table is fixed at construction: no
//! dynamic parameters, guards, redirects or lazy loading.

use std::collections::HashSet;

use sysprobe_domain::error::{Error, Result};

use super::route::Route;
use crate::constants::ROUTER_PLUGIN;
use crate::shell::{AppContext, Plugin};

/// How the current path is encoded in a location
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HistoryMode {
    /// The path is the location path (`/introduction?x=1`)
    #[default]
    Web,
    /// The path lives in the fragment (`/#/introduction`)
    Hash,
}

/// Maps locations to routes
#[derive(Debug, Clone)]
pub struct PageRouter {
    mode: HistoryMode,
    routes: Vec<Route>,
}

impl PageRouter {
    /// Create a router over a route table
    ///
    /// Every path must start with `/` and appear once.
    pub fn new(mode: HistoryMode, routes: Vec<Route>) -> Result<Self> {
        let mut seen = HashSet::new();
        for route in &routes {
            if !route.path.starts_with('/') {
                return Err(Error::invalid_argument(format!(
                    "Route path must start with '/': {}",
                    route.path
                )));
            }
            if !seen.insert(route.path) {
                return Err(Error::invalid_argument(format!(
                    "Duplicate route path: {}",
                    route.path
                )));
            }
        }
        Ok(Self { mode, routes })
    }

    pub fn mode(&self) -> HistoryMode {
        self.mode
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Extract the route path from a location
    ///
    /// Query strings and fragments are dropped (in hash mode the fragment
    /// *is* the path) and a single trailing slash is ignored.
    pub fn normalize(&self, location: &str) -> String {
        let raw = match self.mode {
            HistoryMode::Web => location.split('#').next().unwrap_or_default(),
            HistoryMode::Hash => location.split_once('#').map_or("/", |(_, fragment)| fragment),
        };
        let path = raw.split('?').next().unwrap_or_default();

        let path = if path.len() > 1 {
            path.strip_suffix('/').unwrap_or(path)
        } else {
            path
        };
        if path.is_empty() {
            "/".to_string()
        } else if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        }
    }

    /// Find the route for a location
    pub fn resolve(&self, location: &str) -> Option<&Route> {
        let path = self.normalize(location);
        self.routes.iter().find(|route| route.path == path)
    }

    /// Find a route by name
    pub fn by_name(&self, name: &str) -> Option<&Route> {
        self.routes.iter().find(|route| route.name == name)
    }
}

impl Plugin for PageRouter {
    fn name(&self) -> &'static str {
        ROUTER_PLUGIN
    }

    fn install(&self, app: &mut AppContext) -> Result<()> {
        app.set_router(self.clone());
        Ok(())
    }
}
