//! Route records

use std::fmt;
use std::sync::Arc;

use sysprobe_domain::constants::{
    ROUTE_HOME_NAME, ROUTE_HOME_PATH, ROUTE_INTRODUCTION_NAME, ROUTE_INTRODUCTION_PATH,
};

use crate::pages::{HomePage, IntroductionPage, Page};

/// Static mapping from a path to a named page
#[derive(Clone)]
pub struct Route {
    /// Exact path the route matches
    pub path: &'static str,
    /// Route name
    pub name: &'static str,
    /// Page rendered for the route
    pub page: Arc<dyn Page>,
}

impl Route {
    /// Create a route
    pub fn new(path: &'static str, name: &'static str, page: Arc<dyn Page>) -> Self {
        Self { path, name, page }
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("path", &self.path)
            .field("name", &self.name)
            .field("page", &self.page.title())
            .finish()
    }
}

/// The application's route table: `/` and `/introduction`
pub fn default_routes() -> Vec<Route> {
    vec![
        Route::new(ROUTE_HOME_PATH, ROUTE_HOME_NAME, Arc::new(HomePage)),
        Route::new(
            ROUTE_INTRODUCTION_PATH,
            ROUTE_INTRODUCTION_NAME,
            Arc::new(IntroductionPage),
        ),
    ]
}
