//! Page routing
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`route`] | Route records and the default route table |
//! | [`router`] | Location resolution |
//! | [`history`] | Navigation history |

pub mod history;
pub mod route;
pub mod router;

pub use history::WebHistory;
pub use route::{Route, default_routes};
pub use router::{HistoryMode, PageRouter};
