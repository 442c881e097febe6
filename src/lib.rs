#![deny(missing_docs)]

//! A minimal hash-fragment page router for wasm front ends.
//!
//! The part of the url after the `#` selects a view from a [`RouteTable`]. The view is fetched,
//! written into a container element, and the navigation link pointing at it is marked active.
//! Unknown routes and views that fail to load show a not-found view instead.
//!
//! ```ignore
//! use hashnav::app::RouterBuilder;
//! use hashnav::route::RouteTable;
//!
//! let table = RouteTable::default()
//!     .route("/", "views/home.html")
//!     .route("/about", "views/about.html")
//!     .not_found("views/404.html");
//!
//! RouterBuilder::default()
//!     .table(table)
//!     .container("#app-content")
//!     .links("nav a")
//!     .attach()?;
//! ```
//!
//! The routing cycle itself lives in [`Router`], which talks to the page only through the traits
//! in [`host`], so it can be driven by the fakes in [`test`].
//!
//! [`RouteTable`]: route/struct.RouteTable.html
//! [`Router`]: router/struct.Router.html
//! [`host`]: host/index.html
//! [`test`]: test/index.html

pub mod error;
pub mod route;
pub mod host;
pub mod router;
pub mod app;
pub mod site;
pub mod test;

pub use crate::error::LoadError;
pub use crate::route::{resolve, RouteTable};
pub use crate::router::{Outcome, Rendered, Router};
