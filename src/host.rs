//! Traits for the pieces of the host environment the router talks to.
//!
//! The browser implementations live in [`app`], in-memory ones used for testing live in
//! [`test`].
//!
//! [`app`]: ../app/index.html
//! [`test`]: ../test/index.html

use futures::future::LocalBoxFuture;
use crate::error::LoadError;

/// Retrieve the text of a resource.
pub trait Fetch {
    /// Fetch the resource at `locator`.
    ///
    /// Any transport error or non-success status is an error.
    fn fetch<'a>(&'a self, locator: &'a str) -> LocalBoxFuture<'a, Result<String, LoadError>>;
}

/// The element that holds the current view.
pub trait Container {
    /// Replace the entire contents with the given markup.
    fn replace(&self, markup: &str);
}

/// A link in the navigation widget.
pub trait NavLink {
    /// The route key this link points at, if it points anywhere.
    fn target(&self) -> Option<String>;
    /// Set or clear the active marker.
    fn set_active(&self, active: bool);
}
