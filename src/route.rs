//! The route table and fragment resolution.
//!
//! A route key is what follows the `#` in the page url. Each key maps to the locator of the view
//! that should be loaded for it. The table is built once and never changes afterwards.

use std::collections::HashMap;
use std::iter::FromIterator;

/// Delimiter that introduces a location fragment.
pub const DELIMITER: char = '#';

/// Key used when the fragment is missing or empty.
pub const ROOT: &str = "/";

/// Strip a single leading delimiter from a fragment, if there is one.
pub fn strip_delimiter(fragment: &str) -> &str {
    if fragment.starts_with(DELIMITER) {
        &fragment[DELIMITER.len_utf8()..]
    }
    else {
        fragment
    }
}

/// Turn a location fragment into a route key.
///
/// `"#/about"` becomes `"/about"`, while `""` and `"#"` both become [`ROOT`]. Anything else is
/// returned verbatim, known to the table or not.
///
/// [`ROOT`]: constant.ROOT.html
pub fn resolve(fragment: &str) -> &str {
    match strip_delimiter(fragment) {
        "" => ROOT,
        key => key,
    }
}

/// The fragment a freshly loaded page should be sent to, if any.
///
/// Only a page with no fragment at all is redirected, to the root fragment `"#/"`.
pub fn initial_redirect(hash: &str) -> Option<String> {
    if hash.is_empty() {
        Some(format!("{}{}", DELIMITER, ROOT))
    }
    else {
        None
    }
}

/// Immutable mapping from route keys to resource locators.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteTable {
    routes: HashMap<String, String>,
    not_found: String,
}

impl Default for RouteTable {
    fn default() -> Self {
        RouteTable {
            routes: HashMap::new(),
            not_found: "views/404.html".to_owned(),
        }
    }
}

impl RouteTable {
    /// Add an entry. A later entry for the same key replaces the earlier one.
    pub fn route(mut self, key: impl Into<String>, locator: impl Into<String>) -> Self {
        self.routes.insert(key.into(), locator.into());
        self
    }

    /// Set the locator loaded when a route is unknown or its content can't be retrieved.
    pub fn not_found(mut self, locator: impl Into<String>) -> Self {
        self.not_found = locator.into();
        self
    }

    /// Look up the locator for a route key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.routes.get(key).map(String::as_str)
    }

    /// The fallback locator.
    pub fn not_found_locator(&self) -> &str {
        &self.not_found
    }

    /// All known route keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.routes.keys().map(String::as_str)
    }

    /// Number of routes, not counting the fallback.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// True if no routes have been added.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl<K: Into<String>, L: Into<String>> FromIterator<(K, L)> for RouteTable {
    fn from_iter<I: IntoIterator<Item = (K, L)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(RouteTable::default(), |table, (key, locator)| table.route(key, locator))
    }
}
