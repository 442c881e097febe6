//! Turn navigation signals into rendered content.
//!
//! Every navigation runs one cycle: the fragment is resolved to a route key, the key is looked up
//! in the [`RouteTable`], the view is fetched and written into the container, and the navigation
//! links are updated to reflect the active route. When the route is unknown or its view can't be
//! fetched, the not-found view is shown instead, and if even that fails a fixed error message is
//! shown. Each cycle writes to the container exactly once.
//!
//! No state is kept between cycles. Cycles that overlap are not coordinated, so whichever finishes
//! last determines what is on screen, unless [`Router::supersede`] is turned on.
//!
//! [`RouteTable`]: ../route/struct.RouteTable.html
//! [`Router::supersede`]: struct.Router.html#method.supersede

use crate::error::LoadError;
use crate::host::{Fetch, Container, NavLink};
use crate::route::{self, RouteTable};

use log::{debug, error, trace, warn};
use std::cell::Cell;
use std::fmt;

/// Markup shown when neither a view nor the not-found view could be loaded.
pub const ERROR_MARKUP: &str =
    "<h1>Error 404 - Page not found</h1><p>The content could not be loaded.</p>";

/// The stages of a navigation cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for a navigation signal.
    Idle,
    /// Computing the route key from the fragment.
    Resolving,
    /// Looking the key up in the route table.
    LookingUp,
    /// Retrieving the view for the key.
    Fetching,
    /// Retrieving the not-found view.
    FetchingFallback,
    /// The container has been written.
    Rendered,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Phase::Idle => "idle",
            Phase::Resolving => "resolving",
            Phase::LookingUp => "looking up",
            Phase::Fetching => "fetching",
            Phase::FetchingFallback => "fetching fallback",
            Phase::Rendered => "rendered",
        };
        f.write_str(name)
    }
}

/// Result of loading a route key.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The view was retrieved.
    Success {
        /// The route that was loaded.
        key: String,
        /// The retrieved markup.
        body: String,
    },
    /// The route is known but its view could not be retrieved.
    Failure {
        /// The route that failed.
        key: String,
        /// Why it failed.
        error: LoadError,
    },
    /// The route is not in the table.
    NotFound {
        /// The unknown route.
        key: String,
    },
}

impl Outcome {
    /// The key that should be marked active for this outcome, if any.
    pub fn active_key(&self) -> Option<&str> {
        match self {
            Outcome::Success { key, .. } => Some(key.as_str()),
            Outcome::Failure { .. } | Outcome::NotFound { .. } => None,
        }
    }

    /// The route key this outcome is for.
    pub fn key(&self) -> &str {
        match self {
            Outcome::Success { key, .. }
            | Outcome::Failure { key, .. }
            | Outcome::NotFound { key } => key.as_str(),
        }
    }
}

/// What ended up in the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rendered {
    /// The view for the route.
    Content,
    /// The not-found view.
    Fallback,
    /// The fixed error markup.
    Error,
    /// Nothing, a newer navigation started before this one finished.
    Superseded,
}

/// Loads views for route keys and renders them into a container.
pub struct Router<F, C, L> {
    table: RouteTable,
    fetcher: F,
    container: C,
    links: Vec<L>,
    error_markup: String,
    supersede: bool,
    generation: Cell<u64>,
}

impl<F, C, L> Router<F, C, L>
where
    F: Fetch,
    C: Container,
    L: NavLink,
{
    /// Create a router rendering into `container` and marking `links`.
    pub fn new(table: RouteTable, fetcher: F, container: C, links: Vec<L>) -> Self {
        Router {
            table: table,
            fetcher: fetcher,
            container: container,
            links: links,
            error_markup: ERROR_MARKUP.to_owned(),
            supersede: false,
            generation: Cell::new(0),
        }
    }

    /// Markup shown when the not-found view can't be loaded either.
    pub fn error_markup(mut self, markup: impl Into<String>) -> Self {
        self.error_markup = markup.into();
        self
    }

    /// Discard the result of a navigation if another one started while it was in flight.
    ///
    /// Off by default, in which case the last navigation to finish wins.
    pub fn supersede(mut self, supersede: bool) -> Self {
        self.supersede = supersede;
        self
    }

    /// The route table.
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// The fetcher used to retrieve views.
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// The container views are rendered into.
    pub fn container(&self) -> &C {
        &self.container
    }

    /// The navigation links.
    pub fn links(&self) -> &[L] {
        &self.links
    }

    /// Run a full navigation cycle for `fragment`.
    pub async fn navigate(&self, fragment: &str) -> Rendered {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        debug!("navigation {} to {:?}", generation, fragment);

        enter(generation, Phase::Resolving);
        let key = route::resolve(fragment);

        let outcome = self.load_in(generation, key).await;

        let token = if self.supersede { Some(generation) } else { None };
        let rendered = self.render_in(generation, &outcome, token).await;

        if rendered != Rendered::Superseded {
            self.mark_active(outcome.active_key());
        }

        debug!("navigation {} to {:?}: {:?}", generation, key, rendered);
        enter(generation, Phase::Idle);
        rendered
    }

    /// Look up `key` and retrieve its view.
    pub async fn load(&self, key: &str) -> Outcome {
        self.load_in(self.generation.get(), key).await
    }

    /// Write the content for `outcome` into the container.
    ///
    /// Anything but a success fetches the not-found view first.
    pub async fn render(&self, outcome: &Outcome) -> Rendered {
        self.render_in(self.generation.get(), outcome, None).await
    }

    /// Mark the link pointing at `key` active and clear every other link.
    pub fn mark_active(&self, key: Option<&str>) {
        for link in &self.links {
            let active = match (key, link.target()) {
                (Some(key), Some(target)) => target == key,
                _ => false,
            };
            link.set_active(active);
        }
    }

    async fn load_in(&self, generation: u64, key: &str) -> Outcome {
        enter(generation, Phase::LookingUp);
        let locator = match self.table.get(key) {
            Some(locator) => locator,
            None => {
                warn!("{}", LoadError::RouteNotFound(key.to_owned()));
                return Outcome::NotFound { key: key.to_owned() };
            }
        };

        enter(generation, Phase::Fetching);
        match self.fetcher.fetch(locator).await {
            Ok(body) => Outcome::Success {
                key: key.to_owned(),
                body: body,
            },
            Err(e) => {
                error!("error loading {}: {}", locator, e);
                Outcome::Failure {
                    key: key.to_owned(),
                    error: e,
                }
            }
        }
    }

    async fn render_in(&self, generation: u64, outcome: &Outcome, token: Option<u64>) -> Rendered {
        let fallback;
        let (markup, rendered) = match outcome {
            Outcome::Success { body, .. } => (body.as_str(), Rendered::Content),
            Outcome::Failure { .. } | Outcome::NotFound { .. } => {
                enter(generation, Phase::FetchingFallback);
                let locator = self.table.not_found_locator();
                fallback = self.fetcher.fetch(locator).await;
                match &fallback {
                    Ok(body) => (body.as_str(), Rendered::Fallback),
                    Err(e) => {
                        error!("error loading {}: {}", locator, e);
                        (self.error_markup.as_str(), Rendered::Error)
                    }
                }
            }
        };

        if let Some(token) = token {
            if token != self.generation.get() {
                debug!("navigation {} superseded by {}", token, self.generation.get());
                return Rendered::Superseded;
            }
        }

        self.container.replace(markup);
        enter(generation, Phase::Rendered);
        rendered
    }
}

fn enter(generation: u64, phase: Phase) {
    trace!("navigation {}: {}", generation, phase);
}
