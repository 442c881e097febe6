//! Test utilities.
//!
//! In-memory stand-ins for the browser so a [`Router`] can be driven without one.
//!
//! [`Router`]: ../router/struct.Router.html

use crate::error::LoadError;
use crate::host::{Fetch, Container, NavLink};

use futures::channel::oneshot;
use futures::future::LocalBoxFuture;
use futures::task::Poll;
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};

/// Test fetcher serving canned responses.
///
/// Locators that were never served fail with a 404 status.
#[derive(Default)]
pub struct Fetcher {
    responses: HashMap<String, Result<String, LoadError>>,
    gates: RefCell<HashMap<String, VecDeque<oneshot::Receiver<()>>>>,
    requests: RefCell<Vec<String>>,
}

impl Fetcher {
    /// Create a fetcher that fails every request.
    pub fn new() -> Self {
        Fetcher::default()
    }

    /// Respond to `locator` with `body`.
    pub fn serve(mut self, locator: &str, body: &str) -> Self {
        self.responses.insert(locator.to_owned(), Ok(body.to_owned()));
        self
    }

    /// Respond to `locator` with the given error.
    pub fn fail(mut self, locator: &str, error: LoadError) -> Self {
        self.responses.insert(locator.to_owned(), Err(error));
        self
    }

    /// Hold the next request for `locator` until the returned sender fires (or is dropped).
    pub fn hold(&self, locator: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.borrow_mut()
            .entry(locator.to_owned())
            .or_insert_with(VecDeque::new)
            .push_back(rx);
        tx
    }

    /// Every locator requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl Fetch for Fetcher {
    fn fetch<'a>(&'a self, locator: &'a str) -> LocalBoxFuture<'a, Result<String, LoadError>> {
        Box::pin(async move {
            self.requests.borrow_mut().push(locator.to_owned());

            let gate = self.gates.borrow_mut()
                .get_mut(locator)
                .and_then(VecDeque::pop_front);
            if let Some(gate) = gate {
                let _ = gate.await;
            }

            match self.responses.get(locator) {
                Some(response) => response.clone(),
                None => Err(LoadError::Status(404)),
            }
        })
    }
}

/// Test container recording what was written to it.
#[derive(Debug, Default)]
pub struct Page {
    html: RefCell<String>,
    writes: Cell<usize>,
}

impl Page {
    /// Create a page with some initial markup.
    pub fn with_html(html: &str) -> Self {
        Page {
            html: RefCell::new(html.to_owned()),
            writes: Cell::new(0),
        }
    }

    /// Current contents.
    pub fn html(&self) -> String {
        self.html.borrow().clone()
    }

    /// How many times the contents were replaced.
    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl Container for Page {
    fn replace(&self, markup: &str) {
        *self.html.borrow_mut() = markup.to_owned();
        self.writes.set(self.writes.get() + 1);
    }
}

/// Test navigation link.
#[derive(Debug, Default)]
pub struct Link {
    target: Option<String>,
    active: Cell<bool>,
}

impl Link {
    /// A link pointing at the given route key.
    pub fn to(target: &str) -> Self {
        Link {
            target: Some(target.to_owned()),
            active: Cell::new(false),
        }
    }

    /// A link without a target.
    pub fn dangling() -> Self {
        Link::default()
    }

    /// Whether the active marker is set.
    pub fn is_active(&self) -> bool {
        self.active.get()
    }
}

impl NavLink for Link {
    fn target(&self) -> Option<String> {
        self.target.clone()
    }

    fn set_active(&self, active: bool) {
        self.active.set(active);
    }
}

/// Return `Pending` once, waking immediately, so other futures get polled.
pub async fn yield_now() {
    let mut yielded = false;
    futures::future::poll_fn(|cx| {
        if yielded {
            Poll::Ready(())
        }
        else {
            yielded = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }).await
}
