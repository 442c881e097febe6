//! Run a [`Router`] in the browser.
//!
//! This module provides the web-sys implementations of the host traits and a builder that finds
//! the container and navigation links in the document, then subscribes to `hashchange` and `load`
//! so every navigation runs a routing cycle.
//!
//! [`Router`]: ../router/struct.Router.html

use crate::error::LoadError;
use crate::host::{Fetch, Container, NavLink};
use crate::route::{self, RouteTable};
use crate::router::Router;

use futures::future::LocalBoxFuture;
use log::{debug, error, info, warn};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{JsFuture, spawn_local};

/// A router wired to the browser.
pub type BrowserRouter = Router<HttpFetch, ElementContainer, AnchorLink>;

/// Retrieve resources with `window.fetch`.
pub struct HttpFetch {
    window: web_sys::Window,
}

impl HttpFetch {
    /// Fetch relative to the given window.
    pub fn new(window: web_sys::Window) -> Self {
        HttpFetch { window: window }
    }
}

fn transport(value: JsValue) -> LoadError {
    LoadError::Transport(format!("{:?}", value))
}

impl Fetch for HttpFetch {
    fn fetch<'a>(&'a self, locator: &'a str) -> LocalBoxFuture<'a, Result<String, LoadError>> {
        Box::pin(async move {
            let response = JsFuture::from(self.window.fetch_with_str(locator))
                .await
                .map_err(transport)?;
            let response: web_sys::Response = response.dyn_into()
                .map_err(transport)?;

            if !response.ok() {
                return Err(LoadError::Status(response.status()));
            }

            let text = JsFuture::from(response.text().map_err(transport)?)
                .await
                .map_err(transport)?;

            text.as_string()
                .ok_or_else(|| LoadError::Transport("response body is not text".to_owned()))
        })
    }
}

/// An element whose inner html holds the current view.
pub struct ElementContainer {
    element: web_sys::Element,
}

impl ElementContainer {
    /// Render into the given element.
    pub fn new(element: web_sys::Element) -> Self {
        ElementContainer { element: element }
    }
}

impl Container for ElementContainer {
    fn replace(&self, markup: &str) {
        // views are trusted, they are inserted as is
        self.element.set_inner_html(markup);
    }
}

/// A navigation link, marked active with a css class.
///
/// The link's route key is its `href` without the leading `#`.
pub struct AnchorLink {
    element: web_sys::Element,
    class: String,
}

impl AnchorLink {
    /// Wrap an element, using `class` as the active marker.
    pub fn new(element: web_sys::Element, class: &str) -> Self {
        AnchorLink {
            element: element,
            class: class.to_owned(),
        }
    }
}

impl NavLink for AnchorLink {
    fn target(&self) -> Option<String> {
        self.element.get_attribute("href")
            .map(|href| route::strip_delimiter(&href).to_owned())
    }

    fn set_active(&self, active: bool) {
        let classes = self.element.class_list();
        let result = if active {
            classes.add_1(&self.class)
        }
        else {
            classes.remove_1(&self.class)
        };

        if let Err(e) = result {
            warn!("couldn't update class on navigation link: {:?}", e);
        }
    }
}

/// Struct used to configure a router and attach it to the page.
pub struct RouterBuilder {
    table: RouteTable,
    container: String,
    links: String,
    active_class: String,
    error_markup: Option<String>,
    supersede: bool,
}

impl Default for RouterBuilder {
    fn default() -> Self {
        RouterBuilder {
            table: RouteTable::default(),
            container: "#app-content".to_owned(),
            links: "nav a".to_owned(),
            active_class: "active".to_owned(),
            error_markup: None,
            supersede: false,
        }
    }
}

impl RouterBuilder {
    /// The routes to serve.
    pub fn table(self, table: RouteTable) -> Self {
        RouterBuilder { table: table, ..self }
    }

    /// Selector for the element views are rendered into.
    pub fn container(self, selector: &str) -> Self {
        RouterBuilder { container: selector.to_owned(), ..self }
    }

    /// Selector for the navigation links.
    pub fn links(self, selector: &str) -> Self {
        RouterBuilder { links: selector.to_owned(), ..self }
    }

    /// Class toggled on the active navigation link.
    pub fn active_class(self, class: &str) -> Self {
        RouterBuilder { active_class: class.to_owned(), ..self }
    }

    /// Markup shown when the not-found view can't be loaded.
    pub fn error_markup(self, markup: &str) -> Self {
        RouterBuilder { error_markup: Some(markup.to_owned()), ..self }
    }

    /// Discard navigations that were overtaken by a newer one.
    pub fn supersede(self, supersede: bool) -> Self {
        RouterBuilder { supersede: supersede, ..self }
    }

    /// Find the container and links in the document and create the router.
    ///
    /// The set of links is fixed at this point.
    pub fn build(self) -> Result<BrowserRouter, JsValue> {
        let RouterBuilder {
            table,
            container,
            links,
            active_class,
            error_markup,
            supersede,
        } = self;

        let window = web_sys::window()
            .ok_or_else(|| JsValue::from_str("couldn't get window handle"))?;

        let document = window.document()
            .ok_or_else(|| JsValue::from_str("couldn't get document handle"))?;

        let element = document.query_selector(&container)?
            .ok_or_else(|| JsValue::from_str(&format!("no element matches {:?}", container)))?;

        let nodes = document.query_selector_all(&links)?;
        let links: Vec<AnchorLink> = (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
            .map(|element| AnchorLink::new(element, &active_class))
            .collect();

        debug!("found {} navigation links", links.len());

        let router = Router::new(table, HttpFetch::new(window), ElementContainer::new(element), links)
            .supersede(supersede);

        Ok(match error_markup {
            Some(markup) => router.error_markup(markup),
            None => router,
        })
    }

    /// Build the router and start handling navigation.
    ///
    /// Listeners stay registered for the life of the page. If the page has no fragment once it
    /// has loaded, the location is rewritten to the root fragment, which triggers the first
    /// navigation.
    pub fn attach(self) -> Result<Rc<BrowserRouter>, JsValue> {
        let router = Rc::new(self.build()?);

        let window = web_sys::window()
            .ok_or_else(|| JsValue::from_str("couldn't get window handle"))?;

        let document = window.document()
            .ok_or_else(|| JsValue::from_str("couldn't get document handle"))?;

        {
            let router = Rc::clone(&router);
            let location = window.location();
            let closure = Closure::wrap(
                Box::new(move |_event| {
                    navigate(&router, &location);
                }) as Box<dyn FnMut(web_sys::Event)>
            );

            window.add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        if document.ready_state() == "complete" {
            initial(&router, &window.location());
        }
        else {
            let router = Rc::clone(&router);
            let location = window.location();
            let closure = Closure::wrap(
                Box::new(move |_event| {
                    initial(&router, &location);
                }) as Box<dyn FnMut(web_sys::Event)>
            );

            window.add_event_listener_with_callback("load", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        info!("router attached with {} routes", router.table().len());

        Ok(router)
    }
}

/// Handle the initial page load.
///
/// A page without a fragment is sent to the root fragment, whose `hashchange` runs the first
/// navigation. Otherwise the current fragment is navigated right away.
pub fn initial(router: &Rc<BrowserRouter>, location: &web_sys::Location) {
    let hash = location.hash().unwrap_or_else(|e| {
        error!("couldn't read location hash: {:?}", e);
        String::new()
    });

    match route::initial_redirect(&hash) {
        Some(root) => {
            debug!("no fragment, redirecting to {}", root);
            if let Err(e) = location.set_hash(&root) {
                error!("couldn't set location hash: {:?}", e);
                navigate(router, location);
            }
        }
        None => navigate(router, location),
    }
}

/// Start a navigation cycle for the current fragment.
fn navigate(router: &Rc<BrowserRouter>, location: &web_sys::Location) {
    let fragment = location.hash().unwrap_or_else(|e| {
        error!("couldn't read location hash: {:?}", e);
        String::new()
    });

    let router = Rc::clone(router);
    spawn_local(async move {
        router.navigate(&fragment).await;
    });
}
