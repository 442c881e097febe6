//! The site served by this crate.
//!
//! Call `run` from the page's script once the wasm module is initialized.

use crate::app::RouterBuilder;
use crate::route::RouteTable;

use cfg_if::cfg_if;
use log::{debug, info};
use wasm_bindgen::prelude::*;

cfg_if! {
    if #[cfg(feature = "console_error_panic_hook")] {
        #[inline]
        fn set_panic_hook() {
            console_error_panic_hook::set_once();
            debug!("panic hook set");
        }
    }
    else {
        fn set_panic_hook() {}
    }
}

cfg_if! {
    if #[cfg(feature = "console_log")] {
        #[inline]
        fn init_log() {
            if console_log::init_with_level(log::Level::Debug).is_ok() {
                debug!("log initialized");
            }
        }
    }
    else {
        fn init_log() {}
    }
}

/// The pages of the site and the view loaded for each.
pub fn routes() -> RouteTable {
    RouteTable::default()
        .route("/", "views/home.html")
        .route("/about", "views/about.html")
        .route("/contact", "views/contact.html")
        .not_found("views/404.html")
}

/// Start routing the page.
#[wasm_bindgen]
pub fn run() -> Result<(), JsValue> {
    init_log();
    set_panic_hook();

    RouterBuilder::default()
        .table(routes())
        .attach()?;

    info!("site initialized");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::resolve;

    #[test]
    fn site_routes() {
        let routes = routes();

        assert_eq!(routes.len(), 3);
        assert_eq!(routes.get(resolve("#/")), Some("views/home.html"));
        assert_eq!(routes.get(resolve("")), Some("views/home.html"));
        assert_eq!(routes.get(resolve("#/about")), Some("views/about.html"));
        assert_eq!(routes.get(resolve("#/contact")), Some("views/contact.html"));
        assert_eq!(routes.get(resolve("#/missing")), None);
        assert_eq!(routes.not_found_locator(), "views/404.html");
    }
}
