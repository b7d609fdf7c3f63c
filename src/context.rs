//! Navigation Context
//!
//! Active route shared via Leptos Context API.

use leptos::prelude::*;

/// Active view, seeded from the URL hash on startup
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    /// Product listing
    Collection,
    /// Create form; `id` is present when an existing product can be deleted
    Form { id: Option<u32> },
}

/// Navigation signals provided via context
#[derive(Clone, Copy)]
pub struct NavContext {
    /// Currently displayed route - read
    pub route: ReadSignal<Route>,
    /// Currently displayed route - write
    set_route: WriteSignal<Route>,
}

impl NavContext {
    pub fn new(route: (ReadSignal<Route>, WriteSignal<Route>)) -> Self {
        Self {
            route: route.0,
            set_route: route.1,
        }
    }

    /// Redirect to the product listing
    pub fn go_to_collection(&self) {
        self.navigate(Route::Collection);
    }

    /// Open the form, with a delete target when `id` is present
    pub fn go_to_form(&self, id: Option<u32>) {
        self.navigate(Route::Form { id });
    }

    fn navigate(&self, route: Route) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_hash(&route_hash(&route));
        }
        self.set_route.set(route);
    }
}

/// Route for the hash the page was opened with
pub fn initial_route() -> Route {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .map(|hash| parse_route(&hash))
        .unwrap_or(Route::Collection)
}

/// Hash fragment representing a route
fn route_hash(route: &Route) -> String {
    match route {
        Route::Collection => "#/tasks".to_string(),
        Route::Form { id: None } => "#/tasks-create".to_string(),
        Route::Form { id: Some(id) } => format!("#/tasks/{id}"),
    }
}

/// Parse a location hash; unknown paths land on the collection
fn parse_route(hash: &str) -> Route {
    let path = hash.trim_start_matches('#').trim_matches('/');
    match path {
        "" | "tasks" => Route::Collection,
        "tasks-create" => Route::Form { id: None },
        other => match other.strip_prefix("tasks/").and_then(|id| id.parse().ok()) {
            Some(id) => Route::Form { id: Some(id) },
            None => Route::Collection,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_hashes_parse() {
        assert_eq!(parse_route("#/tasks"), Route::Collection);
        assert_eq!(parse_route("#/tasks-create"), Route::Form { id: None });
        assert_eq!(parse_route("#/tasks/42"), Route::Form { id: Some(42) });
    }

    #[test]
    fn unknown_hashes_fall_back_to_the_collection() {
        assert_eq!(parse_route(""), Route::Collection);
        assert_eq!(parse_route("#/"), Route::Collection);
        assert_eq!(parse_route("#/ventas"), Route::Collection);
        assert_eq!(parse_route("#/tasks/abc"), Route::Collection);
    }

    #[test]
    fn hashes_round_trip() {
        for route in [
            Route::Collection,
            Route::Form { id: None },
            Route::Form { id: Some(7) },
        ] {
            assert_eq!(parse_route(&route_hash(&route)), route);
        }
    }
}
