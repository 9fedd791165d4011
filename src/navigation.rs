//! Navigation requests
//!
//! Turns a committed search (raw query or chosen suggestion) into a route and
//! hands it to the host's router. The dispatcher does not retry or validate
//! anything beyond rejecting an empty query.

use std::fmt;

use crate::search::{Category, RawResult, ResultKind};

/// Target page requested by a commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Full results page for a free-text query
    SearchResults { query: String, category: Category },
    /// Detail page for a single suggestion
    Details { kind: ResultKind, name: String },
}

impl Route {
    /// Path plus percent-encoded query string
    pub fn to_path(&self) -> String {
        match self {
            Route::SearchResults { query, category } => format!(
                "/searchresult?q={}&category={}",
                urlencoding::encode(query),
                urlencoding::encode(category.as_str())
            ),
            Route::Details { kind, name } => format!(
                "/details?type={}&name={}",
                urlencoding::encode(kind.as_str()),
                urlencoding::encode(name)
            ),
        }
    }

    /// Absolute URL under `base_url` (trailing slashes ignored)
    pub fn to_url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.to_path())
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path())
    }
}

/// External routing collaborator
pub trait Router {
    fn navigate(&mut self, route: &Route);
}

/// Router that keeps the most recent request for the host to act on
#[derive(Debug, Default)]
pub struct PendingRoute {
    route: Option<Route>,
}

impl PendingRoute {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&mut self) -> Option<Route> {
        self.route.take()
    }
}

impl Router for PendingRoute {
    fn navigate(&mut self, route: &Route) {
        self.route = Some(route.clone());
    }
}

pub struct NavigationDispatcher<R: Router> {
    router: R,
}

impl<R: Router> NavigationDispatcher<R> {
    pub fn new(router: R) -> Self {
        Self { router }
    }

    pub fn router(&self) -> &R {
        &self.router
    }

    pub fn router_mut(&mut self) -> &mut R {
        &mut self.router
    }

    /// Request the results page for a raw query
    ///
    /// Returns None (and navigates nowhere) for a whitespace-only query.
    pub fn submit(&mut self, query: &str, category: Category) -> Option<Route> {
        let query = query.trim();
        if query.is_empty() {
            log::debug!("Ignoring submit of empty query");
            return None;
        }

        let route = Route::SearchResults {
            query: query.to_string(),
            category,
        };
        log::debug!("Navigating to {}", route);
        self.router.navigate(&route);
        Some(route)
    }

    /// Request the detail page for a suggestion
    pub fn select(&mut self, item: &RawResult) -> Route {
        let route = Route::Details {
            kind: item.kind,
            name: item.name.clone(),
        };
        log::debug!("Navigating to {}", route);
        self.router.navigate(&route);
        route
    }
}

#[cfg(test)]
#[path = "navigation_tests.rs"]
mod navigation_tests;
