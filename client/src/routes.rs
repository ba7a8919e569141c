//! Static client route table.
//!
//! DESIGN
//! ======
//! `Page` is the single source of truth for route paths: `app::App` builds
//! its `leptos_router` table from `Page::segment`, and navigation calls use
//! `Page::path`. There are no guards; every path maps to a page regardless of
//! session state.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Route-level screens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Login,
    Dashboard,
    ForgotPassword,
    Registration,
    ResetPassword,
    NotFound,
}

impl Page {
    /// Every page reachable through a literal path, in table order.
    pub const ROUTED: [Page; 5] = [
        Page::Login,
        Page::Dashboard,
        Page::ForgotPassword,
        Page::Registration,
        Page::ResetPassword,
    ];

    /// Absolute path used for navigation. `NotFound` has no path of its own
    /// and points back home.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Page::Login | Page::NotFound => "/",
            Page::Dashboard => "/dashboard",
            Page::ForgotPassword => "/forgot-password",
            Page::Registration => "/registration",
            Page::ResetPassword => "/reset-password",
        }
    }

    /// Path segment for `leptos_router::StaticSegment`.
    #[must_use]
    pub const fn segment(self) -> &'static str {
        match self {
            Page::Login | Page::NotFound => "",
            Page::Dashboard => "dashboard",
            Page::ForgotPassword => "forgot-password",
            Page::Registration => "registration",
            Page::ResetPassword => "reset-password",
        }
    }

    /// Resolve a location to the page the router renders for it.
    ///
    /// Query string and fragment are ignored, as is a single trailing slash.
    /// Matching is case-sensitive. Anything outside the table is `NotFound`.
    #[must_use]
    pub fn resolve(location: &str) -> Page {
        let path = location
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let path = match path.strip_suffix('/') {
            Some(trimmed) if !trimmed.is_empty() => trimmed,
            _ => path,
        };
        let segment = path.strip_prefix('/').unwrap_or(path);

        Page::ROUTED
            .into_iter()
            .find(|page| page.segment() == segment)
            .unwrap_or(Page::NotFound)
    }
}
