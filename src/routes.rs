//! Screen routes and the navigation boundary.
//!
//! The login screen is the root route. Screens only ever push; pushing a
//! route already on the stack unwinds back to it, so toggling between the
//! login and register screens never grows the history.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Register,
    /// Authenticated area entered after a successful login.
    Home,
}

impl Route {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/",
            Self::Register => "/register",
            Self::Home => "/home",
        }
    }

    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        match path.trim_end_matches('/') {
            "" => Some(Self::Login),
            "/register" => Some(Self::Register),
            "/home" => Some(Self::Home),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Route-push capability handed to screens.
pub trait Navigator {
    fn push(&mut self, route: Route);
    fn current(&self) -> Route;
}

/// Stack-backed navigator rooted at [`Route::Login`].
#[derive(Debug, Clone)]
pub struct History {
    stack: Vec<Route>,
}

impl Default for History {
    fn default() -> Self {
        Self { stack: vec![Route::Login] }
    }
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Navigator for History {
    fn push(&mut self, route: Route) {
        tracing::debug!(from = %self.current(), to = %route, "navigate");
        match self.stack.iter().position(|r| *r == route) {
            Some(pos) => self.stack.truncate(pos + 1),
            None => self.stack.push(route),
        }
    }

    fn current(&self) -> Route {
        self.stack.last().copied().unwrap_or(Route::Login)
    }
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
