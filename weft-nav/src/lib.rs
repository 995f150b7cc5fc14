//! Typed routing and navigation containers for the Weft widget toolkit.
//!
//! This crate is the navigation engine sitting between screen authors and
//! the platform renderers. A [`NavigationScreen`] owns one native stack of
//! screens; its bound [`Router`] builds the typed transition objects a view
//! model stores and invokes:
//!
//! - [`Router::push_route`] / [`Router::replace_route`] for plain
//!   transitions,
//! - [`Router::push_result_route`] for destinations that hand a typed
//!   result back to the caller when they leave the stack,
//! - [`Router::pop_route`] / [`Router::pop_to_root_route`] for unwinding.
//!
//! Screens opt into chrome-aware navigation by implementing
//! [`NavigationItem`], describing their bar with the declarative
//! [`NavigationBar`] model; the engine resolves it into the wire-level
//! chrome configuration on every transition and re-applies it wholesale, so
//! no chrome attribute ever leaks from one screen to the next.
//!
//! Platform glue drives the engine through two seams defined in `weft-ui`:
//! it implements `NavigationHost` over the native stack controller and
//! reports native transitions (system back gestures included) to the
//! handle returned by [`NavigationScreen::observer`]. Both the
//! route-driven and the native-driven paths run the same pending-result
//! sweep and chrome update.
//!
//! Misusing the engine — invoking a route whose container is gone, or
//! popping past the root — is a programmer error and panics; there are no
//! recoverable navigation errors.

pub mod bar;
mod chrome;
pub mod navigation;
pub mod route;
pub mod router;

pub use crate::{
    bar::{BarFactory, BarStyles, NavigationBar, NavigationItem, NormalBar, SearchBar},
    navigation::{NavScreen, NavigationScreen, navigation_root},
    route::{Route, RouteHandler, RouteWithResult},
    router::Router,
};
