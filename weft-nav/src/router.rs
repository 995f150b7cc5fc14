//! Route construction.

use std::sync::{Arc, Weak};

use parking_lot::RwLock;

use weft_ui::{Resultable, Screen, ScreenDesc};

use crate::{
    bar::NavigationItem,
    navigation::{DeliverFn, NavCore, NavScreen},
    route::{Route, RouteHandler, RouteWithResult},
};

/// Builds typed routes bound to an owning navigation container.
///
/// A router is created unbound and handed to
/// [`NavigationScreen::new`](crate::NavigationScreen::new), which sets the
/// back-reference; only container construction ever writes it. Routes may
/// be built at any time, but invoking one requires the owning container to
/// be alive and attached — anything else is a programmer error and panics.
pub struct Router {
    core: Arc<RwLock<Weak<NavCore>>>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    /// Creates an unbound router.
    pub fn new() -> Self {
        Self {
            core: Arc::new(RwLock::new(Weak::new())),
        }
    }

    pub(crate) fn bind(&self, core: &Arc<NavCore>) {
        *self.core.write() = Arc::downgrade(core);
    }

    fn live_core(cell: &RwLock<Weak<NavCore>>) -> Arc<NavCore> {
        cell.read().upgrade().expect(
            "route invoked without a live navigation screen; \
             the router must be bound to a NavigationScreen that is still alive",
        )
    }

    /// Route pushing a fresh `destination` instance onto the stack.
    ///
    /// `input_mapper` turns the route argument into the destination's
    /// screen argument, assigned before first display.
    pub fn push_route<T, S, M>(&self, destination: ScreenDesc<S>, input_mapper: M) -> Route<T>
    where
        S: Screen + NavigationItem,
        M: Fn(T) -> S::Arg + Send + Sync + 'static,
        T: 'static,
    {
        let cell = Arc::clone(&self.core);
        Route::new(move |arg: T| {
            let core = Self::live_core(&cell);
            let mut screen = destination.instantiate();
            screen.set_arg(input_mapper(arg));
            core.push(Box::new(screen));
        })
    }

    /// Route pushing a result-producing `destination`.
    ///
    /// When the destination later leaves the stack, its produced result is
    /// passed through `output_mapper` and delivered to the handler supplied
    /// at navigation time; a destination dismissed without a result
    /// delivers `None`.
    pub fn push_result_route<IT, OT, S, M, O>(
        &self,
        destination: ScreenDesc<S>,
        input_mapper: M,
        output_mapper: O,
    ) -> RouteWithResult<IT, OT>
    where
        S: Screen + NavigationItem + Resultable,
        M: Fn(IT) -> S::Arg + Send + Sync + 'static,
        O: Fn(S::ScreenResult) -> OT + Clone + Send + Sync + 'static,
        IT: 'static,
        OT: 'static,
    {
        let cell = Arc::clone(&self.core);
        RouteWithResult::new(move |arg: IT, handler: RouteHandler<OT>| {
            let core = Self::live_core(&cell);
            let mut screen = destination.instantiate();
            screen.set_arg(input_mapper(arg));
            let output_mapper = output_mapper.clone();
            let deliver: DeliverFn = Box::new(move |departed: Box<dyn NavScreen>| {
                let result = departed
                    .downcast::<S>()
                    .ok()
                    .and_then(|screen| screen.screen_result());
                handler(result.map(output_mapper));
            });
            core.push_with_result(Box::new(screen), deliver);
        })
    }

    /// Route replacing the entire visible stack with a fresh `destination`
    /// instance. No back stack is retained.
    pub fn replace_route<T, S, M>(&self, destination: ScreenDesc<S>, input_mapper: M) -> Route<T>
    where
        S: Screen + NavigationItem,
        M: Fn(T) -> S::Arg + Send + Sync + 'static,
        T: 'static,
    {
        let cell = Arc::clone(&self.core);
        Route::new(move |arg: T| {
            let core = Self::live_core(&cell);
            let mut screen = destination.instantiate();
            screen.set_arg(input_mapper(arg));
            core.replace(Box::new(screen));
        })
    }

    /// Route removing the top screen.
    ///
    /// Must not be invoked while only the root screen remains.
    pub fn pop_route(&self) -> Route<()> {
        let cell = Arc::clone(&self.core);
        Route::new(move |()| Self::live_core(&cell).pop())
    }

    /// Route removing every screen above the root. A no-op at root depth.
    pub fn pop_to_root_route(&self) -> Route<()> {
        let cell = Arc::clone(&self.core);
        Route::new(move |()| Self::live_core(&cell).pop_to_root())
    }
}
