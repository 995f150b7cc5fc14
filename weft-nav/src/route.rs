//! Bound, invocable transition descriptors.

use std::sync::Arc;

/// Handler receiving the typed result of a result-bearing route.
///
/// `None` means the destination was dismissed without producing a result —
/// a normal termination path, not an error.
pub type RouteHandler<OT> = Arc<dyn Fn(Option<OT>) + Send + Sync>;

/// A bound description of a navigation transition.
///
/// Routes are immutable, hold no native resources, and may be cloned and
/// stored freely (a view model typically owns the routes for its navigable
/// actions). Invoking one performs the transition against the live
/// container the builder [`Router`](crate::Router) is bound to.
#[derive(Clone)]
pub struct Route<T> {
    action: Arc<dyn Fn(T) + Send + Sync>,
}

impl<T> Route<T> {
    pub(crate) fn new(action: impl Fn(T) + Send + Sync + 'static) -> Self {
        Self {
            action: Arc::new(action),
        }
    }

    /// Perform the transition.
    pub fn navigate(&self, arg: T) {
        (self.action)(arg)
    }
}

/// A transition descriptor whose destination hands a typed result back.
#[derive(Clone)]
pub struct RouteWithResult<IT, OT> {
    action: Arc<dyn Fn(IT, RouteHandler<OT>) + Send + Sync>,
}

impl<IT, OT> RouteWithResult<IT, OT> {
    pub(crate) fn new(action: impl Fn(IT, RouteHandler<OT>) + Send + Sync + 'static) -> Self {
        Self {
            action: Arc::new(action),
        }
    }

    /// Perform the transition.
    ///
    /// `handler` is invoked exactly once, when the destination leaves the
    /// stack: with `Some(result)` if it produced one, with `None` if it was
    /// dismissed without completing.
    pub fn navigate(&self, arg: IT, handler: impl Fn(Option<OT>) + Send + Sync + 'static) {
        (self.action)(arg, Arc::new(handler))
    }
}
