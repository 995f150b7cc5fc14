//! The screen model: typed navigable units of UI and their descriptors.

use std::sync::Arc;

use slotmap::new_key_type;

new_key_type! {
    /// Stable identity assigned to a screen instance when it enters a
    /// navigation container.
    ///
    /// All navigation bookkeeping (the live-screen arena, the
    /// pending-result registry, the host stack) is keyed by `ScreenKey`,
    /// never by native view identity.
    pub struct ScreenKey;
}

/// A navigable unit of UI with a typed input argument.
///
/// Instances are produced by a [`ScreenDesc`] factory and owned by the
/// navigation container that displays them; they are dropped when their key
/// leaves the native stack.
pub trait Screen: Send + Sync + 'static {
    /// The argument this screen is parameterized with. Screens taking no
    /// input use `()`.
    type Arg: Send + 'static;

    /// Assign the input argument.
    ///
    /// Called exactly once, after instantiation and before the screen is
    /// first displayed.
    fn set_arg(&mut self, arg: Self::Arg);
}

/// A screen that can hand a typed result back to whoever routed to it.
///
/// Producing no result is a normal termination path (the user backed out);
/// callers receive `None` in that case.
pub trait Resultable {
    /// The result type this screen produces.
    type ScreenResult: Send + 'static;

    /// The produced result, if the screen completed with one.
    fn screen_result(&self) -> Option<Self::ScreenResult>;
}

/// Typed screen descriptor: a factory producing fresh instances of one
/// screen type.
///
/// Descriptors are cheap to clone and hold no native resources. Every
/// [`instantiate`](Self::instantiate) call yields a new, independent
/// instance.
pub struct ScreenDesc<S> {
    factory: Arc<dyn Fn() -> S + Send + Sync>,
}

impl<S> Clone for ScreenDesc<S> {
    fn clone(&self) -> Self {
        Self {
            factory: Arc::clone(&self.factory),
        }
    }
}

impl<S: Screen> ScreenDesc<S> {
    /// Creates a descriptor from an instance factory.
    pub fn new(factory: impl Fn() -> S + Send + Sync + 'static) -> Self {
        Self {
            factory: Arc::new(factory),
        }
    }

    /// Instantiate a fresh screen instance.
    pub fn instantiate(&self) -> S {
        (self.factory)()
    }
}

impl<S: Screen + Default> ScreenDesc<S> {
    /// Descriptor for a screen type constructible via `Default`.
    pub fn of() -> Self {
        Self::new(S::default)
    }
}

#[cfg(test)]
mod tests {
    use super::{Screen, ScreenDesc};

    #[derive(Default)]
    struct Counter {
        start: u32,
    }

    impl Screen for Counter {
        type Arg = u32;

        fn set_arg(&mut self, arg: u32) {
            self.start = arg;
        }
    }

    #[test]
    fn instantiate_produces_fresh_instances() {
        let desc = ScreenDesc::<Counter>::of();
        let mut first = desc.instantiate();
        first.set_arg(3);
        let second = desc.instantiate();
        assert_eq!(first.start, 3);
        assert_eq!(second.start, 0);
    }
}
