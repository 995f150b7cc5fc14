//! Shared mutable value cells.

use std::sync::Arc;

use parking_lot::RwLock;

/// A shared mutable value cell.
///
/// `State<T>` is the binding currency between native inputs and model
/// values: search chrome hands a `State<String>` to the host, which writes
/// user keystrokes into it. Clones share the same storage.
///
/// ```
/// use weft_ui::State;
///
/// let query = State::new(String::new());
/// let binding = query.clone();
/// binding.set("tickets".to_string());
/// assert_eq!(query.get(), "tickets");
/// ```
pub struct State<T> {
    inner: Arc<RwLock<T>>,
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Default> Default for State<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> State<T> {
    /// Creates a cell holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
        }
    }

    /// Execute a closure with a shared reference to the stored value.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.read())
    }

    /// Execute a closure with a mutable reference to the stored value.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.inner.write())
    }

    /// Get a cloned value. Requires `T: Clone`.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.with(Clone::clone)
    }

    /// Replace the stored value.
    pub fn set(&self, value: T) {
        self.with_mut(|slot| *slot = value);
    }

    /// Whether two cells share the same storage.
    pub fn shares_storage_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::State;

    #[test]
    fn clones_share_storage() {
        let state = State::new(1u32);
        let alias = state.clone();
        alias.set(7);
        assert_eq!(state.get(), 7);
        assert!(state.shares_storage_with(&alias));
    }

    #[test]
    fn independent_cells_do_not() {
        let a = State::new(0u32);
        let b = State::new(0u32);
        assert!(!a.shares_storage_with(&b));
    }
}
