//! In-memory navigation host for tests and headless demos.
//!
//! [`HeadlessHost`] records every stack mutation and chrome application it
//! receives; its [`HostProbe`] handle observes that record from outside the
//! container owning the host, and can mutate the stack the way a native
//! gesture would (bypassing the container entirely).

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::trace;

use crate::{chrome::ChromeState, color::Color, host::NavigationHost, screen::ScreenKey};

/// Window tint a headless host reports by default.
pub const DEFAULT_WINDOW_TINT: Color = Color::new(0.0, 0.478, 1.0, 1.0);

#[derive(Default)]
struct HostInner {
    stack: Vec<ScreenKey>,
    chrome_log: Vec<(ScreenKey, ChromeState)>,
    window_tint: Color,
}

/// An in-memory [`NavigationHost`].
pub struct HeadlessHost {
    inner: Arc<Mutex<HostInner>>,
}

/// Shared observation handle for a [`HeadlessHost`].
#[derive(Clone)]
pub struct HostProbe {
    inner: Arc<Mutex<HostInner>>,
}

impl HeadlessHost {
    /// Creates a host reporting [`DEFAULT_WINDOW_TINT`] and its probe.
    pub fn new() -> (Self, HostProbe) {
        Self::with_window_tint(DEFAULT_WINDOW_TINT)
    }

    /// Creates a host reporting `tint` as the window tint, and its probe.
    pub fn with_window_tint(tint: Color) -> (Self, HostProbe) {
        let inner = Arc::new(Mutex::new(HostInner {
            window_tint: tint,
            ..HostInner::default()
        }));
        let probe = HostProbe {
            inner: Arc::clone(&inner),
        };
        (Self { inner }, probe)
    }
}

impl NavigationHost for HeadlessHost {
    fn push(&mut self, screen: ScreenKey, animated: bool) {
        trace!(?screen, animated, "headless push");
        self.inner.lock().stack.push(screen);
    }

    fn set_stack(&mut self, screens: &[ScreenKey], animated: bool) {
        trace!(?screens, animated, "headless set_stack");
        let mut inner = self.inner.lock();
        inner.stack.clear();
        inner.stack.extend_from_slice(screens);
    }

    fn pop(&mut self, animated: bool) {
        trace!(animated, "headless pop");
        self.inner.lock().stack.pop();
    }

    fn pop_to_root(&mut self, animated: bool) {
        trace!(animated, "headless pop_to_root");
        self.inner.lock().stack.truncate(1);
    }

    fn stack(&self) -> Vec<ScreenKey> {
        self.inner.lock().stack.clone()
    }

    fn apply_chrome(&mut self, screen: ScreenKey, chrome: &ChromeState) {
        trace!(?screen, hidden = chrome.hidden, "headless apply_chrome");
        self.inner.lock().chrome_log.push((screen, chrome.clone()));
    }

    fn window_tint(&self) -> Color {
        self.inner.lock().window_tint
    }
}

impl HostProbe {
    /// The native stack, bottom to top.
    pub fn stack(&self) -> Vec<ScreenKey> {
        self.inner.lock().stack.clone()
    }

    /// Number of entries on the native stack.
    pub fn depth(&self) -> usize {
        self.inner.lock().stack.len()
    }

    /// Every chrome application the host received, oldest first.
    pub fn chrome_log(&self) -> Vec<(ScreenKey, ChromeState)> {
        self.inner.lock().chrome_log.clone()
    }

    /// The most recent chrome application.
    pub fn last_chrome(&self) -> Option<(ScreenKey, ChromeState)> {
        self.inner.lock().chrome_log.last().cloned()
    }

    /// Remove the top entry the way a native gesture would, bypassing the
    /// container. Returns the revealed top entry, which the caller should
    /// report to the container's transition observer.
    pub fn native_pop(&self) -> Option<ScreenKey> {
        let mut inner = self.inner.lock();
        inner.stack.pop();
        inner.stack.last().copied()
    }

    /// Push a view the container knows nothing about, the way foreign
    /// native code would.
    pub fn native_push(&self, screen: ScreenKey) {
        self.inner.lock().stack.push(screen);
    }
}

#[cfg(test)]
mod tests {
    use super::HeadlessHost;
    use crate::{host::NavigationHost, screen::ScreenKey};
    use slotmap::SlotMap;

    fn keys(n: usize) -> Vec<ScreenKey> {
        let mut arena: SlotMap<ScreenKey, ()> = SlotMap::with_key();
        (0..n).map(|_| arena.insert(())).collect()
    }

    #[test]
    fn probe_sees_host_mutations() {
        let (mut host, probe) = HeadlessHost::new();
        let keys = keys(3);
        for &key in &keys {
            host.push(key, true);
        }
        assert_eq!(probe.stack(), keys);

        host.pop_to_root(true);
        assert_eq!(probe.stack(), keys[..1]);
    }

    #[test]
    fn native_pop_reveals_previous_entry() {
        let (mut host, probe) = HeadlessHost::new();
        let keys = keys(2);
        host.set_stack(&keys, false);
        assert_eq!(probe.native_pop(), Some(keys[0]));
        assert_eq!(host.stack(), keys[..1]);
    }
}
