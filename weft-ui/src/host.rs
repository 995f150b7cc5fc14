//! The platform host seam: the native stack-hosting surface and the
//! transition observer capability.

use crate::{chrome::ChromeState, color::Color, screen::ScreenKey};

/// Light/dark preference for the platform status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBarStyle {
    /// Light foreground, for dark chrome.
    Light,
    /// Dark foreground, for light chrome.
    Dark,
}

/// The native stack-hosting surface a navigation container drives.
///
/// Platform renderer glue implements this over the native stack controller
/// (a navigation controller on iOS, the fragment back stack on Android);
/// the in-memory `HeadlessHost` implements it for tests and headless demos.
/// Hosts only move keys around and apply chrome; screen instances stay
/// owned by the container.
///
/// All methods are invoked on the UI thread.
pub trait NavigationHost: Send {
    /// Push `screen`'s view onto the stack.
    fn push(&mut self, screen: ScreenKey, animated: bool);

    /// Replace the entire stack with `screens`, bottom to top.
    fn set_stack(&mut self, screens: &[ScreenKey], animated: bool);

    /// Remove the top entry.
    fn pop(&mut self, animated: bool);

    /// Remove every entry above the root.
    fn pop_to_root(&mut self, animated: bool);

    /// The current stack, bottom to top.
    fn stack(&self) -> Vec<ScreenKey>;

    /// Re-apply the full chrome configuration for `screen`.
    fn apply_chrome(&mut self, screen: ScreenKey, chrome: &ChromeState);

    /// Inherited tint of the host window, used when chrome styles carry no
    /// explicit tint.
    fn window_tint(&self) -> Color;
}

/// Platform listener for stack transitions.
///
/// One capability with one method: platform glue calls it whenever a screen
/// becomes the active top-of-stack entry, including system-driven back
/// navigation (edge swipes, hardware back). The navigation engine runs the
/// same logic for route-driven transitions, so both paths share the
/// pending-result sweep and the chrome update.
///
/// Observer handles hold a weak reference to their container: they never
/// keep it alive, and calls made after the container is gone are silent
/// no-ops.
pub trait TransitionObserver: Send + Sync {
    /// `screen` is about to become the visible top of the stack.
    fn screen_will_show(&self, screen: ScreenKey);
}
