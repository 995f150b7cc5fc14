//! Core contracts for the Weft widget toolkit.
//!
//! Weft lets a single codebase describe screens, navigation, and styled
//! widgets, with platform renderers producing native components. This crate
//! carries the pieces every other layer agrees on:
//!
//! - the screen model ([`Screen`], [`Resultable`], [`ScreenDesc`],
//!   [`ScreenKey`]),
//! - opaque styling value objects ([`Color`], [`Dp`], [`TextStyle`],
//!   [`ImageResource`]),
//! - the shared value cell used for UI bindings ([`State`]),
//! - the resolved navigation chrome a host applies ([`ChromeState`]),
//! - the platform host seam ([`NavigationHost`], [`TransitionObserver`]).
//!
//! The navigation engine itself lives in the `weft-nav` crate; platform
//! renderer glue implements [`NavigationHost`] and feeds native transition
//! events into a [`TransitionObserver`].
//!
//! # Screens
//!
//! A screen is an ordinary type implementing [`Screen`]; a [`ScreenDesc`]
//! wraps the factory that produces fresh instances of it:
//!
//! ```
//! use weft_ui::{Screen, ScreenDesc};
//!
//! #[derive(Default)]
//! struct Detail {
//!     item: String,
//! }
//!
//! impl Screen for Detail {
//!     type Arg = String;
//!
//!     fn set_arg(&mut self, arg: String) {
//!         self.item = arg;
//!     }
//! }
//!
//! let desc: ScreenDesc<Detail> = ScreenDesc::of();
//! let mut screen = desc.instantiate();
//! screen.set_arg("invoice-42".into());
//! assert_eq!(screen.item, "invoice-42");
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod chrome;
pub mod color;
pub mod dp;
#[cfg(any(test, feature = "testing"))]
pub mod headless;
pub mod host;
pub mod screen;
pub mod state;
pub mod style;

#[cfg(any(test, feature = "testing"))]
pub use crate::headless::{HeadlessHost, HostProbe};
pub use crate::{
    chrome::{
        BarItem, BarItemContent, ChromeState, SearchBarStyle, SearchChrome, SearchFieldStyle,
        TitleImage,
    },
    color::Color,
    dp::Dp,
    host::{NavigationHost, StatusBarStyle, TransitionObserver},
    screen::{Resultable, Screen, ScreenDesc, ScreenKey},
    state::State,
    style::{FontStyle, ImageResource, TextStyle},
};
