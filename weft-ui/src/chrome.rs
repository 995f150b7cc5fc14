//! Fully resolved navigation chrome configuration.
//!
//! The navigation engine translates a screen's declarative bar description
//! into a [`ChromeState`] and hands it to the host. A `ChromeState` is
//! always applied wholesale: every application rebuilds the entire bar,
//! nothing is patched incrementally, so no attribute can leak from the
//! previously displayed screen.

use std::{fmt, sync::Arc};

use smallvec::SmallVec;

use crate::{
    color::Color,
    dp::Dp,
    state::State,
    style::{ImageResource, TextStyle},
};

/// Content of a navigation-bar control.
#[derive(Debug, Clone, PartialEq)]
pub enum BarItemContent {
    /// A plain text control.
    Text(String),
    /// An icon control referencing a platform image asset.
    Icon(ImageResource),
}

/// A back-button or action control installed into the chrome.
#[derive(Clone)]
pub struct BarItem {
    /// Rendered content of the control.
    pub content: BarItemContent,
    /// Invoked when the user presses the control.
    pub on_press: Arc<dyn Fn() + Send + Sync>,
}

impl BarItem {
    /// A text control.
    pub fn text(label: impl Into<String>, on_press: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            content: BarItemContent::Text(label.into()),
            on_press: Arc::new(on_press),
        }
    }

    /// An icon control.
    pub fn icon(icon: ImageResource, on_press: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            content: BarItemContent::Icon(icon),
            on_press: Arc::new(on_press),
        }
    }

    /// Simulate a user press.
    pub fn press(&self) {
        (self.on_press)()
    }
}

impl fmt::Debug for BarItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BarItem")
            .field("content", &self.content)
            .finish_non_exhaustive()
    }
}

/// Title image with optional fixed layout constraints.
#[derive(Debug, Clone, PartialEq)]
pub struct TitleImage {
    /// Image asset shown in place of the title text.
    pub image: ImageResource,
    /// Optional fixed width.
    pub width: Option<Dp>,
    /// Optional fixed height.
    pub height: Option<Dp>,
}

/// Visual sub-style of a native search bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchBarStyle {
    /// Platform default appearance.
    #[default]
    Default,
    /// Prominent, opaque-background appearance.
    Prominent,
    /// Minimal, borderless appearance.
    Minimal,
}

/// Styling of the text field embedded in search chrome.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SearchFieldStyle {
    /// Styling of the query text.
    pub text_style: Option<TextStyle>,
    /// Tint of the leading search icon.
    pub icon_tint_color: Option<Color>,
    /// Background color of the field itself.
    pub background_color: Option<Color>,
}

/// Resolved configuration of search chrome.
#[derive(Clone)]
pub struct SearchChrome {
    /// Query binding. The host writes user keystrokes into it; programmatic
    /// writes to the cell are never pushed back into the native input.
    pub query: State<String>,
    /// Placeholder shown while the query is empty.
    pub placeholder: Option<String>,
    /// Visual sub-style of the search bar.
    pub style: SearchBarStyle,
    /// Whether scrolling hides the search field.
    pub hides_when_scrolling: bool,
    /// Explicit search-bar tint, when styled. Unlike the bar tint this has
    /// no window fallback.
    pub tint: Option<Color>,
    /// Styling of the embedded text field.
    pub field: Option<SearchFieldStyle>,
}

impl fmt::Debug for SearchChrome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchChrome")
            .field("placeholder", &self.placeholder)
            .field("style", &self.style)
            .field("hides_when_scrolling", &self.hides_when_scrolling)
            .field("tint", &self.tint)
            .field("field", &self.field)
            .finish_non_exhaustive()
    }
}

/// Fully resolved native navigation-bar configuration.
#[derive(Clone, Debug, Default)]
pub struct ChromeState {
    /// Chrome surface hidden entirely. When set, no other field is read.
    pub hidden: bool,
    /// Localized title text.
    pub title: Option<String>,
    /// Title image, preferred over the title text when present.
    pub title_image: Option<TitleImage>,
    /// Styling of the title text.
    pub title_text_style: Option<TextStyle>,
    /// Bar background color.
    pub background_color: Option<Color>,
    /// Resolved control tint. Always present for visible chrome: either the
    /// explicit styled tint or the host window's inherited tint.
    pub tint: Option<Color>,
    /// Whether the bar renders translucent.
    pub translucent: bool,
    /// Shadow attribute cleared (flat chrome).
    pub shadow_cleared: bool,
    /// Background-image attribute cleared (flat chrome). Always toggled
    /// together with [`shadow_cleared`](Self::shadow_cleared).
    pub background_image_cleared: bool,
    /// Back control installed at the leading edge.
    pub back_button: Option<BarItem>,
    /// Right-aligned action controls in native order, i.e. reversed from
    /// the declared order per platform convention.
    pub actions: SmallVec<[BarItem; 2]>,
    /// Search configuration when the chrome hosts a search input.
    pub search: Option<SearchChrome>,
}
