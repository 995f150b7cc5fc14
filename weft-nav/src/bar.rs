//! Declarative navigation-bar model.
//!
//! Screens describe their chrome with [`NavigationBar`]: a closed set of
//! built-in variants plus [`NavigationBar::Custom`], an explicit extension
//! point that hands rendering to a caller-supplied function. The engine
//! resolves the built-in variants into a full
//! [`ChromeState`](weft_ui::ChromeState) on every transition.

use std::{fmt, sync::Arc};

use derive_setters::Setters;

use weft_ui::{
    BarItem, Color, Dp, ImageResource, NavigationHost, ScreenKey, SearchBarStyle,
    SearchFieldStyle, State, StatusBarStyle, TextStyle,
};

/// Capability of screens that participate in chrome-aware navigation.
///
/// Every screen type routed through a navigation container must implement
/// it; the route constructors enforce the bound.
pub trait NavigationItem {
    /// Chrome descriptor for this screen.
    fn navigation_bar(&self) -> NavigationBar;

    /// Preferred status-bar appearance, if the screen has one.
    fn status_bar(&self) -> Option<StatusBarStyle> {
        None
    }
}

/// How a screen's navigation chrome renders.
///
/// Exactly one variant is active per screen at render time.
#[derive(Clone)]
pub enum NavigationBar {
    /// Chrome hidden entirely.
    None,
    /// Standard title chrome.
    Normal(NormalBar),
    /// Title chrome hosting a search input.
    Search(SearchBar),
    /// Caller-supplied chrome renderer; built-in styling does not run.
    Custom(BarFactory),
}

/// Shared visual attributes of visible chrome.
#[derive(Clone, Debug, PartialEq, Setters)]
pub struct BarStyles {
    /// Styling of the title text.
    #[setters(strip_option)]
    pub text_style: Option<TextStyle>,
    /// Bar background color.
    #[setters(strip_option)]
    pub background_color: Option<Color>,
    /// Control tint. Falls back to the host window's inherited tint when
    /// absent.
    #[setters(strip_option)]
    pub tint_color: Option<Color>,
    /// Whether the bar renders its shadow and background image. Disabling
    /// clears both together (flat chrome).
    pub is_shadow_enabled: bool,
    /// Whether the bar renders translucent.
    pub is_transparent: bool,
}

impl Default for BarStyles {
    fn default() -> Self {
        Self {
            text_style: None,
            background_color: None,
            tint_color: None,
            is_shadow_enabled: true,
            is_transparent: false,
        }
    }
}

/// Standard title chrome.
#[derive(Clone, Setters)]
pub struct NormalBar {
    /// Title text.
    #[setters(skip)]
    pub title: String,
    /// Image shown in place of the title text when present.
    #[setters(strip_option)]
    pub title_image: Option<ImageResource>,
    /// Fixed title-image width.
    #[setters(strip_option)]
    pub title_image_width: Option<Dp>,
    /// Fixed title-image height.
    #[setters(strip_option)]
    pub title_image_height: Option<Dp>,
    /// Visual styling.
    #[setters(strip_option)]
    pub styles: Option<BarStyles>,
    /// Leading back control.
    #[setters(strip_option)]
    pub back_button: Option<BarItem>,
    /// Trailing actions in declaration order. The first declared action
    /// renders rightmost.
    #[setters(skip)]
    pub actions: Vec<BarItem>,
}

impl NormalBar {
    /// Chrome with the given title and no other attributes.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            title_image: None,
            title_image_width: None,
            title_image_height: None,
            styles: None,
            back_button: None,
            actions: Vec::new(),
        }
    }

    /// Append a trailing action.
    pub fn action(mut self, action: BarItem) -> Self {
        self.actions.push(action);
        self
    }

    /// Replace the trailing actions.
    pub fn actions(mut self, actions: Vec<BarItem>) -> Self {
        self.actions = actions;
        self
    }
}

/// Title chrome hosting a search input.
#[derive(Clone, Setters)]
pub struct SearchBar {
    /// Title text.
    #[setters(skip)]
    pub title: String,
    /// Query binding updated as the user types.
    #[setters(skip)]
    pub query: State<String>,
    /// Placeholder shown while the query is empty.
    #[setters(strip_option, into)]
    pub placeholder: Option<String>,
    /// Visual sub-style of the search bar.
    pub style: SearchBarStyle,
    /// Whether scrolling hides the search field.
    pub hides_when_scrolling: bool,
    /// Visual styling of the bar.
    #[setters(strip_option)]
    pub styles: Option<BarStyles>,
    /// Styling of the embedded text field.
    #[setters(strip_option)]
    pub field_styles: Option<SearchFieldStyle>,
    /// Leading back control.
    #[setters(strip_option)]
    pub back_button: Option<BarItem>,
}

impl SearchBar {
    /// Search chrome with the given title, bound to `query`.
    pub fn new(title: impl Into<String>, query: State<String>) -> Self {
        Self {
            title: title.into(),
            query,
            placeholder: None,
            style: SearchBarStyle::Default,
            hides_when_scrolling: true,
            styles: None,
            field_styles: None,
            back_button: None,
        }
    }
}

/// Caller-supplied chrome renderer used by [`NavigationBar::Custom`].
///
/// The factory receives the live host and the screen key that just became
/// active; it is free to configure chrome however it likes. None of the
/// built-in styling logic runs for it.
#[derive(Clone)]
pub struct BarFactory {
    render: Arc<dyn Fn(&mut dyn NavigationHost, ScreenKey) + Send + Sync>,
}

impl BarFactory {
    /// Wraps a rendering function.
    pub fn new(render: impl Fn(&mut dyn NavigationHost, ScreenKey) + Send + Sync + 'static) -> Self {
        Self {
            render: Arc::new(render),
        }
    }

    /// Render chrome for `screen`.
    pub fn apply(&self, host: &mut dyn NavigationHost, screen: ScreenKey) {
        (self.render)(host, screen)
    }
}

impl fmt::Debug for BarFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BarFactory")
    }
}
