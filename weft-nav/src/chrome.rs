//! Navigation-bar style adapter.
//!
//! Translates the declarative [`NavigationBar`] model into the fully
//! resolved [`ChromeState`] a host applies. Resolution always rebuilds the
//! whole configuration; nothing is patched incrementally.

use weft_ui::{ChromeState, Color, SearchChrome, TitleImage};

use crate::bar::{BarFactory, BarStyles, NavigationBar, NormalBar, SearchBar};

/// Outcome of resolving a screen's chrome description.
pub(crate) enum Resolved {
    /// Built-in chrome, to be applied via
    /// [`NavigationHost::apply_chrome`](weft_ui::NavigationHost::apply_chrome).
    Builtin(ChromeState),
    /// Custom chrome, to be rendered by the caller-supplied factory.
    Custom(BarFactory),
}

pub(crate) fn resolve(bar: &NavigationBar, window_tint: Color) -> Resolved {
    match bar {
        NavigationBar::None => Resolved::Builtin(ChromeState {
            hidden: true,
            ..ChromeState::default()
        }),
        NavigationBar::Normal(normal) => Resolved::Builtin(resolve_normal(normal, window_tint)),
        NavigationBar::Search(search) => Resolved::Builtin(resolve_search(search, window_tint)),
        NavigationBar::Custom(factory) => Resolved::Custom(factory.clone()),
    }
}

/// Attributes shared by every visible variant: text and background styling,
/// tint fallback to the window tint, translucency, and the coupled
/// shadow/background-image clear.
fn base_chrome(styles: Option<&BarStyles>, window_tint: Color) -> ChromeState {
    let flat = styles.is_some_and(|s| !s.is_shadow_enabled);
    ChromeState {
        hidden: false,
        title_text_style: styles.and_then(|s| s.text_style),
        background_color: styles.and_then(|s| s.background_color),
        tint: Some(styles.and_then(|s| s.tint_color).unwrap_or(window_tint)),
        translucent: styles.is_some_and(|s| s.is_transparent),
        shadow_cleared: flat,
        background_image_cleared: flat,
        ..ChromeState::default()
    }
}

fn resolve_normal(bar: &NormalBar, window_tint: Color) -> ChromeState {
    let mut chrome = base_chrome(bar.styles.as_ref(), window_tint);
    chrome.title = Some(bar.title.clone());
    chrome.title_image = bar.title_image.clone().map(|image| TitleImage {
        image,
        width: bar.title_image_width,
        height: bar.title_image_height,
    });
    chrome.back_button = bar.back_button.clone();
    chrome.actions = bar.actions.iter().rev().cloned().collect();
    chrome
}

fn resolve_search(bar: &SearchBar, window_tint: Color) -> ChromeState {
    let mut chrome = base_chrome(bar.styles.as_ref(), window_tint);
    chrome.title = Some(bar.title.clone());
    chrome.back_button = bar.back_button.clone();
    chrome.search = Some(SearchChrome {
        query: bar.query.clone(),
        placeholder: bar.placeholder.clone(),
        style: bar.style,
        hides_when_scrolling: bar.hides_when_scrolling,
        tint: bar.styles.as_ref().and_then(|s| s.tint_color),
        field: bar.field_styles,
    });
    chrome
}

#[cfg(test)]
mod tests {
    use weft_ui::{BarItem, BarItemContent, ChromeState, Color, Dp, ImageResource, State};

    use super::{Resolved, resolve};
    use crate::bar::{BarStyles, NavigationBar, NormalBar, SearchBar};

    const WINDOW_TINT: Color = Color::new(0.0, 0.5, 1.0, 1.0);

    fn builtin(bar: &NavigationBar) -> ChromeState {
        match resolve(bar, WINDOW_TINT) {
            Resolved::Builtin(chrome) => chrome,
            Resolved::Custom(_) => panic!("expected built-in chrome"),
        }
    }

    fn action(label: &str) -> BarItem {
        BarItem::text(label, || {})
    }

    #[test]
    fn actions_resolve_in_reverse_order() {
        let bar = NavigationBar::Normal(
            NormalBar::new("Inbox")
                .action(action("A"))
                .action(action("B"))
                .action(action("C")),
        );
        let chrome = builtin(&bar);
        let labels: Vec<_> = chrome
            .actions
            .iter()
            .map(|item| match &item.content {
                BarItemContent::Text(label) => label.as_str(),
                BarItemContent::Icon(_) => panic!("expected text actions"),
            })
            .collect();
        assert_eq!(labels, ["C", "B", "A"]);
    }

    #[test]
    fn none_hides_chrome_without_residual_attributes() {
        let chrome = builtin(&NavigationBar::None);
        assert!(chrome.hidden);
        assert_eq!(chrome.title, None);
        assert!(chrome.actions.is_empty());
        assert!(chrome.back_button.is_none());
        assert!(chrome.search.is_none());
    }

    #[test]
    fn disabling_shadow_clears_background_image_too() {
        let styled = |shadow: bool| {
            builtin(&NavigationBar::Normal(
                NormalBar::new("Inbox").styles(BarStyles::default().is_shadow_enabled(shadow)),
            ))
        };

        let flat = styled(false);
        assert!(flat.shadow_cleared);
        assert!(flat.background_image_cleared);

        let default = styled(true);
        assert!(!default.shadow_cleared);
        assert!(!default.background_image_cleared);
    }

    #[test]
    fn tint_falls_back_to_window_tint() {
        let unstyled = builtin(&NavigationBar::Normal(NormalBar::new("Inbox")));
        assert_eq!(unstyled.tint, Some(WINDOW_TINT));

        let explicit = Color::from_rgb(1.0, 0.0, 0.0);
        let styled = builtin(&NavigationBar::Normal(
            NormalBar::new("Inbox").styles(BarStyles::default().tint_color(explicit)),
        ));
        assert_eq!(styled.tint, Some(explicit));
    }

    #[test]
    fn title_image_carries_constraints() {
        let bar = NavigationBar::Normal(
            NormalBar::new("Inbox")
                .title_image(ImageResource::new("logo"))
                .title_image_width(Dp(96.0)),
        );
        let chrome = builtin(&bar);
        let title_image = chrome.title_image.expect("title image resolved");
        assert_eq!(title_image.image.id(), "logo");
        assert_eq!(title_image.width, Some(Dp(96.0)));
        assert_eq!(title_image.height, None);
        // The title text is still resolved; hosts prefer the image.
        assert_eq!(chrome.title.as_deref(), Some("Inbox"));
    }

    #[test]
    fn search_chrome_shares_the_query_binding() {
        let query = State::new(String::new());
        let bar = NavigationBar::Search(
            SearchBar::new("Find", query.clone())
                .placeholder("Search mail")
                .hides_when_scrolling(false),
        );
        let chrome = builtin(&bar);
        let search = chrome.search.expect("search chrome resolved");
        assert!(search.query.shares_storage_with(&query));
        assert_eq!(search.placeholder.as_deref(), Some("Search mail"));
        assert!(!search.hides_when_scrolling);

        // The host writes keystrokes into the binding (UI -> model).
        search.query.set("urgent".to_string());
        assert_eq!(query.get(), "urgent");
    }

    #[test]
    fn search_tint_has_no_window_fallback() {
        let bar = NavigationBar::Search(SearchBar::new("Find", State::default()));
        let chrome = builtin(&bar);
        assert_eq!(chrome.tint, Some(WINDOW_TINT));
        let search = chrome.search.expect("search chrome resolved");
        assert_eq!(search.tint, None);
    }

    #[test]
    fn transparency_passes_through() {
        let chrome = builtin(&NavigationBar::Normal(
            NormalBar::new("Inbox").styles(BarStyles::default().is_transparent(true)),
        ));
        assert!(chrome.translucent);
    }
}
