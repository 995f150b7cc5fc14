//! Headless walkthrough of the Weft navigation engine.
//!
//! Drives a small mail-style screen family through push, typed-result,
//! replace and pop-to-root transitions on the in-memory host. Run with
//! `RUST_LOG=debug` to watch the engine's transition log.

use tracing::info;
use tracing_subscriber::EnvFilter;

use weft_nav::{BarStyles, NavigationBar, NavigationItem, NormalBar, SearchBar, navigation_root};
use weft_ui::{
    BarItem, Color, HeadlessHost, Resultable, Screen, ScreenDesc, State, StatusBarStyle,
    TextStyle,
};

/// Root screen: a searchable message list.
#[derive(Default)]
struct InboxScreen {
    query: State<String>,
}

impl Screen for InboxScreen {
    type Arg = ();

    fn set_arg(&mut self, _arg: ()) {}
}

impl NavigationItem for InboxScreen {
    fn navigation_bar(&self) -> NavigationBar {
        NavigationBar::Search(
            SearchBar::new("Inbox", self.query.clone()).placeholder("Search mail"),
        )
    }
}

/// Compose screen: takes a recipient, produces the sent message id.
#[derive(Default)]
struct ComposeScreen {
    recipient: String,
    sent_message_id: Option<u64>,
}

impl Screen for ComposeScreen {
    type Arg = String;

    fn set_arg(&mut self, arg: String) {
        self.recipient = arg;
    }
}

impl Resultable for ComposeScreen {
    type ScreenResult = u64;

    fn screen_result(&self) -> Option<u64> {
        self.sent_message_id
    }
}

impl NavigationItem for ComposeScreen {
    fn navigation_bar(&self) -> NavigationBar {
        NavigationBar::Normal(
            NormalBar::new(format!("To: {}", self.recipient))
                .styles(
                    BarStyles::default()
                        .text_style(TextStyle::colored(Color::WHITE))
                        .background_color(Color::from_rgb_u8(0x1f, 0x2a, 0x44))
                        .is_shadow_enabled(false),
                )
                .back_button(BarItem::text("Cancel", || info!("compose cancelled")))
                .action(BarItem::text("Send", || info!("send pressed"))),
        )
    }

    fn status_bar(&self) -> Option<StatusBarStyle> {
        Some(StatusBarStyle::Light)
    }
}

/// Full-bleed settings screen without chrome.
#[derive(Default)]
struct SettingsScreen;

impl Screen for SettingsScreen {
    type Arg = ();

    fn set_arg(&mut self, _arg: ()) {}
}

impl NavigationItem for SettingsScreen {
    fn navigation_bar(&self) -> NavigationBar {
        NavigationBar::None
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let (nav, router) = navigation_root(ScreenDesc::<InboxScreen>::of());
    let (host, probe) = HeadlessHost::new();
    nav.attach(Box::new(host), Some(StatusBarStyle::Dark));
    info!(depth = nav.depth(), "inbox attached");

    // The host writes user keystrokes into the search binding it received
    // with the inbox chrome.
    if let Some((_key, chrome)) = probe.last_chrome() {
        if let Some(search) = chrome.search {
            search.query.set("invoices".to_string());
        }
    }
    let query = nav
        .with_top_screen_mut(|inbox: &mut InboxScreen| inbox.query.get())
        .unwrap_or_default();
    info!(query = %query, "search binding updated by the host");

    // Compose a message and collect its result when the screen is popped.
    let compose = router.push_result_route(
        ScreenDesc::<ComposeScreen>::of(),
        |recipient: String| recipient,
        |message_id: u64| message_id,
    );
    compose.navigate("ada@example.com".to_string(), |result| match result {
        Some(message_id) => info!(message_id, "message sent"),
        None => info!("compose dismissed without sending"),
    });
    info!(
        status_bar = ?nav.preferred_status_bar(StatusBarStyle::Dark),
        "compose on top"
    );

    // The host renders the resolved chrome; pressing its Send control runs
    // the screen's action.
    if let Some((_key, chrome)) = probe.last_chrome() {
        if let Some(send) = chrome.actions.first() {
            send.press();
        }
    }

    nav.with_top_screen_mut(|compose: &mut ComposeScreen| {
        compose.sent_message_id = Some(4242);
    })
    .expect("compose is on top");
    nav.on_back_pressed();

    // Visit settings, then unwind back to the inbox.
    let settings = router.push_route(ScreenDesc::new(SettingsScreen::default), |arg: ()| arg);
    settings.navigate(());
    settings.navigate(());
    info!(depth = nav.depth(), "two settings screens stacked");

    router.pop_to_root_route().navigate(());
    info!(depth = nav.depth(), "back at the inbox root");

    let chrome_applications = probe.chrome_log().len();
    info!(chrome_applications, "walkthrough complete");
}
