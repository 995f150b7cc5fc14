//! Navigation containers.
//!
//! A [`NavigationScreen`] owns the native stack-hosting surface for a
//! family of related screens: the arena of live screen instances, the
//! pending-result registry, and the stack delegate that keeps chrome and
//! result delivery in sync with native transitions.
//!
//! # Responsibilities
//!
//! - Own live screen instances, keyed by stable [`ScreenKey`]s.
//! - Mutate the host stack on behalf of router-produced routes.
//! - Sweep the pending-result registry whenever a screen becomes the active
//!   top-of-stack entry, delivering each departed screen's result exactly
//!   once, topmost first.
//! - Resolve and re-apply the incoming screen's navigation chrome.

use std::sync::{Arc, Weak};

use downcast_rs::{Downcast, impl_downcast};
use parking_lot::Mutex;
use rustc_hash::FxHashSet;
use slotmap::SlotMap;
use tracing::{debug, trace};

use weft_ui::{
    NavigationHost, Screen, ScreenDesc, ScreenKey, StatusBarStyle, TransitionObserver,
};

use crate::{bar::NavigationItem, chrome, router::Router};

/// Erased screen instance held in a container's arena.
///
/// Implemented for every `Screen + NavigationItem` type; the route
/// constructors guarantee only such types enter the arena, so the chrome
/// capability is always present.
pub trait NavScreen: Downcast + Send + Sync {
    /// Chrome capability of this screen.
    fn navigation_item(&self) -> &dyn NavigationItem;
}

impl_downcast!(NavScreen);

impl<S> NavScreen for S
where
    S: Screen + NavigationItem,
{
    fn navigation_item(&self) -> &dyn NavigationItem {
        self
    }
}

/// Callback delivering a departed screen's result to its caller.
pub(crate) type DeliverFn = Box<dyn FnOnce(Box<dyn NavScreen>) + Send>;

struct PendingResult {
    screen: ScreenKey,
    deliver: DeliverFn,
}

#[derive(Default)]
struct NavState {
    host: Option<Box<dyn NavigationHost>>,
    screens: SlotMap<ScreenKey, Box<dyn NavScreen>>,
    pending: Vec<PendingResult>,
    default_status_bar: Option<StatusBarStyle>,
}

const NO_HOST: &str =
    "navigation screen has no live native stack (not attached yet, or already torn down)";

pub(crate) struct NavCore {
    state: Mutex<NavState>,
}

impl NavCore {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(NavState::default()),
        })
    }

    pub(crate) fn push(&self, screen: Box<dyn NavScreen>) {
        let key = {
            let mut state = self.state.lock();
            let key = state.screens.insert(screen);
            state.host.as_mut().expect(NO_HOST).push(key, true);
            key
        };
        debug!(?key, "pushed screen");
        self.screen_will_show(key);
    }

    pub(crate) fn push_with_result(&self, screen: Box<dyn NavScreen>, deliver: DeliverFn) {
        let key = {
            let mut state = self.state.lock();
            let key = state.screens.insert(screen);
            state.pending.push(PendingResult {
                screen: key,
                deliver,
            });
            state.host.as_mut().expect(NO_HOST).push(key, true);
            key
        };
        debug!(?key, "pushed result-bearing screen");
        self.screen_will_show(key);
    }

    pub(crate) fn replace(&self, screen: Box<dyn NavScreen>) {
        let key = {
            let mut state = self.state.lock();
            let key = state.screens.insert(screen);
            state.host.as_mut().expect(NO_HOST).set_stack(&[key], true);
            key
        };
        debug!(?key, "replaced stack");
        self.screen_will_show(key);
    }

    pub(crate) fn pop(&self) {
        let revealed = {
            let mut state = self.state.lock();
            let host = state.host.as_mut().expect(NO_HOST);
            let stack = host.stack();
            assert!(
                stack.len() > 1,
                "pop requested with only the root screen on the stack"
            );
            host.pop(true);
            stack[stack.len() - 2]
        };
        debug!(?revealed, "popped top screen");
        self.screen_will_show(revealed);
    }

    pub(crate) fn pop_to_root(&self) {
        let root = {
            let mut state = self.state.lock();
            let host = state.host.as_mut().expect(NO_HOST);
            let stack = host.stack();
            if stack.len() <= 1 {
                return;
            }
            host.pop_to_root(true);
            stack[0]
        };
        debug!(?root, "popped to root");
        self.screen_will_show(root);
    }

    /// The shared transition path: sweep departed result-bearing screens,
    /// drop departed plain screens, then re-apply chrome for the incoming
    /// screen.
    ///
    /// Result callbacks run after the engine lock is released so a handler
    /// may navigate again without deadlocking.
    fn screen_will_show(&self, incoming: ScreenKey) {
        trace!(?incoming, "screen will show");
        let due = {
            let mut guard = self.state.lock();
            let state = &mut *guard;
            let Some(host) = state.host.as_ref() else {
                return;
            };
            let live: FxHashSet<ScreenKey> = host.stack().into_iter().collect();

            // Departed result-bearing screens, topmost first.
            let mut due = Vec::new();
            let mut index = state.pending.len();
            while index > 0 {
                index -= 1;
                if !live.contains(&state.pending[index].screen) {
                    let entry = state.pending.remove(index);
                    if let Some(screen) = state.screens.remove(entry.screen) {
                        due.push((entry.deliver, screen));
                    }
                }
            }
            // Departed screens without a pending result are simply dropped.
            state.screens.retain(|key, _| live.contains(&key));
            due
        };

        if !due.is_empty() {
            debug!(count = due.len(), "delivering results of departed screens");
        }
        for (deliver, screen) in due {
            deliver(screen);
        }

        self.update_chrome(incoming);
    }

    fn update_chrome(&self, incoming: ScreenKey) {
        let mut guard = self.state.lock();
        let state = &mut *guard;
        let Some(host) = state.host.as_mut() else {
            return;
        };
        let Some(screen) = state.screens.get(incoming) else {
            // A view this container does not know (for example pushed by a
            // custom chrome factory); chrome stays as it is.
            debug!(?incoming, "incoming view has no known screen; chrome left unchanged");
            return;
        };
        let bar = screen.navigation_item().navigation_bar();
        match chrome::resolve(&bar, host.window_tint()) {
            chrome::Resolved::Builtin(resolved) => host.apply_chrome(incoming, &resolved),
            chrome::Resolved::Custom(factory) => factory.apply(host.as_mut(), incoming),
        }
    }

    fn detach(&self) {
        let mut state = self.state.lock();
        if !state.pending.is_empty() {
            debug!(
                undelivered = state.pending.len(),
                "tearing down with undelivered result callbacks"
            );
        }
        state.pending.clear();
        state.screens.clear();
        state.host = None;
    }

    fn preferred_status_bar(&self, app_default: StatusBarStyle) -> StatusBarStyle {
        let state = self.state.lock();
        let top = state
            .host
            .as_ref()
            .and_then(|host| host.stack().last().copied());
        top.and_then(|key| state.screens.get(key))
            .and_then(|screen| screen.navigation_item().status_bar())
            .or(state.default_status_bar)
            .unwrap_or(app_default)
    }
}

/// Stack delegate handed to platform glue.
///
/// Holds only a weak reference back to its container: it never keeps the
/// container alive, and events reported after teardown are ignored.
struct StackDelegate {
    core: Weak<NavCore>,
}

impl TransitionObserver for StackDelegate {
    fn screen_will_show(&self, screen: ScreenKey) {
        match self.core.upgrade() {
            Some(core) => core.screen_will_show(screen),
            None => trace!(?screen, "transition reported after container teardown; ignored"),
        }
    }
}

type RootFactory = Box<dyn FnOnce() -> Box<dyn NavScreen> + Send>;

/// Container screen owning a native navigation stack for a family of
/// related screens.
///
/// A container moves through four phases: constructed (router bound, no
/// host), rendered (`attach` installed the host and pushed the root
/// screen), active (stack mutated via routes and observer events), and torn
/// down (`detach`; terminal). Attaching is one-shot — construct a new
/// container instead of re-attaching.
pub struct NavigationScreen {
    core: Arc<NavCore>,
    root: Mutex<Option<RootFactory>>,
}

impl NavigationScreen {
    /// Creates a container for `root`, binding `router`'s back-reference.
    ///
    /// Only container construction writes the router's back-reference; the
    /// router's routes become invocable once this container is attached.
    pub fn new<S>(root: ScreenDesc<S>, router: &Router) -> Self
    where
        S: Screen<Arg = ()> + NavigationItem,
    {
        let core = NavCore::new();
        router.bind(&core);
        let factory: RootFactory = Box::new(move || {
            let mut screen = root.instantiate();
            screen.set_arg(());
            Box::new(screen) as Box<dyn NavScreen>
        });
        Self {
            core,
            root: Mutex::new(Some(factory)),
        }
    }

    /// Installs the native host, renders the root screen as the sole stack
    /// entry and applies its chrome.
    ///
    /// `default_status_bar` is the container-level status-bar preference,
    /// consulted when the visible screen states none.
    pub fn attach(
        &self,
        host: Box<dyn NavigationHost>,
        default_status_bar: Option<StatusBarStyle>,
    ) {
        let factory = self
            .root
            .lock()
            .take()
            .expect("navigation screen already attached or torn down");
        let root_key = {
            let mut state = self.core.state.lock();
            state.default_status_bar = default_status_bar;
            let key = state.screens.insert(factory());
            let mut host = host;
            host.set_stack(&[key], false);
            state.host = Some(host);
            key
        };
        debug!(?root_key, "navigation screen attached");
        self.core.screen_will_show(root_key);
    }

    /// Tears the container down: the host is dropped, live screens are
    /// destroyed, and undelivered result callbacks are discarded without
    /// being invoked. Terminal; routes bound to this container panic from
    /// here on.
    pub fn detach(&self) {
        self.core.detach();
    }

    /// Observer handle for platform transition events.
    pub fn observer(&self) -> Arc<dyn TransitionObserver> {
        Arc::new(StackDelegate {
            core: Arc::downgrade(&self.core),
        })
    }

    /// Handles the platform back affordance.
    ///
    /// Pops the top screen and returns `true` when screens sit above the
    /// root; returns `false` (not consumed) at root depth or before attach.
    pub fn on_back_pressed(&self) -> bool {
        let revealed = {
            let mut state = self.core.state.lock();
            let Some(host) = state.host.as_mut() else {
                return false;
            };
            let stack = host.stack();
            if stack.len() <= 1 {
                return false;
            }
            host.pop(true);
            stack[stack.len() - 2]
        };
        debug!(?revealed, "system back consumed");
        self.core.screen_will_show(revealed);
        true
    }

    /// Number of screens on the native stack.
    pub fn depth(&self) -> usize {
        let state = self.core.state.lock();
        state.host.as_ref().map_or(0, |host| host.stack().len())
    }

    /// Key of the visible top screen.
    pub fn top(&self) -> Option<ScreenKey> {
        let state = self.core.state.lock();
        state
            .host
            .as_ref()
            .and_then(|host| host.stack().last().copied())
    }

    /// Resolved status-bar appearance: the top screen's preference, then
    /// the container default supplied at attach, then `app_default`.
    pub fn preferred_status_bar(&self, app_default: StatusBarStyle) -> StatusBarStyle {
        self.core.preferred_status_bar(app_default)
    }

    /// Runs `f` with a shared borrow of the live screen `key`, downcast to
    /// `S`. Returns `None` when the key is unknown or the screen is of a
    /// different type.
    ///
    /// `f` runs under the engine lock; do not navigate from inside it.
    pub fn with_screen<S, R>(&self, key: ScreenKey, f: impl FnOnce(&S) -> R) -> Option<R>
    where
        S: Screen + NavigationItem,
    {
        let state = self.core.state.lock();
        state
            .screens
            .get(key)
            .and_then(|screen| screen.downcast_ref::<S>())
            .map(f)
    }

    /// Runs `f` with a mutable borrow of the live screen `key`, downcast to
    /// `S`. This is how owners feed state into a destination, for example
    /// setting its result before it is popped.
    ///
    /// `f` runs under the engine lock; do not navigate from inside it.
    pub fn with_screen_mut<S, R>(&self, key: ScreenKey, f: impl FnOnce(&mut S) -> R) -> Option<R>
    where
        S: Screen + NavigationItem,
    {
        let mut state = self.core.state.lock();
        state
            .screens
            .get_mut(key)
            .and_then(|screen| screen.downcast_mut::<S>())
            .map(f)
    }

    /// [`with_screen_mut`](Self::with_screen_mut) for the visible top
    /// screen.
    pub fn with_top_screen_mut<S, R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R>
    where
        S: Screen + NavigationItem,
    {
        let top = self.top()?;
        self.with_screen_mut(top, f)
    }
}

/// Builds a fully configured navigation container for `root` together with
/// its bound router.
///
/// This is the application-shell entry point: attach a host to the returned
/// container and hand the router to whatever defines the navigable actions.
pub fn navigation_root<S>(root: ScreenDesc<S>) -> (NavigationScreen, Router)
where
    S: Screen<Arg = ()> + NavigationItem,
{
    let router = Router::new();
    let screen = NavigationScreen::new(root, &router);
    (screen, router)
}

#[cfg(test)]
mod tests {
    use std::{
        panic::{AssertUnwindSafe, catch_unwind},
        sync::{
            Arc,
            atomic::{AtomicUsize, Ordering},
        },
    };

    use parking_lot::Mutex;
    use slotmap::SlotMap;

    use weft_ui::{
        ChromeState, HeadlessHost, HostProbe, NavigationHost, Resultable, Screen, ScreenDesc,
        ScreenKey, StatusBarStyle,
    };

    use super::{NavigationScreen, navigation_root};
    use crate::{
        bar::{BarFactory, NavigationBar, NavigationItem, NormalBar},
        router::Router,
    };

    #[derive(Default)]
    struct Home;

    impl Screen for Home {
        type Arg = ();

        fn set_arg(&mut self, _arg: ()) {}
    }

    impl NavigationItem for Home {
        fn navigation_bar(&self) -> NavigationBar {
            NavigationBar::Normal(NormalBar::new("Home"))
        }
    }

    #[derive(Default)]
    struct Detail {
        label: String,
    }

    impl Screen for Detail {
        type Arg = String;

        fn set_arg(&mut self, arg: String) {
            self.label = arg;
        }
    }

    impl NavigationItem for Detail {
        fn navigation_bar(&self) -> NavigationBar {
            NavigationBar::Normal(NormalBar::new(self.label.clone()))
        }
    }

    #[derive(Default)]
    struct Picker {
        choice: Option<u32>,
    }

    impl Screen for Picker {
        type Arg = ();

        fn set_arg(&mut self, _arg: ()) {}
    }

    impl Resultable for Picker {
        type ScreenResult = u32;

        fn screen_result(&self) -> Option<u32> {
            self.choice
        }
    }

    impl NavigationItem for Picker {
        fn navigation_bar(&self) -> NavigationBar {
            NavigationBar::Normal(NormalBar::new("Picker"))
        }
    }

    #[derive(Default)]
    struct Chromeless;

    impl Screen for Chromeless {
        type Arg = ();

        fn set_arg(&mut self, _arg: ()) {}
    }

    impl NavigationItem for Chromeless {
        fn navigation_bar(&self) -> NavigationBar {
            NavigationBar::None
        }
    }

    #[derive(Default)]
    struct LightScreen;

    impl Screen for LightScreen {
        type Arg = ();

        fn set_arg(&mut self, _arg: ()) {}
    }

    impl NavigationItem for LightScreen {
        fn navigation_bar(&self) -> NavigationBar {
            NavigationBar::None
        }

        fn status_bar(&self) -> Option<StatusBarStyle> {
            Some(StatusBarStyle::Light)
        }
    }

    fn rooted() -> (NavigationScreen, Router, HostProbe) {
        let (nav, router) = navigation_root(ScreenDesc::<Home>::of());
        let (host, probe) = HeadlessHost::new();
        nav.attach(Box::new(host), None);
        (nav, router, probe)
    }

    fn detail_route(router: &Router) -> crate::route::Route<String> {
        router.push_route(ScreenDesc::<Detail>::of(), |label: String| label)
    }

    #[test]
    fn push_routes_grow_the_stack() {
        let (nav, router, probe) = rooted();
        let push = detail_route(&router);

        push.navigate("one".into());
        push.navigate("two".into());
        push.navigate("three".into());

        assert_eq!(nav.depth(), 4);
        assert_eq!(probe.depth(), 4);

        let top = nav.top().expect("stack has a top");
        let label = nav
            .with_screen(top, |screen: &Detail| screen.label.clone())
            .expect("top is the last pushed detail screen");
        assert_eq!(label, "three");
    }

    #[test]
    fn result_is_delivered_exactly_once_after_pop() {
        let (nav, router, _probe) = rooted();
        let route =
            router.push_result_route(ScreenDesc::<Picker>::of(), |arg: ()| arg, |n: u32| n * 2);

        let calls = Arc::new(AtomicUsize::new(0));
        let delivered = Arc::new(Mutex::new(None));
        {
            let calls = Arc::clone(&calls);
            let delivered = Arc::clone(&delivered);
            route.navigate((), move |result| {
                calls.fetch_add(1, Ordering::SeqCst);
                *delivered.lock() = result;
            });
        }

        nav.with_top_screen_mut(|picker: &mut Picker| picker.choice = Some(21))
            .expect("picker is on top");
        assert!(nav.on_back_pressed());

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(*delivered.lock(), Some(42));
        assert_eq!(nav.depth(), 1);

        // Later transitions must not re-deliver.
        detail_route(&router).navigate("again".into());
        assert!(nav.on_back_pressed());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn missing_result_is_delivered_as_none() {
        let (nav, router, _probe) = rooted();
        let route =
            router.push_result_route(ScreenDesc::<Picker>::of(), |arg: ()| arg, |n: u32| n);

        let received = Arc::new(Mutex::new(Vec::new()));
        {
            let received = Arc::clone(&received);
            route.navigate((), move |result| received.lock().push(result));
        }

        assert!(nav.on_back_pressed());
        assert_eq!(*received.lock(), vec![None]);
    }

    #[test]
    fn replace_fires_pending_result_of_discarded_screen() {
        let (nav, router, _probe) = rooted();
        let route =
            router.push_result_route(ScreenDesc::<Picker>::of(), |arg: ()| arg, |n: u32| n);
        let replace = router.replace_route(ScreenDesc::<Home>::of(), |arg: ()| arg);

        let received = Arc::new(Mutex::new(Vec::new()));
        {
            let received = Arc::clone(&received);
            route.navigate((), move |result| received.lock().push(result));
        }
        nav.with_top_screen_mut(|picker: &mut Picker| picker.choice = Some(7))
            .expect("picker is on top");

        replace.navigate(());
        assert_eq!(*received.lock(), vec![Some(7)]);
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn pop_to_root_sweeps_results_top_to_bottom() {
        let (nav, router, _probe) = rooted();
        let route =
            router.push_result_route(ScreenDesc::<Picker>::of(), |arg: ()| arg, |n: u32| n);

        let order = Arc::new(Mutex::new(Vec::new()));
        for tag in 1..=3u32 {
            let order = Arc::clone(&order);
            route.navigate((), move |result| {
                order.lock().push(result.expect("picker set a choice"));
            });
            nav.with_top_screen_mut(|picker: &mut Picker| picker.choice = Some(tag))
                .expect("picker is on top");
        }
        assert_eq!(nav.depth(), 4);

        router.pop_to_root_route().navigate(());

        assert_eq!(nav.depth(), 1);
        assert_eq!(*order.lock(), vec![3, 2, 1]);
    }

    #[test]
    fn replace_discards_the_back_stack() {
        let (nav, router, _probe) = rooted();
        let push = detail_route(&router);
        push.navigate("a".into());
        push.navigate("b".into());
        assert_eq!(nav.depth(), 3);

        router
            .replace_route(ScreenDesc::<Detail>::of(), |label: String| label)
            .navigate("fresh".into());
        assert_eq!(nav.depth(), 1);

        // Pop-to-root after a replace is a no-op: the stack is already at
        // depth 1.
        router.pop_to_root_route().navigate(());
        assert_eq!(nav.depth(), 1);

        let top = nav.top().expect("stack has a top");
        let label = nav
            .with_screen(top, |screen: &Detail| screen.label.clone())
            .expect("replacement screen is on top");
        assert_eq!(label, "fresh");
    }

    #[test]
    fn pop_at_root_depth_panics() {
        let (_nav, router, _probe) = rooted();
        let pop = router.pop_route();
        let outcome = catch_unwind(AssertUnwindSafe(|| pop.navigate(())));
        assert!(outcome.is_err());
    }

    #[test]
    fn route_after_container_drop_panics() {
        let router = Router::new();
        let nav = NavigationScreen::new(ScreenDesc::<Home>::of(), &router);
        let push = detail_route(&router);
        drop(nav);

        let outcome = catch_unwind(AssertUnwindSafe(|| push.navigate("late".into())));
        assert!(outcome.is_err());
    }

    #[test]
    fn route_after_detach_panics() {
        let (nav, router, _probe) = rooted();
        let push = detail_route(&router);
        nav.detach();

        let outcome = catch_unwind(AssertUnwindSafe(|| push.navigate("late".into())));
        assert!(outcome.is_err());
    }

    #[test]
    fn back_press_at_root_is_not_consumed() {
        let (nav, _router, probe) = rooted();
        assert!(!nav.on_back_pressed());
        assert_eq!(nav.depth(), 1);
        assert_eq!(probe.depth(), 1);
    }

    #[test]
    fn chrome_never_leaks_between_screens() {
        let (nav, router, probe) = rooted();
        let (root_key, root_chrome) = probe.last_chrome().expect("root chrome applied");
        assert_eq!(root_chrome.title.as_deref(), Some("Home"));
        assert!(!root_chrome.hidden);

        router
            .push_route(ScreenDesc::<Chromeless>::of(), |arg: ()| arg)
            .navigate(());
        let (_key, chrome) = probe.last_chrome().expect("chromeless chrome applied");
        assert!(chrome.hidden);
        assert_eq!(chrome.title, None);
        assert!(chrome.actions.is_empty());

        assert!(nav.on_back_pressed());
        let (key, chrome) = probe.last_chrome().expect("root chrome re-applied");
        assert_eq!(key, root_key);
        assert_eq!(chrome.title.as_deref(), Some("Home"));
        assert!(!chrome.hidden);
    }

    #[test]
    fn foreign_views_skip_the_chrome_update() {
        let (nav, _router, probe) = rooted();
        let before = probe.chrome_log().len();

        let mut foreign_arena: SlotMap<ScreenKey, ()> = SlotMap::with_key();
        let foreign = foreign_arena.insert(());
        probe.native_push(foreign);
        nav.observer().screen_will_show(foreign);

        assert_eq!(probe.chrome_log().len(), before);
        assert_eq!(nav.depth(), 2);
    }

    #[test]
    fn native_back_gesture_delivers_results_through_the_observer() {
        let (nav, router, probe) = rooted();
        let route =
            router.push_result_route(ScreenDesc::<Picker>::of(), |arg: ()| arg, |n: u32| n);

        let received = Arc::new(Mutex::new(Vec::new()));
        {
            let received = Arc::clone(&received);
            route.navigate((), move |result| received.lock().push(result));
        }
        nav.with_top_screen_mut(|picker: &mut Picker| picker.choice = Some(9))
            .expect("picker is on top");

        // An edge-swipe pops natively; the glue then reports the revealed
        // screen to the observer.
        let revealed = probe.native_pop().expect("root remains");
        nav.observer().screen_will_show(revealed);

        assert_eq!(*received.lock(), vec![Some(9)]);
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn observer_outliving_its_container_is_inert() {
        let (nav, _router, probe) = rooted();
        let observer = nav.observer();
        let top = nav.top().expect("stack has a top");
        drop(nav);

        // No panic, no effect.
        observer.screen_will_show(top);
        assert_eq!(probe.depth(), 1);
    }

    #[test]
    fn teardown_discards_pending_results() {
        let (nav, router, _probe) = rooted();
        let route =
            router.push_result_route(ScreenDesc::<Picker>::of(), |arg: ()| arg, |n: u32| n);

        let calls = Arc::new(AtomicUsize::new(0));
        {
            let calls = Arc::clone(&calls);
            route.navigate((), move |_| {
                calls.fetch_add(1, Ordering::SeqCst);
            });
        }

        nav.detach();
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn status_bar_resolution_prefers_screen_then_container_then_app() {
        let (nav, router) = navigation_root(ScreenDesc::<Home>::of());
        let (host, _probe) = HeadlessHost::new();
        nav.attach(Box::new(host), Some(StatusBarStyle::Dark));

        // Home states no preference: the container default wins.
        assert_eq!(
            nav.preferred_status_bar(StatusBarStyle::Light),
            StatusBarStyle::Dark
        );

        router
            .push_route(ScreenDesc::<LightScreen>::of(), |arg: ()| arg)
            .navigate(());
        assert_eq!(
            nav.preferred_status_bar(StatusBarStyle::Dark),
            StatusBarStyle::Light
        );

        // Without a container default, the application default wins.
        let (nav, _router) = navigation_root(ScreenDesc::<Home>::of());
        let (host, _probe) = HeadlessHost::new();
        nav.attach(Box::new(host), None);
        assert_eq!(
            nav.preferred_status_bar(StatusBarStyle::Light),
            StatusBarStyle::Light
        );
    }

    #[test]
    fn custom_factory_bypasses_builtin_styling() {
        #[derive(Default)]
        struct Branded;

        impl Screen for Branded {
            type Arg = ();

            fn set_arg(&mut self, _arg: ()) {}
        }

        impl NavigationItem for Branded {
            fn navigation_bar(&self) -> NavigationBar {
                NavigationBar::Custom(BarFactory::new(|host, screen| {
                    let chrome = ChromeState {
                        title: Some("branded".to_string()),
                        ..ChromeState::default()
                    };
                    host.apply_chrome(screen, &chrome);
                }))
            }
        }

        let (nav, router, probe) = rooted();
        router
            .push_route(ScreenDesc::<Branded>::of(), |arg: ()| arg)
            .navigate(());

        let top = nav.top().expect("stack has a top");
        let (key, chrome) = probe.last_chrome().expect("factory rendered chrome");
        assert_eq!(key, top);
        assert_eq!(chrome.title.as_deref(), Some("branded"));
        // The factory output carries none of the built-in resolution (no
        // tint fallback was applied).
        assert_eq!(chrome.tint, None);
    }

    #[test]
    fn result_handler_may_navigate_again() {
        let (nav, router, _probe) = rooted();
        let push = detail_route(&router);
        let route =
            router.push_result_route(ScreenDesc::<Picker>::of(), |arg: ()| arg, |n: u32| n);

        route.navigate((), move |_result| {
            push.navigate("from-handler".into());
        });
        assert!(nav.on_back_pressed());

        // The handler pushed a new detail screen on top of the root.
        assert_eq!(nav.depth(), 2);
        let top = nav.top().expect("stack has a top");
        let label = nav
            .with_screen(top, |screen: &Detail| screen.label.clone())
            .expect("handler-pushed screen is on top");
        assert_eq!(label, "from-handler");
    }
}
