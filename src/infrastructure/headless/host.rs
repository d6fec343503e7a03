// SPDX-License-Identifier: MPL-2.0
//! In-memory window and host surface.

use super::scheduler::ManualScheduler;
use super::view::HeadlessBarView;
use crate::application::port::{
    lock_view, Container, HostEnvironment, HostSurface, MainThread, SharedBarView, Toast, Window,
};
use crate::config::defaults::FALLBACK_LOCALE;
use crate::ui::undo_bar::Layout;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

fn lock<T: ?Sized>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

// =============================================================================
// Container / Window
// =============================================================================

/// A view group holding bar views.
#[derive(Default)]
pub struct HeadlessContainer {
    children: Mutex<Vec<SharedBarView>>,
}

impl HeadlessContainer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Container for HeadlessContainer {
    fn find_bar(&self) -> Option<SharedBarView> {
        lock(&self.children).last().cloned()
    }

    fn add_bar(&self, view: SharedBarView) {
        lock(&self.children).push(view);
    }

    fn remove_bar(&self, view: &SharedBarView) {
        lock(&self.children)
            .retain(|child| !std::ptr::addr_eq(Arc::as_ptr(child), Arc::as_ptr(view)));
    }

    fn bars(&self) -> Vec<SharedBarView> {
        lock(&self.children).clone()
    }

    fn bar_count(&self) -> usize {
        lock(&self.children).len()
    }
}

/// A window with a content root nested in a decor root.
pub struct HeadlessWindow {
    content: Mutex<Option<Arc<HeadlessContainer>>>,
    decor: Arc<HeadlessContainer>,
}

impl HeadlessWindow {
    #[must_use]
    pub fn new() -> Self {
        Self {
            content: Mutex::new(Some(Arc::new(HeadlessContainer::new()))),
            decor: Arc::new(HeadlessContainer::new()),
        }
    }

    /// Removes the content root so bars land in the decor root.
    pub fn remove_content_root(&self) {
        *lock(&self.content) = None;
    }

    /// The container bars are attached to.
    #[must_use]
    pub fn bar_root(&self) -> Arc<dyn Container> {
        match self.content_root() {
            Some(content) => content,
            None => self.decor_root(),
        }
    }
}

impl Default for HeadlessWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl Window for HeadlessWindow {
    fn content_root(&self) -> Option<Arc<dyn Container>> {
        lock(&self.content)
            .clone()
            .map(|content| content as Arc<dyn Container>)
    }

    fn decor_root(&self) -> Arc<dyn Container> {
        Arc::clone(&self.decor) as Arc<dyn Container>
    }
}

// =============================================================================
// Host
// =============================================================================

/// An in-memory [`HostSurface`].
///
/// Runs on a [`ManualScheduler`] unless another main thread is installed,
/// records every toast, and keeps a typed handle to every view it inflates.
///
/// The `with_*` methods configure a freshly created host and are meant to be
/// chained before any controller is built.
pub struct HeadlessHost {
    scheduler: Arc<ManualScheduler>,
    main_override: Mutex<Option<Arc<dyn MainThread>>>,
    window: Option<Arc<HeadlessWindow>>,
    environment: Mutex<HostEnvironment>,
    locale: Mutex<Option<String>>,
    manual_animations: AtomicBool,
    inflated: Mutex<Vec<Arc<Mutex<HeadlessBarView>>>>,
    toasts: Mutex<Vec<Toast>>,
}

impl HeadlessHost {
    /// A host with a window, an API level of 30 and an `en-US` locale.
    #[must_use]
    pub fn new() -> Arc<Self> {
        Arc::new(Self::build(Some(Arc::new(HeadlessWindow::new()))))
    }

    /// A host without a window (an application-level context).
    #[must_use]
    pub fn windowless() -> Arc<Self> {
        Arc::new(Self::build(None))
    }

    fn build(window: Option<Arc<HeadlessWindow>>) -> Self {
        Self {
            scheduler: Arc::new(ManualScheduler::new()),
            main_override: Mutex::new(None),
            window,
            environment: Mutex::new(HostEnvironment {
                api_level: 30,
                align_bottom_possible: false,
            }),
            locale: Mutex::new(Some(FALLBACK_LOCALE.to_owned())),
            manual_animations: AtomicBool::new(false),
            inflated: Mutex::new(Vec::new()),
            toasts: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn with_api_level(self: Arc<Self>, api_level: u32) -> Arc<Self> {
        lock(&self.environment).api_level = api_level;
        self
    }

    #[must_use]
    pub fn with_align_bottom_possible(self: Arc<Self>, possible: bool) -> Arc<Self> {
        lock(&self.environment).align_bottom_possible = possible;
        self
    }

    /// Sets the locale the host reports. `None` defers to the OS.
    #[must_use]
    pub fn with_locale(self: Arc<Self>, locale: Option<&str>) -> Arc<Self> {
        *lock(&self.locale) = locale.map(str::to_owned);
        self
    }

    /// Bars attach to the decor root instead of the content root.
    #[must_use]
    pub fn without_content_root(self: Arc<Self>) -> Arc<Self> {
        if let Some(window) = &self.window {
            window.remove_content_root();
        }
        self
    }

    /// Views inflated from now on finish fade-outs only on
    /// [`finish_animations`](Self::finish_animations).
    #[must_use]
    pub fn with_manual_animations(self: Arc<Self>) -> Arc<Self> {
        self.manual_animations.store(true, Ordering::SeqCst);
        self
    }

    /// Runs controllers on `main` instead of the manual scheduler.
    #[must_use]
    pub fn with_main_thread(self: Arc<Self>, main: Arc<dyn MainThread>) -> Arc<Self> {
        *lock(&self.main_override) = Some(main);
        self
    }

    /// The manual scheduler (idle when another main thread is installed).
    #[must_use]
    pub fn scheduler(&self) -> &Arc<ManualScheduler> {
        &self.scheduler
    }

    /// Runs queued main-thread tasks.
    pub fn run_pending(&self) -> usize {
        self.scheduler.run_pending()
    }

    /// Moves the virtual clock forward.
    pub fn advance(&self, by: Duration) -> usize {
        self.scheduler.advance(by)
    }

    /// The headless window, if any.
    #[must_use]
    pub fn headless_window(&self) -> Option<&Arc<HeadlessWindow>> {
        self.window.as_ref()
    }

    /// The bar currently attached to the window.
    #[must_use]
    pub fn attached_bar(&self) -> Option<SharedBarView> {
        self.window.as_ref()?.bar_root().find_bar()
    }

    /// Number of bars attached to the window.
    #[must_use]
    pub fn bar_count(&self) -> usize {
        self.window
            .as_ref()
            .map_or(0, |window| window.bar_root().bar_count())
    }

    /// Every toast shown so far.
    #[must_use]
    pub fn toasts(&self) -> Vec<Toast> {
        lock(&self.toasts).clone()
    }

    /// Typed handles to every view inflated so far, oldest first.
    #[must_use]
    pub fn bar_views(&self) -> Vec<Arc<Mutex<HeadlessBarView>>> {
        lock(&self.inflated).clone()
    }

    /// Presses the attached bar's button. Returns false if there is no bar
    /// or no handler.
    pub fn click_button(&self) -> bool {
        let Some(view) = self.attached_bar() else {
            return false;
        };
        let handler = lock_view(&view).button_handler();
        match handler {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }

    /// Finishes every running fade-out. Returns how many finished.
    pub fn finish_animations(&self) -> usize {
        let views = self.bar_views();
        let done: Vec<_> = views
            .iter()
            .flat_map(|view| lock(&**view).take_finished_fade_outs())
            .collect();
        let count = done.len();
        for task in done {
            task();
        }
        count
    }
}

impl HostSurface for HeadlessHost {
    fn window(&self) -> Option<Arc<dyn Window>> {
        self.window
            .clone()
            .map(|window| window as Arc<dyn Window>)
    }

    fn main_thread(&self) -> Arc<dyn MainThread> {
        match &*lock(&self.main_override) {
            Some(main) => Arc::clone(main),
            None => Arc::clone(&self.scheduler) as Arc<dyn MainThread>,
        }
    }

    fn inflate(&self, layout: &Layout) -> SharedBarView {
        let mut view = HeadlessBarView::from_layout(layout);
        if self.manual_animations.load(Ordering::SeqCst) {
            view = view.with_manual_animations();
        }
        let typed = Arc::new(Mutex::new(view));
        lock(&self.inflated).push(Arc::clone(&typed));
        typed
    }

    fn show_toast(&self, toast: Toast) {
        tracing::debug!(length = ?toast.length, gravity = ?toast.gravity, "toast shown");
        lock(&self.toasts).push(toast);
    }

    fn environment(&self) -> HostEnvironment {
        *lock(&self.environment)
    }

    fn locale(&self) -> Option<String> {
        lock(&self.locale).clone()
    }
}

impl std::fmt::Debug for HeadlessHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeadlessHost")
            .field("windowless", &self.window.is_none())
            .field("environment", &*lock(&self.environment))
            .field("toasts", &lock(&self.toasts).len())
            .finish_non_exhaustive()
    }
}
