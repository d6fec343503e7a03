// SPDX-License-Identifier: MPL-2.0
//! The undo bar controller.
//!
//! An [`UndoBar`] binds a set of [`Options`] to one host window, shows the
//! bar (or a toast when there is no window or no button), arms the
//! auto-hide timer, and routes the outcome to at most one [`Listener`].
//!
//! # Threading
//!
//! All public methods may be called from any thread. `show` posts its work
//! to the host's main thread; timer callbacks and animation completions run
//! there too. Listener callbacks are invoked with no internal lock held, so
//! a listener may call back into the controller.
//!
//! # Lifetime
//!
//! The bound view keeps its controller alive (through the button handler)
//! until another controller binds the same view, so a fire-and-forget
//! `Builder::show` still reports its outcome.

use super::style::Layout;
use super::timer::AutoHideTimer;
use super::{Listener, Options, Style, UndoToken};
use crate::application::port::{
    lock_view, BarView, ButtonHandler, Container, Gravity, HostEnvironment, HostSurface,
    MainThread, SharedBarView, Toast, ToastLength, Visibility, Window,
};
use crate::config::defaults::ENGLISH_UNDO_LABEL;
use crate::config::Config;
use crate::diagnostics::{DiagnosticsHandle, UndoBarEvent};
use crate::domain::ui::{
    AnimationDuration, Color, DisplayDuration, Drawable, Margins, TextSize, Typeface,
};
use crate::i18n::fluent;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Controller of one undo bar.
///
/// Cloning yields another handle to the same controller.
#[derive(Clone)]
pub struct UndoBar {
    shared: Arc<Shared>,
}

struct Shared {
    host: Arc<dyn HostSurface>,
    main: Arc<dyn MainThread>,
    /// `None` when the host had no window: the controller is toast-only.
    view: Option<SharedBarView>,
    state: Mutex<State>,
}

struct State {
    options: Options,
    listener: Option<Box<dyn Listener>>,
    timer: AutoHideTimer,
    /// Bumped on every show and hide so late animation completions of an
    /// earlier presentation are recognized and ignored. Presentations by
    /// other controllers sharing the view are tracked by the view's own
    /// presentation stamp.
    generation: u64,
    localized_label: String,
    diagnostics: Option<DiagnosticsHandle>,
}

impl State {
    fn record(&self, event: UndoBarEvent) {
        if let Some(handle) = &self.diagnostics {
            handle.record(event);
        }
    }

    fn button_label(&self) -> &str {
        match &self.options.button_label {
            Some(label) => label,
            None if self.options.use_english_locale => ENGLISH_UNDO_LABEL,
            None => &self.localized_label,
        }
    }
}

impl UndoBar {
    /// Creates a controller with the platform's default style.
    pub fn new(host: Arc<dyn HostSurface>) -> Self {
        Self::with_style(host, Style::Default)
    }

    /// Creates a controller with the given style.
    ///
    /// With a window, the window's bar is reused or (re)inflated and left
    /// hidden. Without one, the controller is toast-only and the button
    /// is forced off.
    pub fn with_style(host: Arc<dyn HostSurface>, style: Style) -> Self {
        Self::with_config(host, style, &Config::default(), None)
    }

    pub(crate) fn with_config(
        host: Arc<dyn HostSurface>,
        style: Style,
        config: &Config,
        diagnostics: Option<DiagnosticsHandle>,
    ) -> Self {
        let main = host.main_thread();
        let environment = host.environment();
        let localized_label = fluent::undo_label_for(host.locale(), config);

        let attachment = host.window().map(|window| {
            attach_view(&*host, &*window, style, environment, diagnostics.as_ref())
        });
        let view = attachment.as_ref().map(|(_, view)| Arc::clone(view));

        let options = Options {
            style,
            button_visible: view.is_some(),
            ..Options::default()
        };

        let bar = Self {
            shared: Arc::new(Shared {
                host,
                main,
                view,
                state: Mutex::new(State {
                    options,
                    listener: None,
                    timer: AutoHideTimer::new(),
                    generation: 0,
                    localized_label,
                    diagnostics,
                }),
            }),
        };

        if let Some((root, view)) = attachment {
            let shared = Arc::clone(&bar.shared);
            let handler: ButtonHandler = Arc::new(move || shared.on_button_pressed());
            rewire(&view, Some(Arc::clone(&handler)));
            bar.shared
                .main
                .post(Box::new(move || adopt_view(&*root, &view, handler)));
            bar.hide_animated(false);
        } else {
            tracing::debug!(%style, "no window, undo bar is toast-only");
        }

        bar
    }

    // =========================================================================
    // Options
    // =========================================================================

    /// Sets the message shown on the left.
    pub fn set_message(&self, message: impl Into<String>) {
        self.shared.lock_state().options.message = Some(message.into());
    }

    /// Shows or hides the undo button. Ignored for toast-only controllers.
    pub fn set_button_visible(&self, visible: bool) {
        if self.shared.view.is_some() {
            self.shared.lock_state().options.button_visible = visible;
        }
    }

    /// Sets a custom typeface.
    pub fn set_typeface(&self, typeface: Typeface) {
        self.shared.lock_state().options.typeface = Some(typeface);
    }

    /// Sets a custom button label.
    pub fn set_button_label(&self, label: impl Into<String>) {
        self.shared.lock_state().options.button_label = Some(label.into());
    }

    /// Sets a custom button glyph (ignored by the flat style).
    pub fn set_button_drawable(&self, drawable: Drawable) {
        self.shared.lock_state().options.button_drawable = Some(drawable);
    }

    /// Attaches the listener, replacing any previous one.
    pub fn set_listener(&self, listener: impl Listener + 'static) {
        self.shared.lock_state().listener = Some(Box::new(listener));
    }

    /// Attaches an already boxed listener, or detaches with `None`.
    pub fn set_boxed_listener(&self, listener: Option<Box<dyn Listener>>) {
        self.shared.lock_state().listener = listener;
    }

    /// Sets the token handed back on undo.
    pub fn set_undo_token(&self, token: UndoToken) {
        self.shared.lock_state().options.undo_token = Some(token);
    }

    /// Sets the total visible time in milliseconds.
    pub fn set_duration_ms(&self, millis: u32) {
        self.shared.lock_state().options.duration = DisplayDuration::from_millis(millis);
    }

    /// Sets the transition time in milliseconds.
    pub fn set_animation_duration_ms(&self, millis: u32) {
        self.shared.lock_state().options.animation_duration =
            AnimationDuration::from_millis(millis);
    }

    /// Uses the English "UNDO" label instead of the localized one.
    pub fn set_use_english_locale(&self, english: bool) {
        self.shared.lock_state().options.use_english_locale = english;
    }

    /// Sets the button text color (flat style only).
    pub fn set_undo_color(&self, color: Color) {
        self.shared.lock_state().options.undo_color = color;
    }

    /// Tints the background with a source-in filter.
    pub fn set_background_tint(&self, color: Color) {
        self.shared.lock_state().options.background_tint = Some(color);
    }

    /// Drops all margins (flat style on narrow devices only).
    pub fn set_align_parent_bottom(&self, align: bool) {
        self.shared.lock_state().options.align_parent_bottom = align;
    }

    /// Sets the bottom margin in pixels (non-flat styles only).
    pub fn set_bottom_margin(&self, px: u32) {
        self.shared.lock_state().options.bottom_margin = px;
    }

    /// Sets the text size.
    pub fn set_text_size(&self, size: TextSize) {
        self.shared.lock_state().options.text_size = size;
    }

    /// Records lifecycle events into `handle`.
    pub fn set_diagnostics(&self, handle: DiagnosticsHandle) {
        self.shared.lock_state().diagnostics = Some(handle);
    }

    /// Replaces every option at once. The style is fixed at construction
    /// and kept; the button stays off for toast-only controllers.
    pub fn set_options(&self, options: Options) {
        let mut state = self.shared.lock_state();
        let style = state.options.style;
        let toast_only = self.shared.view.is_none();
        state.options = Options {
            style,
            button_visible: options.button_visible && !toast_only,
            ..options
        };
    }

    /// Snapshot of the current options.
    #[must_use]
    pub fn options(&self) -> Options {
        self.shared.lock_state().options.clone()
    }

    /// The style requested at construction.
    #[must_use]
    pub fn style(&self) -> Style {
        self.shared.lock_state().options.style
    }

    /// The message of the current presentation.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        self.shared.lock_state().options.message.clone()
    }

    /// The token of the current presentation.
    #[must_use]
    pub fn undo_token(&self) -> Option<UndoToken> {
        self.shared.lock_state().options.undo_token.clone()
    }

    /// Returns true if a listener is attached.
    #[must_use]
    pub fn has_listener(&self) -> bool {
        self.shared.lock_state().listener.is_some()
    }

    /// Returns true while an auto-hide callback is outstanding.
    #[must_use]
    pub fn is_auto_hide_pending(&self) -> bool {
        self.shared.lock_state().timer.is_pending()
    }

    /// Returns true if the host had no window.
    #[must_use]
    pub fn is_toast_only(&self) -> bool {
        self.shared.view.is_none()
    }

    /// The bound bar view, if any.
    #[must_use]
    pub fn view(&self) -> Option<SharedBarView> {
        self.shared.view.clone()
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Shows the bar with the fade-in transition.
    pub fn show(&self) {
        self.show_animated(true);
    }

    /// Shows the bar on the host's main thread.
    ///
    /// A repeated show restarts the auto-hide timer instead of stacking.
    pub fn show_animated(&self, animate: bool) {
        let shared = Arc::clone(&self.shared);
        self.shared
            .main
            .post(Box::new(move || shared.present(animate)));
    }

    /// Hides the bar with the fade-out transition.
    pub fn hide(&self) {
        self.hide_animated(true);
    }

    /// Hides the bar and cancels the auto-hide timer.
    ///
    /// Does not notify the listener. Unanimated, the message and token are
    /// cleared right away; animated, once the fade-out completes.
    pub fn hide_animated(&self, animate: bool) {
        let mut state = self.shared.lock_state();
        self.shared.hide_locked(&mut state, animate);
    }

    /// Returns true if the bound view is visible.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.shared
            .view
            .as_ref()
            .is_some_and(|view| lock_view(view).visibility() == Visibility::Visible)
    }
}

impl fmt::Debug for UndoBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.shared.lock_state();
        f.debug_struct("UndoBar")
            .field("options", &state.options)
            .field("has_listener", &state.listener.is_some())
            .field("auto_hide_pending", &state.timer.is_pending())
            .field("toast_only", &self.shared.view.is_none())
            .finish()
    }
}

impl Shared {
    fn lock_state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|poisoned| {
            tracing::warn!("undo bar state lock poisoned, recovering");
            PoisonError::into_inner(poisoned)
        })
    }

    /// Body of `show`, running on the main thread.
    fn present(self: &Arc<Self>, animate: bool) {
        let toast = {
            let mut state = self.lock_state();
            let environment = self.host.environment();
            match (&self.view, state.options.button_visible) {
                (Some(view), true) => {
                    self.present_bar(&mut state, view, environment, animate);
                    None
                }
                _ => Some(self.present_toast(&mut state, environment)),
            }
        };
        if let Some(toast) = toast {
            self.host.show_toast(toast);
        }
    }

    fn present_bar(
        self: &Arc<Self>,
        state: &mut State,
        view: &SharedBarView,
        environment: HostEnvironment,
        animate: bool,
    ) {
        let options = &state.options;
        let resolved = options.style.resolve(environment.api_level);
        let layout = Layout::for_style(options.style, environment.api_level);
        {
            let mut v = lock_view(view);

            if let Some(tint) = options.background_tint {
                v.set_background_tint(tint);
            }
            if let Some(typeface) = &options.typeface {
                v.set_typeface(typeface);
            }
            v.set_text_size(layout.text_sizes.resolve(options.text_size));
            v.set_message(options.message.as_deref().unwrap_or_default());
            v.set_button_label(state.button_label());

            if options.style.is_lollipop(environment.api_level) {
                v.set_button_text_color(options.undo_color);
                if options.align_parent_bottom && environment.align_bottom_possible {
                    v.set_margins(Margins::ZERO);
                }
            } else {
                if let Some(drawable) = &options.button_drawable {
                    v.set_button_drawable(Some(drawable.clone()));
                }
                set_bottom_margin(&mut *v, options.bottom_margin);
            }
        }

        self.schedule_auto_hide(state);
        state.generation = state.generation.wrapping_add(1);

        let mut v = lock_view(view);
        let stamp = v.presentation_stamp().wrapping_add(1);
        v.set_presentation_stamp(stamp);
        v.set_visibility(Visibility::Visible);
        if animate {
            v.animate_in(state.options.animation_duration);
        } else {
            v.set_alpha(1.0);
        }
        drop(v);

        tracing::debug!(
            style = %resolved,
            animate,
            duration_ms = state.options.duration.millis(),
            "undo bar shown"
        );
        state.record(UndoBarEvent::Shown {
            style: resolved,
            animated: animate,
            toast: false,
            duration_ms: state.options.duration.millis(),
        });
    }

    /// Builds the ephemeral toast and arms the controller's own timer so the
    /// listener still hears about the timeout.
    fn present_toast(self: &Arc<Self>, state: &mut State, environment: HostEnvironment) -> Toast {
        let options = &state.options;
        let resolved = options.style.resolve(environment.api_level);
        let layout = Layout::for_style(options.style, environment.api_level);
        let view = self.host.inflate(&layout);
        {
            let mut v = lock_view(&view);
            v.set_button_visible(false);
            v.set_message_wrap_content(true);
            set_bottom_margin(&mut *v, options.bottom_margin);
            v.set_message(options.message.as_deref().unwrap_or_default());
            if let Some(tint) = options.background_tint {
                v.set_background_tint(tint);
            }
            if let Some(typeface) = &options.typeface {
                v.set_typeface(typeface);
            }
            v.set_text_size(layout.text_sizes.resolve(options.text_size));
        }

        let length = if options.duration.is_long() {
            ToastLength::Long
        } else {
            ToastLength::Short
        };
        let gravity = options
            .style
            .is_lollipop(environment.api_level)
            .then_some(Gravity::Bottom);

        self.schedule_auto_hide(state);
        state.generation = state.generation.wrapping_add(1);

        tracing::debug!(style = %resolved, ?length, "undo bar shown as toast");
        state.record(UndoBarEvent::Shown {
            style: resolved,
            animated: false,
            toast: true,
            duration_ms: state.options.duration.millis(),
        });

        Toast {
            view,
            length,
            gravity,
        }
    }

    fn schedule_auto_hide(self: &Arc<Self>, state: &mut State) {
        let shared = Arc::clone(self);
        state.timer.schedule(
            &*self.main,
            state.options.duration.as_duration(),
            move |ticket| shared.on_timeout(ticket),
        );
    }

    fn hide_locked(self: &Arc<Self>, state: &mut State, animate: bool) {
        state.timer.cancel(&*self.main);
        state.generation = state.generation.wrapping_add(1);
        let generation = state.generation;

        match &self.view {
            Some(view) if animate => {
                let shared = Arc::clone(self);
                let main = Arc::clone(&self.main);
                let duration = state.options.animation_duration;
                let mut v = lock_view(view);
                let stamp = v.presentation_stamp();
                // Completion is re-posted so a view finishing synchronously
                // never re-enters the locks held here.
                v.animate_out(
                    duration,
                    Box::new(move || {
                        main.post(Box::new(move || {
                            shared.finish_hide(generation, stamp);
                        }));
                    }),
                );
            }
            Some(view) => {
                let mut v = lock_view(view);
                v.set_alpha(0.0);
                v.set_visibility(Visibility::Gone);
                v.set_message("");
                drop(v);
                clear_presentation(state);
            }
            None => clear_presentation(state),
        }

        tracing::debug!(animate, "undo bar hidden");
        state.record(UndoBarEvent::Hidden { animated: animate });
    }

    /// Fade-out completion.
    ///
    /// The view is left alone when any controller bound to it has shown it
    /// since the fade-out started.
    fn finish_hide(&self, generation: u64, stamp: u64) {
        let mut state = self.lock_state();
        if state.generation != generation {
            tracing::trace!(generation, "ignoring stale fade-out completion");
            return;
        }
        if let Some(view) = &self.view {
            let mut v = lock_view(view);
            if v.presentation_stamp() == stamp {
                v.set_visibility(Visibility::Gone);
                v.set_message("");
            } else {
                tracing::trace!(stamp, "bar shown again since fade-out, leaving it");
            }
        }
        clear_presentation(&mut state);
    }

    /// Auto-hide expiry: hide, then notify and drop the listener.
    fn on_timeout(self: &Arc<Self>, ticket: u64) {
        let listener = {
            let mut state = self.lock_state();
            if !state.timer.claim(ticket) {
                tracing::trace!(ticket, "ignoring stale auto-hide");
                return;
            }
            state.record(UndoBarEvent::TimedOut);
            self.hide_locked(&mut state, true);
            state.listener.take()
        };
        if let Some(mut listener) = listener {
            listener.on_hide();
        }
    }

    /// Undo button press: hide, then notify. The listener stays attached.
    fn on_button_pressed(self: &Arc<Self>) {
        let (listener, token) = {
            let mut state = self.lock_state();
            let token = state.options.undo_token.clone();
            state.record(UndoBarEvent::UndoPressed {
                has_token: token.is_some(),
            });
            self.hide_locked(&mut state, true);
            (state.listener.take(), token)
        };
        if let Some(mut listener) = listener {
            listener.on_undo(token);
            let mut state = self.lock_state();
            if state.listener.is_none() {
                state.listener = Some(listener);
            }
        }
    }
}

fn clear_presentation(state: &mut State) {
    state.options.message = None;
    state.options.undo_token = None;
}

fn set_bottom_margin(view: &mut dyn BarView, bottom: u32) {
    match view.margins() {
        Some(margins) => view.set_margins(margins.with_bottom(bottom)),
        None => tracing::warn!("bar view has no margin layout, bottom margin skipped"),
    }
}

/// Binds the window's bar view for `style`, reusing one with the same tag.
///
/// Returns the container the view belongs in. The view tree itself is only
/// changed by [`adopt_view`] on the main thread, because controllers may be
/// built on any thread.
fn attach_view(
    host: &dyn HostSurface,
    window: &dyn Window,
    style: Style,
    environment: HostEnvironment,
    diagnostics: Option<&DiagnosticsHandle>,
) -> (Arc<dyn Container>, SharedBarView) {
    let root = window
        .content_root()
        .unwrap_or_else(|| window.decor_root());
    let existing = root.find_bar();

    if let Some(existing) = &existing {
        if lock_view(existing).style_tag() == Some(style) {
            tracing::debug!(%style, "reusing undo bar view");
            if let Some(handle) = diagnostics {
                handle.record(UndoBarEvent::ViewAttached {
                    style,
                    reused: true,
                });
            }
            let view = Arc::clone(existing);
            return (root, view);
        }
    }

    let layout = Layout::for_style(style, environment.api_level);
    let view = host.inflate(&layout);
    lock_view(&view).set_style_tag(style);

    if let Some(old) = existing {
        let previous = lock_view(&old).style_tag();
        tracing::debug!(?previous, %style, "replacing undo bar view");
        if let Some(handle) = diagnostics {
            handle.record(UndoBarEvent::ViewReplaced { previous, style });
        }
    }

    tracing::debug!(%style, layout = layout.name, "inflated undo bar view");
    if let Some(handle) = diagnostics {
        handle.record(UndoBarEvent::ViewAttached {
            style,
            reused: false,
        });
    }
    (root, view)
}

/// Makes `view` the only bar in `root` and wires `handler` to its button.
///
/// Every other bar is detached and unwired. Controllers built before the
/// main thread ran each post one of these, and the last one wins.
fn adopt_view(root: &dyn Container, view: &SharedBarView, handler: ButtonHandler) {
    let mut attached = false;
    for other in root.bars() {
        if std::ptr::addr_eq(Arc::as_ptr(&other), Arc::as_ptr(view)) {
            attached = true;
            continue;
        }
        rewire(&other, None);
        root.remove_bar(&other);
        let style = lock_view(&other).style_tag();
        tracing::debug!(?style, "detached superseded undo bar view");
    }

    rewire(view, Some(handler));
    if !attached {
        root.add_bar(Arc::clone(view));
    }
}

/// Replaces the button handler of `view`.
///
/// A handler owns its controller, so the previous one is released only
/// after the view lock is.
fn rewire(view: &SharedBarView, handler: Option<ButtonHandler>) {
    let previous = {
        let mut v = lock_view(view);
        let previous = v.button_handler();
        v.set_on_button_pressed(handler);
        previous
    };
    drop(previous);
}
