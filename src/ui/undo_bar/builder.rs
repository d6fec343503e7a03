// SPDX-License-Identifier: MPL-2.0
//! Fluent construction of an [`UndoBar`].

use super::{Listener, Options, Style, UndoBar, UndoToken};
use crate::application::port::HostSurface;
use crate::config::Config;
use crate::diagnostics::DiagnosticsHandle;
use crate::domain::ui::{AnimationDuration, Color, DisplayDuration, Drawable, TextSize, Typeface};
use std::fmt;
use std::sync::Arc;

/// Accumulates options, then binds them to a host.
///
/// ```no_run
/// # use std::sync::Arc;
/// # use undo_bar::application::port::HostSurface;
/// # fn demo(host: Arc<dyn HostSurface>) {
/// use undo_bar::ui::undo_bar::{Builder, FnListener, UndoToken};
///
/// Builder::new(host)
///     .message("Message deleted")
///     .undo_token(UndoToken::new(42_u64))
///     .listener(FnListener::new(|| {}, |_token| { /* restore */ }))
///     .show(true);
/// # }
/// ```
#[must_use = "a builder does nothing until `create` or `show` is called"]
pub struct Builder {
    host: Arc<dyn HostSurface>,
    options: Options,
    listener: Option<Box<dyn Listener>>,
    config: Config,
    diagnostics: Option<DiagnosticsHandle>,
}

impl Builder {
    /// Starts from the built-in defaults.
    pub fn new(host: Arc<dyn HostSurface>) -> Self {
        Self::from_config(host, &Config::default())
    }

    /// Starts from the defaults the config file overrides.
    pub fn from_config(host: Arc<dyn HostSurface>, config: &Config) -> Self {
        Self {
            host,
            options: Options::from_config(config),
            listener: None,
            config: config.clone(),
            diagnostics: None,
        }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.options.message = Some(message.into());
        self
    }

    pub fn button_visible(mut self, visible: bool) -> Self {
        self.options.button_visible = visible;
        self
    }

    pub fn button_label(mut self, label: impl Into<String>) -> Self {
        self.options.button_label = Some(label.into());
        self
    }

    pub fn button_drawable(mut self, drawable: Drawable) -> Self {
        self.options.button_drawable = Some(drawable);
        self
    }

    pub fn listener(mut self, listener: impl Listener + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    pub fn undo_token(mut self, token: UndoToken) -> Self {
        self.options.undo_token = Some(token);
        self
    }

    pub fn duration_ms(mut self, millis: u32) -> Self {
        self.options.duration = DisplayDuration::from_millis(millis);
        self
    }

    pub fn animation_duration_ms(mut self, millis: u32) -> Self {
        self.options.animation_duration = AnimationDuration::from_millis(millis);
        self
    }

    pub fn use_english_locale(mut self, english: bool) -> Self {
        self.options.use_english_locale = english;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.options.style = style;
        self
    }

    pub fn background_tint(mut self, color: Color) -> Self {
        self.options.background_tint = Some(color);
        self
    }

    pub fn typeface(mut self, typeface: Typeface) -> Self {
        self.options.typeface = Some(typeface);
        self
    }

    pub fn undo_color(mut self, color: Color) -> Self {
        self.options.undo_color = color;
        self
    }

    pub fn align_parent_bottom(mut self, align: bool) -> Self {
        self.options.align_parent_bottom = align;
        self
    }

    pub fn bottom_margin(mut self, px: u32) -> Self {
        self.options.bottom_margin = px;
        self
    }

    pub fn text_size(mut self, size: TextSize) -> Self {
        self.options.text_size = size;
        self
    }

    /// Records the controller's lifecycle events into `handle`.
    pub fn diagnostics(mut self, handle: DiagnosticsHandle) -> Self {
        self.diagnostics = Some(handle);
        self
    }

    /// Builds the controller.
    ///
    /// Windowless hosts get a toast-only controller carrying only the
    /// options a toast can render.
    pub fn create(self) -> UndoBar {
        let windowless = self.host.window().is_none();
        let options = if windowless {
            self.options.toast_subset()
        } else {
            self.options
        };

        let bar = UndoBar::with_config(self.host, options.style, &self.config, self.diagnostics);
        bar.set_options(options);
        bar.set_boxed_listener(self.listener);
        bar
    }

    /// Builds the controller and shows it.
    pub fn show(self, animate: bool) -> UndoBar {
        let bar = self.create();
        bar.show_animated(animate);
        bar
    }
}

impl fmt::Debug for Builder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builder")
            .field("options", &self.options)
            .field("has_listener", &self.listener.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::lock_view;
    use crate::infrastructure::headless::HeadlessHost;
    use crate::ui::undo_bar::FnListener;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::Duration;

    #[test]
    fn create_applies_every_option() {
        let host = HeadlessHost::new();
        let token = UndoToken::new(7_u32);
        let bar = Builder::new(host.clone())
            .message("Deleted")
            .button_label("RESTORE")
            .undo_token(token.clone())
            .duration_ms(1200)
            .style(Style::Holo)
            .bottom_margin(24)
            .create();

        let options = bar.options();
        assert_eq!(options.message.as_deref(), Some("Deleted"));
        assert_eq!(options.button_label.as_deref(), Some("RESTORE"));
        assert_eq!(options.duration.millis(), 1200);
        assert_eq!(options.bottom_margin, 24);
        assert_eq!(bar.style(), Style::Holo);
        assert!(bar.undo_token().unwrap().ptr_eq(&token));
    }

    #[test]
    fn show_presents_on_main_thread() {
        let host = HeadlessHost::new();
        let bar = Builder::new(host.clone()).message("Sent").show(false);
        host.run_pending();

        assert!(bar.is_visible());
        assert_eq!(lock_view(&bar.view().unwrap()).message(), "Sent");
    }

    #[test]
    fn windowless_keeps_subset_and_listener() {
        let host = HeadlessHost::windowless();
        let hidden = Arc::new(AtomicBool::new(false));
        let hidden_in_cb = Arc::clone(&hidden);
        let bar = Builder::new(host.clone())
            .message("M")
            .button_label("RESTORE")
            .bottom_margin(40)
            .background_tint(Color::BLACK)
            .duration_ms(100)
            .listener(FnListener::new(
                move || hidden_in_cb.store(true, Ordering::SeqCst),
                |_| {},
            ))
            .show(true);
        host.run_pending();

        assert!(bar.is_toast_only());
        let options = bar.options();
        assert!(!options.button_visible);
        assert!(options.button_label.is_none());
        assert_eq!(options.bottom_margin, 0);
        assert_eq!(options.background_tint, Some(Color::BLACK));

        host.advance(Duration::from_millis(100));
        host.run_pending();
        assert!(hidden.load(Ordering::SeqCst));
    }

    #[test]
    fn from_config_seeds_defaults() {
        let host = HeadlessHost::new();
        let config = Config {
            style: Some(Style::KitKat),
            duration_ms: Some(8000),
            use_english_locale: Some(true),
            ..Config::default()
        };
        let bar = Builder::from_config(host.clone(), &config).create();
        assert_eq!(bar.style(), Style::KitKat);
        assert_eq!(bar.options().duration.millis(), 8000);
        assert!(bar.options().use_english_locale);
    }
}
