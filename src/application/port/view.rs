// SPDX-License-Identifier: MPL-2.0
//! Bar view port definition.
//!
//! A [`BarView`] renders one undo bar: a message on the left and an undo
//! button on the right (with an optional divider between them). Views know
//! nothing about durations, listeners or the hide timer.
//!
//! # Design Notes
//!
//! - Views are shared between the controller and the host's view tree as
//!   [`SharedBarView`]; only the controller mutates undo-related state.
//! - Hosts invoke the button handler **without** holding the view lock, so
//!   the handler may lock the view again.

use super::scheduler::Task;
use crate::domain::ui::{AnimationDuration, Background, Color, Drawable, Margins, Typeface};
use crate::ui::undo_bar::Style;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// View visibility, mirroring the usual toolkit tri-state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    /// Drawn and laid out.
    Visible,
    /// Laid out but not drawn.
    Invisible,
    /// Neither drawn nor laid out.
    #[default]
    Gone,
}

/// Callback wired to the undo button.
pub type ButtonHandler = Arc<dyn Fn() + Send + Sync>;

/// State a view persists across host-driven recreation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SavedState {
    /// Current message text.
    pub message: String,
}

/// Port for a rendered undo bar.
pub trait BarView: Send {
    /// Sets the message text.
    fn set_message(&mut self, message: &str);

    /// Returns the message text.
    fn message(&self) -> String;

    /// Lets the message view shrink to its text instead of filling the bar.
    fn set_message_wrap_content(&mut self, wrap: bool);

    /// Returns true if the message view wraps its content.
    fn message_wraps_content(&self) -> bool;

    /// Sets the button label.
    fn set_button_label(&mut self, label: &str);

    /// Returns the button label.
    fn button_label(&self) -> String;

    /// Sets (or clears) the leading glyph of the button.
    fn set_button_drawable(&mut self, drawable: Option<Drawable>);

    /// Sets the button text color.
    fn set_button_text_color(&mut self, color: Color);

    /// Returns the button text color.
    fn button_text_color(&self) -> Color;

    /// Shows or hides the button together with the divider, if the
    /// layout has one.
    fn set_button_visible(&mut self, visible: bool);

    /// Returns true if the inflated layout contains a divider.
    fn has_divider(&self) -> bool;

    /// Applies a typeface to both message and button.
    fn set_typeface(&mut self, typeface: &Typeface);

    /// Sets the text size of message and button in pixels.
    fn set_text_size(&mut self, px: u32);

    /// Sets the view visibility.
    fn set_visibility(&mut self, visibility: Visibility);

    /// Returns the view visibility.
    fn visibility(&self) -> Visibility;

    /// Sets the opacity (0.0 to 1.0).
    fn set_alpha(&mut self, alpha: f32);

    /// Returns the opacity.
    fn alpha(&self) -> f32;

    /// Returns the current background drawable.
    fn background(&self) -> Background;

    /// Replaces the background drawable.
    fn set_background(&mut self, background: Background);

    /// Tints the current background with a source-in color filter.
    fn set_background_tint(&mut self, color: Color) {
        let tinted = self.background().tinted(color);
        self.set_background(tinted);
    }

    /// Returns the layout margins, or `None` if the view is not laid out
    /// with margin parameters.
    fn margins(&self) -> Option<Margins>;

    /// Replaces the layout margins.
    fn set_margins(&mut self, margins: Margins);

    /// Starts the fade-in transition.
    fn animate_in(&mut self, duration: AnimationDuration);

    /// Starts the fade-out transition; `on_done` runs once it finished.
    fn animate_out(&mut self, duration: AnimationDuration, on_done: Task);

    /// Wires (or unwires) the button click handler.
    fn set_on_button_pressed(&mut self, handler: Option<ButtonHandler>);

    /// Returns the wired button click handler.
    fn button_handler(&self) -> Option<ButtonHandler>;

    /// Returns the style the view was inflated for.
    fn style_tag(&self) -> Option<Style>;

    /// Tags the view with the style it was inflated for.
    fn set_style_tag(&mut self, style: Style);

    /// Returns the stamp of the latest presentation on this view.
    ///
    /// Every controller bound to the view bumps it when showing, so a
    /// fade-out that started earlier can tell it has been superseded.
    fn presentation_stamp(&self) -> u64;

    /// Replaces the presentation stamp.
    fn set_presentation_stamp(&mut self, stamp: u64);

    /// Captures the persisted state.
    fn save_state(&self) -> SavedState {
        SavedState {
            message: self.message(),
        }
    }

    /// Re-applies persisted state.
    fn restore_state(&mut self, state: SavedState) {
        self.set_message(&state.message);
    }
}

/// A bar view shared between the controller and the host's view tree.
pub type SharedBarView = Arc<Mutex<dyn BarView>>;

/// Locks a shared view, recovering from a poisoned lock.
pub fn lock_view(view: &SharedBarView) -> MutexGuard<'_, dyn BarView + 'static> {
    view.lock().unwrap_or_else(|poisoned| {
        tracing::warn!("bar view lock poisoned, recovering");
        PoisonError::into_inner(poisoned)
    })
}
