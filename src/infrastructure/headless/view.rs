// SPDX-License-Identifier: MPL-2.0
//! In-memory bar view.

use crate::application::port::{BarView, ButtonHandler, Task, Visibility};
use crate::domain::ui::{AnimationDuration, Background, Color, Drawable, Margins, Typeface};
use crate::ui::undo_bar::{Layout, Style};
use std::fmt;

/// A [`BarView`] that keeps its state in fields and logs every capability
/// call by name.
///
/// Fade-outs complete immediately unless the view was created with
/// [`with_manual_animations`](Self::with_manual_animations), in which case
/// they wait for [`take_finished_fade_outs`](Self::take_finished_fade_outs).
pub struct HeadlessBarView {
    layout: Layout,
    message: String,
    message_wraps: bool,
    button_label: String,
    button_drawable: Option<Drawable>,
    button_text_color: Color,
    button_visible: bool,
    divider_visible: bool,
    typeface: Option<Typeface>,
    text_size: Option<u32>,
    visibility: Visibility,
    alpha: f32,
    background: Background,
    margins: Option<Margins>,
    style_tag: Option<Style>,
    presentation: u64,
    handler: Option<ButtonHandler>,
    manual_animations: bool,
    /// Bumped whenever opacity is set directly, so fade-outs started before
    /// no longer change it when they finish.
    fade_epoch: u64,
    fade_outs: Vec<(u64, Task)>,
    calls: Vec<&'static str>,
}

impl HeadlessBarView {
    /// Inflates `layout`.
    #[must_use]
    pub fn from_layout(layout: &Layout) -> Self {
        Self {
            layout: layout.clone(),
            message: String::new(),
            message_wraps: false,
            button_label: String::new(),
            button_drawable: None,
            button_text_color: Color::WHITE,
            button_visible: true,
            divider_visible: layout.has_divider,
            typeface: None,
            text_size: None,
            visibility: Visibility::Visible,
            alpha: 1.0,
            background: Background::new(layout.background),
            margins: Some(layout.margins),
            style_tag: None,
            presentation: 0,
            handler: None,
            manual_animations: false,
            fade_epoch: 0,
            fade_outs: Vec::new(),
            calls: Vec::new(),
        }
    }

    /// Makes fade-outs wait for an explicit finish.
    #[must_use]
    pub fn with_manual_animations(mut self) -> Self {
        self.manual_animations = true;
        self
    }

    /// Drops the margin layout, as a host whose root is not a margin layout
    /// would.
    #[must_use]
    pub fn without_margins(mut self) -> Self {
        self.margins = None;
        self
    }

    /// Layout the view was inflated from.
    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    #[must_use]
    pub fn button_drawable(&self) -> Option<&Drawable> {
        self.button_drawable.as_ref()
    }

    #[must_use]
    pub fn is_button_visible(&self) -> bool {
        self.button_visible
    }

    #[must_use]
    pub fn is_divider_visible(&self) -> bool {
        self.divider_visible
    }

    #[must_use]
    pub fn typeface(&self) -> Option<&Typeface> {
        self.typeface.as_ref()
    }

    /// Last text size applied, in pixels.
    #[must_use]
    pub fn text_size(&self) -> Option<u32> {
        self.text_size
    }

    /// Capability calls received so far, by name.
    #[must_use]
    pub fn calls(&self) -> &[&'static str] {
        &self.calls
    }

    /// Number of fade-outs waiting to finish.
    #[must_use]
    pub fn running_fade_outs(&self) -> usize {
        self.fade_outs.len()
    }

    /// Finishes every running fade-out and hands back their completions.
    ///
    /// The caller runs them after releasing the view's lock.
    pub fn take_finished_fade_outs(&mut self) -> Vec<Task> {
        let epoch = self.fade_epoch;
        self.fade_outs
            .drain(..)
            .map(|(started, done)| {
                if started == epoch {
                    self.alpha = 0.0;
                }
                done
            })
            .collect()
    }

    fn record(&mut self, call: &'static str) {
        self.calls.push(call);
    }
}

impl BarView for HeadlessBarView {
    fn set_message(&mut self, message: &str) {
        self.record("set_message");
        self.message = message.to_owned();
    }

    fn message(&self) -> String {
        self.message.clone()
    }

    fn set_message_wrap_content(&mut self, wrap: bool) {
        self.record("set_message_wrap_content");
        self.message_wraps = wrap;
    }

    fn message_wraps_content(&self) -> bool {
        self.message_wraps
    }

    fn set_button_label(&mut self, label: &str) {
        self.record("set_button_label");
        self.button_label = label.to_owned();
    }

    fn button_label(&self) -> String {
        self.button_label.clone()
    }

    fn set_button_drawable(&mut self, drawable: Option<Drawable>) {
        self.record("set_button_drawable");
        self.button_drawable = drawable;
    }

    fn set_button_text_color(&mut self, color: Color) {
        self.record("set_button_text_color");
        self.button_text_color = color;
    }

    fn button_text_color(&self) -> Color {
        self.button_text_color
    }

    fn set_button_visible(&mut self, visible: bool) {
        self.record("set_button_visible");
        self.button_visible = visible;
        if self.layout.has_divider {
            self.divider_visible = visible;
        }
    }

    fn has_divider(&self) -> bool {
        self.layout.has_divider
    }

    fn set_typeface(&mut self, typeface: &Typeface) {
        self.record("set_typeface");
        self.typeface = Some(typeface.clone());
    }

    fn set_text_size(&mut self, px: u32) {
        self.record("set_text_size");
        self.text_size = Some(px);
    }

    fn set_visibility(&mut self, visibility: Visibility) {
        self.record("set_visibility");
        self.visibility = visibility;
    }

    fn visibility(&self) -> Visibility {
        self.visibility
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.record("set_alpha");
        self.fade_epoch += 1;
        self.alpha = alpha;
    }

    fn alpha(&self) -> f32 {
        self.alpha
    }

    fn background(&self) -> Background {
        self.background.clone()
    }

    fn set_background(&mut self, background: Background) {
        self.record("set_background");
        self.background = background;
    }

    fn margins(&self) -> Option<Margins> {
        self.margins
    }

    fn set_margins(&mut self, margins: Margins) {
        self.record("set_margins");
        if self.margins.is_some() {
            self.margins = Some(margins);
        }
    }

    fn animate_in(&mut self, _duration: AnimationDuration) {
        self.record("animate_in");
        self.fade_epoch += 1;
        self.alpha = 1.0;
    }

    fn animate_out(&mut self, _duration: AnimationDuration, on_done: Task) {
        self.record("animate_out");
        if self.manual_animations {
            self.fade_outs.push((self.fade_epoch, on_done));
        } else {
            self.alpha = 0.0;
            on_done();
        }
    }

    fn set_on_button_pressed(&mut self, handler: Option<ButtonHandler>) {
        self.record("set_on_button_pressed");
        self.handler = handler;
    }

    fn button_handler(&self) -> Option<ButtonHandler> {
        self.handler.clone()
    }

    fn style_tag(&self) -> Option<Style> {
        self.style_tag
    }

    fn set_style_tag(&mut self, style: Style) {
        self.style_tag = Some(style);
    }

    fn presentation_stamp(&self) -> u64 {
        self.presentation
    }

    fn set_presentation_stamp(&mut self, stamp: u64) {
        self.presentation = stamp;
    }
}

impl fmt::Debug for HeadlessBarView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeadlessBarView")
            .field("layout", &self.layout.name)
            .field("message", &self.message)
            .field("visibility", &self.visibility)
            .field("alpha", &self.alpha)
            .field("style_tag", &self.style_tag)
            .finish_non_exhaustive()
    }
}
