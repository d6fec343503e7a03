// SPDX-License-Identifier: MPL-2.0
//! Outcome listener.

use super::UndoToken;

/// Receives the outcome of a presentation.
///
/// At most one listener is attached to a controller. It is dropped after
/// [`on_hide`](Listener::on_hide) (timeouts are single-shot) but kept after
/// [`on_undo`](Listener::on_undo).
pub trait Listener: Send {
    /// The bar timed out without the button being pressed.
    fn on_hide(&mut self);

    /// The undo button was pressed; `token` is the one set at show time.
    fn on_undo(&mut self, token: Option<UndoToken>);
}

/// A [`Listener`] built from two closures.
pub struct FnListener<H, U> {
    on_hide: H,
    on_undo: U,
}

impl<H, U> FnListener<H, U>
where
    H: FnMut() + Send,
    U: FnMut(Option<UndoToken>) + Send,
{
    /// Creates a listener from an `on_hide` and an `on_undo` closure.
    pub fn new(on_hide: H, on_undo: U) -> Self {
        Self { on_hide, on_undo }
    }
}

impl<H, U> Listener for FnListener<H, U>
where
    H: FnMut() + Send,
    U: FnMut(Option<UndoToken>) + Send,
{
    fn on_hide(&mut self) {
        (self.on_hide)();
    }

    fn on_undo(&mut self, token: Option<UndoToken>) {
        (self.on_undo)(token);
    }
}
