// SPDX-License-Identifier: MPL-2.0
//! Opaque undo token.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Application value identifying the pending action.
///
/// The controller never inspects it; it hands the same token back through
/// [`Listener::on_undo`](super::Listener::on_undo).
#[derive(Clone)]
pub struct UndoToken(Arc<dyn Any + Send + Sync>);

impl UndoToken {
    /// Wraps any thread-safe value.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self(Arc::new(value))
    }

    /// Returns the wrapped value if it has type `T`.
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }

    /// Returns true if both tokens wrap the same allocation.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for UndoToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("UndoToken(..)")
    }
}
