//! Dioxus tasks in a [`DeferredSlot`](valentine_core::DeferredSlot).

use dioxus::prelude::Task;
use valentine_core::Cancel;

/// A component-scoped task that can sit in a `DeferredSlot`.
///
/// The task is also cancelled by Dioxus when its scope unmounts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UiTask(pub Task);

impl From<Task> for UiTask {
    fn from(task: Task) -> Self {
        Self(task)
    }
}

impl Cancel for UiTask {
    fn cancel(self) {
        self.0.cancel();
    }
}
