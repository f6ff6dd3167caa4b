use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{trace, warn};

use crate::core::SelectionRange;

/// Boxed listener callback. Receives the range as plain numeric fields.
pub type RangeListener = Box<dyn FnMut(SelectionRange)>;

/// Handle returned on registration, used to remove the listener again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ListenerId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SliderEventKind {
    /// Every range update, including each intermediate drag step.
    Change,
    /// Pointer release after a drag, once geometry is snapped.
    DragEnd,
}

struct ListenerEntry {
    id: ListenerId,
    kind: SliderEventKind,
    callback: RangeListener,
}

/// Ordered observer registry.
///
/// Listeners fire in registration order. A panicking listener is logged and
/// skipped; the remaining listeners still run.
pub(crate) struct ListenerRegistry {
    next_id: u64,
    entries: SmallVec<[ListenerEntry; 4]>,
}

impl Default for ListenerRegistry {
    fn default() -> Self {
        Self {
            next_id: 1,
            entries: SmallVec::new(),
        }
    }
}

impl fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("next_id", &self.next_id)
            .field("listeners", &self.entries.len())
            .finish()
    }
}

impl ListenerRegistry {
    pub(crate) fn register(&mut self, kind: SliderEventKind, callback: RangeListener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push(ListenerEntry { id, kind, callback });
        trace!(?kind, listeners = self.entries.len(), "listener registered");
        id
    }

    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        if let Some(position) = self.entries.iter().position(|entry| entry.id == id) {
            self.entries.remove(position);
            return true;
        }
        false
    }

    pub(crate) fn count(&self, kind: SliderEventKind) -> usize {
        self.entries.iter().filter(|entry| entry.kind == kind).count()
    }

    pub(crate) fn dispatch(&mut self, kind: SliderEventKind, range: SelectionRange) {
        for entry in self.entries.iter_mut().filter(|entry| entry.kind == kind) {
            let callback = &mut entry.callback;
            if catch_unwind(AssertUnwindSafe(|| callback(range))).is_err() {
                warn!(
                    listener = entry.id.0,
                    ?kind,
                    begin = range.begin,
                    end = range.end,
                    "range listener panicked; continuing dispatch"
                );
            }
        }
    }
}
