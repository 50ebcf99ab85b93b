//! Single-slot quicksave cache.

use lifegrid_core::Snapshot;

/// Holds the most recently saved snapshot.
///
/// Independent from the undo history: never populated or evicted
/// automatically. Loading does not empty the slot, so the same state
/// can be restored repeatedly.
#[derive(Clone, Debug, Default)]
pub struct QuicksaveSlot {
    slot: Option<Snapshot>,
}

impl QuicksaveSlot {
    /// An empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the slot.
    pub fn save(&mut self, snapshot: Snapshot) {
        self.slot = Some(snapshot);
    }

    /// The saved snapshot, or `None` if nothing has been saved.
    pub fn load(&self) -> Option<Snapshot> {
        self.slot.clone()
    }

    /// Whether nothing has been saved.
    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }

    /// Forget the saved snapshot.
    pub fn clear(&mut self) {
        self.slot = None;
    }
}
