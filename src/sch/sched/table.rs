//! Task table - fixed-capacity array of task slots
//!
//! Slots are addressed by index. Registration takes the first free slot,
//! so a freed index is reused by the next registration.

use crate::error::{SchError, SchResult};
use crate::task::{TaskEntry, TaskSlot};
use crate::types::{SchTick, TaskFn, TaskHandle};

/// Fixed-capacity table of tasks
///
/// Holds no synchronization of its own; the scheduler only touches it from
/// inside a critical section.
#[derive(Debug)]
pub struct TaskTable<const N: usize> {
    slots: [TaskSlot; N],
}

impl<const N: usize> TaskTable<N> {
    /// Create an empty table
    pub const fn new() -> Self {
        TaskTable {
            slots: [TaskSlot::Empty; N],
        }
    }

    /// Number of slots
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Number of occupied slots
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| !slot.is_empty()).count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(TaskSlot::is_empty)
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|slot| !slot.is_empty())
    }

    /// Free every slot
    pub fn clear(&mut self) {
        self.slots = [TaskSlot::Empty; N];
    }

    /// Install a task in the first free slot
    ///
    /// # Returns
    /// * `Ok(handle)` - Handle of the slot the task now occupies
    /// * `Err(SchError::TableFull)` - No free slot; the table is unchanged
    pub fn insert(
        &mut self,
        callback: TaskFn,
        delay: SchTick,
        period: SchTick,
    ) -> SchResult<TaskHandle> {
        let index = self
            .slots
            .iter()
            .position(TaskSlot::is_empty)
            .ok_or(SchError::TableFull)?;

        self.slots[index] = TaskSlot::Occupied(TaskEntry::new(callback, delay, period));
        Ok(TaskHandle::from_index(index))
    }

    /// Free the slot behind `handle`
    ///
    /// Freeing a slot that is already empty succeeds.
    ///
    /// # Returns
    /// * `Ok(())` - Slot is now empty
    /// * `Err(SchError::InvalidHandle)` - Index lies outside the table
    pub fn remove(&mut self, handle: TaskHandle) -> SchResult<()> {
        let slot = self
            .slots
            .get_mut(handle.index())
            .ok_or(SchError::InvalidHandle)?;
        *slot = TaskSlot::Empty;
        Ok(())
    }

    /// Entry behind `handle`, if the slot is occupied
    #[inline]
    pub fn get(&self, handle: TaskHandle) -> Option<&TaskEntry> {
        self.slots.get(handle.index()).and_then(TaskSlot::entry)
    }

    /// Occupied slots in index order
    pub fn iter(&self) -> impl Iterator<Item = (TaskHandle, &TaskEntry)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.entry().map(|entry| (TaskHandle::from_index(index), entry)))
    }

    /// Advance every occupied slot by one tick
    pub fn advance(&mut self) {
        for entry in self.slots.iter_mut().filter_map(TaskSlot::entry_mut) {
            entry.tick();
        }
    }

    /// Take one pending run from the slot at `index`
    ///
    /// Returns the body to invoke when the slot had a pending run. A one-shot
    /// task leaves the table as part of the claim.
    pub fn claim(&mut self, index: usize) -> Option<TaskFn> {
        let slot = self.slots.get_mut(index)?;
        let entry = slot.entry_mut()?;

        if !entry.consume_run() {
            return None;
        }

        let callback = entry.callback();
        if entry.is_one_shot() {
            *slot = TaskSlot::Empty;
        }
        Some(callback)
    }
}

impl<const N: usize> Default for TaskTable<N> {
    fn default() -> Self {
        Self::new()
    }
}
