use std::cell::RefCell;

use tracing::trace;

use crate::events::{EventBlocker, EventEmitter};

use super::{ListError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveEvent {
    pub src: usize,
    pub dst: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RemoveEvent<T> {
    pub index: usize,
    pub value: T,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChangeEvent<T> {
    pub index: usize,
    pub value: T,
}

#[derive(Debug)]
pub struct ListEvents<T> {
    pub moved: EventEmitter<MoveEvent>,
    pub removed: EventEmitter<RemoveEvent<T>>,
    pub changed: EventEmitter<ChangeEvent<T>>,
    /// Full sequence after any move or removal. Coalesced while blocked.
    pub reordered: EventEmitter<Vec<T>>,
    pub reset: EventEmitter<Vec<T>>,
}

impl<T: 'static> ListEvents<T> {
    fn new() -> Self {
        Self {
            moved: EventEmitter::new("list.moved"),
            removed: EventEmitter::new("list.removed"),
            changed: EventEmitter::new("list.changed"),
            reordered: EventEmitter::coalescing("list.reordered"),
            reset: EventEmitter::new("list.reset"),
        }
    }

    /// Blocks every list event until the returned guard is dropped.
    ///
    /// Blocked `reordered` notifications collapse into a single delivery on
    /// release; the other events are discarded.
    pub fn blocker_all(&self) -> EventBlocker {
        EventBlocker::combine([
            self.moved.blocker(),
            self.removed.blocker(),
            self.changed.blocker(),
            self.reordered.blocker(),
            self.reset.blocker(),
        ])
    }
}

/// Ordered sequence that announces its mutations.
#[derive(Debug)]
pub struct EventedList<T> {
    items: RefCell<Vec<T>>,
    pub events: ListEvents<T>,
}

impl<T: Clone + 'static> EventedList<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: RefCell::new(items),
            events: ListEvents::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    pub fn get(&self, index: usize) -> Option<T> {
        self.items.borrow().get(index).cloned()
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.items.borrow().clone()
    }

    pub fn with_items<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        f(&self.items.borrow())
    }

    pub fn position(&self, predicate: impl Fn(&T) -> bool) -> Option<usize> {
        self.items.borrow().iter().position(predicate)
    }

    /// Moves the item at `src` so that it ends up at index `dst`.
    ///
    /// Returns `false`, emitting nothing, when `src == dst`.
    pub fn move_item(&self, src: usize, dst: usize) -> Result<bool> {
        let snapshot = {
            let mut items = self.items.borrow_mut();
            let len = items.len();
            for index in [src, dst] {
                if index >= len {
                    return Err(ListError::IndexOutOfRange { index, len });
                }
            }
            if src == dst {
                return Ok(false);
            }
            let item = items.remove(src);
            items.insert(dst, item);
            items.clone()
        };
        trace!(src, dst, "list item moved");
        self.events.moved.emit(MoveEvent { src, dst });
        self.events.reordered.emit(snapshot);
        Ok(true)
    }

    pub fn pop(&self) -> Option<T> {
        let (value, index, snapshot) = {
            let mut items = self.items.borrow_mut();
            let value = items.pop()?;
            (value, items.len(), items.clone())
        };
        self.events.removed.emit(RemoveEvent {
            index,
            value: value.clone(),
        });
        self.events.reordered.emit(snapshot);
        Some(value)
    }

    /// Edits the item at `index` in place and emits `changed`.
    pub fn update(&self, index: usize, edit: impl FnOnce(&mut T)) -> Result<()> {
        let value = {
            let mut items = self.items.borrow_mut();
            let len = items.len();
            let item = items
                .get_mut(index)
                .ok_or(ListError::IndexOutOfRange { index, len })?;
            edit(item);
            item.clone()
        };
        self.events.changed.emit(ChangeEvent { index, value });
        Ok(())
    }

    /// Replaces the whole content and emits `reset`.
    pub fn reset(&self, items: Vec<T>) {
        *self.items.borrow_mut() = items.clone();
        self.events.reset.emit(items);
    }
}

impl<T: Clone + 'static> Default for EventedList<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
