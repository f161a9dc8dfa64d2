use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use tracing::{debug, error, trace};

use crate::containers::{AxisList, ChangeEvent, axis_list_from_dims, axis_models};
use crate::events::{EventEmitter, Subscription};
use crate::model::{AxisModel, Dims};

use super::{MoveReport, ReorderError, Result, apply_order};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncDirection {
    DimsToList,
    ListToDims,
}

type DirectionFlag = Rc<Cell<Option<SyncDirection>>>;

/// Marks a sync hop as in flight; cleared on drop.
struct DirectionGuard {
    flag: DirectionFlag,
}

impl DirectionGuard {
    fn enter(flag: &DirectionFlag, direction: SyncDirection) -> Option<Self> {
        if let Some(active) = flag.get() {
            trace!(?active, ?direction, "ignoring echoed notification");
            return None;
        }
        flag.set(Some(direction));
        Some(Self {
            flag: Rc::clone(flag),
        })
    }
}

impl Drop for DirectionGuard {
    fn drop(&mut self) {
        self.flag.set(None);
    }
}

type ErrorSlot = Rc<RefCell<Option<ReorderError>>>;

fn record(slot: &ErrorSlot, result: Result<()>) {
    if let Err(failure) = result {
        error!(error = %failure, "dims sorter failed to sync");
        *slot.borrow_mut() = Some(failure);
    }
}

/// Keeps a [`Dims`] order and an [`AxisList`] in step, both ways.
///
/// Dropping the sorter, or calling [`DimsSorter::disconnect`], releases
/// every connection it made.
#[derive(Debug)]
pub struct DimsSorter {
    dims: Rc<Dims>,
    axis_list: Rc<AxisList>,
    direction: DirectionFlag,
    last_error: ErrorSlot,
    subscriptions: Rc<RefCell<Vec<Subscription>>>,
}

impl DimsSorter {
    /// Builds an axis list from `dims` and binds the two.
    pub fn new(dims: Rc<Dims>) -> Self {
        let axis_list = Rc::new(axis_list_from_dims(&dims));
        Self::bind(dims, axis_list)
    }

    pub fn bind(dims: Rc<Dims>, axis_list: Rc<AxisList>) -> Self {
        let direction: DirectionFlag = Rc::new(Cell::new(None));
        let last_error: ErrorSlot = Rc::new(RefCell::new(None));
        let mut subscriptions = Vec::with_capacity(5);

        subscriptions.push({
            let list = Rc::downgrade(&axis_list);
            let direction = Rc::clone(&direction);
            let last_error = Rc::clone(&last_error);
            dims.events.order.connect(move |order: &Vec<usize>| {
                let Some(list) = list.upgrade() else { return };
                let Some(_guard) = DirectionGuard::enter(&direction, SyncDirection::DimsToList)
                else {
                    return;
                };
                debug!(?order, "dims order -> axis list");
                record(&last_error, apply_order(&*list, order).map(|_| ()));
            })
        });

        subscriptions.push({
            let dims = Rc::downgrade(&dims);
            let direction = Rc::clone(&direction);
            let last_error = Rc::clone(&last_error);
            axis_list
                .events
                .reordered
                .connect(move |items: &Vec<AxisModel>| {
                    let Some(dims) = dims.upgrade() else { return };
                    let Some(_guard) =
                        DirectionGuard::enter(&direction, SyncDirection::ListToDims)
                    else {
                        return;
                    };
                    debug!("axis list reordered -> dims order");
                    let result = dims
                        .set_order_from_axes(items)
                        .map(|_| ())
                        .map_err(ReorderError::from);
                    record(&last_error, result);
                })
        });

        subscriptions.push({
            let dims = Rc::downgrade(&dims);
            let direction = Rc::clone(&direction);
            let last_error = Rc::clone(&last_error);
            axis_list
                .events
                .changed
                .connect(move |change: &ChangeEvent<AxisModel>| {
                    let Some(dims) = dims.upgrade() else { return };
                    let Some(_guard) =
                        DirectionGuard::enter(&direction, SyncDirection::ListToDims)
                    else {
                        return;
                    };
                    let result = dims
                        .set_axis_rollable(change.value.axis, change.value.rollable)
                        .map(|_| ())
                        .map_err(ReorderError::from);
                    record(&last_error, result);
                })
        });

        subscriptions.push({
            let list = Rc::downgrade(&axis_list);
            let direction = Rc::clone(&direction);
            let last_error = Rc::clone(&last_error);
            dims.events.rollable.connect(move |rollable: &Vec<bool>| {
                let Some(list) = list.upgrade() else { return };
                let Some(_guard) = DirectionGuard::enter(&direction, SyncDirection::DimsToList)
                else {
                    return;
                };
                record(&last_error, sync_locks(&list, rollable));
            })
        });

        subscriptions.push({
            let list = Rc::downgrade(&axis_list);
            let weak_dims: Weak<Dims> = Rc::downgrade(&dims);
            let direction = Rc::clone(&direction);
            dims.events.ndim.connect(move |ndim: &usize| {
                let (Some(list), Some(dims)) = (list.upgrade(), weak_dims.upgrade()) else {
                    return;
                };
                let Some(_guard) = DirectionGuard::enter(&direction, SyncDirection::DimsToList)
                else {
                    return;
                };
                debug!(ndim, "dims dimensionality changed, rebuilding axis list");
                list.reset(axis_models(&dims));
            })
        });

        Self {
            dims,
            axis_list,
            direction,
            last_error,
            subscriptions: Rc::new(RefCell::new(subscriptions)),
        }
    }

    pub fn dims(&self) -> &Rc<Dims> {
        &self.dims
    }

    pub fn axis_list(&self) -> &Rc<AxisList> {
        &self.axis_list
    }

    /// Tears the sorter down when `finished` fires, e.g. on window close.
    pub fn close_on(&self, finished: &EventEmitter<()>) {
        let subscriptions = Rc::downgrade(&self.subscriptions);
        let handle = finished.connect(move |_| {
            if let Some(subscriptions) = subscriptions.upgrade() {
                let released = std::mem::take(&mut *subscriptions.borrow_mut());
                debug!(count = released.len(), "owner finished, releasing dims sorter");
                drop(released);
            }
        });
        self.subscriptions.borrow_mut().push(handle);
    }

    pub fn is_connected(&self) -> bool {
        !self.subscriptions.borrow().is_empty()
    }

    pub fn disconnect(&self) {
        let released = std::mem::take(&mut *self.subscriptions.borrow_mut());
        drop(released);
    }

    /// Pushes the current dims order into the axis list.
    pub fn sync_from_dims(&self) -> Result<MoveReport> {
        let Some(_guard) = DirectionGuard::enter(&self.direction, SyncDirection::DimsToList)
        else {
            return Ok(MoveReport::default());
        };
        apply_order(&*self.axis_list, &self.dims.order())
    }

    pub fn last_error(&self) -> Option<ReorderError> {
        self.last_error.borrow().clone()
    }

    pub fn take_error(&self) -> Option<ReorderError> {
        self.last_error.borrow_mut().take()
    }
}

fn sync_locks(list: &AxisList, rollable: &[bool]) -> Result<()> {
    for index in 0..list.len() {
        let Some(item) = list.get(index) else { break };
        let Some(&flag) = rollable.get(item.axis) else {
            return Err(ReorderError::AxisNotFound { axis: item.axis });
        };
        if item.rollable != flag {
            list.update(index, |item| item.rollable = flag)?;
        }
    }
    Ok(())
}
