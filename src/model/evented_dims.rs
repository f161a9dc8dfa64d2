use std::cell::RefCell;

use tracing::debug;

use crate::events::EventEmitter;

use super::{CoreError, DimsState, HasAxis, Result};

#[derive(Debug)]
pub struct DimsEvents {
    pub order: EventEmitter<Vec<usize>>,
    pub rollable: EventEmitter<Vec<bool>>,
    pub ndim: EventEmitter<usize>,
}

impl Default for DimsEvents {
    fn default() -> Self {
        Self {
            order: EventEmitter::new("dims.order"),
            rollable: EventEmitter::new("dims.rollable"),
            ndim: EventEmitter::new("dims.ndim"),
        }
    }
}

/// Observable dims model; the source of truth for the displayed axis order.
///
/// Mutators take `&self` and release the inner borrow before emitting, so
/// listeners are free to read or mutate the model again.
#[derive(Debug)]
pub struct Dims {
    state: RefCell<DimsState>,
    pub events: DimsEvents,
}

impl Dims {
    pub fn new(ndim: usize) -> Self {
        Self {
            state: RefCell::new(DimsState::new(ndim)),
            events: DimsEvents::default(),
        }
    }

    pub fn from_state(state: DimsState) -> Result<Self> {
        state.validate()?;
        Ok(Self {
            state: RefCell::new(state),
            events: DimsEvents::default(),
        })
    }

    pub fn state(&self) -> DimsState {
        self.state.borrow().clone()
    }

    pub fn ndim(&self) -> usize {
        self.state.borrow().ndim
    }

    pub fn ndisplay(&self) -> usize {
        self.state.borrow().ndisplay
    }

    pub fn order(&self) -> Vec<usize> {
        self.state.borrow().order.clone()
    }

    pub fn rollable(&self) -> Vec<bool> {
        self.state.borrow().rollable.clone()
    }

    pub fn displayed(&self) -> Vec<usize> {
        self.state.borrow().displayed()
    }

    pub fn not_displayed(&self) -> Vec<usize> {
        self.state.borrow().not_displayed()
    }

    /// Sets the axis order. Returns `false`, without emitting, when the order
    /// is unchanged.
    pub fn set_order(&self, order: &[usize]) -> Result<bool> {
        {
            let mut state = self.state.borrow_mut();
            state.validate_order(order)?;
            if state.order == order {
                return Ok(false);
            }
            state.order = order.to_vec();
        }
        debug!(?order, "dims order changed");
        self.events.order.emit(order.to_vec());
        Ok(true)
    }

    pub fn set_order_from_axes<A: HasAxis>(&self, axes: &[A]) -> Result<bool> {
        let order = axes.iter().map(HasAxis::axis).collect::<Vec<_>>();
        self.set_order(&order)
    }

    pub fn set_axis_rollable(&self, axis: usize, rollable: bool) -> Result<bool> {
        let snapshot = {
            let mut state = self.state.borrow_mut();
            state.check_axis(axis)?;
            if state.rollable[axis] == rollable {
                return Ok(false);
            }
            state.rollable[axis] = rollable;
            state.rollable.clone()
        };
        debug!(axis, rollable, "dims lock flag changed");
        self.events.rollable.emit(snapshot);
        Ok(true)
    }

    pub fn set_rollable(&self, rollable: Vec<bool>) -> Result<bool> {
        {
            let mut state = self.state.borrow_mut();
            if rollable.len() != state.ndim {
                return Err(CoreError::LengthMismatch {
                    field: "rollable",
                    expected: state.ndim,
                    actual: rollable.len(),
                });
            }
            if state.rollable == rollable {
                return Ok(false);
            }
            state.rollable = rollable.clone();
        }
        debug!(?rollable, "dims lock flags replaced");
        self.events.rollable.emit(rollable);
        Ok(true)
    }

    /// Changes the number of dimensions; emits `ndim`, then `order`.
    pub fn set_ndim(&self, ndim: usize) -> bool {
        let order = {
            let mut state = self.state.borrow_mut();
            if state.ndim == ndim {
                return false;
            }
            let resized = state.resized(ndim);
            *state = resized;
            state.order.clone()
        };
        debug!(ndim, "dims dimensionality changed");
        self.events.ndim.emit(ndim);
        self.events.order.emit(order);
        true
    }

    /// Rolls the unlocked axes; see [`DimsState::rolled_order`].
    pub fn roll(&self) -> bool {
        let order = self.state.borrow().rolled_order();
        self.set_order(&order).unwrap_or(false)
    }

    pub fn transpose(&self) -> bool {
        let Some(order) = self.state.borrow().transposed_order() else {
            return false;
        };
        self.set_order(&order).unwrap_or(false)
    }
}
