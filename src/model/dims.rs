use serde::{Deserialize, Serialize};

use super::{CoreError, Result, default_axis_labels};

pub const DEFAULT_NDISPLAY: usize = 2;

fn default_ndisplay() -> usize {
    DEFAULT_NDISPLAY
}

/// Plain, serializable dims state.
///
/// `order` lists axis ids from slowest to fastest; the last `ndisplay`
/// entries are the displayed axes. `axis_labels` and `rollable` are indexed
/// by axis id, not by position in `order`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimsState {
    pub ndim: usize,
    #[serde(default = "default_ndisplay")]
    pub ndisplay: usize,
    #[serde(default)]
    pub order: Vec<usize>,
    #[serde(default)]
    pub axis_labels: Vec<String>,
    #[serde(default)]
    pub rollable: Vec<bool>,
}

impl DimsState {
    pub fn new(ndim: usize) -> Self {
        Self {
            ndim,
            ndisplay: DEFAULT_NDISPLAY,
            order: (0..ndim).collect(),
            axis_labels: default_axis_labels(ndim),
            rollable: vec![true; ndim],
        }
    }

    /// Fills fields left empty in a hand-written state with their defaults.
    pub fn fill_defaults(&mut self) {
        if self.order.is_empty() {
            self.order = (0..self.ndim).collect();
        }
        if self.axis_labels.is_empty() {
            self.axis_labels = default_axis_labels(self.ndim);
        }
        if self.rollable.is_empty() {
            self.rollable = vec![true; self.ndim];
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(2..=3).contains(&self.ndisplay) {
            return Err(CoreError::InvalidNdisplay(self.ndisplay));
        }
        self.validate_order(&self.order)?;
        if self.axis_labels.len() != self.ndim {
            return Err(CoreError::LengthMismatch {
                field: "axis_labels",
                expected: self.ndim,
                actual: self.axis_labels.len(),
            });
        }
        if self.rollable.len() != self.ndim {
            return Err(CoreError::LengthMismatch {
                field: "rollable",
                expected: self.ndim,
                actual: self.rollable.len(),
            });
        }
        Ok(())
    }

    /// Checks that `order` is a permutation of `0..ndim`.
    pub fn validate_order(&self, order: &[usize]) -> Result<()> {
        if order.len() != self.ndim {
            return Err(CoreError::LengthMismatch {
                field: "order",
                expected: self.ndim,
                actual: order.len(),
            });
        }
        let mut seen = vec![false; self.ndim];
        for &axis in order {
            let slot = seen.get_mut(axis).ok_or(CoreError::AxisOutOfRange {
                axis,
                ndim: self.ndim,
            })?;
            if *slot {
                return Err(CoreError::InvalidOrder {
                    order: order.to_vec(),
                    reason: format!("axis {axis} appears more than once"),
                });
            }
            *slot = true;
        }
        Ok(())
    }

    pub fn check_axis(&self, axis: usize) -> Result<()> {
        if axis >= self.ndim {
            return Err(CoreError::AxisOutOfRange {
                axis,
                ndim: self.ndim,
            });
        }
        Ok(())
    }

    pub fn displayed(&self) -> Vec<usize> {
        let split = self.ndim.saturating_sub(self.ndisplay);
        self.order[split..].to_vec()
    }

    pub fn not_displayed(&self) -> Vec<usize> {
        let split = self.ndim.saturating_sub(self.ndisplay);
        self.order[..split].to_vec()
    }

    pub fn locked_axes(&self) -> Vec<usize> {
        self.rollable
            .iter()
            .enumerate()
            .filter_map(|(axis, rollable)| (!rollable).then_some(axis))
            .collect()
    }

    /// Rotates the unlocked axes one slot to the right; locked axes keep
    /// their positions.
    pub fn rolled_order(&self) -> Vec<usize> {
        let slots = self
            .order
            .iter()
            .enumerate()
            .filter_map(|(position, axis)| self.rollable[*axis].then_some(position))
            .collect::<Vec<_>>();
        let mut order = self.order.clone();
        if slots.len() < 2 {
            return order;
        }
        let axes = slots
            .iter()
            .map(|position| self.order[*position])
            .collect::<Vec<_>>();
        for (index, position) in slots.iter().enumerate() {
            order[*position] = axes[(index + axes.len() - 1) % axes.len()];
        }
        order
    }

    /// Swaps the last two axes of the order, if both are unlocked.
    pub fn transposed_order(&self) -> Option<Vec<usize>> {
        if self.ndim < 2 {
            return None;
        }
        let (a, b) = (self.order[self.ndim - 2], self.order[self.ndim - 1]);
        if !(self.rollable[a] && self.rollable[b]) {
            return None;
        }
        let mut order = self.order.clone();
        order.swap(self.ndim - 2, self.ndim - 1);
        Some(order)
    }

    /// Returns the state adjusted to `ndim` dimensions.
    ///
    /// Growing prepends the new axes (ids `0..added`) to the order and shifts
    /// existing ids up. Shrinking keeps the last `ndim` entries of the order
    /// and re-ranks their ids to `0..ndim`; labels and lock flags follow the
    /// surviving axes.
    pub fn resized(&self, ndim: usize) -> Self {
        let default_labels = self.axis_labels == default_axis_labels(self.ndim);
        let mut next = self.clone();
        next.ndim = ndim;

        if ndim >= self.ndim {
            let added = ndim - self.ndim;
            next.order = (0..added)
                .chain(self.order.iter().map(|axis| axis + added))
                .collect();
            next.rollable = std::iter::repeat_n(true, added)
                .chain(self.rollable.iter().copied())
                .collect();
            next.axis_labels = if default_labels {
                default_axis_labels(ndim)
            } else {
                default_axis_labels(added)
                    .into_iter()
                    .chain(self.axis_labels.iter().cloned())
                    .collect()
            };
        } else {
            let kept = &self.order[self.ndim - ndim..];
            let mut survivors = kept.to_vec();
            survivors.sort_unstable();
            next.order = kept
                .iter()
                .filter_map(|axis| survivors.binary_search(axis).ok())
                .collect();
            next.rollable = survivors.iter().map(|axis| self.rollable[*axis]).collect();
            next.axis_labels = if default_labels {
                default_axis_labels(ndim)
            } else {
                survivors
                    .iter()
                    .map(|axis| self.axis_labels[*axis].clone())
                    .collect()
            };
        }
        next
    }
}
