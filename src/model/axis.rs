use std::fmt;

use serde::{Deserialize, Serialize};

/// Anything that carries a stable axis identifier.
pub trait HasAxis {
    fn axis(&self) -> usize;
}

impl HasAxis for usize {
    fn axis(&self) -> usize {
        *self
    }
}

/// One row of the axis list: an axis, its label and its lock flag.
///
/// `rollable == false` means the axis is locked in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisModel {
    pub axis: usize,
    pub label: String,
    pub rollable: bool,
}

impl AxisModel {
    pub fn new(axis: usize, label: impl Into<String>, rollable: bool) -> Self {
        Self {
            axis,
            label: label.into(),
            rollable,
        }
    }

    pub fn is_locked(&self) -> bool {
        !self.rollable
    }
}

impl HasAxis for AxisModel {
    fn axis(&self) -> usize {
        self.axis
    }
}

impl PartialEq<usize> for AxisModel {
    fn eq(&self, other: &usize) -> bool {
        self.axis == *other
    }
}

impl fmt::Display for AxisModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

pub fn default_axis_label(index: usize) -> String {
    index.to_string()
}

pub fn default_axis_labels(ndim: usize) -> Vec<String> {
    (0..ndim).map(default_axis_label).collect()
}
