use crate::model::{AxisModel, Dims};

use super::EventedList;

pub type AxisList = EventedList<AxisModel>;

/// One [`AxisModel`] per axis, in the current dims order.
pub fn axis_models(dims: &Dims) -> Vec<AxisModel> {
    let state = dims.state();
    state
        .order
        .iter()
        .map(|axis| AxisModel::new(*axis, state.axis_labels[*axis].clone(), state.rollable[*axis]))
        .collect()
}

pub fn axis_list_from_dims(dims: &Dims) -> AxisList {
    AxisList::new(axis_models(dims))
}

impl EventedList<AxisModel> {
    pub fn axis_order(&self) -> Vec<usize> {
        self.with_items(|items| items.iter().map(|item| item.axis).collect())
    }

    pub fn index_of_axis(&self, axis: usize) -> Option<usize> {
        self.position(|item| item.axis == axis)
    }
}
