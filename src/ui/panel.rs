use std::rc::Rc;

use eframe::egui;

use crate::containers::AxisList;
use crate::model::Dims;
use crate::sorter::ReorderError;

pub const TITLE: &str = "Dims. Ordering";
pub const HELP_TOOLTIP: &str = "Drag dimensions to reorder, uncheck to lock dimension in place.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    Move { src: usize, dst: usize },
    SetRollable { index: usize, rollable: bool },
    Roll,
    Transpose,
    UnlockAll,
}

/// Draws the axis list and turns user input into [`PanelAction`]s.
///
/// Actions only touch the axis list or the dims model; the bound
/// `DimsSorter` carries every change to the other side.
#[derive(Debug)]
pub struct DimsSorterPanel {
    dims: Rc<Dims>,
    axis_list: Rc<AxisList>,
}

impl DimsSorterPanel {
    pub fn new(dims: Rc<Dims>, axis_list: Rc<AxisList>) -> Self {
        Self { dims, axis_list }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> Vec<PanelAction> {
        let mut actions = Vec::new();

        ui.horizontal(|ui| {
            ui.strong(TITLE);
            ui.label("(?)").on_hover_text(HELP_TOOLTIP);
        });
        ui.separator();

        let items = self.axis_list.to_vec();
        for (index, item) in items.iter().enumerate() {
            ui.horizontal(|ui| {
                let mut rollable = item.rollable;
                let hint = if rollable {
                    "Uncheck to lock this dimension"
                } else {
                    "Locked; check to let this dimension roll"
                };
                if ui.checkbox(&mut rollable, "").on_hover_text(hint).changed() {
                    actions.push(PanelAction::SetRollable { index, rollable });
                }

                let row_id = egui::Id::new(("dims-sorter-row", item.axis));
                let response = ui
                    .dnd_drag_source(row_id, index, |ui| {
                        ui.label(format!("\u{2630}  {item}"));
                    })
                    .response;
                if let Some(dragged) = response.dnd_release_payload::<usize>() {
                    let src = *dragged;
                    if src != index {
                        actions.push(PanelAction::Move { src, dst: index });
                    }
                }
            });
        }

        ui.separator();
        ui.horizontal(|ui| {
            if ui
                .button("Roll")
                .on_hover_text("Roll the unlocked dimensions")
                .clicked()
            {
                actions.push(PanelAction::Roll);
            }
            if ui
                .button("Transpose")
                .on_hover_text("Swap the two displayed dimensions")
                .clicked()
            {
                actions.push(PanelAction::Transpose);
            }
            if ui
                .button("Unlock all")
                .on_hover_text("Let every dimension roll")
                .clicked()
            {
                actions.push(PanelAction::UnlockAll);
            }
        });
        ui.label(format!(
            "Displayed ({}): {:?}",
            self.dims.ndisplay(),
            self.dims.displayed()
        ));

        actions
    }

    pub fn apply(&self, action: PanelAction) -> Result<(), ReorderError> {
        match action {
            PanelAction::Move { src, dst } => {
                self.axis_list.move_item(src, dst)?;
            }
            PanelAction::SetRollable { index, rollable } => {
                self.axis_list
                    .update(index, |item| item.rollable = rollable)?;
            }
            PanelAction::Roll => {
                self.dims.roll();
            }
            PanelAction::Transpose => {
                self.dims.transpose();
            }
            PanelAction::UnlockAll => {
                self.dims.set_rollable(vec![true; self.dims.ndim()])?;
            }
        }
        Ok(())
    }
}
