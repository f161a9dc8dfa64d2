use std::rc::Rc;

use eframe::egui;
use tracing::{debug, warn};

use crate::events::EventEmitter;
use crate::model::Dims;
use crate::sorter::DimsSorter;

use super::DimsSorterPanel;

pub const DEFAULT_NDIM: usize = 4;
const WINDOW_TITLE: &str = "dims-sorter";
const WINDOW_SIZE: [f32; 2] = [280.0, 320.0];

pub struct DimsSorterApp {
    panel: DimsSorterPanel,
    sorter: DimsSorter,
    finished: EventEmitter<()>,
    closed: bool,
    status: Option<String>,
}

impl DimsSorterApp {
    pub fn new(dims: Rc<Dims>) -> Self {
        let sorter = DimsSorter::new(dims);
        let finished = EventEmitter::new("panel.finished");
        sorter.close_on(&finished);
        let panel = DimsSorterPanel::new(Rc::clone(sorter.dims()), Rc::clone(sorter.axis_list()));
        Self {
            panel,
            sorter,
            finished,
            closed: false,
            status: None,
        }
    }

    pub fn sorter(&self) -> &DimsSorter {
        &self.sorter
    }

    /// Fires `finished` once; the sorter disconnects on it.
    pub fn close(&mut self) {
        if !self.closed {
            self.closed = true;
            debug!("dims sorter panel closing");
            self.finished.emit(());
        }
    }
}

impl eframe::App for DimsSorterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|input| input.viewport().close_requested()) {
            self.close();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            for action in self.panel.show(ui) {
                if let Err(error) = self.panel.apply(action) {
                    warn!(%error, ?action, "panel action rejected");
                    self.status = Some(error.to_string());
                }
            }
            if let Some(error) = self.sorter.take_error() {
                self.status = Some(error.to_string());
            }
            if let Some(status) = &self.status {
                ui.colored_label(egui::Color32::RED, status);
            }
        });
    }
}

pub fn run(dims: Dims) -> eframe::Result<()> {
    let dims = Rc::new(dims);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(WINDOW_SIZE)
            .with_min_inner_size(WINDOW_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(DimsSorterApp::new(dims)))),
    )
}
