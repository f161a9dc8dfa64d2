mod app;
mod panel;


pub use app::{DEFAULT_NDIM, DimsSorterApp, run};
pub use panel::{DimsSorterPanel, HELP_TOOLTIP, PanelAction, TITLE};
