mod axis;
mod dims;
mod error;
mod evented_dims;
mod io;

#[cfg(test)]
mod tests;

pub use axis::{AxisModel, HasAxis, default_axis_label, default_axis_labels};
pub use dims::{DEFAULT_NDISPLAY, DimsState};
pub use error::{CoreError, Result, StateIoError};
pub use evented_dims::{Dims, DimsEvents};
pub use io::{load_state, save_state};
