mod axis_list;
mod error;
mod evented_list;


pub use axis_list::{AxisList, axis_list_from_dims, axis_models};
pub use error::{ListError, Result};
pub use evented_list::{ChangeEvent, EventedList, ListEvents, MoveEvent, RemoveEvent};
