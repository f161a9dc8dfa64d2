mod error;
mod reindex;
mod sync;


pub use error::{ReorderError, Result};
pub use reindex::{Move, MovePlan, MoveReport, apply_order, plan_moves};
pub use sync::{DimsSorter, SyncDirection};
