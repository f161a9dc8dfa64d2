mod emitter;
mod subscription;


pub use emitter::{EventBlocker, EventEmitter};
pub use subscription::Subscription;
