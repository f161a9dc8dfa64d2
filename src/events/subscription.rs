use std::fmt;

/// Handle for one connected callback.
///
/// Dropping the handle disconnects the callback. Owners keep their handles
/// next to the state the callbacks touch, so teardown of the owner is
/// teardown of the connection.
#[must_use = "dropping a Subscription disconnects its callback"]
pub struct Subscription {
    disconnect: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub(crate) fn new(disconnect: impl FnOnce() + 'static) -> Self {
        Self {
            disconnect: Some(Box::new(disconnect)),
        }
    }

    pub fn disconnect(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(disconnect) = self.disconnect.take() {
            disconnect();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("connected", &self.disconnect.is_some())
            .finish()
    }
}
