use super::*;

/// An object that is notified when a cell it is registered with changes
pub trait Subscriber {
    fn notify(&self, event: &ChangeEvent);
}
