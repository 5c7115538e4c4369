use super::*;

/// The listeners registered with a single cell. Conceptually a set of Weaks: you can't hash or
/// compare a Weak, so entries are keyed by the pointers obtained with thin_ptr(). Most lists hold
/// zero or one entries and delivery speed matters most, so a Vec is used instead of a map.
pub struct SubscriberList(Vec<(usize, Weak<dyn Subscriber>)>);

impl SubscriberList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn add(&mut self, subscriber: &Rc<dyn Subscriber>) -> CellResult<()> {
        let subscriber_ptr = subscriber.thin_ptr() as usize;
        if self
            .0
            .iter()
            .any(|(ptr, _subscriber)| *ptr == subscriber_ptr)
        {
            Err(CellError::AlreadySubscribed)
        } else {
            self.0.push((subscriber_ptr, Rc::downgrade(subscriber)));
            Ok(())
        }
    }

    pub fn remove(&mut self, subscriber: &Weak<dyn Subscriber>) -> CellResult<()> {
        let subscriber_ptr = subscriber.thin_ptr() as usize;
        match self
            .0
            .iter()
            .position(|(ptr, _subscriber)| *ptr == subscriber_ptr)
        {
            None => Err(CellError::NotSubscribed),
            Some(i) => {
                self.0.swap_remove(i);
                Ok(())
            }
        }
    }

    /// Delivers an event to every live listener before returning
    pub fn send(&self, event: &ChangeEvent) {
        for (_ptr, subscriber) in &self.0 {
            match subscriber.upgrade() {
                Some(subscriber) => subscriber.notify(event),
                None => error!("dead listener in subscriber list; it should have been removed before being dropped"),
            }
        }
    }
}
