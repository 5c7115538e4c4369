use super::*;
use std::cell::RefCell;

struct MockSubscriberInner {
    events: RefCell<Vec<ChangeEvent>>,
    f: Box<dyn Fn(&ChangeEvent)>,
}

pub struct MockSubscriber(Rc<MockSubscriberInner>);

impl MockSubscriber {
    pub fn new() -> Self {
        Self::new_with_fn(|_| ())
    }

    pub fn new_terrified() -> Self {
        Self::new_with_fn(|_| panic!("mock subscriber should not have been notified"))
    }

    pub fn new_with_fn<F>(f: F) -> Self
    where
        F: Fn(&ChangeEvent) + 'static,
    {
        Self(Rc::new(MockSubscriberInner {
            events: RefCell::new(Vec::new()),
            f: Box::new(f),
        }))
    }

    pub fn get(&self) -> Rc<dyn Subscriber> {
        self.0.clone()
    }

    pub fn weak(&self) -> Weak<dyn Subscriber> {
        Rc::downgrade(&self.0) as Weak<dyn Subscriber>
    }

    pub fn notify_count(&self) -> usize {
        self.0.events.borrow().len()
    }

    pub fn events(&self) -> Vec<ChangeEvent> {
        self.0.events.borrow().clone()
    }
}

impl Subscriber for MockSubscriberInner {
    fn notify(&self, event: &ChangeEvent) {
        self.events.borrow_mut().push(event.clone());
        (self.f)(event);
    }
}
