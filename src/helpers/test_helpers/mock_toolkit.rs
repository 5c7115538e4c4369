use super::*;
use std::cell::RefCell;

#[derive(Debug, PartialEq, Clone)]
pub enum WindowCall {
    SetMinSize(Option<Size>),
    Pack,
}

struct MockWindowInner {
    size: Size,
    min_size: Option<Size>,
    calls: Vec<WindowCall>,
}

/// Records the sizing calls made on it. Clones share state, so a test can keep one handle while
/// an editor owns another.
#[derive(Clone)]
pub struct MockWindow(Rc<RefCell<MockWindowInner>>);

impl MockWindow {
    pub fn new(size: Size) -> Self {
        Self(Rc::new(RefCell::new(MockWindowInner {
            size,
            min_size: None,
            calls: Vec::new(),
        })))
    }

    pub fn calls(&self) -> Vec<WindowCall> {
        self.0.borrow().calls.clone()
    }

    pub fn min_size(&self) -> Option<Size> {
        self.0.borrow().min_size
    }
}

impl WindowHandle for MockWindow {
    fn size(&self) -> Size {
        self.0.borrow().size
    }

    fn set_min_size(&mut self, min: Option<Size>) {
        let mut inner = self.0.borrow_mut();
        inner.min_size = min;
        inner.calls.push(WindowCall::SetMinSize(min));
    }

    fn pack(&mut self) {
        self.0.borrow_mut().calls.push(WindowCall::Pack);
    }
}

pub struct MockDisplay(Option<Size>);

impl MockDisplay {
    pub fn headless() -> Self {
        Self(None)
    }

    pub fn with_resolution(size: Size) -> Self {
        Self(Some(size))
    }
}

impl DisplayInfo for MockDisplay {
    fn resolution(&self) -> Option<Size> {
        self.0
    }
}

struct MockEditor {
    refreshed: Rc<RefCell<Vec<Value>>>,
    window: Option<MockWindow>,
}

impl Editor for MockEditor {
    fn refresh(&mut self, value: &Value) {
        self.refreshed.borrow_mut().push(value.clone());
    }

    fn window(&mut self) -> Option<&mut dyn WindowHandle> {
        self.window.as_mut().map(|window| window as &mut dyn WindowHandle)
    }
}

/// Builds MockEditors that report refreshes back through the factory
pub struct MockEditorFactory {
    refreshed: Rc<RefCell<Vec<Value>>>,
    build_count: RefCell<u32>,
    window: Option<MockWindow>,
}

impl MockEditorFactory {
    pub fn new() -> Self {
        Self {
            refreshed: Rc::new(RefCell::new(Vec::new())),
            build_count: RefCell::new(0),
            window: None,
        }
    }

    pub fn with_window(window: MockWindow) -> Self {
        let mut factory = Self::new();
        factory.window = Some(window);
        factory
    }

    pub fn build_count(&self) -> u32 {
        *self.build_count.borrow()
    }

    /// Every value any built editor has been refreshed with, in order
    pub fn refreshed(&self) -> Vec<Value> {
        self.refreshed.borrow().clone()
    }
}

impl EditorFactory for MockEditorFactory {
    fn build(&self, _cell: &Cell) -> Box<dyn Editor> {
        *self.build_count.borrow_mut() += 1;
        Box::new(MockEditor {
            refreshed: self.refreshed.clone(),
            window: self.window.clone(),
        })
    }
}
