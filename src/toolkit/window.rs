use super::*;

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// The window hosting a cell's editing widget. Implemented by the host toolkit; the cell layer
/// only ever sees this interface.
pub trait WindowHandle {
    fn size(&self) -> Size;
    /// None clears any previously set minimum
    fn set_min_size(&mut self, min: Option<Size>);
    /// Asks the toolkit to re-run layout and fit the window to its contents
    fn pack(&mut self);
}

/// Re-measures a window so it can grow to fit its widget tree, but never shrink. Toolkit layout
/// passes may shrink a window below its content size, so the current size is pinned as a
/// temporary minimum around the pass.
pub fn repack(window: &mut dyn WindowHandle) {
    let current = window.size();
    window.set_min_size(Some(current));
    window.pack();
    window.set_min_size(None);
}
