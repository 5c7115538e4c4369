use super::*;

/// Adapter around the toolkit-native editing widget of one cell. The widget pushes user edits
/// back through Cell::set_value_from_text(); the cell pushes programmatic changes here.
pub trait Editor {
    /// Called after a programmatic value change, unless the cell's no_update flag is set
    fn refresh(&mut self, value: &Value);

    /// The window hosting this editor's widget, when it is attached to one
    fn window(&mut self) -> Option<&mut dyn WindowHandle> {
        None
    }
}

/// Builds toolkit-native editors. Implemented by the host toolkit and handed to Cell::controls().
pub trait EditorFactory {
    fn build(&self, cell: &Cell) -> Box<dyn Editor>;
}
