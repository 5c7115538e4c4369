//! The windowing toolkit as seen from the cell layer: a narrow set of traits the host implements,
//! so no cell code depends on a concrete widget library

use super::*;

mod display;
mod editor;
mod window;

pub use display::{screen_size, DisplayInfo, HEADLESS_RESOLUTION};
pub use editor::{Editor, EditorFactory};
pub use window::{repack, Size, WindowHandle};
