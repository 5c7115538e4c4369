use super::*;

mod mock_subscriber;
mod mock_toolkit;

pub use mock_subscriber::MockSubscriber;
pub use mock_toolkit::{MockDisplay, MockEditorFactory, MockWindow, WindowCall};
