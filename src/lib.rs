//! Property cells backing a board-game editor's configuration panels. Each cell pairs a keyed,
//! named value with the text codec of its kind and synchronously notifies listeners of changes.
//! The host UI toolkit sits behind the narrow traits in toolkit, so nothing here depends on a
//! concrete widget library.

#[macro_use]
extern crate log;

mod cell;
mod helpers;
mod toolkit;

pub use cell::{
    CastResult, Cell, CellError, CellKind, CellResult, CellSet, ChangeEvent, Subscriber,
    SubscriberList, Value,
};
pub use helpers::{ColorRGB, ThinPtr};
pub use toolkit::{
    repack, screen_size, DisplayInfo, Editor, EditorFactory, Size, WindowHandle,
    HEADLESS_RESOLUTION,
};

#[cfg(test)]
use helpers::*;

use std::error::Error;
use std::fmt;
use std::rc::{Rc, Weak};
