//! General useful bits and bobs

use super::*;

mod color_rgb;
#[cfg(test)]
mod test_helpers;
mod thin_ptr;

pub use color_rgb::ColorRGB;
#[cfg(test)]
pub use test_helpers::*;
pub use thin_ptr::ThinPtr;
