use super::*;

/// Resolution reported when no display is attached, such as during automated tests
pub const HEADLESS_RESOLUTION: Size = Size {
    width: 1920,
    height: 1280,
};

/// Where the active display's resolution comes from. Injected rather than read from toolkit
/// globals so cells stay usable without a real display attached.
pub trait DisplayInfo {
    /// None when running headless
    fn resolution(&self) -> Option<Size>;
}

/// The active display's resolution, or a fixed fallback when headless. List editors use this to
/// take up maximum screen real estate when needed.
pub fn screen_size(display: &dyn DisplayInfo) -> Size {
    display.resolution().unwrap_or(HEADLESS_RESOLUTION)
}
