use crate::constants::{WHEEL_LINE_HEIGHT_PX, WHEEL_PAGE_HEIGHT_PX};
use std::ops::BitOr;

/// Pressed pointer buttons, laid out like DOM `MouseEvent.buttons`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PointerButtons(pub u16);

impl PointerButtons {
    pub const NONE: Self = Self(0);
    pub const PRIMARY: Self = Self(1);
    pub const SECONDARY: Self = Self(2);
    pub const AUXILIARY: Self = Self(4);

    #[inline]
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub fn with(self, other: Self, pressed: bool) -> Self {
        if pressed {
            Self(self.0 | other.0)
        } else {
            Self(self.0 & !other.0)
        }
    }
}

impl BitOr for PointerButtons {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Unit a wheel delta is reported in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollUnit {
    #[default]
    Pixel,
    Line,
    Page,
}

impl ScrollUnit {
    /// Maps DOM `WheelEvent.deltaMode`; unknown modes are treated as pixels.
    #[inline]
    pub fn from_dom_delta_mode(mode: u32) -> Self {
        match mode {
            1 => Self::Line,
            2 => Self::Page,
            _ => Self::Pixel,
        }
    }
}

#[inline]
pub fn wheel_delta_pixels(delta: f32, unit: ScrollUnit) -> f32 {
    match unit {
        ScrollUnit::Pixel => delta,
        ScrollUnit::Line => delta * WHEEL_LINE_HEIGHT_PX,
        ScrollUnit::Page => delta * WHEEL_PAGE_HEIGHT_PX,
    }
}
