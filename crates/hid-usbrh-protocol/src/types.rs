//! Shared protocol types

/// The two indicator LEDs on the USBRH front face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedChannel {
    Green,
    Red,
}

impl LedChannel {
    /// Feature-report selector byte: 0x03 green, 0x04 red.
    pub fn selector(self) -> u8 {
        match self {
            Self::Green => 3,
            Self::Red => 4,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Red => "red",
        }
    }
}
