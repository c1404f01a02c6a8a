//! Text Style Model
//!
//! Colors and the format value that SGR codes fold into. A `Format` is
//! always fully specified; a reset replaces the whole value rather than
//! merging fields.

use serde::{Deserialize, Serialize};

/// Named terminal color.
///
/// The eight standard colors, their bright variants (non-standard and not
/// universally supported), and a `Default` sentinel meaning "no explicit
/// color set, use the terminal or theme default". Extended 256-color and
/// RGB palettes are not modeled; their introducer codes fold as no-ops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// No explicit color set
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl Color {
    /// Create color from a standard palette index (0-7)
    pub fn from_standard(index: u16) -> Option<Self> {
        match index {
            0 => Some(Color::Black),
            1 => Some(Color::Red),
            2 => Some(Color::Green),
            3 => Some(Color::Yellow),
            4 => Some(Color::Blue),
            5 => Some(Color::Magenta),
            6 => Some(Color::Cyan),
            7 => Some(Color::White),
            _ => None,
        }
    }

    /// Create color from a bright palette index (0-7)
    pub fn from_bright(index: u16) -> Option<Self> {
        match index {
            0 => Some(Color::BrightBlack),
            1 => Some(Color::BrightRed),
            2 => Some(Color::BrightGreen),
            3 => Some(Color::BrightYellow),
            4 => Some(Color::BrightBlue),
            5 => Some(Color::BrightMagenta),
            6 => Some(Color::BrightCyan),
            7 => Some(Color::BrightWhite),
            _ => None,
        }
    }
}

/// Text formatting in effect for a span of output.
///
/// Every field is always populated. SGR code 0 replaces the whole value
/// with [`Format::default`], discarding all prior state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Format {
    /// Foreground color
    pub foreground: Color,

    /// Background color
    pub background: Color,

    /// Bold / increased intensity
    pub bold: bool,

    /// Italic
    pub italic: bool,

    /// Underline
    pub underline: bool,

    /// Strikethrough
    pub strike: bool,

    /// Blinking text (slow and fast blink are not distinguished)
    pub blink: bool,

    /// Swapped foreground and background
    pub reverse: bool,
}

impl Format {
    /// Fold one SGR code into this format, returning the updated value.
    ///
    /// Codes outside the supported table leave the format unchanged;
    /// terminals routinely emit codes a renderer does not support, so an
    /// unknown code is a normal occurrence rather than an error. The
    /// extended-color introducers 38 and 48 are accepted but their
    /// sub-parameters are not interpreted.
    pub fn apply(mut self, code: u16) -> Self {
        match code {
            0 => Self::default(),
            1 => {
                self.bold = true;
                self
            }
            3 => {
                self.italic = true;
                self
            }
            4 => {
                self.underline = true;
                self
            }
            5 | 6 => {
                self.blink = true;
                self
            }
            7 => {
                self.reverse = true;
                self
            }
            9 => {
                self.strike = true;
                self
            }
            21 => {
                self.bold = false;
                self
            }
            23 => {
                self.italic = false;
                self
            }
            24 => {
                self.underline = false;
                self
            }
            27 => {
                self.reverse = false;
                self
            }
            29 => {
                self.strike = false;
                self
            }
            30..=37 => {
                self.foreground = Color::from_standard(code - 30).unwrap_or_default();
                self
            }
            39 => {
                self.foreground = Color::Default;
                self
            }
            40..=47 => {
                self.background = Color::from_standard(code - 40).unwrap_or_default();
                self
            }
            49 => {
                self.background = Color::Default;
                self
            }
            90..=97 => {
                self.foreground = Color::from_bright(code - 90).unwrap_or_default();
                self
            }
            100..=107 => {
                self.background = Color::from_bright(code - 100).unwrap_or_default();
                self
            }
            _ => self,
        }
    }

    /// Fold a sequence of SGR codes left to right, each seeing the result
    /// of the previous.
    pub fn apply_all<I>(self, codes: I) -> Self
    where
        I: IntoIterator<Item = u16>,
    {
        codes.into_iter().fold(self, Format::apply)
    }
}
