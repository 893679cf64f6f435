use std::fmt;

/// Board background color.
///
/// The five palette entries map to fixed CSS values. Anything else read from
/// storage or supplied by the presentation layer is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ThemeColor {
    #[default]
    Default,
    Red,
    Green,
    Blue,
    Amber,
    Custom(String),
}

impl ThemeColor {
    pub const PALETTE: [ThemeColor; 5] = [
        ThemeColor::Red,
        ThemeColor::Green,
        ThemeColor::Blue,
        ThemeColor::Amber,
        ThemeColor::Default,
    ];

    /// Map a stored CSS value back to a color. Empty means the default.
    pub fn from_css(value: &str) -> Self {
        match value {
            "" | "#fafaf9" => ThemeColor::Default,
            "#fb7185" => ThemeColor::Red,
            "#4ade80" => ThemeColor::Green,
            "#38bdf8" => ThemeColor::Blue,
            "#fbbf24" => ThemeColor::Amber,
            other => ThemeColor::Custom(other.to_string()),
        }
    }

    pub fn as_css(&self) -> &str {
        match self {
            ThemeColor::Default => "#fafaf9",
            ThemeColor::Red => "#fb7185",
            ThemeColor::Green => "#4ade80",
            ThemeColor::Blue => "#38bdf8",
            ThemeColor::Amber => "#fbbf24",
            ThemeColor::Custom(value) => value,
        }
    }

    pub fn is_palette(&self) -> bool {
        !matches!(self, ThemeColor::Custom(_))
    }

    /// Text color that stays readable on this background.
    pub fn foreground(&self) -> &'static str {
        match self {
            ThemeColor::Default => "#020617",
            _ => "white",
        }
    }
}

impl fmt::Display for ThemeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

impl From<&str> for ThemeColor {
    fn from(value: &str) -> Self {
        ThemeColor::from_css(value)
    }
}

impl From<String> for ThemeColor {
    fn from(value: String) -> Self {
        ThemeColor::from_css(&value)
    }
}
