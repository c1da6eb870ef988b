//! Pin colors and their display symbols.

use crate::error::GameError;

/// One of the twelve pin colors, in secret-generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PinColor {
    Yellow,
    Orange,
    Red,
    Green,
    Blue,
    Cyan,
    Pink,
    Magenta,
    Silver,
    Gold,
    White,
    Black,
}

/// Reverse lookup from an ASCII symbol (either case) to its color.
const SYMBOL_TABLE: [Option<PinColor>; 128] = build_symbol_table();

const fn build_symbol_table() -> [Option<PinColor>; 128] {
    let mut table = [None; 128];
    let mut i = 0;
    while i < PinColor::COUNT {
        let color = PinColor::ALL[i];
        let upper = color.symbol() as u32 as usize;
        table[upper] = Some(color);
        table[upper + (b'a' - b'A') as usize] = Some(color);
        i += 1;
    }
    table
}

impl PinColor {
    /// Number of defined colors
    pub const COUNT: usize = 12;

    /// All colors in enumeration order
    pub const ALL: [PinColor; Self::COUNT] = [
        PinColor::Yellow,
        PinColor::Orange,
        PinColor::Red,
        PinColor::Green,
        PinColor::Blue,
        PinColor::Cyan,
        PinColor::Pink,
        PinColor::Magenta,
        PinColor::Silver,
        PinColor::Gold,
        PinColor::White,
        PinColor::Black,
    ];

    /// Ordinal of this color within [`PinColor::ALL`]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Single-character display symbol (always uppercase)
    pub const fn symbol(self) -> char {
        match self {
            PinColor::Yellow => 'Y',
            PinColor::Orange => 'O',
            PinColor::Red => 'R',
            PinColor::Green => 'G',
            PinColor::Blue => 'B',
            PinColor::Cyan => 'C',
            PinColor::Pink => 'P',
            PinColor::Magenta => 'M',
            PinColor::Silver => 'S',
            PinColor::Gold => 'D',
            PinColor::White => 'W',
            PinColor::Black => 'K',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            PinColor::Yellow => "yellow",
            PinColor::Orange => "orange",
            PinColor::Red => "red",
            PinColor::Green => "green",
            PinColor::Blue => "blue",
            PinColor::Cyan => "cyan",
            PinColor::Pink => "pink",
            PinColor::Magenta => "magenta",
            PinColor::Silver => "silver",
            PinColor::Gold => "gold",
            PinColor::White => "white",
            PinColor::Black => "black",
        }
    }

    /// Look up a color by symbol, ignoring case.
    pub fn from_symbol(symbol: char) -> Result<Self, GameError> {
        usize::try_from(u32::from(symbol))
            .ok()
            .and_then(|code| SYMBOL_TABLE.get(code).copied().flatten())
            .ok_or(GameError::UnknownSymbol(symbol))
    }

    /// The first `count` colors, i.e. the colors in play on a board.
    pub fn palette(count: usize) -> &'static [PinColor] {
        &Self::ALL[..count.min(Self::COUNT)]
    }
}

impl std::fmt::Display for PinColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Render a combination as space-separated symbols.
pub fn to_symbol_string(colors: &[PinColor]) -> String {
    let symbols: Vec<String> = colors.iter().map(|c| c.symbol().to_string()).collect();
    symbols.join(" ")
}
