//! Colour palettes for the game view.

use crate::fb::Rgb;
use crate::types::Tile;

/// The 64-entry NTSC NES palette.
#[rustfmt::skip]
pub const NES_PALETTE: [Rgb; 64] = [
    Rgb::new(124, 124, 124), Rgb::new(0, 0, 252), Rgb::new(0, 0, 188), Rgb::new(68, 40, 188),
    Rgb::new(148, 0, 132), Rgb::new(168, 0, 32), Rgb::new(168, 16, 0), Rgb::new(136, 20, 0),
    Rgb::new(80, 48, 0), Rgb::new(0, 120, 0), Rgb::new(0, 104, 0), Rgb::new(0, 88, 0),
    Rgb::new(0, 64, 88), Rgb::new(0, 0, 0), Rgb::new(0, 0, 0), Rgb::new(0, 0, 0),
    Rgb::new(188, 188, 188), Rgb::new(0, 120, 248), Rgb::new(0, 88, 248), Rgb::new(104, 68, 252),
    Rgb::new(216, 0, 204), Rgb::new(228, 0, 88), Rgb::new(248, 56, 0), Rgb::new(228, 92, 16),
    Rgb::new(172, 124, 0), Rgb::new(0, 184, 0), Rgb::new(0, 168, 0), Rgb::new(0, 168, 68),
    Rgb::new(0, 136, 136), Rgb::new(0, 0, 0), Rgb::new(0, 0, 0), Rgb::new(0, 0, 0),
    Rgb::new(248, 248, 248), Rgb::new(60, 188, 252), Rgb::new(104, 136, 252), Rgb::new(152, 120, 248),
    Rgb::new(248, 120, 248), Rgb::new(248, 88, 152), Rgb::new(248, 120, 88), Rgb::new(252, 160, 68),
    Rgb::new(248, 184, 0), Rgb::new(184, 248, 24), Rgb::new(88, 216, 84), Rgb::new(88, 248, 152),
    Rgb::new(0, 232, 216), Rgb::new(120, 120, 120), Rgb::new(0, 0, 0), Rgb::new(0, 0, 0),
    Rgb::new(252, 252, 252), Rgb::new(164, 228, 252), Rgb::new(184, 184, 248), Rgb::new(216, 184, 248),
    Rgb::new(248, 184, 248), Rgb::new(248, 164, 192), Rgb::new(240, 208, 176), Rgb::new(252, 224, 168),
    Rgb::new(248, 216, 120), Rgb::new(216, 248, 120), Rgb::new(184, 248, 184), Rgb::new(184, 248, 216),
    Rgb::new(0, 252, 252), Rgb::new(248, 216, 248), Rgb::new(0, 0, 0), Rgb::new(0, 0, 0),
];

/// Selectable colour scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaletteKind {
    /// Saturated RGB colours on black
    #[default]
    Classic,
    /// NES hardware colours on a sky-blue background
    Nes,
}

impl PaletteKind {
    pub const ALL: [PaletteKind; 2] = [PaletteKind::Classic, PaletteKind::Nes];

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" => Some(PaletteKind::Classic),
            "nes" => Some(PaletteKind::Nes),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PaletteKind::Classic => "classic",
            PaletteKind::Nes => "nes",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            PaletteKind::Classic => Palette::CLASSIC,
            PaletteKind::Nes => Palette::NES,
        }
    }
}

/// Resolved colours for everything the view draws
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub player: Rgb,
    pub enemy: Rgb,
    pub ground: Rgb,
    pub item: Rgb,
    pub pipe: Rgb,
    pub used_block: Rgb,
    pub text: Rgb,
}

impl Palette {
    pub const CLASSIC: Palette = Palette {
        background: Rgb::BLACK,
        player: Rgb::new(255, 0, 0),
        enemy: Rgb::new(139, 69, 19),
        ground: Rgb::new(0, 0, 255),
        item: Rgb::new(255, 255, 0),
        pipe: Rgb::new(0, 255, 0),
        used_block: Rgb::new(128, 128, 128),
        text: Rgb::WHITE,
    };

    pub const NES: Palette = Palette {
        background: NES_PALETTE[0x31],
        player: NES_PALETTE[0x16],
        enemy: NES_PALETTE[0x07],
        ground: NES_PALETTE[0x12],
        item: NES_PALETTE[0x28],
        pipe: NES_PALETTE[0x1A],
        used_block: NES_PALETTE[0x00],
        text: NES_PALETTE[0x30],
    };

    /// Fill colour of a tile; None for empty tiles
    pub fn tile(&self, tile: Tile) -> Option<Rgb> {
        match tile {
            Tile::Empty => None,
            Tile::Ground => Some(self.ground),
            Tile::UsedBlock => Some(self.used_block),
            Tile::QuestionBlock | Tile::Coin => Some(self.item),
            Tile::Pipe => Some(self.pipe),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::CLASSIC
    }
}
