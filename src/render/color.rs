// src/render/color.rs

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

// CSS names a backend is likely to send for a risk badge
const NAMED_COLORS: &[(&str, Rgba)] = &[
    ("black", Rgba::rgb(0, 0, 0)),
    ("blue", Rgba::rgb(0, 0, 255)),
    ("crimson", Rgba::rgb(220, 20, 60)),
    ("darkgreen", Rgba::rgb(0, 100, 0)),
    ("darkorange", Rgba::rgb(255, 140, 0)),
    ("darkred", Rgba::rgb(139, 0, 0)),
    ("gold", Rgba::rgb(255, 215, 0)),
    ("gray", Rgba::rgb(128, 128, 128)),
    ("green", Rgba::rgb(0, 128, 0)),
    ("grey", Rgba::rgb(128, 128, 128)),
    ("lime", Rgba::rgb(0, 255, 0)),
    ("limegreen", Rgba::rgb(50, 205, 50)),
    ("maroon", Rgba::rgb(128, 0, 0)),
    ("navy", Rgba::rgb(0, 0, 128)),
    ("olive", Rgba::rgb(128, 128, 0)),
    ("orange", Rgba::rgb(255, 165, 0)),
    ("orangered", Rgba::rgb(255, 69, 0)),
    ("purple", Rgba::rgb(128, 0, 128)),
    ("red", Rgba::rgb(255, 0, 0)),
    ("silver", Rgba::rgb(192, 192, 192)),
    ("teal", Rgba::rgb(0, 128, 128)),
    ("tomato", Rgba::rgb(255, 99, 71)),
    ("white", Rgba::rgb(255, 255, 255)),
    ("yellow", Rgba::rgb(255, 255, 0)),
];

/// Accepts `#rgb`, `#rrggbb`, `#rrggbbaa` or an allowlisted color name.
/// Anything else (CSS functions, url(), stray text) is refused.
pub fn parse_color(raw: &str) -> Option<Rgba> {
    let value = raw.trim();
    match value.strip_prefix('#') {
        Some(hex) => parse_hex(hex),
        None => NAMED_COLORS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(value))
            .map(|(_, rgba)| *rgba),
    }
}

fn parse_hex(hex: &str) -> Option<Rgba> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    // #abc expands each digit: a -> aa
    let short = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);

    match hex.len() {
        3 => Some(Rgba::rgb(short(0)?, short(1)?, short(2)?)),
        6 => Some(Rgba::rgb(channel(0)?, channel(2)?, channel(4)?)),
        8 => Some(Rgba {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
            a: channel(6)?,
        }),
        _ => None,
    }
}
