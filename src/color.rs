use crate::error::{BitscarfError, BitscarfResult};

/// Straight (non-premultiplied) RGBA8 color. Pattern colors are always
/// fully opaque.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    /// Parse a `0xRRGGBB` literal (case-insensitive). Alpha is forced to
    /// 0xff; the knitting chart has no translucent stitches.
    pub fn parse(v: &str) -> BitscarfResult<Self> {
        let v = v.to_lowercase();
        if v.len() != 8 || !v.is_ascii() || !v.starts_with("0x") {
            return Err(BitscarfError::color(format!(
                "invalid or missing color value: {v:?}"
            )));
        }

        fn hex_byte(pair: &str) -> BitscarfResult<u8> {
            u8::from_str_radix(pair, 16)
                .map_err(|_| BitscarfError::color(format!("invalid hex byte {pair:?}")))
        }

        let v = &v[2..];
        Ok(Self::opaque(
            hex_byte(&v[0..2])?,
            hex_byte(&v[2..4])?,
            hex_byte(&v[4..6])?,
        ))
    }
}
