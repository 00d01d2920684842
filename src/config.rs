use std::path::PathBuf;

use crate::{
    color::Rgba,
    error::{BitscarfError, BitscarfResult},
};

/// Bits rendered per character column. The pattern encodes 7-bit ASCII.
pub const BITS_PER_CHAR: u32 = 7;

/// Immutable run configuration. Built once at startup from defaults plus
/// command-line overrides; every later stage borrows it read-only.
#[derive(Clone, Debug, serde::Serialize)]
pub struct Config {
    /// Output file name.
    pub out: PathBuf,
    /// Number of 7-bit character columns.
    pub columns: u32,
    /// Blank stitches between and around columns.
    pub spacing: u32,
    /// Rows in the optional top/bottom borders (0 disables them).
    pub border: u32,
    /// Stitch width, in pixels.
    pub stitch_width: u32,
    /// Stitch height, in pixels.
    pub stitch_height: u32,
    /// Palette: index 0 paints "0" bits and the background, index 1 paints
    /// "1" bits and the borders.
    pub colors: [Rgba; 2],
}

impl Default for Config {
    fn default() -> Self {
        Self {
            out: PathBuf::from("out.png"),
            columns: 3,
            spacing: 2,
            border: 2,
            stitch_width: 2,
            stitch_height: 3,
            colors: [Rgba::opaque(0xff, 0xff, 0xff), Rgba::opaque(0x64, 0x73, 0x84)],
        }
    }
}

impl Config {
    pub fn border_width(&self) -> u32 {
        self.border * self.stitch_width
    }

    pub fn border_height(&self) -> u32 {
        self.border * self.stitch_height
    }

    pub fn spacing_width(&self) -> u32 {
        self.spacing * self.stitch_width
    }

    pub fn spacing_height(&self) -> u32 {
        self.spacing * self.stitch_height
    }

    pub fn column_width(&self) -> u32 {
        BITS_PER_CHAR * self.stitch_width
    }

    /// Reject dimensions the layout cannot work with. Spacing and border may
    /// be zero; everything else must be at least one.
    pub fn validate(&self) -> BitscarfResult<()> {
        if self.out.as_os_str().is_empty() {
            return Err(BitscarfError::validation("output path must not be empty"));
        }
        if self.columns < 1 {
            return Err(BitscarfError::validation("columns must be >= 1"));
        }
        if self.stitch_width < 1 || self.stitch_height < 1 {
            return Err(BitscarfError::validation(
                "stitch width and height must be >= 1 pixel",
            ));
        }
        Ok(())
    }
}
