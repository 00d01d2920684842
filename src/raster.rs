use crate::{
    color::Rgba,
    config::{BITS_PER_CHAR, Config},
    layout::Char,
};

/// A finished pattern: a flat, exclusively owned RGBA8 pixel buffer.
#[derive(Clone, Debug)]
pub struct FrameRgba {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl FrameRgba {
    fn solid(width: u32, height: u32, color: Rgba) -> Self {
        let mut data = Vec::with_capacity(width as usize * height as usize * 4);
        for _ in 0..width as usize * height as usize {
            data.extend_from_slice(&[color.r, color.g, color.b, color.a]);
        }
        Self { width, height, data }
    }

    /// Paint an axis-aligned rectangle. Pixels past the canvas edge are
    /// silently clipped.
    fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgba) {
        for py in y..(y + h).min(self.height) {
            for px in x..(x + w).min(self.width) {
                let i = (py as usize * self.width as usize + px as usize) * 4;
                self.data[i..i + 4].copy_from_slice(&[color.r, color.g, color.b, color.a]);
            }
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba {
        let i = (y as usize * self.width as usize + x as usize) * 4;
        Rgba {
            r: self.data[i],
            g: self.data[i + 1],
            b: self.data[i + 2],
            a: self.data[i + 3],
        }
    }
}

/// Canvas size in pixels: 7 bit-stitches per column plus spacing gaps
/// between and around columns, tall enough for the lowest character and the
/// borders.
pub fn pattern_size(cfg: &Config, charset: &[Char]) -> (u32, u32) {
    let w = (cfg.columns * BITS_PER_CHAR + ((cfg.columns - 1) + 2) * cfg.spacing)
        * cfg.stitch_width;

    let max_y = charset.iter().map(|c| c.y).max().unwrap_or(0);
    let mut h = max_y + cfg.stitch_height;
    if cfg.border > 0 {
        h += cfg.spacing_height() + cfg.border_height() + cfg.spacing_height();
    }

    (w, h)
}

/// Paint the whole pattern: background, optional borders, then every
/// character top-down as 7 bit-colored stitches.
pub fn draw_pattern(cfg: &Config, charset: &[Char]) -> FrameRgba {
    let (width, height) = pattern_size(cfg, charset);
    tracing::debug!(width, height, chars = charset.len(), "rasterizing pattern");

    let mut frame = FrameRgba::solid(width, height, cfg.colors[0]);

    if cfg.border > 0 {
        let x = cfg.spacing_width();
        let w = width - cfg.spacing_width() * 2;
        let h = cfg.border_height();
        frame.fill_rect(x, cfg.spacing_height(), w, h, cfg.colors[1]);
        frame.fill_rect(x, height - cfg.spacing_height() - h, w, h, cfg.colors[1]);
    }

    for c in charset {
        plot_char(&mut frame, cfg, c);
    }

    frame
}

/// Draw the low 7 bits of one character, most significant stitch first.
fn plot_char(frame: &mut FrameRgba, cfg: &Config, c: &Char) {
    if c.value == b' ' {
        // The layout drops spaces at column boundaries; any that survive
        // mid-column are blank on purpose.
        return;
    }

    for bit in 0..BITS_PER_CHAR {
        let shift = BITS_PER_CHAR - 1 - bit;
        let color = cfg.colors[((c.value >> shift) & 1) as usize];
        frame.fill_rect(
            c.x + bit * cfg.stitch_width,
            c.y,
            cfg.stitch_width,
            cfg.stitch_height,
            color,
        );
    }
}
