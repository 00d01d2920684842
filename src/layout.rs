use crate::config::Config;

/// One character to be drawn: its byte value plus the pixel position of the
/// top-left corner of its 7-stitch row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Char {
    pub value: u8,
    pub x: u32,
    pub y: u32,
}

/// Place every character of the filtered text, column-major.
///
/// Each column holds `ceil(len / columns)` characters. Spaces that would
/// land on the first or last row of a column are dropped so no column
/// starts or ends with a blank stitch row; a last-row space also forces the
/// wrap to the next column.
#[tracing::instrument(skip(text), fields(len = text.len()))]
pub fn build_charset(cfg: &Config, text: &[u8]) -> Vec<Char> {
    let rows = (text.len() as u32).div_ceil(cfg.columns);

    let mut top = cfg.spacing_height();
    if cfg.border > 0 {
        top += cfg.border_height() + cfg.spacing_height();
    }
    let bottom = top + rows * cfg.stitch_height;

    let mut out = Vec::with_capacity(text.len());
    let (mut x, mut y) = (cfg.spacing_width(), top);

    for &b in text {
        if b == b' ' && y == top {
            continue;
        }

        if b == b' ' && y >= bottom - cfg.stitch_height {
            y = top;
            x += cfg.column_width() + cfg.spacing_width();
            continue;
        }

        out.push(Char { value: b, x, y });

        y += cfg.stitch_height;
        if y >= bottom {
            y = top;
            x += cfg.column_width() + cfg.spacing_width();
        }
    }

    out
}
