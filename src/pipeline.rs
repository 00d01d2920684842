use crate::{
    config::Config,
    error::BitscarfResult,
    filter::filter_text,
    layout::build_charset,
    raster::{FrameRgba, draw_pattern},
};

/// Run the whole pipeline: filter the raw text, lay the characters out,
/// paint the pattern. Encoding the result is the caller's business.
pub fn weave(cfg: &Config, raw: &[u8], repeat: u32) -> BitscarfResult<FrameRgba> {
    let text = filter_text(raw, repeat)?;
    let charset = build_charset(cfg, &text);
    Ok(draw_pattern(cfg, &charset))
}
