#![forbid(unsafe_code)]

pub mod color;
pub mod config;
pub mod error;
pub mod filter;
pub mod layout;
pub mod pipeline;
pub mod raster;

pub use color::Rgba;
pub use config::{BITS_PER_CHAR, Config};
pub use error::{BitscarfError, BitscarfResult};
pub use filter::filter_text;
pub use layout::{Char, build_charset};
pub use pipeline::weave;
pub use raster::{FrameRgba, draw_pattern, pattern_size};
