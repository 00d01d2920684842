use std::{
    io::Read as _,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{CommandFactory as _, Parser};

use bitscarf::{Config, Rgba, build_charset, draw_pattern, filter_text};

/// Knit a text into a scarf pattern: each character becomes a column of
/// seven stitches spelling out its ASCII value in binary.
#[derive(Parser, Debug)]
#[command(name = "bitscarf", version)]
struct Cli {
    /// Filename for the resulting PNG image.
    #[arg(long, default_value = "out.png")]
    out: PathBuf,

    /// Color for 0-bits and the canvas background, as 0xRRGGBB.
    #[arg(long, default_value = "0xffffff")]
    color_a: String,

    /// Color for 1-bits and the borders, as 0xRRGGBB.
    #[arg(long, default_value = "0x647384")]
    color_b: String,

    /// Width of a single stitch, in pixels: [1..n]
    #[arg(long, default_value_t = 2)]
    stitch_width: u32,

    /// Height of a single stitch, in pixels: [1..n]
    #[arg(long, default_value_t = 3)]
    stitch_height: u32,

    /// Number of 7-bit columns to generate: [1..n]
    #[arg(long, default_value_t = 3)]
    columns: u32,

    /// Number of stitches to leave blank between columns: [0..n]
    #[arg(long, default_value_t = 2)]
    spacing: u32,

    /// Optional decorative n-row border at top and bottom of work: [0..n]
    #[arg(long, default_value_t = 2)]
    border: u32,

    /// Number of times to repeat the input text: [1..n]
    #[arg(long, default_value_t = 1)]
    repeat: u32,

    /// Print the computed character layout as JSON to stderr.
    #[arg(long)]
    dump_layout: bool,

    /// Text file to knit. Reads stdin when absent.
    textfile: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cfg = Config {
        out: cli.out,
        columns: cli.columns,
        spacing: cli.spacing,
        border: cli.border,
        stitch_width: cli.stitch_width,
        stitch_height: cli.stitch_height,
        colors: [Rgba::parse(&cli.color_a)?, Rgba::parse(&cli.color_b)?],
    };

    if let Err(err) = cfg.validate() {
        Cli::command().print_help().ok();
        return Err(err.into());
    }
    if cli.repeat < 1 {
        Cli::command().print_help().ok();
        anyhow::bail!("repeat must be >= 1");
    }

    let raw = read_input(cli.textfile.as_deref())?;
    let text = filter_text(&raw, cli.repeat)?;
    let charset = build_charset(&cfg, &text);

    if cli.dump_layout {
        let json = serde_json::to_string_pretty(&charset)
            .with_context(|| "serialize layout dump")?;
        eprintln!("{json}");
    }

    let frame = draw_pattern(&cfg, &charset);

    image::save_buffer_with_format(
        &cfg.out,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", cfg.out.display()))?;

    eprintln!("wrote {}", cfg.out.display());
    Ok(())
}

fn read_input(textfile: Option<&Path>) -> anyhow::Result<Vec<u8>> {
    match textfile {
        Some(path) => {
            std::fs::read(path).with_context(|| format!("read text file '{}'", path.display()))
        }
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .with_context(|| "read stdin")?;
            Ok(buf)
        }
    }
}
