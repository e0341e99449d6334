use crate::color::{self, Color, ColorError};
use crate::font::{FontBook, FontError};
use crate::layout::GlyphLayout;
use crate::log::*;
use crate::options::{HAlign, OptionsError, RenderOptions, VAlign};
use crate::render::{self, RenderError};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use std::io::Read;
use std::path::PathBuf;
use thiserror::Error;

/// Renders the text read from stdin as large as it fits into a png
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, disable_help_flag = true)]
pub struct Args {
    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,

    /// Width of the image in pixels
    #[arg(short, long)]
    pub width: Option<u32>,

    /// Height of the image in pixels
    #[arg(short, long)]
    pub height: Option<u32>,

    /// Font family to render with
    #[arg(short, long, default_value = "Arial")]
    pub font: String,

    /// Font file to use instead of looking the family up
    #[arg(long)]
    pub font_file: Option<PathBuf>,

    /// Output file (required unless -x)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Horizontal alignment (center|left|right)
    #[arg(short = 'a', long = "align", default_value = "left")]
    pub align: String,

    /// Vertical alignment (center|top|bottom)
    #[arg(short = 'v', long = "valign", default_value = "center")]
    pub valign: String,

    /// Text color in hexadecimal, RRGGBB
    #[arg(short = 'c', long = "color")]
    pub color: Option<String>,

    /// Stroke with size n and color RRGGBB, as RRGGBB:n
    #[arg(short = 's', long = "stroke")]
    pub stroke: Option<String>,

    /// Percentage the font is reduced by after fitting
    #[arg(short = 'p', long = "padding", default_value_t = 0)]
    pub padding: u32,

    /// Only print the fitted font data, no image is written
    #[arg(short = 'x', long = "metrics")]
    pub metrics: bool,
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("you're forgetting a size parameter (-w and -h, both above 0)")]
    MissingSize,
    #[error("you're forgetting the filename parameter (-o)")]
    MissingFilename,
    #[error("there's some error with the stroke syntax '{0}', expected RRGGBB:n")]
    StrokeSyntax(String),
    #[error("failed to parse the stroke size in '{0}'")]
    StrokeSize(String),
    #[error("failed to read the text from stdin")]
    Stdin(#[source] std::io::Error),
}

/// `-a`, anything unknown means no alignment at all
pub fn parse_h_align(s: &str) -> HAlign {
    match s {
        "left" => HAlign::Left,
        "right" => HAlign::Right,
        "center" => HAlign::Center,
        other => {
            warn!(
                LC::new("cli", true),
                "unknown alignment '{other}', try 'left', 'right' or 'center'"
            );
            HAlign::None
        }
    }
}

/// `-v`, anything unknown means centered
pub fn parse_v_align(s: &str) -> VAlign {
    match s {
        "top" => VAlign::Top,
        "bottom" => VAlign::Bottom,
        _ => VAlign::Center,
    }
}

/// `RRGGBB:n`, a color and a positive width in pixels
pub fn parse_stroke(s: &str) -> Result<(Color, f32)> {
    let (hex, size) = s
        .split_once(':')
        .ok_or_else(|| CliError::StrokeSyntax(s.into()))?;

    let color: Color = hex
        .parse()
        .with_context(|| format!("stroke color of '{s}'"))?;

    match size.trim().parse::<f32>() {
        Ok(size) if size.is_finite() && size > 0.0 => Ok((color, size)),
        _ => Err(CliError::StrokeSize(s.into()).into()),
    }
}

/// Reads everything, without the single line ending a pipe usually adds
pub fn read_text(mut input: impl Read) -> Result<String, CliError> {
    let mut text = String::new();
    input.read_to_string(&mut text).map_err(CliError::Stdin)?;

    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    Ok(text)
}

/// Builds the options from the arguments and the text, checking everything the
/// renderer relies on.
pub fn options(args: &Args, text: &str) -> Result<RenderOptions> {
    let (width, height) = match (args.width, args.height) {
        (Some(width), Some(height)) if width > 0 && height > 0 => (width, height),
        _ => return Err(CliError::MissingSize.into()),
    };
    if args.output.is_none() && !args.metrics {
        return Err(CliError::MissingFilename.into());
    }

    let text_color = match &args.color {
        Some(hex) => hex.parse().context("text color (-c)")?,
        None => color::BLACK,
    };

    let mut builder = RenderOptions::builder()
        .text(text)
        .font(&args.font)
        .width(width)
        .height(height)
        .h_align(parse_h_align(&args.align))
        .v_align(parse_v_align(&args.valign))
        .fpa(args.padding)
        .text_color(text_color);

    if let Some(stroke) = &args.stroke {
        let (color, width) = parse_stroke(stroke)?;
        builder = builder.stroke(color, width);
    }
    if let Some(output) = &args.output {
        builder = builder.filename(output);
    }

    Ok(builder.build()?)
}

pub fn run(args: Args) -> Result<()> {
    let lc = LC::new("cli", true);

    let text = read_text(std::io::stdin().lock())?;
    let options = options(&args, &text)?;

    let font = match &args.font_file {
        Some(path) => FontBook::load_file(path)?,
        None => FontBook::system().resolve(options.font())?,
    };
    let mut engine = GlyphLayout::new(font, options.font());

    if args.metrics {
        println!("{}", render::font_data(&mut engine, &options)?);
        return Ok(());
    }

    let metrics = render::make_png(&mut engine, &options)?;
    debug!(lc, "| run :: {metrics:?}");
    println!("{}", metrics.size);

    Ok(())
}

/// Process exit code for a rejected command line, `0` for `--help` and `--version`
pub fn usage_exit_code(err: &clap::Error) -> u8 {
    if err.use_stderr() {
        3
    } else {
        0
    }
}

/// Process exit code for an error out of `run`
pub fn exit_code(err: &anyhow::Error) -> u8 {
    if let Some(err) = err.downcast_ref::<RenderError>() {
        return match err {
            RenderError::NoFit { .. } => 2,
            RenderError::MissingFilename => 3,
            RenderError::Sink(_) => 9,
        };
    }
    if let Some(err) = err.downcast_ref::<CliError>() {
        return match err {
            CliError::MissingSize | CliError::MissingFilename => 3,
            CliError::StrokeSyntax(_) => 5,
            CliError::StrokeSize(_) => 6,
            CliError::Stdin(_) => 7,
        };
    }
    if err.downcast_ref::<ColorError>().is_some() {
        return 4;
    }
    if err.downcast_ref::<OptionsError>().is_some() {
        return 6;
    }
    if err.downcast_ref::<FontError>().is_some() {
        return 8;
    }
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("font2png").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn short_flags() {
        let args = args(&[
            "-w", "300", "-h", "100", "-f", "Droid Sans", "-o", "out.png", "-a", "right", "-v",
            "bottom", "-c", "ff0000", "-s", "00ff00:2.5", "-p", "10",
        ]);
        let opts = options(&args, "Hello").unwrap();

        assert_eq!((opts.width(), opts.height()), (300, 100));
        assert_eq!(opts.font(), "Droid Sans");
        assert_eq!(opts.h_align(), HAlign::Right);
        assert_eq!(opts.v_align(), VAlign::Bottom);
        assert_eq!(opts.text_color(), Color::new(1.0, 0.0, 0.0));
        assert_eq!(opts.fpa(), 10);
        assert_eq!(opts.filename(), Some(std::path::Path::new("out.png")));

        let stroke = opts.stroke().unwrap();
        assert_eq!(stroke.color, Color::new(0.0, 1.0, 0.0));
        assert_eq!(stroke.width, 2.5);
    }

    #[test]
    fn defaults() {
        let opts = options(&args(&["-w", "10", "-h", "10", "-o", "a.png"]), "x").unwrap();

        assert_eq!(opts.font(), "Arial");
        assert_eq!(opts.h_align(), HAlign::Left);
        assert_eq!(opts.v_align(), VAlign::Center);
        assert_eq!(opts.text_color(), color::BLACK);
        assert!(opts.stroke().is_none());
    }

    #[test]
    fn help_is_long_only() {
        let err = Args::try_parse_from(["font2png", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);

        // -h is the height
        assert_eq!(args(&["-h", "7"]).height, Some(7));
    }

    #[test]
    fn malformed_flags() {
        let code = |argv: &[&str]| {
            let err = Args::try_parse_from(std::iter::once("font2png").chain(argv.iter().copied()))
                .unwrap_err();
            usage_exit_code(&err)
        };

        assert_eq!(code(&["-w", "abc", "-h", "10", "-o", "x.png"]), 3);
        assert_eq!(code(&["-w", "10", "-h", "10", "-p", "-5"]), 3);
        assert_eq!(code(&["--bogus"]), 3);
        assert_eq!(code(&["--help"]), 0);
        assert_eq!(code(&["--version"]), 0);
    }

    #[test]
    fn alignment_fallbacks() {
        assert_eq!(parse_h_align("center"), HAlign::Center);
        assert_eq!(parse_h_align("justify"), HAlign::None);
        assert_eq!(parse_v_align("top"), VAlign::Top);
        assert_eq!(parse_v_align("middle"), VAlign::Center);
    }

    #[test]
    fn missing_pieces() {
        let err = options(&args(&["-w", "10", "-o", "a.png"]), "x").unwrap_err();
        assert_eq!(exit_code(&err), 3);

        let err = options(&args(&["-w", "0", "-h", "10", "-o", "a.png"]), "x").unwrap_err();
        assert_eq!(exit_code(&err), 3);

        let err = options(&args(&["-w", "10", "-h", "10"]), "x").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::MissingFilename)
        ));

        // metrics mode writes nothing
        assert!(options(&args(&["-w", "10", "-h", "10", "-x"]), "x").is_ok());
    }

    #[test]
    fn bad_values() {
        let base = ["-w", "10", "-h", "10", "-o", "a.png"];
        let with = |extra: &[&str]| {
            let argv: Vec<&str> = base.iter().chain(extra).copied().collect();
            options(&args(&argv), "x").unwrap_err()
        };

        assert_eq!(exit_code(&with(&["-c", "fff"])), 4);
        assert_eq!(exit_code(&with(&["-s", "ff00ff"])), 5);
        assert_eq!(exit_code(&with(&["-s", "ff00ff:0"])), 6);
        assert_eq!(exit_code(&with(&["-s", "ff00ff:wide"])), 6);
        assert_eq!(exit_code(&with(&["-s", "ff0:2"])), 4);
        assert_eq!(exit_code(&with(&["-p", "100"])), 6);
    }

    #[test]
    fn stroke_syntax() {
        let (color, width) = parse_stroke("0000ff:3").unwrap();
        assert_eq!(color, Color::new(0.0, 0.0, 1.0));
        assert_eq!(width, 3.0);
    }

    #[test]
    fn stdin_text() {
        assert_eq!(read_text("Hello\n".as_bytes()).unwrap(), "Hello");
        assert_eq!(read_text("Hello\r\n".as_bytes()).unwrap(), "Hello");
        assert_eq!(read_text("two\nlines\n\n".as_bytes()).unwrap(), "two\nlines\n");
        assert_eq!(read_text("".as_bytes()).unwrap(), "");
    }

    #[test]
    fn render_exit_codes() {
        let no_fit = anyhow::Error::from(RenderError::NoFit {
            reason: crate::search::NoFit::TooSmall,
            width: 1,
            height: 1,
        });
        assert_eq!(exit_code(&no_fit), 2);

        let sink = anyhow::Error::from(RenderError::Sink(crate::draw::SinkError::Write {
            path: "out.png".into(),
            reason: "read-only file system".into(),
        }));
        assert_eq!(exit_code(&sink), 9);
    }
}
