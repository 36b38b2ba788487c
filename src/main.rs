//! # escpos CLI
//!
//! Command-line interface for ESC/POS thermal receipt printers.
//!
//! ## Usage
//!
//! ```bash
//! # Print the styling demo to a network printer
//! escpos --host 192.168.1.50:9100 styles
//!
//! # Print an image, centered, with a lighter ink cutoff
//! escpos --host 192.168.1.50:9100 --max-width 576 image --center --threshold 200 logo.png
//!
//! # Preview the thresholded image as PNG instead of printing
//! escpos image --png preview.png logo.png
//!
//! # Capture raw bytes to a file
//! escpos --output job.bin text --bold "Hello"
//! ```
//!
//! Set `RUST_LOG=debug` to see byte counts for each command.

use std::fs::File;
use std::io::{self, Write};
use std::net::TcpStream;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use log::info;

use escpos_thermal::{
    EscPosError, ImageOptions, PrintSession, PrinterConfig,
    protocol::text::{Justify, Underline},
    render::{luma, raster},
};

/// escpos - ESC/POS thermal printer utility
#[derive(Parser, Debug)]
#[command(name = "escpos")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Network printer address (HOST:PORT)
    #[arg(long, global = true, conflicts_with = "output")]
    host: Option<String>,

    /// Write to a file or device instead ("-" for stdout)
    #[arg(long, global = true, value_name = "PATH")]
    output: Option<PathBuf>,

    /// JSON printer configuration
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Line feeds before the cut (overrides the configuration)
    #[arg(long, global = true)]
    cut_offset: Option<usize>,

    /// Maximum image width in dots (overrides the configuration)
    #[arg(long, global = true)]
    max_width: Option<u32>,

    /// Flush without cutting the paper
    #[arg(long, global = true)]
    no_cut: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print a sample of every text style
    Styles,

    /// Print a line of text
    Text {
        text: String,

        #[arg(long)]
        bold: bool,

        #[arg(long)]
        underline: bool,

        #[arg(long)]
        center: bool,

        /// Character magnification minus one, as WxH (e.g. 1x1 for double)
        #[arg(long, value_parser = parse_size)]
        size: Option<(u8, u8)>,
    },

    /// Print an image file as a raster bitmap
    Image {
        path: PathBuf,

        /// Pixels darker than this (0-255) print as ink
        #[arg(long, default_value_t = ImageOptions::DEFAULT_THRESHOLD)]
        threshold: u8,

        #[arg(long)]
        center: bool,

        /// Save a PNG preview of the bitmap instead of printing
        #[arg(long, value_name = "FILE")]
        png: Option<PathBuf>,
    },

    /// Feed paper by a number of lines
    Feed { lines: usize },

    /// Cut the paper
    Cut,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), EscPosError> {
    let cli = Cli::parse();

    let config = load_config(&cli)?;

    // Preview never touches a printer
    if let Commands::Image {
        path,
        threshold,
        png: Some(png),
        ..
    } = &cli.command
    {
        let gray = load_luma(path)?;
        save_preview(&gray, *threshold, &config, png)?;
        info!("saved preview to {}", png.display());
        return Ok(());
    }

    let transport = open_transport(&cli)?;
    let mut session = PrintSession::new(transport, config);

    match &cli.command {
        Commands::Styles => print_styles(&mut session),
        Commands::Text {
            text,
            bold,
            underline,
            center,
            size,
        } => {
            if *center {
                session.justify(Justify::Center);
            }
            if *bold {
                session.bold(true);
            }
            if *underline {
                session.underline(Underline::OneDot);
            }
            if let Some((w, h)) = size {
                session.size(*w, *h);
            }

            session.text(text);
            session.text("\n");
            session.initialize();
        }
        Commands::Image {
            path,
            threshold,
            center,
            ..
        } => {
            let gray = load_luma(path)?;
            if *center {
                session.justify(Justify::Center);
            }
            session.write_image(&gray, ImageOptions::with_threshold(*threshold))?;
            session.justify(Justify::Left);
        }
        Commands::Feed { lines } => {
            session.line_feed(*lines);
        }
        Commands::Cut => {}
    }

    if cli.no_cut || matches!(cli.command, Commands::Feed { .. }) {
        session.flush()?;
    } else {
        session.print_and_cut()?;
    }

    info!("sent to printer");
    Ok(())
}

/// The styling demo: one labelled line per style.
fn print_styles<W: Write>(session: &mut PrintSession<W>) {
    session.initialize();
    session.text("Normal Text\n");
    session.line_feed(2);

    session.underline(Underline::OneDot);
    session.text("1-Dot Underlined Text\n");
    session.underline(Underline::Off);
    session.line_feed(2);

    session.underline(Underline::TwoDot);
    session.text("2-Dot Underlined Text\n");
    session.underline(Underline::Off);
    session.line_feed(2);

    session.bold(true);
    session.text("Bold Text\n");
    session.bold(false);
    session.line_feed(2);

    session.size(1, 1);
    session.text("Double Sized Text\n");
    session.size(0, 0);
    session.line_feed(2);

    session.justify(Justify::Center);
    session.text("Centered Text\n");
    session.justify(Justify::Left);
    session.line_feed(2);
}

/// Save the thresholded image as PNG, rejecting what a print would reject.
fn save_preview(
    gray: &image::GrayImage,
    threshold: u8,
    config: &PrinterConfig,
    png: &Path,
) -> Result<(), EscPosError> {
    config.check_image_width(gray.width())?;
    raster::header_dimensions(gray.width(), gray.height())?;
    raster::rasterize(gray, threshold).to_gray_image().save(png)?;
    Ok(())
}

fn load_config(cli: &Cli) -> Result<PrinterConfig, EscPosError> {
    let mut config = match &cli.config {
        Some(path) => PrinterConfig::load(path)?,
        None => PrinterConfig::default(),
    };
    if let Some(n) = cli.cut_offset {
        config = config.with_cut_offset(n);
    }
    if let Some(dots) = cli.max_width {
        config = config.with_max_line_width(dots);
    }
    Ok(config)
}

fn open_transport(cli: &Cli) -> Result<Box<dyn Write>, EscPosError> {
    if let Some(host) = &cli.host {
        info!("connecting to {}", host);
        return Ok(Box::new(TcpStream::connect(host)?));
    }

    match &cli.output {
        Some(path) if path.as_os_str() == "-" => Ok(Box::new(io::stdout())),
        Some(path) => Ok(Box::new(File::create(path)?)),
        None => Err(EscPosError::Config(
            "no printer given, use --host or --output".to_string(),
        )),
    }
}

fn load_luma(path: &Path) -> Result<image::GrayImage, EscPosError> {
    let image = image::open(path)?;
    Ok(luma::flatten_on_white(&image))
}

fn parse_size(s: &str) -> Result<(u8, u8), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WxH, got '{}'", s))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<u8>()
            .ok()
            .filter(|n| *n <= 7)
            .ok_or_else(|| format!("size must be 0-7, got '{}'", v))
    };
    Ok((parse(w)?, parse(h)?))
}
