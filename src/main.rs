use std::path::{Path, PathBuf};

use clap::Parser;
use console::style;
use image::ImageReader;

use crate::options::Options;
use crate::report::Preview;

mod annotate;
mod bounds;
mod error;
mod geometry;
mod options;
mod report;

/// Estimates coordinates of the inner rectangle of an alpha transparent image.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// input file (32-bit png)
    image_file: PathBuf,

    /// output file for the uborder parameters
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// search step size (bigger is faster, though less precise)
    #[arg(short, long, value_name = "INT[1,100]", allow_negative_numbers = true)]
    step: Option<i64>,

    /// alpha value below which a pixel is considered transparent
    #[arg(short, long, value_name = "INT[1,255]", allow_negative_numbers = true)]
    threshold: Option<i64>,

    /// print results and show the image with the detected points in green
    #[arg(short, long, default_value = "false")]
    preview: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let (options, warnings) = Options::resolve(args.step, args.threshold);
    for warning in &warnings {
        eprintln!("{} {}", style("WARNING:").yellow().bold(), warning);
    }

    let path = args.image_file.as_path();
    if !path.exists() {
        return Err(anyhow::anyhow!("File does not exist: {}", path.display()));
    }

    let mut img = load_rgba(path)?;
    let (width, height) = img.dimensions();
    println!("Input File: {} ({}x{})", path.display(), width, height);

    let bounds = bounds::detect(&img, &options);
    println!(
        "\tDetected: left={} up={} right={} down={}",
        bounds.left(),
        bounds.up(),
        bounds.right(),
        bounds.down()
    );

    let metrics = geometry::derive(&bounds, width, height)?;

    if args.preview {
        let preview = Preview {
            size: (width, height),
            options: &options,
            metrics: &metrics,
        };
        print!("{}", report::render_preview(&preview, true));

        annotate::mark_bounds(&mut img, &bounds);
        let shown = annotate::show(&img)?;
        println!("\nPreview written to: {}", shown.display());
    }

    if let Some(output) = &args.output {
        report::write_params(output, &metrics)?;
        println!("Saved parameters to: {}", output.display());
    }

    Ok(())
}

fn load_rgba(path: &Path) -> anyhow::Result<image::RgbaImage> {
    let img = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    Ok(img.to_rgba8())
}
