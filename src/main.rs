use batchcrop::imaging::{Quality, RustBackend};
use batchcrop::naming::CoarseTimestamp;
use batchcrop::validate::split_dimension_arg;
use batchcrop::{config, output, process, scan, validate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "batchcrop")]
#[command(about = "Crop and resize a folder of images to exact target sizes")]
#[command(long_about = "\
Crop and resize a folder of images to exact target sizes

Every image in the source folder is processed at every requested dimension.
A target that exceeds the source in either axis is skipped rather than
upscaled; everything else is cropped (top-left anchored) to the target's
aspect ratio and resized to the exact pixel size — never stretched.

Output layout, one subfolder per run hour and dimension:

  out/
  ├── 2024359_300X200/             # <timestamp>_<W>X<H>
  │   ├── 300X200_cat.png          # <W>X<H>_<original name>
  │   └── 300X200_dog.jpg
  └── 2024359_800X600/
      └── 800X600_cat.png

Recognized input formats: jpg, jpeg, png, gif, webp (case-insensitive).
Output keeps each source's format.

Run 'batchcrop gen-config' for a documented batchcrop.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Config file with default quality and dimensions
    #[arg(long, default_value = config::CONFIG_FILE, global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args, Clone)]
struct DimensionArgs {
    /// Target size as WIDTHxHEIGHT (repeatable); overrides the config list
    #[arg(long = "dim", value_name = "WxH")]
    dimensions: Vec<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Crop every image in a folder at every requested dimension
    Crop {
        /// Folder containing the source images
        #[arg(long)]
        source: String,

        /// Folder that receives the per-dimension output subfolders
        #[arg(long)]
        output: String,

        #[command(flatten)]
        dims: DimensionArgs,

        /// JPEG encode quality 1-100; overrides the config value
        #[arg(long)]
        quality: Option<u32>,

        /// Print the summary as JSON instead of the grouped report
        #[arg(long)]
        json: bool,
    },
    /// Validate dimensions and list the images a crop would process
    Check {
        /// Folder containing the source images
        #[arg(long)]
        source: String,

        #[command(flatten)]
        dims: DimensionArgs,
    },
    /// Print a documented stock batchcrop.toml
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Crop {
            source,
            output: output_folder,
            dims,
            quality,
            json,
        } => {
            let cfg = config::load_config(&cli.config)?;
            let raw = raw_dimension_pairs(&dims.dimensions, &cfg);
            let quality = Quality::new(quality.unwrap_or(cfg.quality));

            let summary = process::crop_folder(
                &RustBackend::new(),
                &source,
                &output_folder,
                &raw,
                CoarseTimestamp::now(),
                quality,
            )?;

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                output::print_batch_summary(&summary);
            }
        }
        Command::Check { source, dims } => {
            let cfg = config::load_config(&cli.config)?;
            let raw = raw_dimension_pairs(&dims.dimensions, &cfg);
            let dimensions = validate::validate_dimensions(&raw)?;
            let images = scan::scan(std::path::Path::new(&source))?;
            output::print_check_output(&images, &dimensions);
            println!("==> Request is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// CLI `--dim` values win; otherwise fall back to the configured defaults.
fn raw_dimension_pairs(cli_dims: &[String], cfg: &config::CropConfig) -> Vec<(String, String)> {
    let chosen = if cli_dims.is_empty() {
        cfg.dimensions.as_slice()
    } else {
        cli_dims
    };
    chosen.iter().map(|raw| split_dimension_arg(raw)).collect()
}
