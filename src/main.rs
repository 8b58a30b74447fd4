use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::info;

use limit_comparison::data::{load_collection, scale_collection};
use limit_comparison::render::{build_plan, output_filename, render_chart, Variant};
use limit_comparison::style::StyleTable;

/// Plot the dark-photon exclusion limit comparison chart.
#[derive(Parser, Debug)]
#[command(name = "limit-comparison", disable_version_flag = true)]
struct Args {
    /// Directory containing the input limit files (default: current
    /// working directory)
    #[arg(short, long)]
    directory: Option<PathBuf>,

    /// Label/legend style variant: 0 or 1
    #[arg(short = 'v', long = "version", default_value_t = 0)]
    version: u8,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Validate the variant before touching the filesystem.
    let variant = Variant::new(args.version)?;

    info!("loading limit curves");
    let data = load_collection(args.directory.as_deref())?;

    info!("rescaling");
    let scaled = scale_collection(&data);

    info!("rendering variant {}", variant.index());
    let style = StyleTable::default();
    let plan = build_plan(&scaled, &style)?;
    let output = PathBuf::from(output_filename(variant));
    render_chart(&plan, variant, &output)?;

    println!("Wrote {}", output.display());
    Ok(())
}
