use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

use topo2geo::FeatureCollection;
use topo2geo::config::FileConfig;
use topo2geo::domain::first_str;
use topo2geo::geometry::{Bounds, SimplifyMode, SimplifyPolicy, simplify_collection};
use topo2geo::output::write_geojson;
use topo2geo::pipeline::{
    decode_file, merge_collection, process_devolved, process_eer, split_regions,
};
use topo2geo::region::{MergeOptions, RegionClassifier};

/// Decode TopoJSON boundary files into simplified GeoJSON
///
/// Examples:
///   # Decode the first object of a topology, distance-simplified
///   topo2geo decode scotland_lad.json -o scotland.geojson
///
///   # Split English districts into one file per region
///   topo2geo split england_lad.json --out-dir data/regions
///
///   # Collapse a nation's districts into a single outline
///   topo2geo merge wales-topo.json --object lad --id wales --name Wales -o wales.geojson --simplify stride
#[derive(Parser, Debug)]
#[command(name = "topo2geo")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches topo2geo.toml if not provided)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging and per-feature bounds
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args, Debug)]
struct Source {
    /// Input TopoJSON file
    input: PathBuf,

    /// Topology object to decode (defaults to the first object)
    #[arg(long)]
    object: Option<String>,

    /// Round coordinates to this many decimal places
    #[arg(long)]
    precision: Option<u32>,
}

#[derive(clap::Args, Debug)]
struct Simplify {
    /// Simplification policy
    #[arg(long)]
    simplify: Option<SimplifyMode>,

    /// Distance tolerance in degrees
    #[arg(long)]
    tolerance: Option<f64>,

    /// Target points per ring for the stride policy
    #[arg(long)]
    stride_target: Option<usize>,
}

impl Simplify {
    /// `default_tolerance` applies when `--tolerance` is not given; split and
    /// devolved outputs use different defaults.
    fn policy(&self, config: &FileConfig, default_tolerance: f64) -> SimplifyPolicy {
        let mode = self.simplify.unwrap_or(config.simplify);
        let tolerance = self.tolerance.unwrap_or(default_tolerance);
        let target = self.stride_target.unwrap_or(config.stride_target);
        mode.policy(tolerance, target)
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode one topology object to a FeatureCollection
    Decode {
        #[command(flatten)]
        source: Source,
        #[command(flatten)]
        simplify: Simplify,
        /// Output GeoJSON file
        #[arg(short = 'o', long)]
        output: PathBuf,
    },
    /// Split English districts into <region>.geojson files
    Split {
        #[command(flatten)]
        source: Source,
        #[command(flatten)]
        simplify: Simplify,
        /// Only classify by exact name or code, never by substring
        #[arg(long)]
        exact_names: bool,
        /// Directory for the region files
        #[arg(long)]
        out_dir: PathBuf,
    },
    /// Simplify a devolved nation's districts and normalize id/name
    Devolved {
        #[command(flatten)]
        source: Source,
        #[command(flatten)]
        simplify: Simplify,
        #[arg(short = 'o', long)]
        output: PathBuf,
    },
    /// Keep English European Electoral Regions, renamed to region ids
    Eer {
        #[command(flatten)]
        source: Source,
        #[command(flatten)]
        simplify: Simplify,
        #[arg(short = 'o', long)]
        output: PathBuf,
    },
    /// Merge every feature into one MultiPolygon of the largest polygons
    Merge {
        #[command(flatten)]
        source: Source,
        #[command(flatten)]
        simplify: Simplify,
        /// `id` property of the merged feature
        #[arg(long)]
        id: String,
        /// `name` property of the merged feature
        #[arg(long)]
        name: String,
        /// Maximum number of polygons to keep
        #[arg(long)]
        max_polygons: Option<usize>,
        /// Drop polygons smaller than this fraction of the largest
        #[arg(long)]
        min_area_ratio: Option<f64>,
        #[arg(short = 'o', long)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    let total_start = Instant::now();

    let config = match args.config {
        Some(ref path) => FileConfig::from_path(path)?,
        None => FileConfig::load().unwrap_or_default(),
    };
    let verbose = args.verbose || config.verbose;
    init_logging(verbose);

    println!("topo2geo - TopoJSON to GeoJSON");
    println!("==============================");
    println!();

    let outputs: Vec<(PathBuf, FeatureCollection)> = match args.command {
        Command::Decode {
            source,
            simplify,
            output,
        } => {
            let mut collection = load(&source, &config)?;
            let policy = simplify.policy(&config, config.tolerance);
            simplify_with_spinner(&mut collection, policy);
            vec![(output, collection)]
        }
        Command::Split {
            source,
            simplify,
            exact_names,
            out_dir,
        } => {
            let collection = load(&source, &config)?;
            let policy = simplify.policy(&config, config.region_tolerance);
            let classifier = RegionClassifier::english(config.lossy_names && !exact_names);

            let spinner = create_spinner("Classifying districts by region...");
            let start = Instant::now();
            let regions = split_regions(&collection, &classifier, policy);
            let assigned: usize = regions.iter().map(|r| r.collection.len()).sum();
            spinner.finish_with_message(format!(
                "Assigned {} of {} features to {} regions [{:.1}s]",
                assigned,
                collection.len(),
                regions.len(),
                start.elapsed().as_secs_f32()
            ));

            regions
                .into_iter()
                .map(|r| (out_dir.join(format!("{}.geojson", r.region_id)), r.collection))
                .collect()
        }
        Command::Devolved {
            source,
            simplify,
            output,
        } => {
            let collection = load(&source, &config)?;
            let policy = simplify.policy(&config, config.tolerance);
            vec![(output, process_devolved(collection, policy))]
        }
        Command::Eer {
            source,
            simplify,
            output,
        } => {
            let collection = load(&source, &config)?;
            let policy = simplify.policy(&config, config.tolerance);
            let renamed = process_eer(collection, policy);
            if renamed.is_empty() {
                bail!("No European Electoral Regions found. Is this an EER topology?");
            }
            vec![(output, renamed)]
        }
        Command::Merge {
            source,
            simplify,
            id,
            name,
            max_polygons,
            min_area_ratio,
            output,
        } => {
            let collection = load(&source, &config)?;
            let policy = simplify.policy(&config, config.tolerance);
            let options = MergeOptions {
                min_area_ratio: min_area_ratio.unwrap_or(config.merge.min_area_ratio),
                max_polygons: max_polygons.unwrap_or(config.merge.max_polygons),
            };
            vec![(
                output,
                merge_collection(collection, &id, &name, policy, &options),
            )]
        }
    };

    let spinner = create_spinner("Writing GeoJSON...");
    let start = Instant::now();
    let mut total_size = 0u64;
    for (path, collection) in &outputs {
        total_size += write_geojson(path, collection)?;
    }
    spinner.finish_with_message(format!(
        "Wrote {} file(s) ({:.1} KB) [{:.1}s]",
        outputs.len(),
        total_size as f64 / 1024.0,
        start.elapsed().as_secs_f32()
    ));

    println!();
    println!(
        "Done! Total time: {:.1}s",
        total_start.elapsed().as_secs_f32()
    );
    println!();
    for (path, collection) in &outputs {
        println!(
            "Output: {} ({} features)",
            path.display(),
            collection.len()
        );
        if verbose {
            print_bounds(collection);
        }
    }

    Ok(())
}

/// Default filter when `RUST_LOG` is unset.
fn log_directive(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_directive(verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load(source: &Source, config: &FileConfig) -> Result<FeatureCollection> {
    let spinner = create_spinner(&format!("Decoding {}...", display_name(&source.input)));
    let start = Instant::now();

    let object = source.object.as_deref().or(config.object.as_deref());
    let precision = source.precision.or(config.precision);
    let collection = decode_file(&source.input, object, precision)?;

    spinner.finish_with_message(format!(
        "Decoded {} features ({} points) [{:.1}s]",
        collection.len(),
        collection.point_count(),
        start.elapsed().as_secs_f32()
    ));
    Ok(collection)
}

fn simplify_with_spinner(collection: &mut FeatureCollection, policy: SimplifyPolicy) {
    if policy == SimplifyPolicy::None {
        return;
    }
    let spinner = create_spinner("Simplifying rings...");
    let start = Instant::now();
    let removed = simplify_collection(collection, policy);
    spinner.finish_with_message(format!(
        "Removed {} points, {} remain [{:.1}s]",
        removed,
        collection.point_count(),
        start.elapsed().as_secs_f32()
    ));
}

fn print_bounds(collection: &FeatureCollection) {
    for (i, feature) in collection.features.iter().enumerate() {
        let label = first_str(&feature.properties, &["id", "name"])
            .map(str::to_string)
            .unwrap_or_else(|| format!("#{}", i));
        match Bounds::of_geometry(&feature.geometry) {
            Some(b) => println!(
                "  {}: lon {:.2}..{:.2}, lat {:.2}..{:.2} ({:.2}° x {:.2}°)",
                label,
                b.min_lon,
                b.max_lon,
                b.min_lat,
                b.max_lat,
                b.width(),
                b.height()
            ),
            None => println!("  {}: empty", label),
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]);
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}
