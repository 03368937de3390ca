//! Command-line front end for the NEO close-approach database.
//!
//! Loads the two NASA data files, builds the in-memory database, and answers
//! either a point lookup (`inspect`) or a filtered stream query (`query`).

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use neodb_database::NeoDatabase;
use neodb_extract::{load_approaches, load_neos, write_csv, write_json};
use neodb_query::{limit, Filter};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "neodb")]
#[command(about = "Explore near-Earth objects and their close approaches")]
struct Cli {
    /// Path to the NEO CSV data file
    #[arg(long, default_value = "data/neos.csv", global = true)]
    neofile: PathBuf,

    /// Path to the close-approach JSON data file
    #[arg(long, default_value = "data/cad.json", global = true)]
    cadfile: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect a single NEO by designation or by name
    Inspect {
        /// Primary designation to look up
        #[arg(long)]
        pdes: Option<String>,

        /// IAU name to look up
        #[arg(long)]
        name: Option<String>,

        /// Also print the NEO's known close approaches
        #[arg(short, long)]
        verbose: bool,
    },

    /// Query close approaches matching a set of criteria
    Query(QueryArgs),
}

#[derive(Args)]
struct QueryArgs {
    /// Only approaches on exactly this date (YYYY-MM-DD)
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Only approaches on or after this date
    #[arg(long)]
    start_date: Option<NaiveDate>,

    /// Only approaches on or before this date
    #[arg(long)]
    end_date: Option<NaiveDate>,

    /// Minimum approach distance in astronomical units
    #[arg(long)]
    min_distance: Option<f64>,

    /// Maximum approach distance in astronomical units
    #[arg(long)]
    max_distance: Option<f64>,

    /// Minimum relative approach velocity in km/s
    #[arg(long)]
    min_velocity: Option<f64>,

    /// Maximum relative approach velocity in km/s
    #[arg(long)]
    max_velocity: Option<f64>,

    /// Minimum NEO diameter in kilometers
    #[arg(long)]
    min_diameter: Option<f64>,

    /// Maximum NEO diameter in kilometers
    #[arg(long)]
    max_diameter: Option<f64>,

    /// Only approaches of NEOs flagged potentially hazardous
    #[arg(long, conflicts_with = "not_hazardous")]
    hazardous: bool,

    /// Only approaches of NEOs not flagged potentially hazardous
    #[arg(long)]
    not_hazardous: bool,

    /// Maximum number of results; 0 means unlimited
    #[arg(short, long)]
    limit: Option<usize>,

    /// Write results to this .csv or .json file instead of printing them
    #[arg(short, long)]
    outfile: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let neos = load_neos(&cli.neofile)
        .with_context(|| format!("loading NEOs from {}", cli.neofile.display()))?;
    let approaches = load_approaches(&cli.cadfile)
        .with_context(|| format!("loading close approaches from {}", cli.cadfile.display()))?;
    let db = NeoDatabase::new(neos, approaches);

    match cli.command {
        Commands::Inspect { pdes, name, verbose } => inspect(&db, pdes, name, verbose),
        Commands::Query(args) => query(&db, args),
    }
}

fn inspect(db: &NeoDatabase, pdes: Option<String>, name: Option<String>, verbose: bool) -> Result<()> {
    let neo = match (&pdes, &name) {
        (Some(pdes), _) => db.neo_by_designation(pdes),
        (None, Some(name)) => db.neo_by_name(name),
        (None, None) => bail!("give either --pdes or --name"),
    };
    let Some(neo) = neo else {
        println!("No matching NEOs exist in the database.");
        return Ok(());
    };

    println!("{neo}");
    if verbose {
        for approach in db.approaches_of(neo) {
            println!("- {}", approach.describe(Some(neo)));
        }
    }
    Ok(())
}

fn query(db: &NeoDatabase, args: QueryArgs) -> Result<()> {
    let hazardous = match (args.hazardous, args.not_hazardous) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    };
    let filter = Filter::builder()
        .date(args.date)
        .start_date(args.start_date)
        .end_date(args.end_date)
        .distance_min(args.min_distance)
        .distance_max(args.max_distance)
        .velocity_min(args.min_velocity)
        .velocity_max(args.max_velocity)
        .diameter_min(args.min_diameter)
        .diameter_max(args.max_diameter)
        .hazardous(hazardous)
        .build();

    let results = limit(db.query(filter.as_ref()), args.limit);

    let Some(outfile) = args.outfile else {
        for approach in results {
            println!("{}", approach.describe(db.neo_for(approach)));
        }
        return Ok(());
    };

    let results = results.map(|approach| (approach, db.neo_for(approach)));
    match outfile.extension().and_then(|e| e.to_str()) {
        Some("csv") => write_csv(results, &outfile)?,
        Some("json") => write_json(results, &outfile)?,
        _ => bail!("unsupported output format: {} (use .csv or .json)", outfile.display()),
    }
    Ok(())
}
