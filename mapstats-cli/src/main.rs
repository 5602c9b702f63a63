use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use mapstats_cli::commands::{self, ExportFormat};
use mapstats_cli::logging;
use mapstats_core::{MapFilter, MapProcessor, MapStatsConfig};

#[derive(Parser)]
#[command(name = "mapstats")]
#[command(about = "Classify community maps by the gamemodes their fixtures support")]
struct Args {
    /// Path to custom config file (YAML format)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Classify one map and print its JSON record
    Classify {
        /// Five-line map description file
        map_file: PathBuf,

        /// Print which required fixtures are missing for each gamemode
        #[arg(long)]
        explain: bool,

        /// Write the sanitized object collection into this directory
        #[arg(long)]
        dump_objects: Option<PathBuf>,

        /// Log timings of the read, sanitize and classify steps (shown with -v)
        #[arg(long)]
        profile: bool,
    },

    /// Classify every map in a directory, one <id>.json per map
    ClassifyDir {
        input_dir: PathBuf,
        output_dir: PathBuf,
    },

    /// Render the HTML index from a directory of JSON records
    Report {
        summary_dir: PathBuf,

        #[arg(short, long, default_value = "index.html")]
        output: PathBuf,
    },

    /// Export the ids or a CSV table of the maps matching a filter
    Export {
        summary_dir: PathBuf,

        /// Output format: csv or ids
        #[arg(long, default_value = "csv")]
        format: String,

        /// all, dm, tdm, ctf, surv, zomb, take_over, climb, hosting_all, hosting_no_climb
        #[arg(long, default_value = "all")]
        filter: String,

        /// Case-insensitive match on map id or title
        #[arg(long)]
        search: Option<String>,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("❌ {e:#}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = MapStatsConfig::load_with_fallback(args.config.as_deref());

    match args.command {
        Command::Classify {
            map_file,
            explain,
            dump_objects,
            profile,
        } => {
            let processor = MapProcessor::new(&config);
            let output =
                commands::classify(&processor, &map_file, explain, dump_objects.as_deref(), profile)?;

            if let Some(verdicts) = output.verdicts {
                eprintln!("🔍 Gamemode requirements for {}:", map_file.display());
                for verdict in verdicts {
                    eprintln!("   {verdict}");
                }
            }
            println!("{}", output.json);
        }
        Command::ClassifyDir {
            input_dir,
            output_dir,
        } => {
            let processor = MapProcessor::new(&config);
            let report = commands::classify_dir(&processor, &input_dir, &output_dir)?;

            eprintln!(
                "✅ Classified {} maps into {} ({} failed) in {:.2?}",
                report.written.len(),
                output_dir.display(),
                report.failures.len(),
                report.elapsed
            );
        }
        Command::Report {
            summary_dir,
            output,
        } => {
            let count = commands::report(&config, &summary_dir, &output)?;
            eprintln!("💾 Index of {count} maps saved to: {}", output.display());
        }
        Command::Export {
            summary_dir,
            format,
            filter,
            search,
            output,
        } => {
            let format: ExportFormat = format.parse()?;
            let filter: MapFilter = filter.parse()?;
            let exported = commands::export(&summary_dir, format, filter, search.as_deref())?;

            match output {
                Some(path) => {
                    std::fs::write(&path, exported)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("💾 Export saved to: {}", path.display());
                }
                None => println!("{exported}"),
            }
        }
    }

    Ok(())
}
