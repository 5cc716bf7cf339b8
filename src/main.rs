//! Chronnotate command line
//!
//! Loads a CSV table, applies one annotation operation and writes the
//! labeled table to stdout or to `-o`.

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde_json::json;
use std::io;
use std::path::{Path, PathBuf};

use chronnotate::core::{PointerEvent, PressTarget, RegionChange};
use chronnotate::{Session, Settings};

#[derive(Parser)]
#[command(
    name = "chronnotate",
    version,
    about = "Annotate time-indexed CSV data with labeled regions"
)]
struct Cli {
    /// Settings file (JSON)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Name of the label column (default: Label)
    #[arg(long, global = true)]
    label_column: Option<String>,

    /// Lines to skip before the CSV header
    #[arg(long, global = true)]
    skip_lines: Option<usize>,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Output {
    /// Write the labeled table here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List labels and decoded regions
    Inspect {
        file: PathBuf,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Create a region carrying one or more labels
    Annotate {
        file: PathBuf,

        /// Start position of the region
        #[arg(long, allow_negative_numbers = true)]
        from: f64,

        /// End position of the region
        #[arg(long, allow_negative_numbers = true)]
        to: f64,

        /// Label name, repeat for a composite label (created if needed)
        #[arg(long = "label", required = true)]
        labels: Vec<String>,

        #[command(flatten)]
        output: Output,
    },
    /// Shift a region along the timeline
    Move {
        file: PathBuf,

        /// Region index in collection order
        #[arg(long)]
        region: usize,

        /// Distance to move, in samples
        #[arg(long, allow_negative_numbers = true)]
        by: f64,

        #[command(flatten)]
        output: Output,
    },
    /// Rename a label everywhere it is used
    Rename {
        file: PathBuf,
        old: String,
        new: String,

        #[command(flatten)]
        output: Output,
    },
    /// Delete labels and every region tagged with them
    DeleteLabel {
        file: PathBuf,

        #[arg(required = true)]
        names: Vec<String>,

        #[command(flatten)]
        output: Output,
    },
    /// Remove a single region
    RemoveRegion {
        file: PathBuf,

        /// Region index in collection order
        #[arg(long)]
        region: usize,

        #[command(flatten)]
        output: Output,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn load_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = match &cli.settings {
        Some(path) => Settings::load(path)
            .with_context(|| format!("failed to load settings {}", path.display()))?,
        None => Settings::default(),
    };
    if let Some(name) = &cli.label_column {
        settings.set_label_column(name.clone());
    }
    if let Some(lines) = cli.skip_lines {
        settings.skip_lines = lines;
    }
    Ok(settings)
}

fn open(file: &Path, settings: Settings) -> Result<Session> {
    Session::open(file, settings).with_context(|| format!("failed to read {}", file.display()))
}

fn write_output(session: &Session, output: &Output) -> Result<()> {
    match &output.output {
        Some(path) => session
            .save(path)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => {
            let table = session.labeled_table()?;
            table.write_csv(io::stdout().lock())?;
        }
    }
    Ok(())
}

fn label_id(session: &Session, name: &str) -> Result<uuid::Uuid> {
    match session.registry().find_by_name(name) {
        Some(label) => Ok(label.id),
        None => bail!("no label named {:?}", name),
    }
}

fn region_id(session: &Session, index: usize) -> Result<uuid::Uuid> {
    match session.regions().nth(index) {
        Some(region) => Ok(region.id),
        None => bail!(
            "region {} does not exist ({} regions)",
            index,
            session.regions().len()
        ),
    }
}

fn report(changes: &[RegionChange]) {
    for change in changes {
        if let RegionChange::ChangeFinished { id, bounds, .. } = change {
            eprintln!("region {} now spans [{}, {})", id, bounds.0, bounds.1);
        }
    }
}

fn inspect(session: &Session, as_json: bool) -> Result<()> {
    if as_json {
        let labels: Vec<_> = session
            .registry()
            .iter()
            .map(|label| json!({ "name": label.name, "color": label.color }))
            .collect();
        let regions: Vec<_> = session
            .regions()
            .iter()
            .map(|region| {
                json!({
                    "label": region.label,
                    "start": region.start(),
                    "end": region.end(),
                    "color": region.color,
                })
            })
            .collect();
        let report = json!({
            "rows": session.table().row_count(),
            "label_column": session.settings().label_column,
            "series": session.table().numeric_columns(session.settings()),
            "labels": labels,
            "regions": regions,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("rows: {}", session.table().row_count());
    println!("labels:");
    for label in session.registry().iter() {
        println!("  {}  {}", label.color, label.name);
    }
    println!("regions:");
    for (index, region) in session.regions().iter().enumerate() {
        println!(
            "  {:>3}  [{}, {})  {}",
            index,
            region.start(),
            region.end(),
            region.label
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let settings = load_settings(&cli)?;

    match cli.command {
        Commands::Inspect { file, json } => {
            let session = open(&file, settings)?;
            inspect(&session, json)?;
        }

        Commands::Annotate {
            file,
            from,
            to,
            labels,
            output,
        } => {
            let mut session = open(&file, settings)?;
            session.clear_label_selection();
            for name in &labels {
                let id = session.ensure_label(name);
                session.extend_label_selection(id);
            }
            let mut changes = session.handle_pointer(PointerEvent::Press {
                x: from,
                target: PressTarget::Background,
            });
            if changes.is_empty() {
                bail!("no region was created");
            }
            changes.extend(session.handle_pointer(PointerEvent::Release { x: to }));
            report(&changes);
            write_output(&session, &output)?;
        }

        Commands::Move {
            file,
            region,
            by,
            output,
        } => {
            let mut session = open(&file, settings)?;
            let id = region_id(&session, region)?;
            let start = session.regions().get(id).map(|r| r.start()).unwrap_or_default();
            session.handle_pointer(PointerEvent::Press {
                x: start,
                target: PressTarget::Region(id),
            });
            let changes = session.handle_pointer(PointerEvent::Release { x: start + by });
            report(&changes);
            write_output(&session, &output)?;
        }

        Commands::Rename {
            file,
            old,
            new,
            output,
        } => {
            let mut session = open(&file, settings)?;
            let id = label_id(&session, &old)?;
            if !session.rename_label(id, &new) {
                bail!("could not rename {:?} to {:?}", old, new);
            }
            write_output(&session, &output)?;
        }

        Commands::DeleteLabel {
            file,
            names,
            output,
        } => {
            let mut session = open(&file, settings)?;
            session.clear_label_selection();
            for name in &names {
                let id = label_id(&session, name)?;
                session.extend_label_selection(id);
            }
            let deletions = session.delete_selected_labels();
            let removed: usize = deletions.iter().map(|d| d.regions.len()).sum();
            eprintln!(
                "deleted {} label(s) and {} region(s)",
                deletions.len(),
                removed
            );
            write_output(&session, &output)?;
        }

        Commands::RemoveRegion {
            file,
            region,
            output,
        } => {
            let mut session = open(&file, settings)?;
            let id = region_id(&session, region)?;
            if let Some(removed) = session.remove_region(id) {
                eprintln!("removed region {:?} [{}, {})", removed.label, removed.start(), removed.end());
            }
            write_output(&session, &output)?;
        }
    }

    Ok(())
}
