use crate::core::error::{DepsortError, DepsortResult};
use crate::core::models::Schedule;
use crate::core::{plan, read_lines};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "depsort")]
#[command(about = "Order tasks so every prerequisite comes first")]
#[command(version)]
pub struct Cli {
    /// Read task/prerequisite pairs from this file instead of standard input
    pub input: Option<PathBuf>,

    /// Emit the schedule as JSON instead of plain lines
    #[arg(long)]
    pub json: bool,
}

pub fn run() -> DepsortResult<()> {
    let cli = Cli::parse();

    let lines = match &cli.input {
        Some(path) => {
            let file = File::open(path).map_err(|source| DepsortError::InputFile {
                path: path.clone(),
                source,
            })?;
            read_lines(BufReader::new(file))?
        }
        None => read_lines(io::stdin().lock())?,
    };

    // Success or cycle is decided before anything is printed; no partial
    // order ever reaches stdout.
    let schedule = plan(&lines)?;

    let stdout = io::stdout();
    render(&mut stdout.lock(), &schedule, cli.json)
}

/// Write the schedule: one identifier per line, the literal `cycle`, or a
/// JSON document when requested.
fn render<W: Write>(out: &mut W, schedule: &Schedule, json: bool) -> DepsortResult<()> {
    if json {
        serde_json::to_writer(&mut *out, schedule)?;
        writeln!(out)?;
        return Ok(());
    }

    match schedule {
        Schedule::Order { tasks } => {
            for task in tasks {
                writeln!(out, "{task}")?;
            }
        }
        Schedule::Cycle => writeln!(out, "cycle")?,
    }
    Ok(())
}
