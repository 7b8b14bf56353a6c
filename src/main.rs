use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use stigmergy_core::init_logging;
use stigmergy_lib::app::{self, App, Overrides};
use stigmergy_lib::ui::{ProgressLog, TraceRecorder};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Number of ticks to run
    #[arg(short, long)]
    steps: Option<u64>,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Number of ants
    #[arg(short, long)]
    agents: Option<usize>,

    /// Write agent snapshots as JSON lines to this file
    #[arg(short, long)]
    trace: Option<PathBuf>,

    /// Ticks between trace frames
    #[arg(long)]
    trace_interval: Option<u64>,

    /// Move agents on a single thread
    #[arg(long)]
    sequential: bool,
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let mut config = app::load_config(&args.config)?;
    Overrides {
        steps: args.steps,
        seed: args.seed,
        agents: args.agents,
        trace_interval: args.trace_interval,
        sequential: args.sequential,
    }
    .apply(&mut config);

    let mut progress = ProgressLog::take_interval(&mut config);
    let trace_interval = config.output.trace_interval;
    let mut app = App::new(config)?;

    let summary = match &args.trace {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating trace file {}", path.display()))?;
            let mut recorder = TraceRecorder::new(BufWriter::new(file), trace_interval);
            let summary = app.run(&mut (&mut progress, &mut recorder))?;
            recorder
                .finish()
                .with_context(|| format!("writing trace file {}", path.display()))?;
            summary
        }
        None => app.run(&mut progress)?,
    };

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
