use std::num::NonZeroU32;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use u_cpusched::config::SimulationConfig;
use u_cpusched::gantt::{self, ColorPalette};
use u_cpusched::loader;
use u_cpusched::models::Algorithm;
use u_cpusched::report;
use u_cpusched::scheduler::run_all;

/// Single-CPU scheduling simulator
/// Runs a task batch through FCFS, SPN, HRRN, SRTF and Round-Robin
#[derive(Parser)]
#[command(name = "u-cpusched", version)]
#[command(about = "CPU scheduling simulator", long_about = None)]
struct Cli {
    /// Task batch (header line, then `name,arrival,service` rows)
    file: PathBuf,

    /// Discipline to run; repeat for several (default: all)
    #[arg(short, long = "algorithm")]
    algorithms: Vec<Algorithm>,

    /// Round-Robin time quantum
    #[arg(short, long)]
    quantum: Option<NonZeroU32>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Seed for chart colors
    #[arg(long)]
    seed: Option<u64>,

    /// Join back-to-back segments of the same task
    #[arg(long)]
    merge: bool,

    /// Chart columns per time unit
    #[arg(long)]
    scale: Option<usize>,

    /// JSON settings file; command-line flags override it
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    fn settings(&self) -> Result<SimulationConfig> {
        let mut config = match &self.config {
            Some(path) => SimulationConfig::from_path(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => SimulationConfig::new(),
        };

        if !self.algorithms.is_empty() {
            config = config.with_algorithms(self.algorithms.iter().copied());
        }
        if let Some(quantum) = self.quantum {
            config = config.with_quantum(quantum);
        }
        if let Some(seed) = self.seed {
            config = config.with_color_seed(seed);
        }
        if self.merge {
            config = config.with_merge_segments(true);
        }
        if let Some(scale) = self.scale {
            config = config.with_chart_scale(scale);
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.settings()?;

    let tasks = loader::load_path(&cli.file)
        .with_context(|| format!("loading tasks from {}", cli.file.display()))?;
    info!(
        tasks = tasks.len(),
        algorithms = config.algorithms.len(),
        "running simulation"
    );

    let results = run_all(&tasks, &config);

    match cli.format {
        OutputFormat::Text => {
            let mut palette = ColorPalette::from_seed(config.color_seed);
            for result in &results {
                palette.assign(result);
                println!(
                    "{}",
                    gantt::render(result, config.chart_scale, config.merge_segments)
                );
            }
            for (name, color) in palette.colors() {
                println!("{name}: {color}");
            }
        }
        OutputFormat::Json => {
            let reports = report::build_reports(&results, &config);
            println!("{}", report::to_json(&reports)?);
        }
    }

    Ok(())
}
