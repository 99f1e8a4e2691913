//! Verdict CLI — wires the release gate engine to files and exit codes.
//!
//! The engine returns values; mapping verdicts to process exit codes
//! happens here and nowhere else.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing::error;

use verdict_core::config::{CliOverrides, VerdictConfig};
use verdict_core::errors::ReportError;
use verdict_engine::aggregate::{self, RunInfo};
use verdict_engine::decision::{DecisionEngine, FinalDecision};
use verdict_engine::ingest::discovery;
use verdict_engine::platform::{self, PlatformGauges, ReleaseDecision, SnapshotCluster};
use verdict_engine::report::{available_formats, create_reporter};
use verdict_engine::summary::normalize;

#[derive(Parser, Debug)]
#[command(name = "verdict", version, about = "Release decision gate")]
struct Cli {
    /// Directory containing verdict.toml (defaults to the current directory).
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate platform health from cluster snapshots.
    Platform {
        /// `kubectl get nodes -o json` dump.
        #[arg(long)]
        nodes: PathBuf,
        /// `kubectl get pods -A -o json` dump.
        #[arg(long)]
        pods: PathBuf,
        /// Print the structured report as JSON instead of the summary text.
        #[arg(long, default_value_t = false)]
        json: bool,
        #[arg(long)]
        restart_threshold: Option<u32>,
    },
    /// Assemble the aggregate release summary from upstream reports.
    Aggregate {
        /// Root directory holding the per-layer report trees.
        #[arg(long, default_value = ".")]
        root: PathBuf,
        #[arg(long, default_value = "release-summary.json")]
        output: PathBuf,
        /// Also write the per-tool detail document next to the summary.
        #[arg(long, default_value_t = false)]
        details: bool,
    },
    /// Decide the release from the aggregate summary.
    Decide {
        /// Explicit summary document; the candidate paths are searched
        /// when omitted.
        #[arg(long)]
        summary: Option<PathBuf>,
        /// Root directory the candidate paths are resolved against.
        #[arg(long, default_value = ".")]
        root: PathBuf,
        /// Where to write the final decision document.
        #[arg(long)]
        output: Option<PathBuf>,
        #[arg(long, default_value = "console")]
        format: String,
        #[arg(long)]
        fail_on_hold: Option<bool>,
    },
    /// Render platform gauges as Prometheus exposition text.
    Metrics {
        #[arg(long)]
        nodes: PathBuf,
        #[arg(long)]
        pods: PathBuf,
        /// Re-evaluate on a fixed cadence instead of rendering once.
        #[arg(long, default_value_t = false)]
        watch: bool,
        #[arg(long)]
        interval_secs: Option<u64>,
    },
}

fn main() -> ExitCode {
    verdict_core::tracing::init_tracing();
    let cli = Cli::parse();
    let config_dir = cli.config_dir.clone().unwrap_or_else(|| PathBuf::from("."));

    match cli.command {
        Commands::Platform {
            nodes,
            pods,
            json,
            restart_threshold,
        } => {
            let overrides = CliOverrides {
                restart_threshold,
                ..Default::default()
            };
            let config = match load_config(&config_dir, &overrides) {
                Ok(config) => config,
                Err(code) => return code,
            };
            run_platform(&nodes, &pods, json, &config)
        }
        Commands::Aggregate {
            root,
            output,
            details,
        } => {
            let config = match load_config(&config_dir, &CliOverrides::default()) {
                Ok(config) => config,
                Err(code) => return code,
            };
            run_aggregate(&root, &output, details, &config)
        }
        Commands::Decide {
            summary,
            root,
            output,
            format,
            fail_on_hold,
        } => {
            let overrides = CliOverrides {
                fail_on_hold,
                ..Default::default()
            };
            let config = match load_config(&config_dir, &overrides) {
                Ok(config) => config,
                Err(code) => return code,
            };
            run_decide(summary.as_deref(), &root, output.as_deref(), &format, &config)
        }
        Commands::Metrics {
            nodes,
            pods,
            watch,
            interval_secs,
        } => {
            let overrides = CliOverrides {
                poll_interval_secs: interval_secs,
                ..Default::default()
            };
            let config = match load_config(&config_dir, &overrides) {
                Ok(config) => config,
                Err(code) => return code,
            };
            run_metrics(&nodes, &pods, watch, &config)
        }
    }
}

fn load_config(dir: &Path, overrides: &CliOverrides) -> Result<VerdictConfig, ExitCode> {
    VerdictConfig::load(dir, Some(overrides)).map_err(|err| {
        eprintln!("configuration error: {err}");
        ExitCode::from(2)
    })
}

fn run_platform(nodes: &Path, pods: &Path, json: bool, config: &VerdictConfig) -> ExitCode {
    let cluster = SnapshotCluster::new(nodes, pods);
    let report = platform::evaluate(&cluster, &config.platform);
    let decision = ReleaseDecision::from_report(&report);

    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(rendered) => println!("{rendered}"),
            Err(err) => {
                error!(error = %err, "failed to render platform report");
                return ExitCode::from(2);
            }
        }
    } else {
        println!("{}", decision.summary());
    }

    if decision.is_allowed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn run_aggregate(root: &Path, output: &Path, details: bool, config: &VerdictConfig) -> ExitCode {
    let run = RunInfo::from_env();
    let report = aggregate::aggregate(root, &run, &config.decision);

    let summary_doc = match serde_json::to_string_pretty(&report.summary) {
        Ok(doc) => doc,
        Err(err) => {
            eprintln!("failed to serialize summary: {err}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = write_file(output, &summary_doc) {
        eprintln!("failed to write {}: {err}", output.display());
        return ExitCode::FAILURE;
    }
    println!("wrote {}", output.display());

    if details {
        let details_path = output.with_file_name("release-details.json");
        match serde_json::to_string_pretty(&report) {
            Ok(doc) => {
                if let Err(err) = write_file(&details_path, &doc) {
                    eprintln!("failed to write {}: {err}", details_path.display());
                    return ExitCode::FAILURE;
                }
                println!("wrote {}", details_path.display());
            }
            Err(err) => {
                eprintln!("failed to serialize details: {err}");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

fn run_decide(
    summary_path: Option<&Path>,
    root: &Path,
    output: Option<&Path>,
    format: &str,
    config: &VerdictConfig,
) -> ExitCode {
    let candidates = config.decision.effective_summary_paths();
    let resolved = match summary_path {
        Some(path) => discovery::read_json_value(path).map(|value| (path.to_path_buf(), value)),
        None => discovery::find_first_json(root, &candidates),
    };

    // A totally absent summary is the one case the top level refuses to
    // decide on.
    let Some((path, raw)) = resolved else {
        let searched: Vec<String> = match summary_path {
            Some(path) => vec![path.display().to_string()],
            None => candidates
                .iter()
                .map(|candidate| root.join(candidate).display().to_string())
                .collect(),
        };
        let err = ReportError::SummaryNotFound {
            searched: searched.clone(),
        };
        eprintln!("{err}:");
        for path in &searched {
            eprintln!(" - {path}");
        }
        return ExitCode::FAILURE;
    };

    let summary = normalize(&raw);
    let decision = DecisionEngine::new().decide(&summary);
    let mut final_decision = FinalDecision::stamp(&decision, &summary);
    final_decision
        .reasoning
        .insert(0, format!("Input path used = {}", path.display()));

    let Some(reporter) = create_reporter(format) else {
        eprintln!(
            "unknown report format {format:?}; available: {}",
            available_formats().join(", ")
        );
        return ExitCode::from(2);
    };
    match reporter.generate(&final_decision) {
        Ok(rendered) => println!("{rendered}"),
        Err(err) => {
            eprintln!("report generation failed: {err}");
            return ExitCode::from(2);
        }
    }

    if let Some(output) = output {
        let doc = match serde_json::to_string_pretty(&final_decision) {
            Ok(doc) => doc,
            Err(err) => {
                eprintln!("failed to serialize decision: {err}");
                return ExitCode::from(2);
            }
        };
        if let Err(err) = write_file(output, &doc) {
            eprintln!("failed to write {}: {err}", output.display());
            return ExitCode::FAILURE;
        }
    }

    if final_decision
        .final_decision
        .blocks_release(config.decision.effective_fail_on_hold())
    {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn run_metrics(nodes: &Path, pods: &Path, watch: bool, config: &VerdictConfig) -> ExitCode {
    let cluster = SnapshotCluster::new(nodes, pods);
    let interval = Duration::from_secs(config.platform.effective_poll_interval_secs());

    // Sequential loop: a slow read delays the next evaluation rather than
    // overlapping it.
    loop {
        let report = platform::evaluate(&cluster, &config.platform);
        let gauges = PlatformGauges::from_report(&report);
        print!("{}", gauges.render_prometheus());

        if !watch {
            break;
        }
        std::thread::sleep(interval);
    }

    ExitCode::SUCCESS
}

fn write_file(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, contents)
}
