//! CLI command implementations for the `reagent` binary.

pub mod args;

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;

use reagent::core::config::IodineConfig;
use reagent::core::errors::ReagentError;
use reagent::model::{Algorithm, DetectionResult, Module};

use args::AnalyzeArgs;

/// Run the `analyze` subcommand: load the module-list file(s), dispatch to
/// the requested algorithm, and write the result as JSON.
pub async fn analyze_command(args: AnalyzeArgs) -> anyhow::Result<()> {
    let algorithm: Algorithm = args.algorithm.into();
    let config = IodineConfig::from_env()?;

    let spinner = if args.quiet {
        None
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(ProgressStyle::with_template("{spinner:.blue} {msg}")?);
        pb.set_message(format!("Running {algorithm}..."));
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    };

    let started = Instant::now();
    let result = run_analysis(&args.repos, algorithm, &config).await?;
    let elapsed = started.elapsed();

    if let Some(pb) = &spinner {
        pb.finish_with_message(format!(
            "{algorithm} found {} clone(s) in {:.2?}",
            result.clones.len(),
            elapsed
        ));
    }

    let out_path = args.out.clone().unwrap_or_else(default_output_path);
    tokio::fs::write(&out_path, result.to_json()?).await?;

    if !args.quiet {
        println!(
            "{} {} clone(s) written to {}",
            "✓".green(),
            result.clones.len().to_string().bold(),
            out_path.display().to_string().cyan()
        );
    }

    Ok(())
}

async fn run_analysis(
    repos: &[PathBuf],
    algorithm: Algorithm,
    config: &IodineConfig,
) -> anyhow::Result<DetectionResult> {
    match repos {
        [single] => {
            let modules = load_modules(single).await?;
            Ok(reagent::algorithms::run_single_repo(&modules, algorithm, config)?)
        }
        [a, b] => {
            let repo_a = load_modules(a).await?;
            let repo_b = load_modules(b).await?;
            Ok(reagent::algorithms::run_two_repos(
                &repo_a, &repo_b, algorithm, config,
            )?)
        }
        _ => Err(ReagentError::user_input(
            "analyze expects one or two module-list files",
        )
        .into()),
    }
}

async fn load_modules(path: &Path) -> anyhow::Result<Vec<Module>> {
    let raw = tokio::fs::read_to_string(path).await.map_err(|source| {
        ReagentError::Io {
            message: format!("failed to read {}", path.display()),
            source,
        }
    })?;
    let modules: Vec<Module> = serde_json::from_str(&raw).map_err(|source| {
        ReagentError::Serialization {
            message: format!("failed to parse {} as a module list", path.display()),
            source,
        }
    })?;
    Ok(modules)
}

fn default_output_path() -> PathBuf {
    let timestamp = chrono::Local::now().format("%Y-%m-%d_%H-%M-%S");
    PathBuf::from(format!("clones_{timestamp}.json"))
}
