//! Command dispatch logic for evalio
use std::time::Instant;

use evalio_core::config::EvalConfig;
use evalio_core::error::Result;
use evalio_core::hybrid::{HybridScorer, HybridWeights};
use evalio_core::{EvaluationMode, Evaluator};

use crate::cli::{Cli, Commands, ModeArgs};
use crate::commands;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    match &cli.command {
        None => handle_no_command(),

        Some(Commands::Evaluate(args)) => {
            let (evaluator, mode) = prepare(cli, &args.mode, start)?;
            commands::evaluate::execute(cli, &evaluator, mode, &args.input)
        }

        Some(Commands::Demo(args)) => {
            let (evaluator, mode) = prepare(cli, args, start)?;
            commands::demo::execute(cli, &evaluator, mode)
        }
    }
}

/// Resolve configuration, apply flag overrides and build the evaluator.
///
/// Weight validation happens here, before any answer is scored.
fn prepare(cli: &Cli, args: &ModeArgs, start: Instant) -> Result<(Evaluator, EvaluationMode)> {
    let config = EvalConfig::discover(cli.config.as_deref())?;
    let evaluator = Evaluator::from_config(&config)?;

    let evaluator = match (args.rubric_weight, args.similarity_weight) {
        (Some(rubric_weight), Some(similarity_weight)) => {
            let weights = HybridWeights::new(rubric_weight, similarity_weight)?;
            evaluator.with_hybrid(HybridScorer::with_weights(weights))
        }
        _ => evaluator,
    };

    let mode = args.mode.unwrap_or(config.default_mode);

    tracing::debug!(%mode, elapsed = ?start.elapsed(), "prepare_evaluator");
    Ok((evaluator, mode))
}

fn handle_no_command() -> Result<()> {
    println!("evalio {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Explainable rubric and similarity scoring for free-text answers.");
    println!();
    println!("Run `evalio --help` for usage information.");
    Ok(())
}
