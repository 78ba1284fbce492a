//! Human-readable output formatting for evaluations

use evalio_core::hybrid::ComponentScore;
use evalio_core::{Evaluation, HybridResult, ItemStatus, RubricResult, SimilarityResult};

use crate::cli::Cli;

const RULE_WIDTH: usize = 60;

/// Output in human-readable format
pub fn output_human(cli: &Cli, evaluation: &Evaluation) {
    if !cli.quiet {
        println!("{}", "=".repeat(RULE_WIDTH));
        println!("EVALUATION RESULT");
        println!("{}", "=".repeat(RULE_WIDTH));
    }

    println!("Score: {:.2}%", evaluation.percentage());
    println!("Confidence: {:.2}", evaluation.confidence());
    println!("Method: {}", evaluation.method());

    match evaluation {
        Evaluation::Rubric { result, .. } => print_rubric(cli, result),
        Evaluation::Similarity(result) => print_similarity(result),
        Evaluation::Hybrid(result) => print_hybrid(cli, result),
    }
}

fn print_rubric(cli: &Cli, result: &RubricResult) {
    println!();
    println!(
        "Rubric: {} / {} points ({:.2}%)",
        result.score, result.max_score, result.percentage
    );

    if !result.matched_keypoints.is_empty() {
        println!();
        println!("Matched keypoints:");
        for keypoint in &result.matched_keypoints {
            println!("  ✓ {}", keypoint);
        }
    }

    if !result.missing_keypoints.is_empty() {
        println!();
        println!("Missing keypoints:");
        for keypoint in &result.missing_keypoints {
            println!("  ✗ {}", keypoint);
        }
    }

    if result.breakdown.is_empty() {
        return;
    }

    println!();
    println!("Breakdown:");
    for item in &result.breakdown {
        let icon = match item.status {
            ItemStatus::Complete => "✓",
            ItemStatus::Partial => "◐",
            ItemStatus::Missing => "✗",
        };
        println!(
            "  {} {}: {}/{}",
            icon, item.keypoint, item.earned, item.weight
        );
        if cli.quiet {
            continue;
        }
        if !item.matched_keywords.is_empty() {
            println!("      Matched: {}", item.matched_keywords.join(", "));
        }
        if !item.missing_keywords.is_empty() {
            println!("      Missing: {}", item.missing_keywords.join(", "));
        }
    }
}

fn print_similarity(result: &SimilarityResult) {
    println!();
    println!(
        "Similarity: {:.4} ({})",
        result.similarity_score, result.interpretation
    );
    if let Some(error) = &result.error {
        println!("  note: {}", error);
    }
}

fn print_component(label: &str, component: &ComponentScore) {
    println!(
        "  {:<11} {:>6.2}% x {:.2} = {:.2}",
        label, component.percentage, component.weight, component.contribution
    );
}

fn print_hybrid(cli: &Cli, result: &HybridResult) {
    println!();
    println!("Components:");
    print_component("rubric", &result.rubric_component);
    print_component("similarity", &result.similarity_component);

    print_rubric(cli, &result.rubric_details);
    print_similarity(&result.similarity_details);
}
