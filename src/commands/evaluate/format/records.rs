//! Records output formatting for evaluations

use evalio_core::records::{csv_or_dash, quoted};
use evalio_core::{Evaluation, EvaluationMode, HybridResult, RubricResult, SimilarityResult};

/// Output in records format
pub fn output_records(mode: EvaluationMode, evaluation: &Evaluation) {
    println!(
        "H evalio=1 records=1 mode={} method={} percentage={:.2} confidence={:.4}",
        mode,
        evaluation.method(),
        evaluation.percentage(),
        evaluation.confidence()
    );

    match evaluation {
        Evaluation::Rubric { result, .. } => print_rubric(result),
        Evaluation::Similarity(result) => print_similarity(result),
        Evaluation::Hybrid(result) => {
            print_rubric(&result.rubric_details);
            print_similarity(&result.similarity_details);
            print_combined(result);
        }
    }
}

fn print_rubric(result: &RubricResult) {
    println!(
        "R score={} max={} percentage={:.2} matched={} missing={}",
        result.score,
        result.max_score,
        result.percentage,
        result.matched_keypoints.len(),
        result.missing_keypoints.len()
    );

    for item in &result.breakdown {
        println!(
            "K {} earned={} weight={} required={} matched={} missing={}",
            quoted(&item.keypoint),
            item.earned,
            item.weight,
            item.required,
            quoted(&csv_or_dash(&item.matched_keywords)),
            quoted(&csv_or_dash(&item.missing_keywords))
        );
    }
}

fn print_similarity(result: &SimilarityResult) {
    let error = result
        .error
        .as_deref()
        .map(|e| format!(" error={}", quoted(e)))
        .unwrap_or_default();

    println!(
        "S score={:.4} percentage={:.2} confidence={:.4} interpretation={}{}",
        result.similarity_score,
        result.percentage,
        result.confidence,
        result.interpretation,
        error
    );
}

fn print_combined(result: &HybridResult) {
    println!(
        "C final={:.2} rubric_weight={} rubric_contribution={:.2} similarity_weight={} similarity_contribution={:.2}",
        result.final_percentage,
        result.rubric_component.weight,
        result.rubric_component.contribution,
        result.similarity_component.weight,
        result.similarity_component.contribution
    );
}
