//! Rendering of command payloads for stdout.
//!
//! Every JSON payload is wrapped in the same envelope:
//!
//! ```json
//! {
//!   "schema_version": "1.0.0",
//!   "run_id": "run-0123456789ab",
//!   "generated_at": "2026-01-01T00:00:00+00:00",
//!   "command": "evaluate",
//!   "result": { ... }
//! }
//! ```
//!
//! Markdown and summary renderings are for people and carry no stability
//! guarantee.

use crate::eval::{CheckedMetrics, Evaluation, RocCurve, SampleSet};
use crate::exit_codes::ExitCode;
use roc_common::{EvaluationConfig, OutputFormat, SCHEMA_VERSION};
use serde::Serialize;
use std::fmt::Write as _;

/// Largest curve printed point-by-point in Markdown.
pub const MD_MAX_POINTS: usize = 40;

/// JSON envelope shared by all commands.
#[derive(Debug, Serialize)]
pub struct Report<'a, T: Serialize> {
    pub schema_version: &'static str,
    pub run_id: &'a str,
    pub generated_at: String,
    pub command: &'a str,
    pub result: &'a T,
}

impl<'a, T: Serialize> Report<'a, T> {
    pub fn new(command: &'a str, run_id: &'a str, result: &'a T) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            run_id,
            generated_at: chrono::Utc::now().to_rfc3339(),
            command,
            result,
        }
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Payload of the `roc` command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RocReport {
    pub config: EvaluationConfig,
    pub sample_count: usize,
    pub positive_count: usize,
    pub negative_count: usize,
    pub auc: f64,
    pub points: RocCurve,
}

/// Payload of the `generate` command when no `--out` file is given.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleReport<'a> {
    pub preset: Option<&'a str>,
    pub seed: u64,
    pub sample_count: usize,
    pub positive_count: usize,
    pub negative_count: usize,
    /// Present only when the samples were written to a file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub samples: Option<&'a SampleSet>,
}

fn rate(value: Option<f64>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| format!("{v:.3}"))
}

/// Render one evaluation.
pub fn render_evaluation(
    eval: &Evaluation,
    format: OutputFormat,
    run_id: &str,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => Report::new("evaluate", run_id, eval).to_json_pretty(),
        OutputFormat::Summary => Ok(format!(
            "[{}] evaluate: threshold={} sens={} spec={} acc={} auc={:.4}",
            run_id,
            eval.threshold,
            rate(eval.checked.sensitivity),
            rate(eval.checked.specificity),
            rate(eval.checked.accuracy),
            eval.auc
        )),
        OutputFormat::Md => Ok(evaluation_markdown(eval)),
    }
}

fn evaluation_markdown(eval: &Evaluation) -> String {
    let m = &eval.matrix;
    let mut out = String::new();
    let _ = writeln!(out, "# roclab evaluate");
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Threshold {} ({}), sweep {}, {} samples ({} positive, {} negative)",
        eval.threshold,
        eval.config.rule,
        eval.config.sweep,
        eval.sample_count,
        eval.positive_count,
        eval.negative_count
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "## Confusion Matrix");
    let _ = writeln!(out);
    let _ = writeln!(out, "|             | actual + | actual - |");
    let _ = writeln!(out, "|-------------|----------|----------|");
    let _ = writeln!(out, "| predicted + | {:>8} | {:>8} |", m.tp, m.fp);
    let _ = writeln!(out, "| predicted - | {:>8} | {:>8} |", m.fn_, m.tn);
    let _ = writeln!(out);
    out.push_str(&metrics_markdown(&eval.checked));
    let _ = writeln!(out);
    let _ = writeln!(out, "## ROC");
    let _ = writeln!(out);
    let _ = writeln!(out, "AUC: {:.4} over {} points", eval.auc, eval.curve.len());
    let _ = writeln!(
        out,
        "Operating point: FPR {:.3}, TPR {:.3}",
        eval.operating_point.fpr, eval.operating_point.tpr
    );
    out
}

fn metrics_markdown(checked: &CheckedMetrics) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "## Metrics");
    let _ = writeln!(out);
    let _ = writeln!(out, "| metric      | value |");
    let _ = writeln!(out, "|-------------|-------|");
    for (name, value) in [
        ("sensitivity", checked.sensitivity),
        ("specificity", checked.specificity),
        ("accuracy", checked.accuracy),
        ("ppv", checked.ppv),
        ("npv", checked.npv),
    ] {
        let _ = writeln!(out, "| {:<11} | {} |", name, rate(value));
    }
    out
}

/// Render an ROC sweep.
pub fn render_roc(
    report: &RocReport,
    format: OutputFormat,
    run_id: &str,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => Report::new("roc", run_id, report).to_json_pretty(),
        OutputFormat::Summary => Ok(format!(
            "[{}] roc: sweep={} points={} auc={:.4}",
            run_id,
            report.config.sweep,
            report.points.len(),
            report.auc
        )),
        OutputFormat::Md => {
            let mut out = String::new();
            let _ = writeln!(out, "# roclab roc");
            let _ = writeln!(out);
            let _ = writeln!(
                out,
                "Sweep {} ({}), AUC {:.4}",
                report.config.sweep, report.config.rule, report.auc
            );
            let _ = writeln!(out);
            if report.points.len() > MD_MAX_POINTS {
                let _ = writeln!(
                    out,
                    "{} points; use `-f json` for the full curve.",
                    report.points.len()
                );
                return Ok(out);
            }
            let _ = writeln!(out, "| FPR   | TPR   | threshold |");
            let _ = writeln!(out, "|-------|-------|-----------|");
            for p in report.points.iter() {
                let _ = writeln!(out, "| {:.3} | {:.3} | {:.4} |", p.fpr, p.tpr, p.threshold);
            }
            Ok(out)
        }
    }
}

/// Render a generated sample set.
pub fn render_samples(
    report: &SampleReport<'_>,
    format: OutputFormat,
    run_id: &str,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => Report::new("generate", run_id, report).to_json_pretty(),
        OutputFormat::Summary => Ok(format!(
            "[{}] generate: {} samples ({} positive, {} negative), seed {}",
            run_id, report.sample_count, report.positive_count, report.negative_count, report.seed
        )),
        OutputFormat::Md => {
            let mut out = String::new();
            let _ = writeln!(out, "# roclab generate");
            let _ = writeln!(out);
            let _ = writeln!(out, "| field     | value |");
            let _ = writeln!(out, "|-----------|-------|");
            let _ = writeln!(out, "| preset    | {} |", report.preset.unwrap_or("custom"));
            let _ = writeln!(out, "| seed      | {} |", report.seed);
            let _ = writeln!(out, "| samples   | {} |", report.sample_count);
            let _ = writeln!(out, "| positives | {} |", report.positive_count);
            let _ = writeln!(out, "| negatives | {} |", report.negative_count);
            if let Some(path) = &report.path {
                let _ = writeln!(out, "| written   | {} |", path);
            }
            Ok(out)
        }
    }
}

/// Render an error for stderr.
pub fn render_error(error: &roc_common::Error, format: OutputFormat, run_id: &str) -> String {
    match format {
        OutputFormat::Json => {
            let response = serde_json::json!({
                "schema_version": SCHEMA_VERSION,
                "run_id": run_id,
                "generated_at": chrono::Utc::now().to_rfc3339(),
                "status": "error",
                "exit_code": ExitCode::from_error(error).code_name(),
                "error": error.to_json(),
            });
            serde_json::to_string_pretty(&response).unwrap_or_else(|_| error.to_string())
        }
        OutputFormat::Summary => format!("[{}] error {}: {}", run_id, error.code(), error),
        OutputFormat::Md => error.format_human(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::evaluate;

    fn five() -> SampleSet {
        SampleSet::from_pairs(&[
            (0.9, true),
            (0.8, true),
            (0.4, false),
            (0.3, false),
            (0.6, true),
        ])
    }

    #[test]
    fn json_envelope_wraps_result() {
        let eval = evaluate(&five(), 0.5, &EvaluationConfig::default());
        let text = render_evaluation(&eval, OutputFormat::Json, "run-test").unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["schema_version"], SCHEMA_VERSION);
        assert_eq!(value["run_id"], "run-test");
        assert_eq!(value["command"], "evaluate");
        assert_eq!(value["result"]["matrix"]["tp"], 3);
        assert_eq!(value["result"]["matrix"]["fn"], 0);
        assert_eq!(value["result"]["auc"], 1.0);
        assert!(value["generated_at"].as_str().is_some());
    }

    #[test]
    fn markdown_shows_na_for_undefined_rates() {
        let only_negatives = SampleSet::from_pairs(&[(0.2, false), (0.7, false)]);
        let eval = evaluate(&only_negatives, 0.5, &EvaluationConfig::default());
        let md = render_evaluation(&eval, OutputFormat::Md, "run-test").unwrap();
        assert!(md.contains("| sensitivity | N/A |"));
        assert!(md.contains("| specificity | 0.500 |"));
    }

    #[test]
    fn summary_is_one_line() {
        let eval = evaluate(&five(), 0.5, &EvaluationConfig::exact());
        let line = render_evaluation(&eval, OutputFormat::Summary, "run-x").unwrap();
        assert!(!line.contains('\n'));
        assert!(line.contains("auc=1.0000"));
    }

    #[test]
    fn long_curves_are_elided_in_markdown() {
        let samples = five();
        let config = EvaluationConfig::default();
        let curve = crate::eval::roc_sweep(&samples, &config);
        let report = RocReport {
            config,
            sample_count: samples.len(),
            positive_count: samples.positive_count(),
            negative_count: samples.negative_count(),
            auc: crate::eval::auc(&curve),
            points: curve,
        };
        let md = render_roc(&report, OutputFormat::Md, "run-x").unwrap();
        assert!(md.contains("101 points"));
    }

    #[test]
    fn error_json_carries_code() {
        let err = roc_common::Error::DegenerateSamples {
            positives: 0,
            negatives: 2,
        };
        let text = render_error(&err, OutputFormat::Json, "run-x");
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["status"], "error");
        assert_eq!(value["exit_code"], "ERR_DATA");
        assert_eq!(value["error"]["code"], 21);
    }
}
