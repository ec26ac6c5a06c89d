//! Validation pipeline stages driven by the CLI.

use std::time::Instant;

use anyhow::{Context, Result};
use pan_ingest::read_pan_records;
use pan_report::{ReportSource, file_sha256, write_reports};
use pan_validate::{evaluate, normalize, validate_records};
use tracing::{info, info_span, trace};

use crate::logging::redact_value;
use crate::types::{CheckRow, RunRequest, RunResult};

/// Ingest, validate, and optionally write reports for one input file.
pub fn run(request: &RunRequest) -> Result<RunResult> {
    let input = &request.input;
    let span = info_span!("run", input = %input.display());
    let _guard = span.enter();

    request
        .validation
        .validate()
        .context("invalid validation options")?;

    // =========================================================================
    // Stage 1: Ingest
    // =========================================================================
    let ingest_start = Instant::now();
    let records = read_pan_records(input, &request.ingest)
        .with_context(|| format!("read {}", input.display()))?;
    info!(
        records = records.len(),
        blank = records.iter().filter(|record| record.is_blank()).count(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    // =========================================================================
    // Stage 2: Clean, classify, summarize
    // =========================================================================
    let outcome = validate_records(&records, &request.validation);
    for classification in &outcome.classifications {
        trace!(
            value = redact_value(classification.value.as_str()),
            category = classification.category.label(),
            failures = %classification.failure_codes(),
            "classified"
        );
    }

    // =========================================================================
    // Stage 3: Reports
    // =========================================================================
    let reports = match &request.output_dir {
        Some(output_dir) => {
            let source = ReportSource {
                path: Some(input.clone()),
                sha256: Some(file_sha256(input).context("hash input file")?),
            };
            let paths = write_reports(
                output_dir,
                source,
                request.validation.duplicates,
                outcome.summary,
                &outcome.classifications,
            )
            .with_context(|| format!("write reports to {}", output_dir.display()))?;
            Some(paths)
        }
        None => {
            info!("dry run, reports not written");
            None
        }
    };

    Ok(RunResult {
        input: input.clone(),
        outcome,
        reports,
    })
}

/// Classify literal values, keeping input order and duplicates.
pub fn check_values(values: &[String]) -> Vec<CheckRow> {
    values
        .iter()
        .map(|input| {
            let row = match normalize(input) {
                Some(cleaned) => {
                    let classification = evaluate(&cleaned);
                    CheckRow {
                        input: input.clone(),
                        cleaned: Some(cleaned),
                        category: Some(classification.category),
                        failures: classification.failures,
                    }
                }
                None => CheckRow {
                    input: input.clone(),
                    cleaned: None,
                    category: None,
                    failures: Vec::new(),
                },
            };
            trace!(value = redact_value(input), valid = row.is_valid(), "checked");
            row
        })
        .collect()
}
