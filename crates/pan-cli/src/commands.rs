use anyhow::{Result, bail};
use pan_cli::pipeline::{check_values, run};
use pan_cli::types::{CheckRow, RunRequest, RunResult};
use pan_ingest::IngestOptions;
use pan_model::{DuplicateMode, ValidationOptions};

use crate::cli::{CheckArgs, ValidateArgs};

pub fn run_validate(args: &ValidateArgs) -> Result<RunResult> {
    let request = build_request(args)?;
    run(&request)
}

pub fn run_check(args: &CheckArgs) -> Vec<CheckRow> {
    check_values(&args.values)
}

fn build_request(args: &ValidateArgs) -> Result<RunRequest> {
    if !args.delimiter.is_ascii() {
        bail!("delimiter must be a single ASCII character, got '{}'", args.delimiter);
    }

    let mut ingest = IngestOptions::default()
        .with_delimiter(args.delimiter as u8)
        .with_header(!args.no_header);
    if let Some(column) = &args.column {
        ingest = ingest.with_column(column.clone());
    }

    let validation = ValidationOptions::new()
        .with_duplicates(if args.per_record {
            DuplicateMode::PerRecord
        } else {
            DuplicateMode::Collapse
        })
        .with_max_raw_length(match args.max_raw_length {
            0 => None,
            limit => Some(limit),
        });

    let output_dir = if args.dry_run {
        None
    } else {
        Some(args.output_dir.clone().unwrap_or_else(|| {
            args.input
                .parent()
                .unwrap_or_else(|| std::path::Path::new("."))
                .join("output")
        }))
    };

    Ok(RunRequest {
        input: args.input.clone(),
        ingest,
        validation,
        output_dir,
    })
}
