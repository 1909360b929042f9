use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};
use tracing::info;

use mockforge_core::{MockRecord, TypeRegistry};
use mockforge_download::format_size;
use mockforge_generate::output::{csv, json};
use mockforge_generate::{GenerateOptions, MockEngine};

use crate::error::CliError;
use crate::validate;

const PREVIEW_ROWS: usize = 5;
const PREVIEW_COLUMNS: usize = 4;
const PREVIEW_CELL_WIDTH: usize = 32;

#[derive(Args, Debug)]
pub struct MockArgs {
    /// Composite type to generate, e.g. `wp.post`.
    #[arg(value_name = "TYPE")]
    pub type_name: String,

    /// Number of records to generate.
    #[arg(short = 'c', long, default_value_t = 10)]
    pub count: usize,

    /// Output file; the extension must match the chosen format.
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Overwrite the output file when it already exists.
    #[arg(short = 'f', long)]
    pub force: bool,

    /// Generate and preview without writing anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Seed for reproducible output. Omitted means a random seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Probability that a nullable field is emitted as null.
    #[arg(long, default_value_t = 0.2)]
    pub null_rate: f64,

    /// Recursion budget for nested composite types.
    #[arg(long, default_value_t = 8)]
    pub max_depth: usize,

    /// Extra type definitions (JSON file) merged over the builtins.
    #[arg(long, value_name = "FILE")]
    pub types: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Csv,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }
}

pub fn run(args: MockArgs) -> Result<(), CliError> {
    if !(0.0..=1.0).contains(&args.null_rate) {
        return Err(CliError::InvalidArguments(format!(
            "--null-rate must be between 0.0 and 1.0, got {}",
            args.null_rate
        )));
    }
    if args.max_depth == 0 {
        return Err(CliError::InvalidArguments(
            "--max-depth must be at least 1".to_string(),
        ));
    }

    let registry = build_registry(args.types.as_deref())?;
    let options = GenerateOptions {
        seed: args.seed,
        null_rate: args.null_rate,
        max_depth: args.max_depth,
    };
    let engine = MockEngine::with_options(registry, options);

    if args.dry_run {
        let records = engine.generate(&args.type_name, args.count)?;
        preview(&args.type_name, &records);
        return Ok(());
    }

    let output = args.output.ok_or_else(|| {
        CliError::InvalidArguments("--output is required unless --dry-run is set".to_string())
    })?;
    validate::validate_output_path(&output, args.format.extension(), args.force)?;

    let records = engine.generate(&args.type_name, args.count)?;
    let bytes = match args.format {
        OutputFormat::Json => json::write_records(&output, &records)?,
        OutputFormat::Csv => csv::write_records(&output, &records)?,
    };

    println!(
        "Mocked {} records of '{}' to {} ({})",
        records.len(),
        args.type_name,
        output.display(),
        format_size(bytes)
    );
    Ok(())
}

pub fn list_types(types: Option<&Path>) -> Result<(), CliError> {
    let registry = build_registry(types)?;
    for name in registry.type_names() {
        println!("{name}");
    }
    Ok(())
}

fn build_registry(types: Option<&Path>) -> Result<TypeRegistry, CliError> {
    let mut registry = TypeRegistry::builtin();
    if let Some(path) = types {
        let added = registry.load_json(path)?;
        info!(path = %path.display(), added, "loaded extra type definitions");
    }
    Ok(registry)
}

/// Compact table of the first few records, columns truncated so the
/// preview stays readable for wide types.
fn preview(type_name: &str, records: &[MockRecord]) {
    println!(
        "DRY RUN: '{type_name}', {} records generated, nothing written",
        records.len()
    );
    let Some(first) = records.first() else {
        return;
    };

    let columns: Vec<&str> = first.keys().take(PREVIEW_COLUMNS).collect();
    let extra = first.len().saturating_sub(columns.len());
    let header = if extra > 0 {
        format!("{} (+{extra} more)", columns.join(" | "))
    } else {
        columns.join(" | ")
    };
    println!("  # | {header}");

    for (index, record) in records.iter().take(PREVIEW_ROWS).enumerate() {
        let cells: Vec<String> = columns
            .iter()
            .map(|key| {
                let cell = record
                    .get(key)
                    .map(|value| value.to_csv())
                    .unwrap_or_default();
                truncate_cell(&cell)
            })
            .collect();
        println!("{:>3} | {}", index + 1, cells.join(" | "));
    }
    if records.len() > PREVIEW_ROWS {
        println!("... {} more records", records.len() - PREVIEW_ROWS);
    }
}

fn truncate_cell(cell: &str) -> String {
    if cell.chars().count() <= PREVIEW_CELL_WIDTH {
        return cell.to_string();
    }
    let mut truncated: String = cell.chars().take(PREVIEW_CELL_WIDTH - 1).collect();
    truncated.push('…');
    truncated
}
