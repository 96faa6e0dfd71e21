//! Corrupt command - write a dirty copy of a dataset.

use std::path::PathBuf;

use colored::Colorize;
use scour::{write_delimited, CorruptionPlan, Scour, ScourConfig};

pub fn run(
    file: PathBuf,
    output: Option<PathBuf>,
    target: String,
    plan: CorruptionPlan,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let config = ScourConfig {
        plan,
        target,
        ..ScourConfig::default()
    };
    let scour = Scour::with_config(config);
    let (dirty, source) = scour.corrupt_file(&file)?;

    if verbose {
        println!(
            "Loaded {} rows x {} columns ({})",
            source.row_count, source.column_count, source.format
        );
    }

    let output_path = output.unwrap_or_else(|| {
        let mut p = file.clone();
        let stem = p.file_stem().unwrap_or_default().to_string_lossy().to_string();
        p.set_file_name(format!("{}.dirty.csv", stem));
        p
    });

    write_delimited(&dirty, &output_path, b',')?;

    println!(
        "{} {} ({} rows, {} missing cells)",
        "Wrote".green().bold(),
        output_path.display().to_string().white(),
        dirty.row_count(),
        dirty.missing_count()
    );

    Ok(())
}
