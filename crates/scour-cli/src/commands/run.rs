//! Run command - corrupt, clean with every strategy, and rank by RMSE.

use std::path::PathBuf;

use colored::Colorize;
use scour::{CorruptionPlan, RunResult, Scour, ScourConfig};

pub fn run(
    file: PathBuf,
    target: String,
    plan: CorruptionPlan,
    json: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    if !json {
        println!(
            "{} {}",
            "Benchmarking".cyan().bold(),
            file.display().to_string().white()
        );
    }

    let config = ScourConfig {
        plan,
        target,
        ..ScourConfig::default()
    };
    let result = Scour::with_config(config).run(&file)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if verbose {
        println!();
        println!("{}", "Source:".yellow().bold());
        println!("  file:    {}", result.source.file);
        println!("  format:  {}", result.source.format);
        println!("  sha256:  {}", result.source.hash);
        println!(
            "  size:    {} rows x {} columns",
            result.source.row_count, result.source.column_count
        );
    }

    println!();
    println!(
        "Corrupted {} clean rows into {} dirty rows ({} missing cells)",
        result.clean_rows.to_string().white().bold(),
        result.dirty_rows.to_string().white().bold(),
        result.dirty_missing_cells.to_string().red()
    );

    println!();
    print_table(&result);

    let baseline = &result.report.baseline;
    println!();
    if let Some(best) = result.report.best_record() {
        println!(
            "{} {} (RMSE {:.4})",
            "Best strategy:".green().bold(),
            best.strategy.white().bold(),
            best.rmse
        );
        let delta = baseline.rmse - best.rmse;
        if delta > 0.0 {
            println!(
                "Improves on the manual baseline by {:.4} RMSE",
                delta
            );
        } else {
            println!(
                "The manual baseline is not beaten (delta {:.4} RMSE)",
                delta
            );
        }
    }

    Ok(())
}

fn print_table(result: &RunResult) {
    println!(
        "{}",
        format!(
            "{:<22} {:>6} {:>9} {:>9} {:>9} {:>9}",
            "Strategy", "Rows", "RMSE", "MAE", "R2", "Time (s)"
        )
        .bold()
    );

    print_record(
        &result.report.baseline.strategy,
        result.report.baseline.rows_after,
        result.report.baseline.rmse,
        result.report.baseline.mae,
        result.report.baseline.r2,
        result.report.baseline.runtime_seconds,
        false,
    );
    for record in result.report.strategies.values() {
        print_record(
            &record.strategy,
            record.rows_after,
            record.rmse,
            record.mae,
            record.r2,
            record.runtime_seconds,
            record.strategy == result.report.best,
        );
    }
}

#[allow(clippy::too_many_arguments)]
fn print_record(
    strategy: &str,
    rows: usize,
    rmse: f64,
    mae: f64,
    r2: f64,
    runtime: f64,
    is_best: bool,
) {
    let line = format!(
        "{:<22} {:>6} {:>9.4} {:>9.4} {:>9.4} {:>9.3}",
        strategy, rows, rmse, mae, r2, runtime
    );
    if is_best {
        println!("{}", line.green());
    } else {
        println!("{}", line);
    }
}
