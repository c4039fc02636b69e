//! Init command implementation.

use std::path::PathBuf;

use crate::app::api::{InitOutcome, InitReport};
use crate::domain::AppError;

pub fn run_init(cwd: Option<PathBuf>, yes: bool) -> Result<(), AppError> {
    let outcome = match cwd {
        Some(path) => crate::app::api::init_at(path, yes)?,
        None => crate::app::api::init(yes)?,
    };

    match outcome {
        InitOutcome::Completed(report) => print_report(&report),
        InitOutcome::Cancelled => println!("Initialization cancelled."),
    }
    Ok(())
}

fn print_report(report: &InitReport) {
    for dir in &report.directories_created {
        println!("  Created {}/", dir.display());
    }
    for file in &report.files_written {
        println!("  Wrote {}", file.display());
    }
    println!(
        "  Installed {} package(s) with {}",
        report.dependencies.len(),
        report.package_manager
    );
    println!("✅ Project initialization completed.");
}
