//! `deploy-icons`
//!
//! Copies the staged icons into the Android, iOS and web project directories
//! and writes the iOS asset catalog descriptor.

use std::process::ExitCode;

use storekit::{deploy::deploy_all, ProjectLayout};

fn main() -> ExitCode {
    env_logger::init();

    let layout = ProjectLayout::default();
    let report = deploy_all(&layout);

    println!();
    println!(
        "Deployed {} files ({} missing, {} failed).",
        report.copied.len(),
        report.missing.len(),
        report.failed.len()
    );

    if report.is_complete() {
        println!("Rebuild the app to see the new icons.");
        ExitCode::SUCCESS
    } else {
        eprintln!("Some icons were not deployed; run generate-icons first.");
        ExitCode::FAILURE
    }
}
