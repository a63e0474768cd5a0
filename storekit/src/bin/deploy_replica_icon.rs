//! `deploy-replica-icon`
//!
//! Redraws the five-figure artwork as `assets_store/user_exact_original.png`
//! and resizes it straight into the Android, iOS and web project directories.

use std::process::ExitCode;

use storekit::{
    icon::write_replica_icon,
    resize::{exact_plan, load_source, run_plan},
    ProjectLayout,
};

fn main() -> ExitCode {
    env_logger::init();

    let layout = ProjectLayout::default();
    println!("Drawing replica icon...");

    let source = match write_replica_icon(&layout).and_then(|path| load_source(&path)) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Error drawing replica icon: {err}");
            return ExitCode::FAILURE;
        }
    };

    match run_plan(&source, &exact_plan(&layout)) {
        Ok(written) => {
            println!();
            println!("Deployed replica icon into {} files.", written.len());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error resizing icon: {err}");
            ExitCode::FAILURE
        }
    }
}
