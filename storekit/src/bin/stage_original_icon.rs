//! `stage-original-icon`
//!
//! Resizes `assets_store/user_original_icon.png` into
//! `assets_store/generated_from_original` for review. Android and iOS outputs
//! are flattened onto white.

use std::process::ExitCode;

use storekit::{
    resize::{load_source, run_plan, staged_plan},
    AssetError, ProjectLayout,
};

fn main() -> ExitCode {
    env_logger::init();

    let layout = ProjectLayout::default();

    let source = match load_source(&layout.original_icon()) {
        Ok(source) => source,
        Err(AssetError::MissingSource(path)) => {
            eprintln!("Original icon not found at {}", path.display());
            eprintln!("Save your icon as a square PNG at that path and run this again.");
            return ExitCode::FAILURE;
        }
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    match run_plan(&source, &staged_plan(&layout)) {
        Ok(written) => {
            println!();
            println!(
                "Staged {} icons in {}",
                written.len(),
                layout.generated_from_original().display()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error staging icon: {err}");
            ExitCode::FAILURE
        }
    }
}
