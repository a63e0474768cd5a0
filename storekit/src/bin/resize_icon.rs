//! `resize-icon`
//!
//! Resizes `assets_store/user_original_icon.png` straight into the Android,
//! iOS and web project directories. Pixels are resized and nothing else.

use std::process::ExitCode;

use storekit::{
    resize::{exact_plan, load_source, run_plan},
    AssetError, ProjectLayout,
};

fn main() -> ExitCode {
    env_logger::init();

    let layout = ProjectLayout::default();
    let source_path = layout.original_icon();

    let source = match load_source(&source_path) {
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
    println!(
        "Loaded {} ({}x{})",
        source_path.display(),
        source.width(),
        source.height()
    );

    match run_plan(&source, &exact_plan(&layout)) {
        Ok(written) => {
            println!();
            println!("Resized into {} files. Rebuild the app to see the new icon.", written.len());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error resizing icon: {err}");
            ExitCode::FAILURE
        }
    }
}
