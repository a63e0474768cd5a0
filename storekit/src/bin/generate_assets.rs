//! `generate-assets`
//!
//! Renders the placeholder icons, splash screens, screenshots, feature
//! graphics and marketing banners into `assets_store`.

use std::process::ExitCode;

use storekit::{graphics::generate_all_assets, ProjectLayout, TextRenderer};

fn main() -> ExitCode {
    env_logger::init();

    println!("Generating app store assets...");
    let layout = ProjectLayout::default();
    let text = TextRenderer::with_system_fonts();
    if !text.has_fonts() {
        eprintln!("No system fonts found; graphics will be written without text.");
    }

    match generate_all_assets(&layout, &text) {
        Ok(written) => {
            println!();
            println!("Generated {} assets in {}", written.len(), layout.staging().display());
            println!();
            println!("Next steps:");
            println!("1. Review the generated assets");
            println!("2. Replace the placeholders with final designs");
            println!("3. Capture real screenshots with capture-screenshots");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error generating assets: {err}");
            ExitCode::FAILURE
        }
    }
}
