//! `generate-icons`
//!
//! Draws the figures app icon at every Android, iOS and web size into
//! `assets_store/icons`, plus the 1024px master.

use std::process::ExitCode;

use storekit::{icon::generate_all_icons, ProjectLayout};

fn main() -> ExitCode {
    env_logger::init();

    println!("Generating new app icons...");
    let layout = ProjectLayout::default();

    match generate_all_icons(&layout) {
        Ok(written) => {
            println!();
            println!("Generated {} icons.", written.len());
            println!("Run deploy-icons to copy them into the app.");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error generating icons: {err}");
            ExitCode::FAILURE
        }
    }
}
