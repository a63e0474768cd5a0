//! `capture-screenshots`
//!
//! Interactive screenshot capture for the store listings. Must be run from
//! the app root.

use std::process::ExitCode;

use storekit::{
    capture::{create_screenshot_directories, Session, SessionOptions},
    graphics::write_store_feature_graphic,
    prompt::Operator,
    shell::SystemRunner,
    CaptureError, ProjectLayout, TextRenderer,
};

fn main() -> ExitCode {
    env_logger::init();

    let layout = ProjectLayout::default();
    if !layout.is_app_root() {
        eprintln!("Error: run this from the Flutter app root directory (no pubspec.yaml here).");
        return ExitCode::FAILURE;
    }

    match run(&layout) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// Shows the top-level menu and carries out the choice.
fn run(layout: &ProjectLayout) -> Result<ExitCode, CaptureError> {
    let mut operator = Operator::console();
    operator.say("Screenshot Capture Tool")?;
    operator.say("This tool helps you capture screenshots for app store submission.")?;
    operator.say("")?;
    operator.say("Options:")?;
    operator.say("1. Interactive screenshot session")?;
    operator.say("2. Create feature graphic only")?;
    operator.say("3. Setup directories only")?;
    let choice = operator.ask("\nEnter choice (1-3): ")?;

    match choice.as_str() {
        "1" => {
            prepare_directories(layout);
            let runner = SystemRunner;
            let mut session =
                Session::new(&runner, &mut operator, layout, SessionOptions::default());
            match session.choose_platform()? {
                Some(platform) => {
                    let summary = session.run(platform)?;
                    operator.say(&format!(
                        "\nCaptured {} screenshots, {} failed.",
                        summary.captured.len(),
                        summary.failed.len()
                    ))?;
                }
                None => operator.say("Invalid platform choice; no screenshots taken.")?,
            }
            feature_graphic(layout);
        }
        "2" => {
            prepare_directories(layout);
            feature_graphic(layout);
        }
        "3" => prepare_directories(layout),
        _ => {
            operator.say("Invalid choice. Exiting.")?;
            return Ok(ExitCode::FAILURE);
        }
    }

    operator.say("\nScreenshot capture session complete!")?;
    operator.say("\nNext steps:")?;
    operator.say("1. Review captured screenshots for quality")?;
    operator.say("2. Edit screenshots if needed (add text overlays, etc.)")?;
    operator.say("3. Prepare store listings with the screenshots")?;
    operator.say("4. Upload to Google Play Store and Apple App Store")?;
    Ok(ExitCode::SUCCESS)
}

/// Creates the screenshot tree, reporting rather than stopping on failure.
fn prepare_directories(layout: &ProjectLayout) {
    if let Err(err) = create_screenshot_directories(layout) {
        eprintln!("Error creating screenshot directories: {err}");
    }
}

/// Writes the store feature graphic, reporting rather than stopping on failure.
fn feature_graphic(layout: &ProjectLayout) {
    let text = TextRenderer::with_system_fonts();
    match write_store_feature_graphic(layout, &text) {
        Ok(path) => println!("Created feature graphic: {}", path.display()),
        Err(err) => eprintln!("Error creating feature graphic: {err}"),
    }
}
