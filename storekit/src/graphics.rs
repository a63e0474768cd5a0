//! `graphics`
//!
//! Placeholder store artwork: splash screens, screenshots, feature graphics
//! and marketing banners.

use std::path::PathBuf;

use image::RgbaImage;

use crate::{
    canvas::{create_directories, save_png, Canvas},
    errors::AssetError,
    icon::{heart_points, write_icon_table, IconStyle},
    layout::{Platform, ProjectLayout, SplashKind},
    palette::placeholder,
    sizes::{
        StorePlatform, FEATURE_GRAPHICS, MARKETING_ASSETS, MOBILE_SPLASH, PLACEHOLDER_ANDROID_ICONS,
        PLACEHOLDER_IOS_ICONS, PLACEHOLDER_SCREENSHOTS, PLACEHOLDER_SCREENSHOT_SIZE,
        PLACEHOLDER_WEB_ICONS, STORE_FEATURE_GRAPHIC, TABLET_SPLASH,
    },
    text::{TextLine, TextRenderer},
};

/// Name of the app as shown on the artwork.
pub const APP_NAME: &str = "AAC Communication Helper";
/// Tagline shown under the splash icon.
pub const SPLASH_TAGLINE: &str = "Empowering Communication for All";
/// Subtitle of the store feature graphic.
pub const FEATURE_SUBTITLE: &str = "Empowering Communication Through Technology";

/// The smaller of the two dimensions, as a float.
#[allow(clippy::cast_precision_loss)]
fn short_side(width: u32, height: u32) -> f32 {
    width.min(height) as f32
}

/// Draws a splash screen: app name, a small app mark and the tagline.
///
/// # Errors
/// [`AssetError`] if the canvas cannot be created or the text cannot be laid out.
#[allow(clippy::cast_precision_loss)]
pub fn render_splash(
    width: u32,
    height: u32,
    text: &TextRenderer,
) -> Result<RgbaImage, AssetError> {
    let mut canvas = Canvas::new(width, height, placeholder::BACKGROUND)?;
    let (w, h) = (width as f32, height as f32);
    let short = short_side(width, height);

    let mark = short / 4.0;
    let mark_left = (w - mark) / 2.0;
    let mark_top = h / 3.0;
    canvas.ellipse(
        mark_left,
        mark_top,
        mark_left + mark,
        mark_top + mark,
        placeholder::TEXT,
    );

    let bubble = mark / 2.0;
    let bubble_left = mark_left + (mark - bubble) / 2.0;
    let bubble_top = mark_top + (mark - bubble) / 2.0 + mark / 8.0;
    canvas.rect(
        bubble_left,
        bubble_top,
        bubble_left + bubble,
        bubble_top + bubble / 2.0,
        placeholder::BACKGROUND,
    );

    let heart = mark / 4.0;
    canvas.polygon(
        &heart_points(mark_left + (mark - heart) / 2.0, mark_top + mark / 6.0, heart),
        placeholder::ACCENT,
    );

    text.draw(
        &mut canvas,
        &[
            TextLine::new(APP_NAME, w / 2.0, h / 6.0, short / 15.0, placeholder::TEXT),
            TextLine::new(
                SPLASH_TAGLINE,
                w / 2.0,
                h * 2.0 / 3.0,
                short / 25.0,
                placeholder::TEXT,
            ),
        ],
    )?;

    canvas.into_image()
}

/// Draws a placeholder screenshot with its caption centred vertically.
///
/// # Errors
/// [`AssetError`] if the canvas cannot be created or the text cannot be laid out.
#[allow(clippy::cast_precision_loss)]
pub fn render_placeholder_screenshot(
    width: u32,
    height: u32,
    caption: &[&str],
    text: &TextRenderer,
) -> Result<RgbaImage, AssetError> {
    let mut canvas = Canvas::new(width, height, placeholder::BACKGROUND)?;
    let (w, h) = (width as f32, height as f32);
    let short = short_side(width, height);
    let line_height = short / 15.0;
    let first_top = h / 2.0 - caption.len() as f32 * line_height / 2.0;

    let lines: Vec<_> = caption
        .iter()
        .enumerate()
        .map(|(index, line)| {
            TextLine::new(
                line,
                w / 2.0,
                first_top + index as f32 * line_height,
                short / 20.0,
                placeholder::TEXT,
            )
        })
        .collect();
    text.draw(&mut canvas, &lines)?;

    canvas.into_image()
}

/// Draws a single centred caption on the background colour.
#[allow(clippy::cast_precision_loss)]
fn render_caption_card(
    width: u32,
    height: u32,
    caption: &str,
    text: &TextRenderer,
) -> Result<RgbaImage, AssetError> {
    let mut canvas = Canvas::new(width, height, placeholder::BACKGROUND)?;
    let size = short_side(width, height) / 15.0;
    text.draw(
        &mut canvas,
        &[TextLine::new(
            caption,
            width as f32 / 2.0,
            (height as f32 - size) / 2.0,
            size,
            placeholder::TEXT,
        )],
    )?;
    canvas.into_image()
}

/// Draws a store feature graphic placeholder labelled with its store.
///
/// # Errors
/// [`AssetError`] if the canvas cannot be created or the text cannot be laid out.
pub fn render_feature_graphic(
    width: u32,
    height: u32,
    store: StorePlatform,
    text: &TextRenderer,
) -> Result<RgbaImage, AssetError> {
    let caption = match store {
        StorePlatform::GooglePlay => "Google Play Feature Graphic",
        StorePlatform::AppStore => "App Store Feature Graphic",
    };
    render_caption_card(width, height, caption, text)
}

/// Draws a marketing asset titled after its kind, e.g. `logo_horizontal`.
///
/// # Errors
/// [`AssetError`] if the canvas cannot be created or the text cannot be laid out.
pub fn render_marketing_asset(
    width: u32,
    height: u32,
    asset_kind: &str,
    text: &TextRenderer,
) -> Result<RgbaImage, AssetError> {
    render_caption_card(width, height, &title_case(asset_kind), text)
}

/// Draws the Google Play feature graphic used alongside captured screenshots.
///
/// Title and subtitle carry a soft drop shadow; three speech bubbles sit underneath.
///
/// # Errors
/// [`AssetError`] if the canvas cannot be created or the text cannot be laid out.
pub fn render_store_feature_graphic(text: &TextRenderer) -> Result<RgbaImage, AssetError> {
    let mut canvas = Canvas::new(
        STORE_FEATURE_GRAPHIC.width,
        STORE_FEATURE_GRAPHIC.height,
        placeholder::BACKGROUND,
    )?;
    let centre = 512.0;

    text.draw(
        &mut canvas,
        &[
            TextLine::new(APP_NAME, centre + 2.0, 152.0, 48.0, placeholder::SHADOW)
                .with_opacity(0.5),
            TextLine::new(APP_NAME, centre, 150.0, 48.0, placeholder::TEXT),
            TextLine::new(FEATURE_SUBTITLE, centre + 2.0, 222.0, 24.0, placeholder::SHADOW)
                .with_opacity(0.5),
            TextLine::new(FEATURE_SUBTITLE, centre, 220.0, 24.0, placeholder::TEXT),
        ],
    )?;

    for (left, colour) in [100.0, 350.0, 600.0].into_iter().zip([
        placeholder::ACCENT,
        placeholder::HIGHLIGHT,
        placeholder::AMBER,
    ]) {
        canvas.ellipse(left, 300.0, left + 80.0, 350.0, colour);
    }

    canvas.into_image()
}

/// Turns `banner_1200x600` into `Banner 1200x600`.
pub fn title_case(kind: &str) -> String {
    kind.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Every directory the placeholder generator writes into.
pub fn asset_directories(layout: &ProjectLayout) -> Vec<PathBuf> {
    vec![
        layout.staged_icons(Platform::Android),
        layout.staged_icons(Platform::Ios),
        layout.staged_icons(Platform::Web),
        layout.splash_screens(SplashKind::Mobile),
        layout.splash_screens(SplashKind::Tablet),
        layout.placeholder_screenshots(),
        layout.feature_graphics(),
        layout.marketing(),
    ]
}

/// Generates the whole placeholder asset set into the staging tree.
///
/// # Returns
/// Every file written.
///
/// # Errors
/// The first drawing or write failure.
pub fn generate_all_assets(
    layout: &ProjectLayout,
    text: &TextRenderer,
) -> Result<Vec<PathBuf>, AssetError> {
    create_directories(&asset_directories(layout))?;
    let mut written = Vec::new();

    for (platform, table, heading) in [
        (Platform::Android, &PLACEHOLDER_ANDROID_ICONS[..], "Android"),
        (Platform::Ios, &PLACEHOLDER_IOS_ICONS[..], "iOS"),
        (Platform::Web, &PLACEHOLDER_WEB_ICONS[..], "Web"),
    ] {
        println!("\nGenerating {heading} Icons...");
        written.extend(write_icon_table(
            IconStyle::Speech,
            table,
            &layout.staged_icons(platform),
        )?);
    }

    for (kind, table, heading) in [
        (SplashKind::Mobile, &MOBILE_SPLASH[..], "Mobile"),
        (SplashKind::Tablet, &TABLET_SPLASH[..], "Tablet"),
    ] {
        println!("\nGenerating {heading} Splash Screens...");
        let directory = layout.splash_screens(kind);
        for frame in table {
            let path = directory.join(frame.file_name);
            save_png(&render_splash(frame.width, frame.height, text)?, &path)?;
            println!("Created splash screen: {}", path.display());
            written.push(path);
        }
    }

    println!("\nGenerating Screenshots...");
    let (width, height) = PLACEHOLDER_SCREENSHOT_SIZE;
    for screenshot in &PLACEHOLDER_SCREENSHOTS {
        let path = layout.placeholder_screenshots().join(screenshot.file_name);
        let image = render_placeholder_screenshot(width, height, screenshot.caption, text)?;
        save_png(&image, &path)?;
        println!("Created screenshot: {}", path.display());
        written.push(path);
    }

    println!("\nGenerating Feature Graphics...");
    for graphic in &FEATURE_GRAPHICS {
        let path = layout.feature_graphics().join(graphic.frame.file_name);
        let image =
            render_feature_graphic(graphic.frame.width, graphic.frame.height, graphic.store, text)?;
        save_png(&image, &path)?;
        println!("Created feature graphic: {}", path.display());
        written.push(path);
    }

    println!("\nGenerating Marketing Assets...");
    for frame in &MARKETING_ASSETS {
        let path = layout.marketing().join(frame.file_name);
        let kind = frame.file_name.trim_end_matches(".png");
        save_png(
            &render_marketing_asset(frame.width, frame.height, kind, text)?,
            &path,
        )?;
        println!("Created marketing asset: {}", path.display());
        written.push(path);
    }

    Ok(written)
}

/// Writes the store feature graphic next to the other feature graphics.
///
/// # Errors
/// The drawing or write failure.
pub fn write_store_feature_graphic(
    layout: &ProjectLayout,
    text: &TextRenderer,
) -> Result<PathBuf, AssetError> {
    let path = layout
        .feature_graphics()
        .join(STORE_FEATURE_GRAPHIC.file_name);
    save_png(&render_store_feature_graphic(text)?, &path)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use resvg::usvg::fontdb;

    use super::*;

    /// A renderer with no fonts, so tests don't depend on the host.
    fn no_text() -> TextRenderer {
        TextRenderer::new(fontdb::Database::new())
    }

    #[test]
    fn title_case_words() {
        assert_eq!(title_case("logo_horizontal"), "Logo Horizontal", "two words");
        assert_eq!(title_case("banner_1200x600"), "Banner 1200x600", "digits");
        assert_eq!(title_case("social__media"), "Social Media", "double separator");
    }

    #[test]
    fn splash_has_the_app_mark() {
        let splash = render_splash(400, 800, &no_text()).expect("splash");

        assert_eq!(splash.dimensions(), (400, 800), "size");
        assert_eq!(
            splash.get_pixel(0, 0).0,
            placeholder::BACKGROUND.rgba(),
            "background"
        );
        // The mark is a white disc 100px across starting a third of the way down.
        assert_eq!(
            splash.get_pixel(200, 275).0,
            placeholder::TEXT.rgba(),
            "upper part of the mark"
        );
    }

    #[test]
    fn store_feature_graphic_bubbles() {
        let graphic = render_store_feature_graphic(&no_text()).expect("graphic");

        assert_eq!(graphic.dimensions(), (1024, 500), "size");
        assert_eq!(graphic.get_pixel(140, 325).0, placeholder::ACCENT.rgba(), "first");
        assert_eq!(
            graphic.get_pixel(390, 325).0,
            placeholder::HIGHLIGHT.rgba(),
            "second"
        );
        assert_eq!(graphic.get_pixel(640, 325).0, placeholder::AMBER.rgba(), "third");
    }

    #[test]
    fn cards_have_requested_dimensions() {
        let text = no_text();
        for (width, height) in [(1024, 500), (150, 400)] {
            let card = render_feature_graphic(width, height, StorePlatform::AppStore, &text)
                .expect("feature graphic");
            assert_eq!(card.dimensions(), (width, height), "feature graphic");

            let card =
                render_marketing_asset(width, height, "logo_vertical", &text).expect("marketing");
            assert_eq!(card.dimensions(), (width, height), "marketing");
        }

        let screenshot =
            render_placeholder_screenshot(108, 192, &["One", "Two"], &text).expect("screenshot");
        assert_eq!(screenshot.dimensions(), (108, 192), "screenshot");
    }
}
