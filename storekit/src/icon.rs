//! `icon`
//!
//! Draws the app icon designs and writes them out at every platform size.

use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::{
    canvas::{save_png, Canvas},
    errors::AssetError,
    layout::{Platform, ProjectLayout},
    palette::{figures, placeholder, replica, Rgb},
    sizes::{IconSize, ANDROID_ICONS, IOS_ICONS, MASTER_ICON, REPLICA_ICON_PIXELS, WEB_ICONS},
};

/// Which icon design to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconStyle {
    /// Five figures around a play button.
    Figures,
    /// The speech bubble and heart placeholder.
    Speech,
    /// The five-figure artwork redrawn with rounded-rectangle limbs.
    Replica,
}

impl IconStyle {
    /// Draws this design at `size` x `size` pixels.
    ///
    /// # Errors
    /// [`AssetError::InvalidCanvas`] if `size` is zero.
    pub fn render(self, size: u32) -> Result<RgbaImage, AssetError> {
        match self {
            IconStyle::Figures => render_figures_icon(size),
            IconStyle::Speech => render_speech_icon(size),
            IconStyle::Replica => render_replica_icon(size),
        }
    }
}

/// Draws the figures icon: five people in a ring around a play button.
///
/// # Errors
/// [`AssetError::InvalidCanvas`] if `size` is zero.
#[allow(clippy::cast_precision_loss)]
pub fn render_figures_icon(size: u32) -> Result<RgbaImage, AssetError> {
    let mut canvas = Canvas::new(size, size, figures::WHITE)?;
    let edge = size as f32;
    let centre = edge / 2.0;
    let figure = edge / 8.0;
    let orbit = edge / 3.0;

    for (index, colour) in figures::RING.iter().enumerate() {
        // Clockwise from twelve o'clock, 72 degrees apart.
        let angle = (index as f32 * 72.0 - 90.0).to_radians();
        let position = (
            centre + orbit * angle.cos(),
            centre + orbit * angle.sin(),
        );
        let arm_spread = if index % 2 == 0 { 45.0 } else { 30.0 };
        draw_figure(&mut canvas, position, figure, arm_spread, *colour);
    }

    let disc = edge / 4.0;
    canvas.circle((centre, centre), disc / 2.0, figures::PLAY_BUTTON);

    // Nudged right so the triangle looks centred in the disc.
    let triangle_height = disc / 2.0;
    let triangle_width = triangle_height * 0.866;
    let triangle_centre = centre + disc / 12.0;
    canvas.polygon(
        &[
            (
                triangle_centre - triangle_width / 2.0,
                centre - triangle_height / 2.0,
            ),
            (
                triangle_centre - triangle_width / 2.0,
                centre + triangle_height / 2.0,
            ),
            (triangle_centre + triangle_width / 2.0, centre),
        ],
        figures::WHITE,
    );

    canvas.into_image()
}

/// Draws one stick-ish person centred on `position`.
///
/// # Arguments
/// * `canvas`: Where to draw.
/// * `position`: Centre of the figure's torso.
/// * `figure`: Overall figure height, in pixels.
/// * `arm_spread`: Angle of the arms either side of horizontal, in degrees.
/// * `colour`: Fill colour of the whole figure.
fn draw_figure(
    canvas: &mut Canvas,
    position: (f32, f32),
    figure: f32,
    arm_spread: f32,
    colour: Rgb,
) {
    let (x, y) = position;

    canvas.circle((x, y - figure / 2.0), figure / 3.0, colour);

    let body_width = figure / 2.0;
    let body_height = figure;
    canvas.ellipse(
        x - body_width / 2.0,
        y - figure / 3.0,
        x + body_width / 2.0,
        y + body_height - figure / 3.0,
        colour,
    );

    let limb_width = figure / 6.0;
    let arm_length = figure / 2.0;
    let (reach, lift) = {
        let angle = arm_spread.to_radians();
        (arm_length * angle.cos(), arm_length * angle.sin())
    };
    // Both hands end to the right of the torso: one raised, one lowered.
    canvas.line(
        (x - body_width / 3.0, y),
        (x + reach, y - lift),
        limb_width,
        colour,
    );
    canvas.line(
        (x + body_width / 3.0, y),
        (x + reach, y + lift),
        limb_width,
        colour,
    );

    let leg_length = figure / 2.0;
    let hip = y + body_height / 2.0;
    canvas.line(
        (x - body_width / 4.0, hip),
        (x - body_width / 2.0, hip + leg_length),
        limb_width,
        colour,
    );
    canvas.line(
        (x + body_width / 4.0, hip),
        (x + body_width / 2.0, hip + leg_length),
        limb_width,
        colour,
    );
}

/// Draws the replica artwork: five rounded figures close around a bare play
/// triangle, on white.
///
/// # Errors
/// [`AssetError::InvalidCanvas`] if `size` is zero.
#[allow(clippy::cast_precision_loss)]
pub fn render_replica_icon(size: u32) -> Result<RgbaImage, AssetError> {
    let mut canvas = Canvas::new(size, size, replica::WHITE)?;
    let edge = size as f32;
    let centre = edge / 2.0;
    let orbit = edge / 6.0;
    let figure = edge / 12.0;

    for (index, colour) in replica::RING.iter().enumerate() {
        let angle = (index as f32 * 72.0 - 90.0).to_radians();
        let x = centre + orbit * angle.cos();
        let y = centre + orbit * angle.sin();

        let head = figure / 2.0;
        canvas.ellipse(
            x - head / 2.0,
            y - head - figure / 2.0,
            x + head / 2.0,
            y - head / 2.0 - figure / 2.0,
            *colour,
        );

        let body = figure / 2.0;
        canvas.rounded_rect(
            x - body / 2.0,
            y - figure / 2.0,
            x + body / 2.0,
            y + figure / 2.0,
            body / 4.0,
            *colour,
        );

        let limb = figure / 6.0;
        let arm_top = y - figure / 4.0;
        canvas.rounded_rect(
            x - body / 2.0 - figure / 2.0,
            arm_top,
            x - body / 2.0,
            arm_top + limb,
            limb / 2.0,
            *colour,
        );
        canvas.rounded_rect(
            x + body / 2.0,
            arm_top,
            x + body / 2.0 + figure / 2.0,
            arm_top + limb,
            limb / 2.0,
            *colour,
        );

        let gap = figure / 8.0;
        let hip = y + figure / 2.0;
        canvas.rounded_rect(
            x - gap / 2.0 - limb,
            hip,
            x - gap / 2.0,
            hip + figure / 2.0,
            limb / 2.0,
            *colour,
        );
        canvas.rounded_rect(
            x + gap / 2.0,
            hip,
            x + gap / 2.0 + limb,
            hip + figure / 2.0,
            limb / 2.0,
            *colour,
        );
    }

    let play = edge / 8.0;
    let nudge = play / 6.0;
    canvas.polygon(
        &[
            (centre - play / 2.0 + nudge, centre - play / 2.0),
            (centre - play / 2.0 + nudge, centre + play / 2.0),
            (centre + play / 2.0 + nudge, centre),
        ],
        replica::PLAY_BUTTON,
    );

    canvas.into_image()
}

/// Writes the replica artwork at its design size to
/// `assets_store/user_exact_original.png`.
///
/// # Returns
/// The path written.
///
/// # Errors
/// The drawing or write failure.
pub fn write_replica_icon(layout: &ProjectLayout) -> Result<PathBuf, AssetError> {
    let path = layout.replica_icon();
    save_png(&render_replica_icon(REPLICA_ICON_PIXELS)?, &path)?;
    println!("Saved replica icon as {}", path.display());
    Ok(path)
}

/// Draws the placeholder icon: a speech bubble, a heart and an accessibility dot.
///
/// # Errors
/// [`AssetError::InvalidCanvas`] if `size` is zero.
#[allow(clippy::cast_precision_loss)]
pub fn render_speech_icon(size: u32) -> Result<RgbaImage, AssetError> {
    let mut canvas = Canvas::new(size, size, placeholder::BACKGROUND)?;
    let edge = size as f32;

    let margin = edge / 8.0;
    canvas.ellipse(
        margin,
        margin,
        edge - margin,
        edge - margin,
        placeholder::BACKGROUND,
    );

    let bubble = edge / 2.0;
    let bubble_margin = (edge - bubble) / 2.0;
    canvas.rect(
        bubble_margin,
        bubble_margin + bubble / 4.0,
        bubble_margin + bubble,
        bubble_margin + bubble * 3.0 / 4.0,
        placeholder::TEXT,
    );

    let heart = edge / 4.0;
    let heart_left = (edge - heart) / 2.0;
    let heart_top = bubble_margin + bubble / 8.0;
    canvas.polygon(
        &heart_points(heart_left, heart_top, heart),
        placeholder::ACCENT,
    );

    let dot_radius = edge / 12.0;
    let dot_centre = (edge / 2.0, edge / 2.0 + edge / 6.0);
    canvas.circle(dot_centre, dot_radius, placeholder::ACCENT);
    canvas.circle_outline(dot_centre, dot_radius, edge / 50.0, placeholder::TEXT);

    canvas.into_image()
}

/// The six corners of the flat heart used on the placeholder artwork.
pub(crate) fn heart_points(left: f32, top: f32, size: f32) -> [(f32, f32); 6] {
    [
        (left, top + size / 3.0),
        (left + size / 4.0, top),
        (left + size / 2.0, top + size / 4.0),
        (left + size * 3.0 / 4.0, top),
        (left + size, top + size / 3.0),
        (left + size / 2.0, top + size),
    ]
}

/// Writes one icon per table entry into `directory`.
///
/// # Returns
/// The paths written, in table order.
///
/// # Errors
/// The first drawing or write failure.
pub fn write_icon_table(
    style: IconStyle,
    table: &[IconSize],
    directory: &Path,
) -> Result<Vec<PathBuf>, AssetError> {
    table
        .iter()
        .map(|icon| {
            let path = directory.join(icon.file_name);
            save_png(&style.render(icon.pixels)?, &path)?;
            println!("Created {} icon: {}", icon.label, path.display());
            Ok(path)
        })
        .collect()
}

/// Generates the figures icon for Android, iOS and web, plus the master icon.
///
/// # Errors
/// The first drawing or write failure.
pub fn generate_all_icons(layout: &ProjectLayout) -> Result<Vec<PathBuf>, AssetError> {
    let mut written = Vec::new();

    for (platform, table, heading) in [
        (Platform::Android, &ANDROID_ICONS[..], "Android"),
        (Platform::Ios, &IOS_ICONS[..], "iOS"),
        (Platform::Web, &WEB_ICONS[..], "Web"),
    ] {
        println!("Generating {heading} icons...");
        written.extend(write_icon_table(
            IconStyle::Figures,
            table,
            &layout.staged_icons(platform),
        )?);
    }

    let master = layout.master_icon();
    save_png(&render_figures_icon(MASTER_ICON.pixels)?, &master)?;
    println!("Created master icon: {}", master.display());
    written.push(master);

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn figures_icon_has_play_button_in_the_middle() {
        let icon = render_figures_icon(256).expect("icon");

        assert_eq!(icon.dimensions(), (256, 256), "size");
        assert_eq!(icon.get_pixel(0, 0).0, figures::WHITE.rgba(), "background");
        assert_eq!(icon.get_pixel(128, 128).0, figures::WHITE.rgba(), "triangle");
        assert_eq!(
            icon.get_pixel(102, 128).0,
            figures::PLAY_BUTTON.rgba(),
            "disc left of the triangle"
        );
    }

    #[test]
    fn figures_sit_on_the_ring() {
        let icon = render_figures_icon(240).expect("icon");

        // The top figure's torso sits directly above the centre, a third of the way out.
        assert_eq!(icon.get_pixel(120, 42).0, figures::BLUE.rgba(), "top figure");
    }

    #[test]
    fn speech_icon_layers() {
        let icon = render_speech_icon(120).expect("icon");

        assert_eq!(
            icon.get_pixel(2, 2).0,
            placeholder::BACKGROUND.rgba(),
            "background"
        );
        assert_eq!(
            icon.get_pixel(60, 80).0,
            placeholder::ACCENT.rgba(),
            "accessibility dot"
        );
        assert_eq!(icon.get_pixel(35, 70).0, placeholder::TEXT.rgba(), "bubble");
    }

    #[test]
    fn figure_arms_both_reach_right() {
        let icon = render_figures_icon(240).expect("icon");

        // Top figure sits at (120, 40) with 15px arms at 45 degrees.
        assert_eq!(icon.get_pixel(129, 31).0, figures::BLUE.rgba(), "raised hand");
        assert_eq!(icon.get_pixel(129, 49).0, figures::BLUE.rgba(), "lowered hand");
        assert_eq!(icon.get_pixel(110, 32).0, figures::WHITE.rgba(), "no raised left hand");
    }

    #[test]
    fn replica_icon_layers() {
        let icon = render_replica_icon(512).expect("icon");

        assert_eq!(icon.dimensions(), (512, 512), "size");
        assert_eq!(icon.get_pixel(0, 0).0, replica::WHITE.rgba(), "background");
        assert_eq!(icon.get_pixel(256, 170).0, replica::BLUE.rgba(), "top body");
        assert_eq!(
            icon.get_pixel(260, 256).0,
            replica::PLAY_BUTTON.rgba(),
            "play triangle"
        );
        assert_eq!(icon.get_pixel(235, 163).0, replica::BLUE.rgba(), "left arm");
        assert_eq!(icon.get_pixel(250, 200).0, replica::BLUE.rgba(), "left leg");
        assert_eq!(icon.get_pixel(256, 200).0, replica::WHITE.rgba(), "gap between legs");
    }

    #[test]
    fn replica_written_at_design_size() {
        let dir = tempfile::tempdir().expect("tempdir");
        let layout = ProjectLayout::at(dir.path());

        let path = write_replica_icon(&layout).expect("written");

        assert_eq!(path, layout.replica_icon(), "path");
        assert_eq!(
            image::image_dimensions(&path).expect("readable"),
            (REPLICA_ICON_PIXELS, REPLICA_ICON_PIXELS),
            "dimensions"
        );
    }

    #[test]
    fn tiny_icons_still_render() {
        for size in [1, 2, 16] {
            for style in [IconStyle::Figures, IconStyle::Speech, IconStyle::Replica] {
                let icon = style.render(size).expect("icon");
                assert_eq!(icon.dimensions(), (size, size), "{style:?} at {size}");
            }
        }
    }

    #[test]
    fn zero_size_is_an_error() {
        assert!(
            matches!(
                IconStyle::Figures.render(0),
                Err(AssetError::InvalidCanvas { .. })
            ),
            "zero size"
        );
    }
}
