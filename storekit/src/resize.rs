//! `resize`
//!
//! Turns the operator's own square icon into every platform size.
//!
//! Two plans exist: the exact plan writes straight into the app project and
//! only ever resizes, the staged plan writes into the staging area and
//! flattens the Android and iOS outputs onto white.

use std::path::{Path, PathBuf};

use image::{
    imageops::{self, FilterType},
    Rgb, RgbImage, RgbaImage,
};

use crate::{
    canvas::save_png,
    errors::AssetError,
    layout::{Platform, ProjectLayout},
    sizes::{ANDROID_DENSITIES, EXACT_IOS_SIZES, EXACT_WEB_SIZES},
};

/// One output size and every file that receives it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeTarget {
    /// Edge length in pixels.
    pub pixels: u32,
    /// Files written at this size.
    pub destinations: Vec<PathBuf>,
    /// Composite onto opaque white and drop the alpha channel.
    pub flatten: bool,
}

impl ResizeTarget {
    /// A target that keeps the source's alpha channel.
    fn keep_alpha(pixels: u32, destinations: Vec<PathBuf>) -> Self {
        Self {
            pixels,
            destinations,
            flatten: false,
        }
    }

    /// A target flattened onto white.
    fn flattened(pixels: u32, destinations: Vec<PathBuf>) -> Self {
        Self {
            pixels,
            destinations,
            flatten: true,
        }
    }
}

/// Every output of one resize run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResizePlan {
    /// Targets in the order they are written.
    pub targets: Vec<ResizeTarget>,
}

impl ResizePlan {
    /// Number of files the plan writes.
    pub fn output_count(&self) -> usize {
        self.targets.iter().map(|t| t.destinations.len()).sum()
    }
}

/// Resizes straight into the Android, iOS and web project directories,
/// leaving the pixels otherwise untouched.
pub fn exact_plan(layout: &ProjectLayout) -> ResizePlan {
    let mut targets = Vec::new();

    for bucket in &ANDROID_DENSITIES {
        let mipmap = layout.android_mipmap(bucket.name);
        targets.push(ResizeTarget::keep_alpha(
            bucket.pixels,
            vec![
                mipmap.join("ic_launcher.png"),
                mipmap.join("ic_launcher_round.png"),
            ],
        ));
    }

    let icon_set = layout.ios_app_icon_set();
    for size in EXACT_IOS_SIZES {
        targets.push(ResizeTarget::keep_alpha(
            size,
            vec![icon_set.join(format!("Icon-App-{size}x{size}@1x.png"))],
        ));
    }

    let web = layout.web_icons();
    for size in EXACT_WEB_SIZES {
        targets.push(ResizeTarget::keep_alpha(
            size,
            vec![web.join(format!("icon-{size}x{size}.png"))],
        ));
    }
    // Names the web manifest refers to.
    for size in [192, 512] {
        targets.push(ResizeTarget::keep_alpha(
            size,
            vec![web.join(format!("Icon-{size}.png"))],
        ));
    }

    ResizePlan { targets }
}

/// Resizes into `assets_store/generated_from_original` for review before
/// deploying. Android and iOS outputs are opaque.
pub fn staged_plan(layout: &ProjectLayout) -> ResizePlan {
    let root = layout.generated_from_original();
    let android = root.join(Platform::Android.dir_name());
    let ios = root.join(Platform::Ios.dir_name());
    let web = root.join(Platform::Web.dir_name());

    let mut targets: Vec<_> = ANDROID_DENSITIES
        .iter()
        .map(|bucket| {
            ResizeTarget::flattened(
                bucket.pixels,
                vec![
                    android.join(format!("ic_launcher_{}.png", bucket.name)),
                    android.join(format!("ic_launcher_round_{}.png", bucket.name)),
                ],
            )
        })
        .collect();

    targets.extend(EXACT_IOS_SIZES.iter().map(|&size| {
        ResizeTarget::flattened(size, vec![ios.join(format!("icon_{size}x{size}.png"))])
    }));
    targets.extend(EXACT_WEB_SIZES.iter().map(|&size| {
        ResizeTarget::keep_alpha(size, vec![web.join(format!("icon_{size}x{size}.png"))])
    }));

    ResizePlan { targets }
}

/// Reads the source icon as RGBA.
///
/// # Errors
/// [`AssetError::MissingSource`] if there is no file at `path`, or
/// [`AssetError::Decode`] if it is not a readable image.
pub fn load_source(path: &Path) -> Result<RgbaImage, AssetError> {
    if !path.is_file() {
        return Err(AssetError::MissingSource(path.to_path_buf()));
    }

    let image = image::open(path).map_err(|source| AssetError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let (width, height) = (image.width(), image.height());
    if width != height {
        log::warn!(
            "{} is {width}x{height}; it will be stretched to square",
            path.display()
        );
    }

    Ok(image.to_rgba8())
}

/// Lanczos3 resize to `pixels` x `pixels`.
pub fn resize_square(source: &RgbaImage, pixels: u32) -> RgbaImage {
    if source.dimensions() == (pixels, pixels) {
        return source.clone();
    }
    imageops::resize(source, pixels, pixels, FilterType::Lanczos3)
}

/// Composites `image` onto opaque white.
pub fn flatten_on_white(image: &RgbaImage) -> RgbImage {
    RgbImage::from_fn(image.width(), image.height(), |x, y| {
        let [r, g, b, a] = image.get_pixel(x, y).0;
        let alpha = u16::from(a);
        let blend = |channel: u8| {
            let mixed = (u16::from(channel) * alpha + 255 * (255 - alpha) + 127) / 255;
            u8::try_from(mixed).unwrap_or(u8::MAX)
        };
        Rgb([blend(r), blend(g), blend(b)])
    })
}

/// Writes every target of `plan` from `source`.
///
/// # Returns
/// The files written, in plan order.
///
/// # Errors
/// The first write failure; earlier outputs are left in place.
pub fn run_plan(source: &RgbaImage, plan: &ResizePlan) -> Result<Vec<PathBuf>, AssetError> {
    let mut written = Vec::with_capacity(plan.output_count());

    for target in &plan.targets {
        let resized = resize_square(source, target.pixels);
        let flattened = target.flatten.then(|| flatten_on_white(&resized));

        for destination in &target.destinations {
            match &flattened {
                Some(opaque) => save_png(opaque, destination)?,
                None => save_png(&resized, destination)?,
            }
            println!("{0}x{0}: {1}", target.pixels, destination.display());
            written.push(destination.clone());
        }
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use image::Rgba;

    use super::*;

    #[test]
    fn exact_plan_targets() {
        let plan = exact_plan(&ProjectLayout::at("/app"));

        assert_eq!(
            plan.output_count(),
            10 + EXACT_IOS_SIZES.len() + EXACT_WEB_SIZES.len() + 2,
            "outputs"
        );
        assert_eq!(
            plan.targets[0],
            ResizeTarget::keep_alpha(
                48,
                vec![
                    PathBuf::from("/app/android/app/src/main/res/mipmap-mdpi/ic_launcher.png"),
                    PathBuf::from("/app/android/app/src/main/res/mipmap-mdpi/ic_launcher_round.png"),
                ]
            ),
            "first Android bucket"
        );
        assert!(
            plan.targets.iter().all(|target| !target.flatten),
            "exact plan never recolours"
        );
        assert_eq!(
            plan.targets.last().map(|t| t.destinations[0].clone()),
            Some(PathBuf::from("/app/assets/icons/Icon-512.png")),
            "manifest icon last"
        );
    }

    #[test]
    fn staged_plan_flattens_native_icons() {
        let plan = staged_plan(&ProjectLayout::at("/app"));

        for target in &plan.targets {
            let is_web = target.destinations[0]
                .starts_with("/app/assets_store/generated_from_original/web");
            assert_eq!(target.flatten, !is_web, "{:?}", target.destinations);
        }
    }

    #[test]
    fn flatten_blends_over_white() {
        let mut image = RgbaImage::new(3, 1);
        image.put_pixel(0, 0, Rgba([0, 0, 0, 0]));
        image.put_pixel(1, 0, Rgba([0, 0, 0, 255]));
        image.put_pixel(2, 0, Rgba([0, 0, 0, 128]));

        let flat = flatten_on_white(&image);

        assert_eq!(flat.get_pixel(0, 0).0, [255, 255, 255], "transparent becomes white");
        assert_eq!(flat.get_pixel(1, 0).0, [0, 0, 0], "opaque is unchanged");
        assert_eq!(flat.get_pixel(2, 0).0, [127, 127, 127], "half blends");
    }

    #[test]
    fn resize_hits_exact_size() {
        let source = RgbaImage::from_pixel(100, 100, Rgba([10, 20, 30, 255]));

        for pixels in [1, 16, 48, 100, 192] {
            assert_eq!(
                resize_square(&source, pixels).dimensions(),
                (pixels, pixels),
                "{pixels}"
            );
        }
    }

    #[test]
    fn missing_source() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("user_original_icon.png");

        assert!(
            matches!(load_source(&path), Err(AssetError::MissingSource(p)) if p == path),
            "missing"
        );
    }
}
