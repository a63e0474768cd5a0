//! `canvas`
//!
//! A small flat-colour drawing surface over a `tiny_skia` pixmap, plus PNG output.

use std::{
    fs,
    path::{Path, PathBuf},
};

use image::{ImageFormat, RgbaImage};
use resvg::tiny_skia::{
    FillRule, LineCap, Paint, Path as SkiaPath, PathBuilder, Pixmap, Rect, Stroke, Transform,
};

use crate::{errors::AssetError, palette::Rgb};

/// A point on the canvas, in pixels from the top-left.
pub type Point = (f32, f32);

/// An in-memory raster that shapes are painted onto.
///
/// Shapes that degenerate at small sizes (zero radius, inverted bounds) are
/// skipped rather than treated as errors, so the same drawing code works from
/// favicon sizes up to store artwork.
pub struct Canvas {
    /// The backing pixmap, premultiplied RGBA.
    pixmap: Pixmap,
}

impl Canvas {
    /// Creates a canvas filled with `background`.
    ///
    /// # Errors
    /// [`AssetError::InvalidCanvas`] if either dimension is zero.
    pub fn new(width: u32, height: u32, background: Rgb) -> Result<Self, AssetError> {
        let mut pixmap =
            Pixmap::new(width, height).ok_or(AssetError::InvalidCanvas { width, height })?;
        pixmap.fill(background.to_color());
        Ok(Self { pixmap })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Mutable access to the pixmap, for renderers that paint directly.
    pub fn pixmap_mut(&mut self) -> &mut Pixmap {
        &mut self.pixmap
    }

    /// Fills a circle.
    pub fn circle(&mut self, centre: Point, radius: f32, colour: Rgb) {
        if let Some(path) = PathBuilder::from_circle(centre.0, centre.1, radius) {
            self.fill(&path, colour, 1.0);
        }
    }

    /// Strokes the outline of a circle.
    pub fn circle_outline(&mut self, centre: Point, radius: f32, width: f32, colour: Rgb) {
        if let Some(path) = PathBuilder::from_circle(centre.0, centre.1, radius) {
            self.stroke(&path, width, colour);
        }
    }

    /// Fills the ellipse inscribed in the given bounds.
    pub fn ellipse(&mut self, left: f32, top: f32, right: f32, bottom: f32, colour: Rgb) {
        self.ellipse_with_opacity(left, top, right, bottom, colour, 1.0);
    }

    /// Fills the ellipse inscribed in the given bounds, blended at `opacity`.
    pub fn ellipse_with_opacity(
        &mut self,
        left: f32,
        top: f32,
        right: f32,
        bottom: f32,
        colour: Rgb,
        opacity: f32,
    ) {
        if let Some(path) =
            Rect::from_ltrb(left, top, right, bottom).and_then(PathBuilder::from_oval)
        {
            self.fill(&path, colour, opacity);
        }
    }

    /// Fills an axis-aligned rectangle.
    pub fn rect(&mut self, left: f32, top: f32, right: f32, bottom: f32, colour: Rgb) {
        if let Some(rect) = Rect::from_ltrb(left, top, right, bottom) {
            self.fill(&PathBuilder::from_rect(rect), colour, 1.0);
        }
    }

    /// Fills a rectangle with rounded corners.
    ///
    /// The radius is clamped to half the shorter side.
    pub fn rounded_rect(
        &mut self,
        left: f32,
        top: f32,
        right: f32,
        bottom: f32,
        radius: f32,
        colour: Rgb,
    ) {
        if right <= left || bottom <= top {
            return;
        }
        let radius = radius.max(0.0).min((right - left).min(bottom - top) / 2.0);

        let mut builder = PathBuilder::new();
        builder.move_to(left + radius, top);
        builder.line_to(right - radius, top);
        builder.quad_to(right, top, right, top + radius);
        builder.line_to(right, bottom - radius);
        builder.quad_to(right, bottom, right - radius, bottom);
        builder.line_to(left + radius, bottom);
        builder.quad_to(left, bottom, left, bottom - radius);
        builder.line_to(left, top + radius);
        builder.quad_to(left, top, left + radius, top);
        builder.close();

        if let Some(path) = builder.finish() {
            self.fill(&path, colour, 1.0);
        }
    }

    /// Fills a closed polygon through `points`.
    pub fn polygon(&mut self, points: &[Point], colour: Rgb) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };

        let mut builder = PathBuilder::new();
        builder.move_to(first.0, first.1);
        for point in rest {
            builder.line_to(point.0, point.1);
        }
        builder.close();

        if let Some(path) = builder.finish() {
            self.fill(&path, colour, 1.0);
        }
    }

    /// Draws a round-capped line. Widths below one pixel are widened to one.
    pub fn line(&mut self, from: Point, to: Point, width: f32, colour: Rgb) {
        let mut builder = PathBuilder::new();
        builder.move_to(from.0, from.1);
        builder.line_to(to.0, to.1);

        if let Some(path) = builder.finish() {
            self.stroke(&path, width, colour);
        }
    }

    /// Converts the canvas into a straight-alpha RGBA image.
    ///
    /// # Errors
    /// [`AssetError::InvalidCanvas`] if the pixel buffer does not match the dimensions,
    /// which cannot happen for a canvas built by [`Canvas::new`].
    pub fn into_image(self) -> Result<RgbaImage, AssetError> {
        let (width, height) = (self.pixmap.width(), self.pixmap.height());
        let data = self
            .pixmap
            .pixels()
            .iter()
            .flat_map(|pixel| {
                let pixel = pixel.demultiply();
                [pixel.red(), pixel.green(), pixel.blue(), pixel.alpha()]
            })
            .collect();

        RgbaImage::from_raw(width, height, data).ok_or(AssetError::InvalidCanvas { width, height })
    }

    /// Fills `path` with a solid colour.
    fn fill(&mut self, path: &SkiaPath, colour: Rgb, opacity: f32) {
        let paint = solid_paint(colour, opacity);
        self.pixmap
            .fill_path(path, &paint, FillRule::Winding, Transform::identity(), None);
    }

    /// Strokes `path` with round caps.
    fn stroke(&mut self, path: &SkiaPath, width: f32, colour: Rgb) {
        let paint = solid_paint(colour, 1.0);
        let stroke = Stroke {
            width: width.max(1.0),
            line_cap: LineCap::Round,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(path, &paint, &stroke, Transform::identity(), None);
    }
}

/// Builds an anti-aliased solid paint.
fn solid_paint(colour: Rgb, opacity: f32) -> Paint<'static> {
    let mut color = colour.to_color();
    color.apply_opacity(opacity);

    let mut paint = Paint::default();
    paint.set_color(color);
    paint.anti_alias = true;
    paint
}

/// Writes `image` as a PNG at `path`, creating the parent directory if needed.
///
/// # Errors
/// [`AssetError::CreateDir`] or [`AssetError::Encode`] if the file cannot be written.
pub fn save_png<P, C>(image: &image::ImageBuffer<P, C>, path: &Path) -> Result<(), AssetError>
where
    P: image::PixelWithColorType,
    [P::Subpixel]: image::EncodableLayout,
    C: std::ops::Deref<Target = [P::Subpixel]>,
{
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| AssetError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| AssetError::Encode {
            path: path.to_path_buf(),
            source,
        })?;
    log::info!("Wrote {}", path.display());

    Ok(())
}

/// Creates each directory in `directories`, printing each one.
///
/// # Errors
/// [`AssetError::CreateDir`] for the first directory that cannot be created.
pub fn create_directories(directories: &[PathBuf]) -> Result<(), AssetError> {
    for directory in directories {
        fs::create_dir_all(directory).map_err(|source| AssetError::CreateDir {
            path: directory.clone(),
            source,
        })?;
        println!("Created directory: {}", directory.display());
    }
    Ok(())
}
