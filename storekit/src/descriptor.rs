//! `descriptor`
//!
//! The `Contents.json` descriptor Xcode reads to map app icon files to the
//! sizes and devices they are for.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::errors::DeployError;

/// File name of the descriptor inside an asset catalog entry.
pub const CONTENTS_FILE: &str = "Contents.json";

/// One icon slot in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogImage {
    /// The PNG that fills the slot.
    pub filename: String,
    /// Device family: `iphone`, `ipad` or `ios-marketing`.
    pub idiom: String,
    /// Pixel scale, e.g. `2x`.
    pub scale: String,
    /// Size in points, e.g. `60x60`.
    pub size: String,
}

impl CatalogImage {
    /// Builds a slot from string slices.
    fn new(filename: &str, idiom: &str, scale: &str, size: &str) -> Self {
        Self {
            filename: filename.to_string(),
            idiom: idiom.to_string(),
            scale: scale.to_string(),
            size: size.to_string(),
        }
    }
}

/// Catalog metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogInfo {
    /// Tool that authored the catalog.
    pub author: String,
    /// Catalog format version.
    pub version: u32,
}

/// An app icon set descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppIconCatalog {
    /// The icon slots.
    pub images: Vec<CatalogImage>,
    /// Catalog metadata.
    pub info: CatalogInfo,
}

impl AppIconCatalog {
    /// The iPhone, iPad and marketing slots the app ships, filled from the
    /// `Icon-<pixels>.png` files of the iOS icon table.
    pub fn standard() -> Self {
        Self {
            images: vec![
                CatalogImage::new("Icon-40.png", "ipad", "1x", "40x40"),
                CatalogImage::new("Icon-80.png", "ipad", "2x", "40x40"),
                CatalogImage::new("Icon-76.png", "ipad", "1x", "76x76"),
                CatalogImage::new("Icon-152.png", "ipad", "2x", "76x76"),
                CatalogImage::new("Icon-167.png", "ipad", "2x", "83.5x83.5"),
                CatalogImage::new("Icon-60.png", "iphone", "2x", "30x30"),
                CatalogImage::new("Icon-87.png", "iphone", "3x", "29x29"),
                CatalogImage::new("Icon-80.png", "iphone", "2x", "40x40"),
                CatalogImage::new("Icon-120.png", "iphone", "3x", "40x40"),
                CatalogImage::new("Icon-120.png", "iphone", "2x", "60x60"),
                CatalogImage::new("Icon-180.png", "iphone", "3x", "60x60"),
                CatalogImage::new("Icon-1024.png", "ios-marketing", "1x", "1024x1024"),
            ],
            info: CatalogInfo {
                author: "xcode".to_string(),
                version: 1,
            },
        }
    }

    /// Serialises the catalog as pretty-printed JSON.
    ///
    /// # Errors
    /// [`DeployError::Descriptor`] if serialisation fails.
    pub fn to_json(&self) -> Result<String, DeployError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes `Contents.json` into `directory`, which must already exist.
    ///
    /// # Returns
    /// The path of the written descriptor.
    ///
    /// # Errors
    /// [`DeployError::Descriptor`] or [`DeployError::WriteDescriptor`].
    pub fn write_to(&self, directory: &Path) -> Result<PathBuf, DeployError> {
        let path = directory.join(CONTENTS_FILE);
        fs::write(&path, self.to_json()?).map_err(|source| DeployError::WriteDescriptor {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}
