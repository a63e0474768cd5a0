//! `layout`
//!
//! The fixed directory layout of the app project and its asset staging area.

use std::path::{Path, PathBuf};

/// Staging directory for generated assets, relative to the app root.
pub const STAGING_DIR: &str = "assets_store";
/// Android resource directory holding the `mipmap-*` buckets.
pub const ANDROID_RES_DIR: &str = "android/app/src/main/res";
/// iOS app icon set inside the asset catalog.
pub const IOS_APP_ICON_SET: &str = "ios/Runner/Assets.xcassets/AppIcon.appiconset";
/// Web and in-app icon directory.
pub const WEB_ICON_DIR: &str = "assets/icons";
/// Conventional name the operator saves their own master icon under, inside [`STAGING_DIR`].
pub const ORIGINAL_ICON_FILE: &str = "user_original_icon.png";
/// Name of the redrawn replica artwork inside [`STAGING_DIR`].
pub const REPLICA_ICON_FILE: &str = "user_exact_original.png";
/// File that marks the root of the app project.
pub const APP_MANIFEST: &str = "pubspec.yaml";

/// Target platform of a set of icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Android launcher icons.
    Android,
    /// iOS app icons.
    Ios,
    /// Web favicons and manifest icons.
    Web,
}

impl Platform {
    /// Directory name used for this platform under the staging tree.
    pub fn dir_name(self) -> &'static str {
        match self {
            Platform::Android => "android",
            Platform::Ios => "ios",
            Platform::Web => "web",
        }
    }
}

/// Device class a screenshot is taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenshotDevice {
    /// Android phone or emulator.
    AndroidPhone,
    /// Android tablet.
    AndroidTablet,
    /// iPhone simulator.
    Iphone,
    /// iPad simulator.
    Ipad,
}

impl ScreenshotDevice {
    /// Every device class, in the order their directories are created.
    pub const ALL: [ScreenshotDevice; 4] = [
        ScreenshotDevice::AndroidPhone,
        ScreenshotDevice::AndroidTablet,
        ScreenshotDevice::Iphone,
        ScreenshotDevice::Ipad,
    ];

    /// Path of this device's screenshot directory below `promotional/screenshots`.
    fn sub_path(self) -> &'static str {
        match self {
            ScreenshotDevice::AndroidPhone => "android/phone",
            ScreenshotDevice::AndroidTablet => "android/tablet",
            ScreenshotDevice::Iphone => "ios/iphone",
            ScreenshotDevice::Ipad => "ios/ipad",
        }
    }
}

/// Splash screen form factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashKind {
    /// Phone-sized splash screens.
    Mobile,
    /// Tablet-sized splash screens.
    Tablet,
}

/// Where everything lives, relative to the app root.
///
/// The default layout is rooted at the current directory, which is where the
/// tools are expected to be run from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    /// The app root (the directory containing [`APP_MANIFEST`]).
    root: PathBuf,
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Self::at(".")
    }
}

impl ProjectLayout {
    /// Creates the standard layout rooted at `root`.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The app root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether the root looks like the app project.
    pub fn is_app_root(&self) -> bool {
        self.root.join(APP_MANIFEST).is_file()
    }

    /// The asset staging directory.
    pub fn staging(&self) -> PathBuf {
        self.root.join(STAGING_DIR)
    }

    /// Staged icons for `platform`.
    pub fn staged_icons(&self, platform: Platform) -> PathBuf {
        self.staging().join("icons").join(platform.dir_name())
    }

    /// The staged 1024px master icon.
    pub fn master_icon(&self) -> PathBuf {
        self.staging().join("icons").join("app_icon_master.png")
    }

    /// The operator-supplied original icon.
    pub fn original_icon(&self) -> PathBuf {
        self.staging().join(ORIGINAL_ICON_FILE)
    }

    /// The replica artwork, written before it is resized into the app.
    pub fn replica_icon(&self) -> PathBuf {
        self.staging().join(REPLICA_ICON_FILE)
    }

    /// Output of the staged resize of the original icon.
    pub fn generated_from_original(&self) -> PathBuf {
        self.staging().join("generated_from_original")
    }

    /// Splash screens of the given kind.
    pub fn splash_screens(&self, kind: SplashKind) -> PathBuf {
        let kind = match kind {
            SplashKind::Mobile => "mobile",
            SplashKind::Tablet => "tablet",
        };
        self.staging().join("splashscreens").join(kind)
    }

    /// Root of the promotional material.
    pub fn promotional(&self) -> PathBuf {
        self.staging().join("promotional")
    }

    /// Placeholder screenshots rendered by the asset generator.
    pub fn placeholder_screenshots(&self) -> PathBuf {
        self.promotional().join("screenshots")
    }

    /// Captured screenshots for a device class.
    pub fn screenshots(&self, device: ScreenshotDevice) -> PathBuf {
        self.placeholder_screenshots().join(device.sub_path())
    }

    /// Store feature graphics.
    pub fn feature_graphics(&self) -> PathBuf {
        self.promotional().join("feature_graphics")
    }

    /// Marketing assets.
    pub fn marketing(&self) -> PathBuf {
        self.promotional().join("marketing")
    }

    /// The Android `mipmap-<bucket>` directory.
    pub fn android_mipmap(&self, bucket: &str) -> PathBuf {
        self.root
            .join(ANDROID_RES_DIR)
            .join(format!("mipmap-{bucket}"))
    }

    /// The iOS app icon set.
    pub fn ios_app_icon_set(&self) -> PathBuf {
        self.root.join(IOS_APP_ICON_SET)
    }

    /// The web icon directory.
    pub fn web_icons(&self) -> PathBuf {
        self.root.join(WEB_ICON_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_rooted() {
        let layout = ProjectLayout::at("/app");

        assert_eq!(
            layout.staged_icons(Platform::Ios),
            PathBuf::from("/app/assets_store/icons/ios"),
            "staged iOS icons"
        );
        assert_eq!(
            layout.android_mipmap("xxhdpi"),
            PathBuf::from("/app/android/app/src/main/res/mipmap-xxhdpi"),
            "android bucket"
        );
        assert_eq!(
            layout.screenshots(ScreenshotDevice::Iphone),
            PathBuf::from("/app/assets_store/promotional/screenshots/ios/iphone"),
            "iphone screenshots"
        );
        assert_eq!(
            layout.replica_icon(),
            PathBuf::from("/app/assets_store/user_exact_original.png"),
            "replica artwork"
        );
    }

    #[test]
    fn default_is_current_directory() {
        assert_eq!(ProjectLayout::default().root(), Path::new("."), "root");
    }
}
