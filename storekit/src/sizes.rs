//! `sizes`
//!
//! Every output size the platforms and stores ask for.

/// A square icon at a fixed pixel size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSize {
    /// Density bucket, point scale or plain size this icon is for.
    pub label: &'static str,
    /// Edge length in pixels.
    pub pixels: u32,
    /// File name inside the platform's staging directory.
    pub file_name: &'static str,
}

/// A rectangular frame such as a splash screen or banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Output file name.
    pub file_name: &'static str,
}

/// An Android screen density bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DensityBucket {
    /// Bucket name, as used in `mipmap-<name>`.
    pub name: &'static str,
    /// Launcher icon size for the bucket.
    pub pixels: u32,
}

/// The app store a feature graphic is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorePlatform {
    /// Google Play.
    GooglePlay,
    /// Apple App Store.
    AppStore,
}

/// A feature graphic slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureGraphic {
    /// Frame of the graphic.
    pub frame: FrameSize,
    /// Which store the graphic is for.
    pub store: StorePlatform,
}

/// A placeholder screenshot with its caption lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceholderScreenshot {
    /// Output file name.
    pub file_name: &'static str,
    /// Caption, one entry per line.
    pub caption: &'static [&'static str],
}

/// Android launcher density buckets.
pub const ANDROID_DENSITIES: [DensityBucket; 5] = [
    DensityBucket {
        name: "mdpi",
        pixels: 48,
    },
    DensityBucket {
        name: "hdpi",
        pixels: 72,
    },
    DensityBucket {
        name: "xhdpi",
        pixels: 96,
    },
    DensityBucket {
        name: "xxhdpi",
        pixels: 144,
    },
    DensityBucket {
        name: "xxxhdpi",
        pixels: 192,
    },
];

/// Android launcher icons of the figures design, one per density bucket.
pub const ANDROID_ICONS: [IconSize; 5] = [
    IconSize {
        label: "mdpi",
        pixels: 48,
        file_name: "ic_launcher_48.png",
    },
    IconSize {
        label: "hdpi",
        pixels: 72,
        file_name: "ic_launcher_72.png",
    },
    IconSize {
        label: "xhdpi",
        pixels: 96,
        file_name: "ic_launcher_96.png",
    },
    IconSize {
        label: "xxhdpi",
        pixels: 144,
        file_name: "ic_launcher_144.png",
    },
    IconSize {
        label: "xxxhdpi",
        pixels: 192,
        file_name: "ic_launcher_192.png",
    },
];

/// iOS app icons of the figures design.
///
/// Every file the asset catalog descriptor references is in here.
pub const IOS_ICONS: [IconSize; 11] = [
    IconSize {
        label: "40",
        pixels: 40,
        file_name: "Icon-40.png",
    },
    IconSize {
        label: "58",
        pixels: 58,
        file_name: "Icon-58.png",
    },
    IconSize {
        label: "60",
        pixels: 60,
        file_name: "Icon-60.png",
    },
    IconSize {
        label: "76",
        pixels: 76,
        file_name: "Icon-76.png",
    },
    IconSize {
        label: "80",
        pixels: 80,
        file_name: "Icon-80.png",
    },
    IconSize {
        label: "87",
        pixels: 87,
        file_name: "Icon-87.png",
    },
    IconSize {
        label: "120",
        pixels: 120,
        file_name: "Icon-120.png",
    },
    IconSize {
        label: "152",
        pixels: 152,
        file_name: "Icon-152.png",
    },
    IconSize {
        label: "167",
        pixels: 167,
        file_name: "Icon-167.png",
    },
    IconSize {
        label: "180",
        pixels: 180,
        file_name: "Icon-180.png",
    },
    IconSize {
        label: "1024",
        pixels: 1024,
        file_name: "Icon-1024.png",
    },
];

/// Web icons of the figures design.
pub const WEB_ICONS: [IconSize; 4] = [
    IconSize {
        label: "16",
        pixels: 16,
        file_name: "icon-16.png",
    },
    IconSize {
        label: "32",
        pixels: 32,
        file_name: "icon-32.png",
    },
    IconSize {
        label: "192",
        pixels: 192,
        file_name: "icon-192.png",
    },
    IconSize {
        label: "512",
        pixels: 512,
        file_name: "icon-512.png",
    },
];

/// The master icon kept next to the platform directories.
pub const MASTER_ICON: IconSize = IconSize {
    label: "master",
    pixels: 1024,
    file_name: "app_icon_master.png",
};

/// Android icons of the placeholder speech-bubble design.
pub const PLACEHOLDER_ANDROID_ICONS: [IconSize; 6] = [
    IconSize {
        label: "ldpi",
        pixels: 36,
        file_name: "android_icon_36dp.png",
    },
    IconSize {
        label: "mdpi",
        pixels: 48,
        file_name: "android_icon_48dp.png",
    },
    IconSize {
        label: "hdpi",
        pixels: 72,
        file_name: "android_icon_72dp.png",
    },
    IconSize {
        label: "xhdpi",
        pixels: 96,
        file_name: "android_icon_96dp.png",
    },
    IconSize {
        label: "xxhdpi",
        pixels: 144,
        file_name: "android_icon_144dp.png",
    },
    IconSize {
        label: "xxxhdpi",
        pixels: 192,
        file_name: "android_icon_192dp.png",
    },
];

/// iOS icons of the placeholder speech-bubble design, named by point size and scale.
pub const PLACEHOLDER_IOS_ICONS: [IconSize; 11] = [
    IconSize {
        label: "20@2x",
        pixels: 40,
        file_name: "ios_icon_20x20@2x.png",
    },
    IconSize {
        label: "20@3x",
        pixels: 60,
        file_name: "ios_icon_20x20@3x.png",
    },
    IconSize {
        label: "29@2x",
        pixels: 58,
        file_name: "ios_icon_29x29@2x.png",
    },
    IconSize {
        label: "29@3x",
        pixels: 87,
        file_name: "ios_icon_29x29@3x.png",
    },
    IconSize {
        label: "40@2x",
        pixels: 80,
        file_name: "ios_icon_40x40@2x.png",
    },
    IconSize {
        label: "40@3x",
        pixels: 120,
        file_name: "ios_icon_40x40@3x.png",
    },
    IconSize {
        label: "60@2x",
        pixels: 120,
        file_name: "ios_icon_60x60@2x.png",
    },
    IconSize {
        label: "60@3x",
        pixels: 180,
        file_name: "ios_icon_60x60@3x.png",
    },
    IconSize {
        label: "76@2x",
        pixels: 152,
        file_name: "ios_icon_76x76@2x.png",
    },
    IconSize {
        label: "83.5@2x",
        pixels: 167,
        file_name: "ios_icon_83.5x83.5@2x.png",
    },
    IconSize {
        label: "1024",
        pixels: 1024,
        file_name: "ios_icon_1024x1024.png",
    },
];

/// Web icons of the placeholder speech-bubble design.
pub const PLACEHOLDER_WEB_ICONS: [IconSize; 4] = [
    IconSize {
        label: "16",
        pixels: 16,
        file_name: "web_icon_16x16.png",
    },
    IconSize {
        label: "32",
        pixels: 32,
        file_name: "web_icon_32x32.png",
    },
    IconSize {
        label: "192",
        pixels: 192,
        file_name: "web_icon_192x192.png",
    },
    IconSize {
        label: "512",
        pixels: 512,
        file_name: "web_icon_512x512.png",
    },
];

/// Phone splash screens.
pub const MOBILE_SPLASH: [FrameSize; 6] = [
    FrameSize {
        width: 640,
        height: 1136,
        file_name: "splash_mobile_640x1136.png",
    },
    FrameSize {
        width: 750,
        height: 1334,
        file_name: "splash_mobile_750x1334.png",
    },
    FrameSize {
        width: 1125,
        height: 2436,
        file_name: "splash_mobile_1125x2436.png",
    },
    FrameSize {
        width: 1242,
        height: 2688,
        file_name: "splash_mobile_1242x2688.png",
    },
    FrameSize {
        width: 828,
        height: 1792,
        file_name: "splash_mobile_828x1792.png",
    },
    FrameSize {
        width: 1080,
        height: 1920,
        file_name: "splash_mobile_1080x1920.png",
    },
];

/// Tablet splash screens.
pub const TABLET_SPLASH: [FrameSize; 4] = [
    FrameSize {
        width: 1536,
        height: 2048,
        file_name: "splash_tablet_1536x2048.png",
    },
    FrameSize {
        width: 1668,
        height: 2224,
        file_name: "splash_tablet_1668x2224.png",
    },
    FrameSize {
        width: 1668,
        height: 2388,
        file_name: "splash_tablet_1668x2388.png",
    },
    FrameSize {
        width: 2048,
        height: 2732,
        file_name: "splash_tablet_2048x2732.png",
    },
];

/// Size of the placeholder store screenshots.
pub const PLACEHOLDER_SCREENSHOT_SIZE: (u32, u32) = (1080, 1920);

/// Placeholder store screenshots.
pub const PLACEHOLDER_SCREENSHOTS: [PlaceholderScreenshot; 5] = [
    PlaceholderScreenshot {
        file_name: "screenshot_1.png",
        caption: &["Screenshot 1", "Main Communication Grid"],
    },
    PlaceholderScreenshot {
        file_name: "screenshot_2.png",
        caption: &["Screenshot 2", "Symbol Customization"],
    },
    PlaceholderScreenshot {
        file_name: "screenshot_3.png",
        caption: &["Screenshot 3", "Category Management"],
    },
    PlaceholderScreenshot {
        file_name: "screenshot_4.png",
        caption: &["Screenshot 4", "Settings and Preferences"],
    },
    PlaceholderScreenshot {
        file_name: "screenshot_5.png",
        caption: &["Screenshot 5", "Profile Selection"],
    },
];

/// Store feature graphics.
pub const FEATURE_GRAPHICS: [FeatureGraphic; 2] = [
    FeatureGraphic {
        frame: FrameSize {
            width: 1024,
            height: 500,
            file_name: "feature_graphic_1024x500.png",
        },
        store: StorePlatform::GooglePlay,
    },
    FeatureGraphic {
        frame: FrameSize {
            width: 1200,
            height: 630,
            file_name: "feature_graphic_1200x630.png",
        },
        store: StorePlatform::AppStore,
    },
];

/// Marketing assets. The title drawn on each is derived from the file name.
pub const MARKETING_ASSETS: [FrameSize; 5] = [
    FrameSize {
        width: 400,
        height: 150,
        file_name: "logo_horizontal.png",
    },
    FrameSize {
        width: 150,
        height: 400,
        file_name: "logo_vertical.png",
    },
    FrameSize {
        width: 150,
        height: 150,
        file_name: "logo_icon.png",
    },
    FrameSize {
        width: 1200,
        height: 600,
        file_name: "banner_1200x600.png",
    },
    FrameSize {
        width: 1080,
        height: 1080,
        file_name: "social_media_1080x1080.png",
    },
];

/// The Google Play feature graphic drawn after a capture session.
pub const STORE_FEATURE_GRAPHIC: FrameSize = FrameSize {
    width: 1024,
    height: 500,
    file_name: "feature_graphic.png",
};

/// Edge of the replica artwork as drawn, before any resize.
pub const REPLICA_ICON_PIXELS: u32 = 512;

/// iOS sizes the master icon is resized to.
pub const EXACT_IOS_SIZES: [u32; 10] = [40, 58, 60, 80, 87, 120, 152, 167, 180, 1024];

/// Web sizes the master icon is resized to.
pub const EXACT_WEB_SIZES: [u32; 11] = [16, 32, 48, 72, 96, 128, 144, 152, 192, 384, 512];
