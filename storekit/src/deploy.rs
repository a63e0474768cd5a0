//! `deploy`
//!
//! Copies staged icons into the places the Android, iOS and web builds read
//! them from.
//!
//! Each entry is independent: a missing or failed copy is reported and the
//! remaining entries are still attempted. Nothing is rolled back.

use std::{fs, path::PathBuf};

use crate::{
    descriptor::AppIconCatalog,
    errors::DeployError,
    layout::{Platform, ProjectLayout},
    sizes::{ANDROID_ICONS, WEB_ICONS},
};

/// Launcher icon name inside each `mipmap-*` directory.
pub const ANDROID_LAUNCHER: &str = "ic_launcher.png";
/// Round launcher icon name inside each `mipmap-*` directory.
pub const ANDROID_ROUND_LAUNCHER: &str = "ic_launcher_round.png";

/// A single staged file and where it should end up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployEntry {
    /// The staged file.
    pub source: PathBuf,
    /// Directory to copy into; created if absent.
    pub destination_dir: PathBuf,
    /// Name of the copied file.
    pub file_name: String,
}

impl DeployEntry {
    /// Creates an entry.
    pub fn new(
        source: impl Into<PathBuf>,
        destination_dir: impl Into<PathBuf>,
        file_name: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            destination_dir: destination_dir.into(),
            file_name: file_name.into(),
        }
    }

    /// Full path of the copied file.
    pub fn destination(&self) -> PathBuf {
        self.destination_dir.join(&self.file_name)
    }

    /// Copies the source into place.
    ///
    /// # Returns
    /// The destination path.
    ///
    /// # Errors
    /// [`DeployError::MissingSource`] if there is nothing to copy, otherwise the
    /// directory or copy failure.
    pub fn deploy(&self) -> Result<PathBuf, DeployError> {
        if !self.source.is_file() {
            return Err(DeployError::MissingSource(self.source.clone()));
        }

        fs::create_dir_all(&self.destination_dir).map_err(|source| DeployError::CreateDir {
            path: self.destination_dir.clone(),
            source,
        })?;

        let destination = self.destination();
        fs::copy(&self.source, &destination).map_err(|source| DeployError::Copy {
            from: self.source.clone(),
            to: destination.clone(),
            source,
        })?;

        Ok(destination)
    }
}

/// What happened to each entry of a deployment.
#[derive(Debug, Default)]
pub struct DeployReport {
    /// Destination paths that were written.
    pub copied: Vec<PathBuf>,
    /// Sources that did not exist.
    pub missing: Vec<PathBuf>,
    /// Entries that existed but could not be copied.
    pub failed: Vec<DeployError>,
}

impl DeployReport {
    /// Whether every entry was copied.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty() && self.failed.is_empty()
    }

    /// Folds another report into this one.
    pub fn merge(&mut self, other: DeployReport) {
        self.copied.extend(other.copied);
        self.missing.extend(other.missing);
        self.failed.extend(other.failed);
    }
}

/// Launcher and round launcher for every density bucket.
pub fn android_entries(layout: &ProjectLayout) -> Vec<DeployEntry> {
    let staged = &layout.staged_icons(Platform::Android);

    [ANDROID_LAUNCHER, ANDROID_ROUND_LAUNCHER]
        .into_iter()
        .flat_map(|target_name| {
            ANDROID_ICONS.iter().map(move |icon| {
                DeployEntry::new(
                    staged.join(icon.file_name),
                    layout.android_mipmap(icon.label),
                    target_name,
                )
            })
        })
        .collect()
}

/// Every staged iOS PNG, copied under its own name into the app icon set.
///
/// # Errors
/// [`DeployError::ReadDir`] if the staged directory exists but cannot be listed.
pub fn ios_entries(layout: &ProjectLayout) -> Result<Vec<DeployEntry>, DeployError> {
    let staged = layout.staged_icons(Platform::Ios);
    if !staged.is_dir() {
        log::warn!("No staged iOS icons at {}", staged.display());
        return Ok(Vec::new());
    }

    let read_dir_error = |source| DeployError::ReadDir {
        path: staged.clone(),
        source,
    };
    let mut names = Vec::new();
    for entry in fs::read_dir(&staged).map_err(read_dir_error)? {
        let entry = entry.map_err(read_dir_error)?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.ends_with(".png") && entry.path().is_file() {
            names.push(name);
        }
    }
    names.sort();

    let target = layout.ios_app_icon_set();
    Ok(names
        .into_iter()
        .map(|name| DeployEntry::new(staged.join(&name), &target, name))
        .collect())
}

/// Web icons, renamed to the `web_icon_<n>x<n>.png` convention.
pub fn web_entries(layout: &ProjectLayout) -> Vec<DeployEntry> {
    let staged = layout.staged_icons(Platform::Web);
    let target = layout.web_icons();

    WEB_ICONS
        .iter()
        .map(|icon| {
            DeployEntry::new(
                staged.join(icon.file_name),
                &target,
                format!("web_icon_{0}x{0}.png", icon.pixels),
            )
        })
        .collect()
}

/// Copies every entry, printing one line per entry.
pub fn deploy_entries(entries: &[DeployEntry]) -> DeployReport {
    let mut report = DeployReport::default();

    for entry in entries {
        match entry.deploy() {
            Ok(destination) => {
                println!(
                    "Copied {} -> {}",
                    entry.source.display(),
                    destination.display()
                );
                report.copied.push(destination);
            }
            Err(DeployError::MissingSource(source)) => {
                println!("Source not found: {}", source.display());
                log::warn!("Skipping {}: source not found", entry.destination().display());
                report.missing.push(source);
            }
            Err(err) => {
                println!("Failed: {err}");
                log::warn!("{err}");
                report.failed.push(err);
            }
        }
    }

    report
}

/// Deploys the iOS icons and writes the asset catalog descriptor next to them.
///
/// The descriptor is written even if no icons were found, so the catalog is
/// always well-formed.
pub fn deploy_ios(layout: &ProjectLayout) -> DeployReport {
    let mut report = match ios_entries(layout) {
        Ok(entries) => deploy_entries(&entries),
        Err(err) => {
            println!("Failed: {err}");
            DeployReport {
                failed: vec![err],
                ..DeployReport::default()
            }
        }
    };

    let icon_set = layout.ios_app_icon_set();
    let written = fs::create_dir_all(&icon_set)
        .map_err(|source| DeployError::CreateDir {
            path: icon_set.clone(),
            source,
        })
        .and_then(|()| AppIconCatalog::standard().write_to(&icon_set));
    match written {
        Ok(path) => {
            println!("Created {}", path.display());
            report.copied.push(path);
        }
        Err(err) => {
            println!("Failed: {err}");
            report.failed.push(err);
        }
    }

    report
}

/// Deploys Android, iOS and web icons, in that order.
pub fn deploy_all(layout: &ProjectLayout) -> DeployReport {
    let mut report = DeployReport::default();

    println!("Copying Android icons...");
    report.merge(deploy_entries(&android_entries(layout)));
    println!();

    println!("Copying iOS icons...");
    report.merge(deploy_ios(layout));
    println!();

    println!("Copying web icons...");
    report.merge(deploy_entries(&web_entries(layout)));

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn android_table_covers_both_launchers() {
        let layout = ProjectLayout::at("/app");
        let entries = android_entries(&layout);

        assert_eq!(entries.len(), 10, "two launchers for five buckets");
        assert_eq!(
            entries[5].source,
            entries[0].source,
            "round launcher reuses the staged file"
        );
        assert_eq!(
            entries[0],
            DeployEntry::new(
                "/app/assets_store/icons/android/ic_launcher_48.png",
                "/app/android/app/src/main/res/mipmap-mdpi",
                "ic_launcher.png"
            ),
            "first entry"
        );
        assert_eq!(
            entries[9].destination(),
            PathBuf::from("/app/android/app/src/main/res/mipmap-xxxhdpi/ic_launcher_round.png"),
            "last entry"
        );
    }

    #[test]
    fn web_icons_are_renamed() {
        let names: Vec<_> = web_entries(&ProjectLayout::at("/app"))
            .into_iter()
            .map(|entry| entry.file_name)
            .collect();

        assert_eq!(
            names,
            vec![
                "web_icon_16x16.png",
                "web_icon_32x32.png",
                "web_icon_192x192.png",
                "web_icon_512x512.png"
            ],
            "renamed"
        );
    }

    #[test]
    fn missing_ios_staging_is_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let entries = ios_entries(&ProjectLayout::at(dir.path())).expect("entries");

        assert!(entries.is_empty(), "nothing staged");
    }

    #[test]
    fn missing_source_is_reported() {
        let dir = tempfile::tempdir().expect("tempdir");
        let entry = DeployEntry::new(
            dir.path().join("absent.png"),
            dir.path().join("out"),
            "x.png",
        );

        assert!(
            matches!(entry.deploy(), Err(DeployError::MissingSource(_))),
            "missing source"
        );
        assert!(!dir.path().join("out").exists(), "nothing created");
    }
}
