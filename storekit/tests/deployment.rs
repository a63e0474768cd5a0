//! Deploying staged icons into a scratch app tree.

use std::{fs, path::Path};

use storekit::{
    deploy::{android_entries, deploy_all, ios_entries, web_entries},
    descriptor::{AppIconCatalog, CONTENTS_FILE},
    sizes::{ANDROID_ICONS, IOS_ICONS, WEB_ICONS},
    Platform, ProjectLayout,
};

/// Writes a distinct small file for every staged icon.
fn stage_everything(layout: &ProjectLayout) {
    for (platform, table) in [
        (Platform::Android, &ANDROID_ICONS[..]),
        (Platform::Ios, &IOS_ICONS[..]),
        (Platform::Web, &WEB_ICONS[..]),
    ] {
        let directory = layout.staged_icons(platform);
        fs::create_dir_all(&directory).expect("staging directory");
        for icon in table {
            fs::write(
                directory.join(icon.file_name),
                format!("{platform:?} {}", icon.pixels),
            )
            .expect("staged file");
        }
    }
}

fn same_contents(a: &Path, b: &Path) -> std::io::Result<bool> {
    Ok(fs::read(a)? == fs::read(b)?)
}

fn assert_copied(source: &Path, destination: &Path) {
    assert!(
        same_contents(source, destination).unwrap_or(false),
        "{} should be a copy of {}",
        destination.display(),
        source.display()
    );
}

#[test]
fn complete_tree_deploys_byte_identical() {
    let dir = tempfile::tempdir().expect("tempdir");
    let layout = ProjectLayout::at(dir.path());
    stage_everything(&layout);

    let report = deploy_all(&layout);

    assert!(report.is_complete(), "{report:?}");
    for entry in android_entries(&layout)
        .into_iter()
        .chain(ios_entries(&layout).expect("ios entries"))
        .chain(web_entries(&layout))
    {
        assert_copied(&entry.source, &entry.destination());
    }
    assert_eq!(
        report.copied.len(),
        ANDROID_ICONS.len() * 2 + IOS_ICONS.len() + WEB_ICONS.len() + 1,
        "every icon plus the descriptor"
    );
}

#[test]
fn missing_source_does_not_stop_the_rest() {
    let dir = tempfile::tempdir().expect("tempdir");
    let layout = ProjectLayout::at(dir.path());
    stage_everything(&layout);
    let removed = layout
        .staged_icons(Platform::Android)
        .join(ANDROID_ICONS[2].file_name);
    fs::remove_file(&removed).expect("remove one source");

    let report = deploy_all(&layout);

    assert_eq!(report.missing, vec![removed.clone(), removed], "launcher and round");
    assert!(report.failed.is_empty(), "{:?}", report.failed);
    for entry in android_entries(&layout)
        .into_iter()
        .chain(web_entries(&layout))
        .filter(|entry| entry.source.exists())
    {
        assert_copied(&entry.source, &entry.destination());
    }
    assert!(
        !layout
            .android_mipmap(ANDROID_ICONS[2].label)
            .join("ic_launcher.png")
            .exists(),
        "nothing written for the missing source"
    );
}

#[test]
fn descriptor_is_valid_json_naming_deployed_files() {
    let dir = tempfile::tempdir().expect("tempdir");
    let layout = ProjectLayout::at(dir.path());
    stage_everything(&layout);

    deploy_all(&layout);

    let icon_set = layout.ios_app_icon_set();
    let json = fs::read_to_string(icon_set.join(CONTENTS_FILE)).expect("descriptor written");
    let catalog: AppIconCatalog = serde_json::from_str(&json).expect("descriptor parses");

    assert_eq!(catalog, AppIconCatalog::standard(), "standard catalog");
    for image in &catalog.images {
        assert!(
            icon_set.join(&image.filename).is_file(),
            "{} referenced but not deployed",
            image.filename
        );
    }
}

#[test]
fn descriptor_written_even_without_staged_icons() {
    let dir = tempfile::tempdir().expect("tempdir");
    let layout = ProjectLayout::at(dir.path());

    let report = deploy_all(&layout);

    assert!(!report.is_complete(), "nothing was staged");
    assert!(
        layout.ios_app_icon_set().join(CONTENTS_FILE).is_file(),
        "descriptor still written"
    );
}
