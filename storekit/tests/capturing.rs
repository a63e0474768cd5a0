//! Screenshot capture against scripted device tools.

use std::{cell::RefCell, collections::VecDeque, ffi::OsStr, fs, io, time::Duration};

use storekit::{
    capture::{
        create_screenshot_directories, AndroidBridge, CaptureMethod, PlatformChoice, Scenario,
        Session, SessionOptions, SimulatorBridge, DEVICE_SCREENSHOT_PATH,
    },
    layout::ScreenshotDevice,
    prompt::Operator,
    shell::{command_line, CommandOutput, CommandRunner},
    CaptureError, ProjectLayout,
};

/// Replays canned outputs in order and records every command line.
#[derive(Default)]
struct ScriptedRunner {
    replies: RefCell<VecDeque<CommandOutput>>,
    calls: RefCell<Vec<String>>,
}

impl ScriptedRunner {
    fn new(replies: impl IntoIterator<Item = CommandOutput>) -> Self {
        Self {
            replies: RefCell::new(replies.into_iter().collect()),
            calls: RefCell::default(),
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, program: &str, args: &[&OsStr]) -> io::Result<CommandOutput> {
        self.calls.borrow_mut().push(command_line(program, args));
        Ok(self
            .replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| CommandOutput::failed("unscripted command")))
    }
}

const SCENARIOS: [Scenario; 3] = [
    Scenario {
        file_name: "01_home.png",
        description: "Home",
    },
    Scenario {
        file_name: "02_grid.png",
        description: "Grid",
    },
    Scenario {
        file_name: "03_settings.png",
        description: "Settings",
    },
];

fn quick() -> SessionOptions {
    SessionOptions {
        pause: Duration::ZERO,
        android_method: CaptureMethod::ExecOut,
    }
}

#[test]
fn android_session_continues_past_a_failure() {
    let dir = tempfile::tempdir().expect("tempdir");
    let layout = ProjectLayout::at(dir.path());
    let runner = ScriptedRunner::new([
        CommandOutput::ok("List of devices attached\nemulator-5554\tdevice\n"),
        CommandOutput::ok("PNG one"),
        CommandOutput::failed("error: closed"),
        CommandOutput::ok("PNG three"),
    ]);
    let mut operator = Operator::new(&b"\n\n\n\n"[..], Vec::new());

    let summary = Session::new(&runner, &mut operator, &layout, quick())
        .with_scenarios(&SCENARIOS)
        .run(PlatformChoice::Android)
        .expect("session");

    let directory = layout.screenshots(ScreenshotDevice::AndroidPhone);
    assert_eq!(
        summary.captured,
        vec![directory.join("01_home.png"), directory.join("03_settings.png")],
        "captured"
    );
    assert_eq!(summary.failed, vec![directory.join("02_grid.png")], "failed");
    assert_eq!(
        fs::read(directory.join("03_settings.png")).expect("written"),
        b"PNG three",
        "stdout bytes saved"
    );
    assert_eq!(
        runner.calls()[1],
        "adb -s emulator-5554 exec-out screencap -p",
        "capture command"
    );

    let transcript = String::from_utf8(operator.into_output()).expect("utf8");
    assert!(transcript.contains("Next screenshot: Grid"), "{transcript}");
    assert!(transcript.contains("Failed to capture: 02_grid.png"), "{transcript}");
}

#[test]
fn no_android_device_skips_the_platform() {
    let dir = tempfile::tempdir().expect("tempdir");
    let layout = ProjectLayout::at(dir.path());
    let runner = ScriptedRunner::new([CommandOutput::ok(
        "List of devices attached\nR58M123\tunauthorized\n\n",
    )]);
    let mut operator = Operator::new(&b"\n"[..], Vec::new());

    let summary = Session::new(&runner, &mut operator, &layout, quick())
        .with_scenarios(&SCENARIOS)
        .run(PlatformChoice::Android)
        .expect("session");

    assert!(summary.captured.is_empty(), "nothing captured");
    assert!(summary.failed.is_empty(), "nothing attempted");
    assert!(
        matches!(summary.unavailable[..], [CaptureError::NoAndroidDevice]),
        "{:?}",
        summary.unavailable
    );
    assert_eq!(runner.calls(), vec!["adb devices"], "only discovery ran");
}

#[test]
fn push_pull_cleans_up_best_effort() {
    let dir = tempfile::tempdir().expect("tempdir");
    let destination = dir.path().join("shots").join("one.png");
    let runner = ScriptedRunner::new([
        CommandOutput::ok(""),
        CommandOutput::ok(""),
        CommandOutput::failed("rm: permission denied"),
    ]);

    AndroidBridge::new(&runner, Some("abc".to_string()), CaptureMethod::PushPull)
        .capture(&destination)
        .expect("cleanup failure is not a capture failure");

    assert_eq!(
        runner.calls(),
        vec![
            format!("adb -s abc shell screencap -p {DEVICE_SCREENSHOT_PATH}"),
            format!("adb -s abc pull {DEVICE_SCREENSHOT_PATH} {}", destination.display()),
            format!("adb -s abc shell rm {DEVICE_SCREENSHOT_PATH}"),
        ],
        "commands"
    );
    assert!(dir.path().join("shots").is_dir(), "destination directory created");
}

#[test]
fn empty_exec_out_is_a_failure() {
    let dir = tempfile::tempdir().expect("tempdir");
    let destination = dir.path().join("one.png");
    let runner = ScriptedRunner::new([CommandOutput::ok("")]);

    let result = AndroidBridge::new(&runner, None, CaptureMethod::ExecOut).capture(&destination);

    assert!(
        matches!(result, Err(CaptureError::CommandFailed { .. })),
        "{result:?}"
    );
    assert!(!destination.exists(), "nothing written");
    assert_eq!(runner.calls(), vec!["adb exec-out screencap -p"], "no serial");
}

#[test]
fn simulator_session_uses_default_name() {
    let dir = tempfile::tempdir().expect("tempdir");
    let layout = ProjectLayout::at(dir.path());
    let runner = ScriptedRunner::new([
        CommandOutput::ok(
            "== Devices ==\n-- iOS 16.4 --\n    iPhone 14 (ABCD-1234) (Booted)\n",
        ),
        CommandOutput::ok(""),
    ]);
    // Empty simulator name, ready, one capture.
    let mut operator = Operator::new(&b"\n\n\n"[..], Vec::new());

    let summary = Session::new(&runner, &mut operator, &layout, quick())
        .with_scenarios(&SCENARIOS[..1])
        .run(PlatformChoice::Simulator)
        .expect("session");

    let expected = layout
        .screenshots(ScreenshotDevice::Iphone)
        .join("01_home.png");
    assert_eq!(summary.captured, vec![expected.clone()], "captured");
    assert_eq!(
        runner.calls(),
        vec![
            "xcrun simctl list devices".to_string(),
            format!("xcrun simctl io ABCD-1234 screenshot {}", expected.display()),
        ],
        "commands"
    );
}

#[test]
fn both_platforms_continue_without_android() {
    let dir = tempfile::tempdir().expect("tempdir");
    let layout = ProjectLayout::at(dir.path());
    let runner = ScriptedRunner::new([
        CommandOutput::ok("List of devices attached\n\n"),
        CommandOutput::ok(
            "== Devices ==\n-- iOS 16.4 --\n    iPhone 14 (ABCD-1234) (Booted)\n",
        ),
        CommandOutput::ok(""),
    ]);
    // Menu choice, Android ready, default simulator name, simulator ready, one capture.
    let mut operator = Operator::new(&b"3\n\n\n\n\n"[..], Vec::new());

    let mut session =
        Session::new(&runner, &mut operator, &layout, quick()).with_scenarios(&SCENARIOS[..1]);
    let choice = session.choose_platform().expect("menu");
    assert_eq!(choice, Some(PlatformChoice::Both), "menu answer");
    let summary = session.run(PlatformChoice::Both).expect("session");

    assert!(
        matches!(summary.unavailable[..], [CaptureError::NoAndroidDevice]),
        "{:?}",
        summary.unavailable
    );
    let expected = layout
        .screenshots(ScreenshotDevice::Iphone)
        .join("01_home.png");
    assert_eq!(summary.captured, vec![expected.clone()], "simulator captured");
    assert!(summary.failed.is_empty(), "{:?}", summary.failed);
    assert_eq!(
        runner.calls(),
        vec![
            "adb devices".to_string(),
            "xcrun simctl list devices".to_string(),
            format!("xcrun simctl io ABCD-1234 screenshot {}", expected.display()),
        ],
        "android discovery, then the simulator"
    );
}

#[test]
fn unbooted_simulator_is_reported() {
    let runner = ScriptedRunner::new([CommandOutput::ok(
        "    iPhone 14 (ABCD-1234) (Shutdown)\n",
    )]);

    let result = SimulatorBridge::discover(&runner, "iPhone 14");

    assert!(
        matches!(result, Err(CaptureError::SimulatorNotBooted(ref name)) if name == "iPhone 14"),
        "not booted"
    );
}

#[test]
fn screenshot_directories_are_created() {
    let dir = tempfile::tempdir().expect("tempdir");
    let layout = ProjectLayout::at(dir.path());

    let created = create_screenshot_directories(&layout).expect("directories");

    assert_eq!(
        created.len(),
        ScreenshotDevice::ALL.len() + 1,
        "one per device plus feature graphics"
    );
    assert!(created.iter().all(|path| path.is_dir()), "{created:?}");
    assert!(layout.feature_graphics().is_dir(), "feature graphics directory");
}
