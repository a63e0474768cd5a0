//! `capture`
//!
//! Walks the operator through taking the store screenshots on a connected
//! Android device and/or a booted iOS simulator.
//!
//! For each scenario the operator navigates the app, presses Enter, and the
//! screen is pulled off the device into the promotional screenshots tree. A
//! failed capture is reported and the session moves on to the next scenario.

use std::{
    ffi::OsStr,
    fs,
    io::{BufRead, Write},
    path::{Path, PathBuf},
    thread,
    time::Duration,
};

use crate::{
    errors::{AssetError, CaptureError},
    layout::{ProjectLayout, ScreenshotDevice},
    prompt::Operator,
    shell::{run_checked, CommandRunner},
};

/// Scratch file on the device used by [`CaptureMethod::PushPull`].
pub const DEVICE_SCREENSHOT_PATH: &str = "/sdcard/screenshot.png";
/// Simulator used when the operator does not name one.
pub const DEFAULT_SIMULATOR: &str = "iPhone 14";

/// A screen to capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scenario {
    /// Output file name.
    pub file_name: &'static str,
    /// What the operator should navigate to.
    pub description: &'static str,
}

/// The screens submitted to the stores, in listing order.
pub const STORE_SCENARIOS: [Scenario; 8] = [
    Scenario {
        file_name: "01_home_screen.png",
        description: "Home Screen with Communication Grid",
    },
    Scenario {
        file_name: "02_symbol_selection.png",
        description: "Symbol Selection in Action",
    },
    Scenario {
        file_name: "03_voice_features.png",
        description: "Voice/Audio Features",
    },
    Scenario {
        file_name: "04_personalization.png",
        description: "User Personalization",
    },
    Scenario {
        file_name: "05_practice_mode.png",
        description: "Learning/Practice Mode",
    },
    Scenario {
        file_name: "06_accessibility.png",
        description: "Accessibility Features",
    },
    Scenario {
        file_name: "07_favorites.png",
        description: "Favorites and Quick Access",
    },
    Scenario {
        file_name: "08_settings.png",
        description: "Settings and Configuration",
    },
];

/// How the Android screen is brought back to the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CaptureMethod {
    /// `adb exec-out screencap -p`, streaming the PNG over stdout.
    #[default]
    ExecOut,
    /// Save to [`DEVICE_SCREENSHOT_PATH`] on the device, pull it, then delete it.
    PushPull,
}

/// Serials from `adb devices` output that are ready for use.
///
/// The first line is a header. Only devices whose state is exactly `device`
/// are kept, so `offline` and `unauthorized` entries are skipped.
pub fn parse_adb_devices(text: &str) -> Vec<String> {
    text.lines()
        .skip(1)
        .filter_map(|line| {
            let mut columns = line.split_whitespace();
            match (columns.next(), columns.next()) {
                (Some(serial), Some("device")) => Some(serial.to_string()),
                _ => None,
            }
        })
        .collect()
}

/// Identifier of the booted simulator called `name` in `simctl list devices`
/// output.
///
/// Lines look like `    iPhone 14 (0A1B-...) (Booted)`.
pub fn parse_booted_simulator(text: &str, name: &str) -> Option<String> {
    text.lines()
        .find(|line| line.contains(name) && line.contains("(Booted)"))
        .and_then(|line| {
            let after_name = &line[line.find(name)? + name.len()..];
            let start = after_name.find('(')? + 1;
            let end = start + after_name[start..].find(')')?;
            Some(after_name[start..end].trim().to_string())
        })
        .filter(|id| !id.is_empty())
}

/// Makes sure `path`'s directory exists.
fn ensure_parent(path: &Path) -> Result<(), CaptureError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|source| CaptureError::Write {
                path: parent.to_path_buf(),
                source,
            })
        }
        _ => Ok(()),
    }
}

/// A connected Android device reached through `adb`.
pub struct AndroidBridge<'r> {
    /// Runs `adb`.
    runner: &'r dyn CommandRunner,
    /// Device to address; `None` lets adb pick the only one.
    serial: Option<String>,
    /// How screenshots come back.
    method: CaptureMethod,
}

impl<'r> AndroidBridge<'r> {
    /// Program name of the Android debug bridge.
    pub const PROGRAM: &'static str = "adb";

    /// A bridge to a known device.
    pub fn new(
        runner: &'r dyn CommandRunner,
        serial: Option<String>,
        method: CaptureMethod,
    ) -> Self {
        Self {
            runner,
            serial,
            method,
        }
    }

    /// Connects to the first ready device `adb devices` lists.
    ///
    /// # Errors
    /// [`CaptureError::NoAndroidDevice`] if none are ready, or the failure of
    /// `adb devices` itself.
    pub fn discover(
        runner: &'r dyn CommandRunner,
        method: CaptureMethod,
    ) -> Result<Self, CaptureError> {
        let output = run_checked(runner, Self::PROGRAM, &[OsStr::new("devices")])?;
        let serial = parse_adb_devices(&output.stdout_text())
            .into_iter()
            .next()
            .ok_or(CaptureError::NoAndroidDevice)?;
        log::debug!("Using Android device {serial}");

        Ok(Self::new(runner, Some(serial), method))
    }

    /// Runs `adb [-s serial] <args>`.
    fn adb(&self, args: &[&OsStr]) -> Result<Vec<u8>, CaptureError> {
        let mut full: Vec<&OsStr> = Vec::with_capacity(args.len() + 2);
        if let Some(serial) = &self.serial {
            full.push(OsStr::new("-s"));
            full.push(OsStr::new(serial));
        }
        full.extend_from_slice(args);

        Ok(run_checked(self.runner, Self::PROGRAM, &full)?.stdout)
    }

    /// Captures the current screen into `destination`.
    ///
    /// # Errors
    /// Any failing `adb` step, an empty capture, or a failure writing the file.
    pub fn capture(&self, destination: &Path) -> Result<(), CaptureError> {
        ensure_parent(destination)?;

        match self.method {
            CaptureMethod::ExecOut => {
                let png = self.adb(&[
                    OsStr::new("exec-out"),
                    OsStr::new("screencap"),
                    OsStr::new("-p"),
                ])?;
                if png.is_empty() {
                    return Err(CaptureError::CommandFailed {
                        command: "adb exec-out screencap -p".to_string(),
                        stderr: "no image data".to_string(),
                    });
                }
                fs::write(destination, png).map_err(|source| CaptureError::Write {
                    path: destination.to_path_buf(),
                    source,
                })
            }
            CaptureMethod::PushPull => {
                let remote = OsStr::new(DEVICE_SCREENSHOT_PATH);
                self.adb(&[
                    OsStr::new("shell"),
                    OsStr::new("screencap"),
                    OsStr::new("-p"),
                    remote,
                ])?;
                self.adb(&[OsStr::new("pull"), remote, destination.as_os_str()])?;
                if let Err(err) = self.adb(&[OsStr::new("shell"), OsStr::new("rm"), remote]) {
                    log::warn!("Could not remove {DEVICE_SCREENSHOT_PATH} from the device: {err}");
                }
                Ok(())
            }
        }
    }
}

/// A booted iOS simulator reached through `xcrun simctl`.
pub struct SimulatorBridge<'r> {
    /// Runs `xcrun`.
    runner: &'r dyn CommandRunner,
    /// Simulator identifier.
    udid: String,
}

impl<'r> SimulatorBridge<'r> {
    /// Program name of the Xcode tool runner.
    pub const PROGRAM: &'static str = "xcrun";

    /// A bridge to a known simulator.
    pub fn new(runner: &'r dyn CommandRunner, udid: impl Into<String>) -> Self {
        Self {
            runner,
            udid: udid.into(),
        }
    }

    /// Finds the booted simulator called `name`.
    ///
    /// # Errors
    /// [`CaptureError::SimulatorNotBooted`] if no such simulator is booted, or
    /// the failure of `simctl list` itself.
    pub fn discover(runner: &'r dyn CommandRunner, name: &str) -> Result<Self, CaptureError> {
        let output = run_checked(
            runner,
            Self::PROGRAM,
            &[OsStr::new("simctl"), OsStr::new("list"), OsStr::new("devices")],
        )?;
        let udid = parse_booted_simulator(&output.stdout_text(), name)
            .ok_or_else(|| CaptureError::SimulatorNotBooted(name.to_string()))?;
        log::debug!("Using simulator {name} ({udid})");

        Ok(Self::new(runner, udid))
    }

    /// Captures the simulator screen into `destination`.
    ///
    /// # Errors
    /// A failing `simctl io` or a failure creating the directory.
    pub fn capture(&self, destination: &Path) -> Result<(), CaptureError> {
        ensure_parent(destination)?;
        run_checked(
            self.runner,
            Self::PROGRAM,
            &[
                OsStr::new("simctl"),
                OsStr::new("io"),
                OsStr::new(&self.udid),
                OsStr::new("screenshot"),
                destination.as_os_str(),
            ],
        )?;
        Ok(())
    }
}

/// Which devices a session captures from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformChoice {
    /// An Android device or emulator.
    Android,
    /// An iOS simulator.
    Simulator,
    /// Android first, then the simulator.
    Both,
}

impl PlatformChoice {
    /// Reads a menu answer: `1`, `2` or `3`.
    pub fn from_menu(answer: &str) -> Option<Self> {
        match answer.trim() {
            "1" => Some(Self::Android),
            "2" => Some(Self::Simulator),
            "3" => Some(Self::Both),
            _ => None,
        }
    }

    /// Whether Android is captured.
    pub fn includes_android(self) -> bool {
        matches!(self, Self::Android | Self::Both)
    }

    /// Whether the simulator is captured.
    pub fn includes_simulator(self) -> bool {
        matches!(self, Self::Simulator | Self::Both)
    }
}

/// Tunables for a capture session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    /// Pause after each capture.
    pub pause: Duration,
    /// How Android screenshots are transferred.
    pub android_method: CaptureMethod,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            pause: Duration::from_secs(1),
            android_method: CaptureMethod::default(),
        }
    }
}

/// Outcome of a capture session.
#[derive(Debug, Default)]
pub struct SessionSummary {
    /// Screenshots written.
    pub captured: Vec<PathBuf>,
    /// Screenshots that could not be taken.
    pub failed: Vec<PathBuf>,
    /// Platforms skipped because no device or simulator was found.
    pub unavailable: Vec<CaptureError>,
}

/// An interactive capture session.
pub struct Session<'a, R, W> {
    /// Runs the device tools.
    runner: &'a dyn CommandRunner,
    /// The operator driving the session.
    operator: &'a mut Operator<R, W>,
    /// Where screenshots go.
    layout: &'a ProjectLayout,
    /// Session tunables.
    options: SessionOptions,
    /// Screens to capture, in order.
    scenarios: &'a [Scenario],
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    /// A session over the store scenarios.
    pub fn new(
        runner: &'a dyn CommandRunner,
        operator: &'a mut Operator<R, W>,
        layout: &'a ProjectLayout,
        options: SessionOptions,
    ) -> Self {
        Self {
            runner,
            operator,
            layout,
            options,
            scenarios: &STORE_SCENARIOS,
        }
    }

    /// Replaces the scenario list.
    #[must_use]
    pub fn with_scenarios(mut self, scenarios: &'a [Scenario]) -> Self {
        self.scenarios = scenarios;
        self
    }

    /// Shows the platform menu and reads the answer.
    ///
    /// # Errors
    /// [`CaptureError::Console`] if the console fails.
    pub fn choose_platform(&mut self) -> Result<Option<PlatformChoice>, CaptureError> {
        self.operator.say("")?;
        self.operator.say("Choose platform:")?;
        self.operator.say("1. Android")?;
        self.operator.say("2. iOS Simulator")?;
        self.operator.say("3. Both")?;
        let answer = self.operator.ask("\nEnter choice (1-3): ")?;

        Ok(PlatformChoice::from_menu(&answer))
    }

    /// Captures every scenario on the chosen platforms.
    ///
    /// A platform with no usable device is skipped and recorded in
    /// [`SessionSummary::unavailable`]; a failed capture is recorded in
    /// [`SessionSummary::failed`]. Neither stops the session.
    ///
    /// # Errors
    /// [`CaptureError::Console`] if the console fails.
    pub fn run(&mut self, platform: PlatformChoice) -> Result<SessionSummary, CaptureError> {
        let mut summary = SessionSummary::default();

        if platform.includes_android() {
            self.operator.say("")?;
            self.operator.say("Starting Android screenshot capture...")?;
            self.operator.say(
                "Make sure your Android device/emulator is connected and the app is running.",
            )?;
            self.operator.wait_for_enter("Press Enter when ready...")?;

            match AndroidBridge::discover(self.runner, self.options.android_method) {
                Ok(bridge) => {
                    let directory = self.layout.screenshots(ScreenshotDevice::AndroidPhone);
                    self.capture_all(&directory, &mut summary, |path| bridge.capture(path))?;
                }
                Err(err) => self.unavailable(err, &mut summary)?,
            }
        }

        if platform.includes_simulator() {
            self.operator.say("")?;
            self.operator.say("Starting iOS screenshot capture...")?;
            self.operator
                .say("Make sure your iOS Simulator is running with the app open.")?;
            let name = self
                .operator
                .ask(&format!("Enter simulator name (default: {DEFAULT_SIMULATOR}): "))?;
            let name = if name.is_empty() {
                DEFAULT_SIMULATOR.to_string()
            } else {
                name
            };
            self.operator.wait_for_enter("Press Enter when ready...")?;

            match SimulatorBridge::discover(self.runner, &name) {
                Ok(bridge) => {
                    let directory = self.layout.screenshots(ScreenshotDevice::Iphone);
                    self.capture_all(&directory, &mut summary, |path| bridge.capture(path))?;
                }
                Err(err) => self.unavailable(err, &mut summary)?,
            }
        }

        Ok(summary)
    }

    /// Reports a platform that cannot be captured from.
    fn unavailable(
        &mut self,
        err: CaptureError,
        summary: &mut SessionSummary,
    ) -> Result<(), CaptureError> {
        self.operator.say(&err.to_string())?;
        log::warn!("Skipping platform: {err}");
        summary.unavailable.push(err);
        Ok(())
    }

    /// Prompts for and captures each scenario into `directory`.
    fn capture_all(
        &mut self,
        directory: &Path,
        summary: &mut SessionSummary,
        capture: impl Fn(&Path) -> Result<(), CaptureError>,
    ) -> Result<(), CaptureError> {
        for scenario in self.scenarios {
            self.operator.say("")?;
            self.operator
                .say(&format!("Next screenshot: {}", scenario.description))?;
            self.operator
                .say("Navigate to the appropriate screen in your app.")?;
            self.operator
                .wait_for_enter("Press Enter to capture screenshot...")?;

            let path = directory.join(scenario.file_name);
            match capture(&path) {
                Ok(()) => {
                    log::info!("Captured {}", path.display());
                    self.operator
                        .say(&format!("Captured: {}", scenario.file_name))?;
                    summary.captured.push(path);
                }
                Err(err) => {
                    log::warn!("Capture of {} failed: {err}", scenario.file_name);
                    self.operator
                        .say(&format!("Failed to capture: {} ({err})", scenario.file_name))?;
                    summary.failed.push(path);
                }
            }

            if !self.options.pause.is_zero() {
                thread::sleep(self.options.pause);
            }
        }
        Ok(())
    }
}

/// Creates the screenshot directory for every device class, plus the
/// feature graphic directory.
///
/// # Errors
/// The first directory that cannot be created.
pub fn create_screenshot_directories(
    layout: &ProjectLayout,
) -> Result<Vec<PathBuf>, AssetError> {
    let directories: Vec<_> = ScreenshotDevice::ALL
        .into_iter()
        .map(|device| layout.screenshots(device))
        .chain([layout.feature_graphics()])
        .collect();
    crate::canvas::create_directories(&directories)?;
    Ok(directories)
}
