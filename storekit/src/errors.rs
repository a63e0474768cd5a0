//! `errors`
//!
//! Error types for each of the release tools.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors raised while drawing, resizing or writing images.
#[derive(Debug, Error)]
pub enum AssetError {
    /// The drawing surface could not be allocated, usually because a dimension is zero.
    #[error("cannot create a {width}x{height} canvas")]
    InvalidCanvas {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },

    /// A required input image does not exist.
    #[error("source image not found: {}", .0.display())]
    MissingSource(PathBuf),

    /// An output directory could not be created.
    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        /// The directory that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// An input image could not be read or decoded.
    #[error("failed to read image {}: {source}", path.display())]
    Decode {
        /// The image that could not be decoded.
        path: PathBuf,
        /// The underlying decoding error.
        source: image::ImageError,
    },

    /// An output image could not be encoded or written.
    #[error("failed to write image {}: {source}", path.display())]
    Encode {
        /// The image that could not be written.
        path: PathBuf,
        /// The underlying encoding error.
        source: image::ImageError,
    },

    /// A generated text overlay could not be parsed.
    #[error("failed to lay out text: {0}")]
    Text(#[from] resvg::usvg::Error),
}

/// Errors raised while copying generated assets into the app project.
#[derive(Debug, Error)]
pub enum DeployError {
    /// The staged file to copy does not exist.
    #[error("source not found: {}", .0.display())]
    MissingSource(PathBuf),

    /// A destination directory could not be created.
    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        /// The directory that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// A staged directory could not be listed.
    #[error("failed to list {}: {source}", path.display())]
    ReadDir {
        /// The directory that could not be listed.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// Copying a single file failed.
    #[error("failed to copy {} -> {}: {source}", from.display(), to.display())]
    Copy {
        /// The staged file.
        from: PathBuf,
        /// The destination file.
        to: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// The asset catalog descriptor could not be serialised.
    #[error("failed to serialise asset catalog: {0}")]
    Descriptor(#[from] serde_json::Error),

    /// The asset catalog descriptor could not be written.
    #[error("failed to write {}: {source}", path.display())]
    WriteDescriptor {
        /// The descriptor path.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
}

/// Errors raised while driving device tools to capture screenshots.
#[derive(Debug, Error)]
pub enum CaptureError {
    /// `adb devices` listed nothing in the `device` state.
    #[error("no Android devices found")]
    NoAndroidDevice,

    /// No booted simulator matched the requested name.
    #[error("iOS Simulator '{0}' not found or not booted")]
    SimulatorNotBooted(String),

    /// The external tool could not be started at all.
    #[error("failed to run {program}: {source}")]
    Spawn {
        /// The program that failed to start.
        program: String,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// The external tool ran but reported failure.
    #[error("{command} failed: {stderr}")]
    CommandFailed {
        /// The command line that was run.
        command: String,
        /// Whatever the tool wrote to stderr.
        stderr: String,
    },

    /// A local file could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// The file that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// Reading from or writing to the operator's console failed.
    #[error("console error: {0}")]
    Console(#[from] io::Error),
}
