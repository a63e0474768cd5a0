//! `storekit`
//!
//! Release tooling for a Flutter app: draws launcher icons and store artwork,
//! resizes an operator-supplied icon, copies icons into the platform project
//! trees and drives screenshot capture on devices and simulators.
//!
//! Every tool works relative to a [`ProjectLayout`] rooted at the app.

pub mod canvas;
pub mod capture;
pub mod deploy;
pub mod descriptor;
pub mod errors;
pub mod graphics;
pub mod icon;
pub mod layout;
pub mod palette;
pub mod prompt;
pub mod resize;
pub mod shell;
pub mod sizes;
pub mod text;

pub use errors::{AssetError, CaptureError, DeployError};
pub use layout::{Platform, ProjectLayout};
pub use text::TextRenderer;
