//! Temp-file output and default-viewer launching.
//!
//! [`writer`] persists a rendered page to a uniquely named file in the
//! system temp directory; [`launcher`] opens that file with the platform's
//! default application.

pub mod launcher;
pub mod writer;

pub use launcher::{launch_command, preview, LaunchCommand, PreviewError, WaitMode};
pub use writer::{write_html, WriteError};
