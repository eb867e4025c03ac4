use std::{io, path::PathBuf, process::ExitStatus, time::Duration};

use thiserror::Error;

/// Everything that can go wrong on the hermesc side of a build. Missing inputs from the
/// bundle are not errors, the plugin just has nothing to compile then.
#[derive(Debug, Error)]
pub enum HermescError {
  #[error(
    "The hermesc binary path `{}` is either not accessible or does not exist. Aborting hermesc compilation.",
    .root.display()
  )]
  RootNotAccessible {
    root: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error(
    "The hermesc binary is either not supported for your OS or cannot be found at `{}`. Aborting hermesc compilation.",
    .binary.display()
  )]
  UnsupportedPlatform { binary: PathBuf },

  #[error("Failed to prepare the hermesc workspace `{}`", .path.display())]
  Workspace {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("Failed to run `{}`", .binary.display())]
  Process {
    binary: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("hermesc exited with {status}: {stderr}")]
  CompilationFailed { status: ExitStatus, stderr: String },

  #[error("hermesc did not finish within {}ms and was killed", .timeout.as_millis())]
  TimedOut { timeout: Duration },

  #[error("hermesc did not produce `{}`", .path.display())]
  OutputMissing {
    path: PathBuf,
    #[source]
    source: io::Error,
  },
}
