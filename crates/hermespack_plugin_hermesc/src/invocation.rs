use std::{path::Path, process::Stdio, time::Duration};

use hermespack_plugin::PluginContext;
use tokio::{
  io::{AsyncBufReadExt, AsyncReadExt, BufReader},
  process::Command,
};

use crate::HermescError;

/// One run of `hermesc --emit-binary` turning `source` into `bytecode`.
///
/// The binary is executed directly, not through a shell, so paths are passed verbatim and
/// never undergo shell expansion.
pub struct HermescInvocation<'a> {
  pub binary: &'a Path,
  pub source: &'a Path,
  pub bytecode: &'a Path,
}

impl HermescInvocation<'_> {
  fn command(&self) -> Command {
    let mut command = Command::new(self.binary);
    command
      .arg("--emit-binary")
      .arg("--out")
      .arg(self.bytecode)
      .arg("-Wno-direct-eval")
      .arg("-Wno-undefined-variable")
      .arg(self.source)
      .stdin(Stdio::null())
      .stdout(Stdio::piped())
      .stderr(Stdio::piped())
      .kill_on_drop(true);
    command
  }

  /// Runs hermesc to completion. Stdout goes to the debug log line by line, stderr is kept
  /// for the error in case hermesc exits with a failure.
  pub async fn run(
    &self,
    ctx: &PluginContext,
    timeout: Option<Duration>,
  ) -> Result<(), HermescError> {
    let process_error = |source| HermescError::Process { binary: self.binary.to_path_buf(), source };

    let mut child = self.command().spawn().map_err(process_error)?;
    let stdout = child.stdout.take();
    let stderr = child.stderr.take();

    let forward_stdout = async {
      let Some(stdout) = stdout else { return };
      let mut lines = BufReader::new(stdout).lines();
      loop {
        match lines.next_line().await {
          Ok(Some(line)) => ctx.debug(line),
          Ok(None) => break,
          Err(err) => {
            ctx.debug(err.to_string());
            break;
          }
        }
      }
    };

    let collect_stderr = async {
      let mut output = String::new();
      if let Some(mut stderr) = stderr {
        if let Err(err) = stderr.read_to_string(&mut output).await {
          ctx.debug(err.to_string());
        }
      }
      output
    };

    let finished = async {
      let ((), stderr, status) = tokio::join!(forward_stdout, collect_stderr, child.wait());
      (stderr, status)
    };

    let outcome = match timeout {
      Some(limit) => tokio::time::timeout(limit, finished).await.ok(),
      None => Some(finished.await),
    };

    let Some((stderr, status)) = outcome else {
      if let Err(err) = child.kill().await {
        ctx.debug(err.to_string());
      }
      return Err(HermescError::TimedOut { timeout: timeout.unwrap_or_default() });
    };

    let status = status.map_err(process_error)?;
    if !status.success() {
      return Err(HermescError::CompilationFailed { status, stderr: stderr.trim().to_string() });
    }

    Ok(())
  }
}
