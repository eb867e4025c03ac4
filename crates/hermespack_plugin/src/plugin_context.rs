use std::sync::{
  atomic::{AtomicU32, Ordering},
  Arc, Mutex, PoisonError,
};

use append_only_vec::AppendOnlyVec;
use arcstr::ArcStr;
use hermespack_common::EmittedAsset;

use crate::{Log, LogLevel};

static NEXT_BUILD_ID: AtomicU32 = AtomicU32::new(0);

/// State shared by every plugin context of one build.
pub(crate) struct BuildSession {
  pub build_id: ArcStr,
  pub logs: AppendOnlyVec<Log>,
  emitted_files: Mutex<Vec<EmittedAsset>>,
}

impl BuildSession {
  pub fn new() -> Self {
    // Unique within the process, and the pid keeps separate processes apart.
    let sequence = NEXT_BUILD_ID.fetch_add(1, Ordering::Relaxed);
    Self {
      build_id: arcstr::format!("{}-{sequence}", std::process::id()),
      logs: AppendOnlyVec::new(),
      emitted_files: Mutex::default(),
    }
  }

  pub fn take_emitted_files(&self) -> Vec<EmittedAsset> {
    std::mem::take(&mut *self.emitted_files.lock().unwrap_or_else(PoisonError::into_inner))
  }
}

#[derive(Clone)]
pub struct PluginContext(Arc<PluginContextImpl>);

struct PluginContextImpl {
  plugin_name: ArcStr,
  session: Arc<BuildSession>,
}

impl PluginContext {
  pub(crate) fn new(plugin_name: ArcStr, session: Arc<BuildSession>) -> Self {
    Self(Arc::new(PluginContextImpl { plugin_name, session }))
  }

  /// Identifies the build this context belongs to. Both hooks of a build see the same id.
  pub fn build_id(&self) -> &str {
    &self.0.session.build_id
  }

  pub fn plugin_name(&self) -> &str {
    &self.0.plugin_name
  }

  pub fn emit_file(&self, asset: EmittedAsset) {
    self.0.session.emitted_files.lock().unwrap_or_else(PoisonError::into_inner).push(asset);
  }

  pub fn warn(&self, message: impl Into<String>) {
    self.log(LogLevel::Warn, message.into());
  }

  pub fn info(&self, message: impl Into<String>) {
    self.log(LogLevel::Info, message.into());
  }

  pub fn debug(&self, message: impl Into<String>) {
    self.log(LogLevel::Debug, message.into());
  }

  fn log(&self, level: LogLevel, message: String) {
    let plugin = self.plugin_name();
    match level {
      LogLevel::Warn => tracing::warn!(plugin, "{message}"),
      LogLevel::Info => tracing::info!(plugin, "{message}"),
      LogLevel::Debug => tracing::debug!(plugin, "{message}"),
    }
    self.0.session.logs.push(Log { level, plugin: self.0.plugin_name.clone(), message });
  }
}

#[test]
fn test_logs_are_recorded_per_session() {
  let session = Arc::new(BuildSession::new());
  let ctx = PluginContext::new(arcstr::literal!("test"), Arc::clone(&session));

  ctx.warn("careful");
  ctx.debug(String::from("details"));

  let logs = session.logs.iter().map(|log| (log.level, log.to_string())).collect::<Vec<_>>();
  assert_eq!(
    logs,
    vec![
      (LogLevel::Warn, "[plugin test] careful".to_string()),
      (LogLevel::Debug, "[plugin test] details".to_string()),
    ]
  );
}

#[test]
fn test_build_ids_are_unique() {
  assert_ne!(BuildSession::new().build_id, BuildSession::new().build_id);
}
