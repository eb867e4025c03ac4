use std::fmt::{self, Display};

use arcstr::ArcStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
  Warn,
  Info,
  Debug,
}

#[derive(Debug, Clone)]
pub struct Log {
  pub level: LogLevel,
  pub plugin: ArcStr,
  pub message: String,
}

impl Display for Log {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "[plugin {}] {}", self.plugin, self.message)
  }
}
