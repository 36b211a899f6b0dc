//! Configuration schema types for sonar-chat.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod search;
mod session;
mod system;
mod ui;

pub use search::*;
pub use session::*;
pub use system::*;
pub use ui::*;

use serde::{Deserialize, Serialize};

/// Root configuration.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct SonarConfig {
    pub search: SearchConfig,
    pub session: SessionConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}
