use serde::Deserialize;

use crate::ui::theme::ThemePreference;

pub const DEFAULT_TICK_RATE_MS: u64 = 250;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// Color scheme preference. `auto` lets the viewer decide.
    #[serde(default)]
    pub theme: ThemePreference,

    /// Event-loop tick cadence in milliseconds.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_tick_rate_ms() -> u64 {
    DEFAULT_TICK_RATE_MS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemePreference::default(),
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
        }
    }
}
