//! # Output Configuration
//!
//! Controls the appearance of the human-oriented subcommands (`validate`,
//! `tree`). The machine-consumed patch list printed by `list` is never
//! decorated, so nothing here touches it.
//!
//! The `--color` flag takes precedence, then the conventional environment
//! variables: `NO_COLOR` (https://no-color.org/), `CLICOLOR=0`,
//! `CLICOLOR_FORCE`, and `TERM=dumb`, falling back to the `console` crate's
//! terminal detection.

use std::env;

/// Whether decorated output (colors, emojis) should be used.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
}

impl OutputConfig {
    /// Resolve the output configuration from the `--color` flag
    /// ("always", "never", or "auto") and the environment.
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };

        Self { use_color }
    }

    fn detect_color_support() -> bool {
        // The presence of NO_COLOR, even empty, disables colors.
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }

        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }

        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }

        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }

        console::Term::stdout().features().colors_supported()
    }

    #[cfg(test)]
    pub fn with_color() -> Self {
        Self { use_color: true }
    }

    #[cfg(test)]
    pub fn without_color() -> Self {
        Self { use_color: false }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}

/// Returns the emoji when decorated output is enabled, the plain-text tag
/// otherwise.
pub fn emoji<'a>(config: &OutputConfig, emoji_str: &'a str, plain: &'a str) -> &'a str {
    if config.use_color {
        emoji_str
    } else {
        plain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_always() {
        let config = OutputConfig::from_env_and_flag("always");
        assert!(config.use_color);
    }

    #[test]
    fn test_color_never() {
        let config = OutputConfig::from_env_and_flag("never");
        assert!(!config.use_color);
    }

    #[test]
    fn test_emoji_helper() {
        assert_eq!(emoji(&OutputConfig::with_color(), "✅", "[OK]"), "✅");
        assert_eq!(emoji(&OutputConfig::without_color(), "✅", "[OK]"), "[OK]");
    }
}
