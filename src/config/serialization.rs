//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Render the effective configuration as a commented config file
    pub fn to_toml(&self) -> String {
        format!(
            r#"# zero-wizard configuration
# Read from ~/.config/zero-wizard/config.toml; the wizard never writes it.

# Palette: auto (follow the terminal background), dark, light
appearance = "{appearance}"

# Splash animation length in milliseconds (0 skips it)
splash_ms = {splash_ms}

# Animation frame period in milliseconds (minimum 10)
tick_ms = {tick_ms}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
# File logging (in addition to the in-memory buffer)
file_enabled = {log_file_enabled}
file_dir = "{log_file_dir}"
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = "{log_file_prefix}"
"#,
            appearance = self.appearance.as_str(),
            splash_ms = self.splash_ms(),
            tick_ms = self.tick_rate.as_millis(),
            log_level = self.logging.level,
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = toml_path(&self.logging.file_dir),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = self.logging.file_prefix,
        )
    }
}

/// Forward slashes so Windows paths survive as TOML basic strings
fn toml_path(path: &std::path::Path) -> String {
    path.display().to_string().replace('\\', "/")
}
