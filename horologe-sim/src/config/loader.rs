//! TOML configuration loader

use std::fs;
use std::path::Path;

use horologe_core::config::{FaceConfig, Stage};

use crate::error::SimError;

/// Default configuration compiled into the simulator
pub const EMBEDDED_CONFIG: &str = include_str!("../../watchface.toml");

/// Parse and validate a TOML configuration
pub fn parse_config(input: &str) -> Result<FaceConfig, SimError> {
    let config: FaceConfig = toml::from_str(input)?;
    config.validate()?;
    Ok(config)
}

/// Resolve the configuration to run with
///
/// A tutorial stage takes precedence over any file. Without either, the
/// embedded default is used.
pub fn load_config(path: Option<&Path>, stage: Option<u8>) -> Result<FaceConfig, SimError> {
    if let Some(n) = stage {
        let stage = Stage::from_number(n).ok_or(SimError::Stage(n))?;
        log::info!("using tutorial stage {} ({:?})", n, stage);
        return Ok(stage.config());
    }

    match path {
        Some(path) => {
            log::info!("loading configuration from {}", path.display());
            let input = fs::read_to_string(path).map_err(|source| SimError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            parse_config(&input)
        }
        None => {
            log::info!("using embedded configuration");
            parse_config(EMBEDDED_CONFIG)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use horologe_core::traits::{FontSpec, Rect};

    #[test]
    fn test_embedded_matches_defaults() {
        let config = parse_config(EMBEDDED_CONFIG).unwrap();
        assert_eq!(config, FaceConfig::default());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        assert_eq!(parse_config("").unwrap(), FaceConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = parse_config(
            r#"
            background = "BACKGROUND"
            time_font = { system = "BITHAM_42_BOLD" }

            [weather]
            refresh_interval_min = 15
            unit = "C"

            [layout]
            hour = { x = 0, y = 10, w = 144, h = 60 }
            "#,
        )
        .unwrap();

        assert_eq!(config.background.as_deref(), Some("BACKGROUND"));
        assert!(matches!(config.time_font, Some(FontSpec::System(ref n)) if n == "BITHAM_42_BOLD"));
        assert_eq!(config.weather.refresh_interval_min, 15);
        assert_eq!(config.weather.unit.as_str(), "C");
        assert!(config.weather.enabled);
        assert_eq!(config.layout.hour, Rect::new(0, 10, 144, 60));
        assert_eq!(config.layout.info_height, 20);
    }

    #[test]
    fn test_invalid_interval_rejected() {
        let err = parse_config("[weather]\nrefresh_interval_min = 90\n").unwrap_err();
        assert!(matches!(err, SimError::Config(_)));
    }

    #[test]
    fn test_syntax_error() {
        let err = parse_config("[weather\n").unwrap_err();
        assert!(matches!(err, SimError::Toml(_)));
    }

    #[test]
    fn test_stage_overrides_file() {
        let config = load_config(Some(Path::new("/nonexistent.toml")), Some(1)).unwrap();
        assert!(!config.weather.enabled);
        assert!(matches!(load_config(None, Some(9)), Err(SimError::Stage(9))));
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(Some(Path::new("/nonexistent/watchface.toml")), None).unwrap_err();
        assert!(matches!(err, SimError::Io { .. }));
    }
}
