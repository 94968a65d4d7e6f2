//! Game configuration loader.

use std::path::Path;

use tactics_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
///
/// Sections and fields missing from the file keep their defaults.
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_document_overrides_named_fields_only() {
        let config = ConfigLoader::parse(
            r#"
            [shoot]
            damage = 55

            [grid]
            width = 14
            "#,
        )
        .unwrap();

        assert_eq!(config.shoot.damage, 55);
        assert_eq!(config.shoot.max_range, 7);
        assert_eq!(config.grid.width, 14);
        assert_eq!(config.grid.height, 10);
        assert_eq!(config.units.max_action_points, 2);
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(ConfigLoader::parse("").unwrap(), GameConfig::default());
    }

    #[test]
    fn malformed_document_is_an_error() {
        let err = ConfigLoader::parse("[grid]\nwidth = \"wide\"").unwrap_err();
        assert!(err.to_string().contains("Failed to parse config TOML"));
    }
}
