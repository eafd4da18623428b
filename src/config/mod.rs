//! Run configuration.
//!
//! Explicit command-line values win over the optional configuration file,
//! which wins over the built-in defaults.

mod file_config;

pub use file_config::{find_config_file, ConfigFile, ConfigFileError, SiteSection};

use std::path::PathBuf;

/// Default template directory
const DEFAULT_TEMPLATE_DIR: &str = "template";
/// Default output directory
const DEFAULT_OUTPUT_DIR: &str = "output";

/// Resolved configuration for one generation run
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Directory holding the named templates and the stylesheet
    pub template_dir: PathBuf,

    /// Root of the generated output tree
    pub output_dir: PathBuf,
}

impl SiteConfig {
    /// Merge explicit CLI values, configuration file values, and defaults.
    pub fn resolve(
        template: Option<PathBuf>,
        output: Option<PathBuf>,
        file: Option<&ConfigFile>,
    ) -> Self {
        let site = file.map(|f| &f.site);

        Self {
            template_dir: template
                .or_else(|| site.and_then(|s| s.template_dir.clone()))
                .unwrap_or_else(|| PathBuf::from(DEFAULT_TEMPLATE_DIR)),
            output_dir: output
                .or_else(|| site.and_then(|s| s.output_dir.clone()))
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::resolve(None, None, None);
        assert_eq!(config.template_dir, PathBuf::from("template"));
        assert_eq!(config.output_dir, PathBuf::from("output"));
    }

    #[test]
    fn test_file_overrides_defaults() {
        let file = ConfigFile {
            site: SiteSection {
                template_dir: Some(PathBuf::from("themes/plain")),
                output_dir: None,
            },
        };

        let config = SiteConfig::resolve(None, None, Some(&file));
        assert_eq!(config.template_dir, PathBuf::from("themes/plain"));
        assert_eq!(config.output_dir, PathBuf::from("output"));
    }

    #[test]
    fn test_cli_overrides_file() {
        let file = ConfigFile {
            site: SiteSection {
                template_dir: Some(PathBuf::from("themes/plain")),
                output_dir: Some(PathBuf::from("public")),
            },
        };

        let config = SiteConfig::resolve(Some(PathBuf::from("cli-templates")), None, Some(&file));
        assert_eq!(config.template_dir, PathBuf::from("cli-templates"));
        assert_eq!(config.output_dir, PathBuf::from("public"));
    }
}
