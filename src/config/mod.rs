pub mod toml_config;

use crate::core::{Order, OutputFormat, Principle};
use serde::{Deserialize, Serialize};

pub use toml_config::FileConfig;

/// Settings after command-line flags and the config file have been merged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolvedConfig {
    pub principles: Vec<Principle>,
    pub order: Order,
    pub format: OutputFormat,
    pub pretty: bool,
}

#[cfg(feature = "cli")]
pub use cli::CliConfig;

#[cfg(feature = "cli")]
mod cli {
    use super::{FileConfig, ResolvedConfig};
    use crate::core::{Order, OutputFormat, Principle};
    use crate::utils::error::{Result, SolidError};
    use crate::utils::validation::{validate_path, validate_unique, Validate};
    use clap::error::ErrorKind;
    use clap::Parser;
    use serde::{Deserialize, Serialize};
    use std::error::Error as _;
    use std::path::PathBuf;

    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "solid-catalog")]
    #[command(about = "Browse before/after illustrations of the SOLID principles")]
    pub struct CliConfig {
        #[arg(
            short = 'p',
            long = "principle",
            value_delimiter = ',',
            help = "Principle to show: slug, title or letter (repeatable)"
        )]
        pub principles: Vec<Principle>,

        #[arg(long, value_enum, help = "Block order [default: alphabetical]")]
        pub order: Option<Order>,

        #[arg(long, value_enum, help = "Output format [default: text]")]
        pub format: Option<OutputFormat>,

        #[arg(
            long,
            num_args = 0..=1,
            require_equals = true,
            default_missing_value = "true",
            help = "Pretty-print JSON output (--pretty=false turns it off)"
        )]
        pub pretty: Option<bool>,

        #[arg(long, help = "Optional TOML config file")]
        pub config: Option<PathBuf>,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Emit logs as JSON")]
        pub log_json: bool,
    }

    impl CliConfig {
        /// Flags given on the command line win; file values only fill in
        /// settings the command line left out.
        pub fn merge_file(&self, file: FileConfig) -> ResolvedConfig {
            let principles = if self.principles.is_empty() {
                file.catalog.principles
            } else {
                self.principles.clone()
            };

            ResolvedConfig {
                principles,
                order: self.order.or(file.catalog.order).unwrap_or_default(),
                format: self.format.or(file.output.format).unwrap_or_default(),
                pretty: self.pretty.or(file.output.pretty).unwrap_or(false),
            }
        }

        pub fn resolve(&self) -> Result<ResolvedConfig> {
            self.validate()?;

            let file = match &self.config {
                Some(path) => FileConfig::from_file(path)?,
                None => FileConfig::default(),
            };

            let resolved = self.merge_file(file);
            tracing::debug!("Resolved config: {:?}", resolved);
            Ok(resolved)
        }

        /// Exit status for a failed argument parse, or `None` when clap is
        /// only printing help or version text.
        pub fn usage_exit_code(err: &clap::Error) -> Option<i32> {
            match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => None,
                _ => Some(
                    err.source()
                        .and_then(|source| source.downcast_ref::<SolidError>())
                        .map_or(1, SolidError::exit_code),
                ),
            }
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_unique("principle", &self.principles)?;
            if let Some(path) = &self.config {
                validate_path("config", &path.to_string_lossy())?;
            }
            Ok(())
        }
    }
}
