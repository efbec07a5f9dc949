pub mod config;
pub mod core;
pub mod domain;
pub mod principles;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{FileConfig, ResolvedConfig};
pub use core::{
    catalog::Catalog,
    formatter::{formatter_for, JsonFormatter, TextFormatter},
    reader::CatalogReader,
    IllustrationBlock, Order, OutputFormat, Principle,
};
pub use utils::error::{Result, SolidError};
