pub mod catalog;
pub mod formatter;
pub mod reader;

pub use crate::domain::model::{
    IllustrationBlock, Order, OutputFormat, Principle, Variant, VariantKind,
};
pub use crate::domain::ports::Formatter;
pub use crate::utils::error::Result;
