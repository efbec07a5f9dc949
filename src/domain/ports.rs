use crate::domain::model::IllustrationBlock;
use crate::utils::error::Result;

/// Turns catalog entries into something a person can read.
pub trait Formatter: Send + Sync {
    fn format(&self, blocks: &[&IllustrationBlock]) -> Result<String>;
}
