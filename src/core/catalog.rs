use crate::core::{IllustrationBlock, Order, Principle, Result};
use crate::principles::{
    dependency_inversion, interface_segregation, liskov_substitution, open_closed,
    single_responsibility,
};
use crate::utils::error::SolidError;

/// Registry of illustration blocks, one per principle.
#[derive(Debug, Clone)]
pub struct Catalog {
    blocks: Vec<IllustrationBlock>,
}

impl Catalog {
    pub fn standard() -> Self {
        Self {
            blocks: vec![
                single_responsibility::illustration(),
                open_closed::illustration(),
                liskov_substitution::illustration(),
                interface_segregation::illustration(),
                dependency_inversion::illustration(),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &IllustrationBlock> {
        self.blocks.iter()
    }

    pub fn get(&self, principle: Principle) -> Option<&IllustrationBlock> {
        self.blocks.iter().find(|b| b.principle == principle)
    }

    pub fn ordered(&self, order: Order) -> Vec<&IllustrationBlock> {
        let mut blocks: Vec<&IllustrationBlock> = self.blocks.iter().collect();
        match order {
            Order::Alphabetical => blocks.sort_by_key(|b| b.principle.slug()),
            Order::Mnemonic => blocks.sort_by_key(|b| b.principle),
        }
        blocks
    }

    /// An empty selection means every block. Naming a principle twice is a
    /// configuration error.
    pub fn select(&self, principles: &[Principle], order: Order) -> Result<Vec<&IllustrationBlock>> {
        for (idx, principle) in principles.iter().enumerate() {
            if principles[..idx].contains(principle) {
                return Err(SolidError::ConfigError {
                    message: format!("principle '{}' is selected more than once", principle),
                });
            }
        }

        let selected: Vec<&IllustrationBlock> = self
            .ordered(order)
            .into_iter()
            .filter(|b| principles.is_empty() || principles.contains(&b.principle))
            .collect();

        tracing::debug!(
            requested = principles.len(),
            selected = selected.len(),
            ?order,
            "Selected illustration blocks"
        );

        Ok(selected)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}
