use crate::core::catalog::Catalog;
use crate::core::{Formatter, Order, Principle, Result};

/// Selects catalog entries and hands them to a formatter.
pub struct CatalogReader<F: Formatter> {
    catalog: Catalog,
    formatter: F,
}

impl<F: Formatter> CatalogReader<F> {
    pub fn new(formatter: F) -> Self {
        Self::with_catalog(Catalog::standard(), formatter)
    }

    pub fn with_catalog(catalog: Catalog, formatter: F) -> Self {
        Self { catalog, formatter }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn render(&self, principles: &[Principle], order: Order) -> Result<String> {
        tracing::debug!("Selecting illustration blocks...");
        let blocks = self.catalog.select(principles, order)?;

        tracing::debug!("Formatting {} blocks...", blocks.len());
        let output = self.formatter.format(&blocks)?;

        tracing::info!(blocks = blocks.len(), "Catalog rendered");
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::formatter::TextFormatter;

    #[test]
    fn test_render_selected_block() {
        let reader = CatalogReader::new(TextFormatter);
        let output = reader
            .render(&[Principle::InterfaceSegregation], Order::Alphabetical)
            .unwrap();
        assert!(output.starts_with("[I] Interface Segregation"));
        assert!(!output.contains("[S]"));
    }
}
