use crate::core::{Formatter, IllustrationBlock, OutputFormat, Result};

#[derive(Debug, Clone, Default)]
pub struct TextFormatter;

impl Formatter for TextFormatter {
    fn format(&self, blocks: &[&IllustrationBlock]) -> Result<String> {
        let mut sections = Vec::with_capacity(blocks.len());

        for block in blocks {
            let mut out = format!(
                "[{}] {}\n{}\n",
                block.principle.letter(),
                block.title(),
                block.summary
            );

            if !block.warning_signs.is_empty() {
                out.push_str("Warning signs:\n");
                for sign in &block.warning_signs {
                    out.push_str(&format!("- {}\n", sign));
                }
            }

            for variant in &block.variants {
                out.push_str(&format!(
                    "{}: {} - {}\n",
                    variant.kind, variant.module, variant.note
                ));
            }

            out.push_str("Takeaway: ");
            out.push_str(block.takeaway);
            sections.push(out);
        }

        tracing::debug!(blocks = blocks.len(), "Formatted catalog as text");
        Ok(sections.join("\n\n"))
    }
}

#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    pub pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, blocks: &[&IllustrationBlock]) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(blocks)?
        } else {
            serde_json::to_string(blocks)?
        };

        tracing::debug!(blocks = blocks.len(), bytes = json.len(), "Formatted catalog as JSON");
        Ok(json)
    }
}

impl<F: Formatter + ?Sized> Formatter for Box<F> {
    fn format(&self, blocks: &[&IllustrationBlock]) -> Result<String> {
        (**self).format(blocks)
    }
}

pub fn formatter_for(format: OutputFormat, pretty: bool) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter::new(pretty)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Catalog;
    use crate::core::Principle;

    #[test]
    fn test_text_block_layout() {
        let catalog = Catalog::standard();
        let block = catalog.get(Principle::OpenClosed).unwrap();
        let text = TextFormatter.format(&[block]).unwrap();

        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("[O] Open-Closed"));
        assert!(text.contains("violation: open_closed::violation - "));
        assert!(text.contains("violation: open_closed::modified - "));
        assert!(text.contains("compliant: open_closed::compliant - "));
        assert!(text.ends_with(block.takeaway));
    }

    #[test]
    fn test_text_lists_warning_signs_as_bullets() {
        let catalog = Catalog::standard();
        let block = catalog.get(Principle::SingleResponsibility).unwrap();
        let text = TextFormatter.format(&[block]).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        let heading = lines.iter().position(|l| *l == "Warning signs:").unwrap();
        assert_eq!(heading, 2);

        let bullets: Vec<&str> = lines[heading + 1..]
            .iter()
            .take_while(|l| l.starts_with("- "))
            .copied()
            .collect();
        assert_eq!(bullets.len(), 3);
        for (bullet, sign) in bullets.iter().zip(&block.warning_signs) {
            assert_eq!(&bullet[2..], *sign);
        }
        assert!(lines[heading + 4].starts_with("violation: "));
    }

    #[test]
    fn test_text_omits_heading_without_warning_signs() {
        let mut block = Catalog::standard()
            .get(Principle::OpenClosed)
            .unwrap()
            .clone();
        block.warning_signs.clear();
        let text = TextFormatter.format(&[&block]).unwrap();
        assert!(!text.contains("Warning signs:"));
        assert!(!text.lines().any(|l| l.starts_with("- ")));
    }

    #[test]
    fn test_text_separates_blocks_with_blank_line() {
        let catalog = Catalog::standard();
        let blocks: Vec<_> = catalog.iter().collect();
        let text = TextFormatter.format(&blocks).unwrap();
        assert_eq!(text.matches("\n\n[").count(), 4);
    }

    #[test]
    fn test_json_uses_slugs_and_lowercase_kinds() {
        let catalog = Catalog::standard();
        let block = catalog.get(Principle::LiskovSubstitution).unwrap();
        let json = formatter_for(OutputFormat::Json, false)
            .format(&[block])
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let entry = &value.as_array().unwrap()[0];
        assert_eq!(entry["principle"], "liskov-substitution");
        assert_eq!(entry["variants"][0]["kind"], "violation");
    }

    #[test]
    fn test_empty_selection_formats_empty() {
        assert_eq!(TextFormatter.format(&[]).unwrap(), "");
        assert_eq!(JsonFormatter::new(false).format(&[]).unwrap(), "[]");
    }
}
