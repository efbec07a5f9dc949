use crate::utils::error::SolidError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the five SOLID principles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum Principle {
    SingleResponsibility,
    OpenClosed,
    LiskovSubstitution,
    InterfaceSegregation,
    DependencyInversion,
}

impl Principle {
    /// Mnemonic order: S, O, L, I, D.
    pub const ALL: [Principle; 5] = [
        Principle::SingleResponsibility,
        Principle::OpenClosed,
        Principle::LiskovSubstitution,
        Principle::InterfaceSegregation,
        Principle::DependencyInversion,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Principle::SingleResponsibility => "single-responsibility",
            Principle::OpenClosed => "open-closed",
            Principle::LiskovSubstitution => "liskov-substitution",
            Principle::InterfaceSegregation => "interface-segregation",
            Principle::DependencyInversion => "dependency-inversion",
        }
    }

    pub fn letter(self) -> char {
        match self {
            Principle::SingleResponsibility => 'S',
            Principle::OpenClosed => 'O',
            Principle::LiskovSubstitution => 'L',
            Principle::InterfaceSegregation => 'I',
            Principle::DependencyInversion => 'D',
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Principle::SingleResponsibility => "Single Responsibility",
            Principle::OpenClosed => "Open-Closed",
            Principle::LiskovSubstitution => "Liskov Substitution",
            Principle::InterfaceSegregation => "Interface Segregation",
            Principle::DependencyInversion => "Dependency Inversion",
        }
    }
}

impl fmt::Display for Principle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Principle {
    type Err = SolidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let normalized = trimmed.to_ascii_lowercase().replace(['_', ' '], "-");

        Principle::ALL
            .into_iter()
            .find(|p| {
                normalized == p.slug()
                    || (trimmed.len() == 1 && trimmed.eq_ignore_ascii_case(&p.letter().to_string()))
            })
            .ok_or_else(|| SolidError::UnknownPrinciple {
                name: s.to_string(),
            })
    }
}

impl TryFrom<String> for Principle {
    type Error = SolidError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantKind {
    Violation,
    Compliant,
}

impl fmt::Display for VariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariantKind::Violation => f.write_str("violation"),
            VariantKind::Compliant => f.write_str("compliant"),
        }
    }
}

/// A single stage of an illustration, pointing at the module that holds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Variant {
    pub kind: VariantKind,
    pub module: &'static str,
    pub note: &'static str,
}

impl Variant {
    pub fn violation(module: &'static str, note: &'static str) -> Self {
        Self {
            kind: VariantKind::Violation,
            module,
            note,
        }
    }

    pub fn compliant(module: &'static str, note: &'static str) -> Self {
        Self {
            kind: VariantKind::Compliant,
            module,
            note,
        }
    }
}

/// Descriptor of one before/after illustration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IllustrationBlock {
    pub principle: Principle,
    pub summary: &'static str,
    pub warning_signs: Vec<&'static str>,
    pub variants: Vec<Variant>,
    pub takeaway: &'static str,
}

impl IllustrationBlock {
    pub fn title(&self) -> &'static str {
        self.principle.title()
    }

    pub fn violations(&self) -> impl Iterator<Item = &Variant> {
        self.variants
            .iter()
            .filter(|v| v.kind == VariantKind::Violation)
    }

    pub fn compliant(&self) -> impl Iterator<Item = &Variant> {
        self.variants
            .iter()
            .filter(|v| v.kind == VariantKind::Compliant)
    }

    /// At least one violation and one compliant stage, with every violation
    /// listed before the first compliant stage.
    pub fn is_well_formed(&self) -> bool {
        let first_compliant = self
            .variants
            .iter()
            .position(|v| v.kind == VariantKind::Compliant);

        match first_compliant {
            Some(idx) => {
                idx > 0
                    && self.variants[idx..]
                        .iter()
                        .all(|v| v.kind == VariantKind::Compliant)
            }
            None => false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Order {
    /// By principle name, the way the modules are laid out.
    #[default]
    Alphabetical,
    /// S, O, L, I, D.
    Mnemonic,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_principle_forms() {
        assert_eq!(
            "open-closed".parse::<Principle>().unwrap(),
            Principle::OpenClosed
        );
        assert_eq!(
            "Single Responsibility".parse::<Principle>().unwrap(),
            Principle::SingleResponsibility
        );
        assert_eq!(
            "interface_segregation".parse::<Principle>().unwrap(),
            Principle::InterfaceSegregation
        );
        assert_eq!("d".parse::<Principle>().unwrap(), Principle::DependencyInversion);
        assert_eq!(" L ".parse::<Principle>().unwrap(), Principle::LiskovSubstitution);
    }

    #[test]
    fn test_parse_unknown_principle() {
        assert!(matches!(
            "X".parse::<Principle>(),
            Err(SolidError::UnknownPrinciple { .. })
        ));
        assert!("".parse::<Principle>().is_err());
        assert!("open".parse::<Principle>().is_err());
    }

    #[test]
    fn test_letters_spell_solid() {
        let letters: String = Principle::ALL.iter().map(|p| p.letter()).collect();
        assert_eq!(letters, "SOLID");
    }

    #[test]
    fn test_serde_uses_slug() {
        let json = serde_json::to_string(&Principle::LiskovSubstitution).unwrap();
        assert_eq!(json, "\"liskov-substitution\"");

        let parsed: Principle = serde_json::from_str("\"I\"").unwrap();
        assert_eq!(parsed, Principle::InterfaceSegregation);
    }

    #[test]
    fn test_well_formed_block() {
        let mut block = IllustrationBlock {
            principle: Principle::OpenClosed,
            summary: "",
            warning_signs: vec![],
            variants: vec![Variant::violation("a", ""), Variant::compliant("b", "")],
            takeaway: "",
        };
        assert!(block.is_well_formed());

        block.variants.push(Variant::violation("c", ""));
        assert!(!block.is_well_formed());

        block.variants = vec![Variant::compliant("b", "")];
        assert!(!block.is_well_formed());
    }
}
