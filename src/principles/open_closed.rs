//! Open-closed: add behavior by writing new code, not by editing code that
//! already works. An entity should be open for extension and closed for
//! modification.
//!
//! Sometimes the entity itself has to change, e.g. to fix a bug. In most cases
//! new functionality should be a separate building block rather than a
//! modification of an existing one.

use crate::domain::model::{IllustrationBlock, Principle, Variant};

pub mod violation {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum ConsumerKind {
        Free,
        Premium,
    }

    #[derive(Debug, Clone, Copy)]
    pub struct Consumer {
        pub kind: ConsumerKind,
    }

    #[derive(Debug, Default)]
    pub struct Discount;

    impl Discount {
        pub fn give_discount(&self, consumer: &Consumer) -> u32 {
            match consumer.kind {
                ConsumerKind::Free => 10,
                ConsumerKind::Premium => 20,
            }
        }
    }
}

/// The same code after a new kind of consumer was added. `Discount` had to be
/// edited, which breaks the principle.
pub mod modified {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum ConsumerKind {
        Free,
        Premium,
        Advanced,
    }

    #[derive(Debug, Clone, Copy)]
    pub struct Consumer {
        pub kind: ConsumerKind,
    }

    #[derive(Debug, Default)]
    pub struct Discount;

    impl Discount {
        pub fn give_discount(&self, consumer: &Consumer) -> u32 {
            match consumer.kind {
                ConsumerKind::Free => 10,
                ConsumerKind::Premium => 20,
                // existing code modified to add a feature
                ConsumerKind::Advanced => 30,
            }
        }
    }
}

/// Each kind of consumer knows its own discount. Adding a kind is net-new
/// code and nothing existing is amended. The cost is a bit more code.
pub mod compliant {
    pub trait Consumer {
        fn discount(&self) -> u32;
    }

    #[derive(Debug, Default)]
    pub struct FreeConsumer;

    impl Consumer for FreeConsumer {
        fn discount(&self) -> u32 {
            10
        }
    }

    #[derive(Debug, Default)]
    pub struct PremiumConsumer;

    impl Consumer for PremiumConsumer {
        fn discount(&self) -> u32 {
            20
        }
    }

    #[derive(Debug, Default)]
    pub struct AdvancedConsumer;

    impl Consumer for AdvancedConsumer {
        fn discount(&self) -> u32 {
            30
        }
    }

    #[derive(Debug, Default)]
    pub struct Discount;

    impl Discount {
        pub fn give_discount(&self, consumer: &dyn Consumer) -> u32 {
            consumer.discount()
        }
    }
}

pub fn illustration() -> IllustrationBlock {
    IllustrationBlock {
        principle: Principle::OpenClosed,
        summary: "Minimize changes to existing entities when adding new functionality.",
        warning_signs: vec!["Adding a new case means editing a match that already works"],
        variants: vec![
            Variant::violation(
                "open_closed::violation",
                "Discount matches on a closed set of consumer kinds",
            ),
            Variant::violation(
                "open_closed::modified",
                "Adding Advanced forced an edit to Discount",
            ),
            Variant::compliant(
                "open_closed::compliant",
                "Each consumer type reports its own discount",
            ),
        ],
        takeaway: "New consumer kinds are new types; the main drawback is somewhat more code.",
    }
}
