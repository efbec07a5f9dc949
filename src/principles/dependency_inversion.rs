//! Dependency inversion: depend on abstractions, not on concrete
//! implementations. High-level modules should not depend on low-level modules
//! and vice versa; both depend on a trait. Refactoring and testing get much
//! easier as a result.

use crate::domain::model::{IllustrationBlock, Principle, Variant};

/// The high-level module talks to a concrete type. Testing it means talking
/// to MySQL, and changing `MySqlDatabase` ripples upward.
pub mod violation {
    /// Low-level module.
    #[derive(Debug, Default)]
    pub struct MySqlDatabase;

    impl MySqlDatabase {
        pub fn save(&self, _data: &str) {}
    }

    /// High-level module bound to the low-level one.
    #[derive(Debug)]
    pub struct HighLevelModule {
        database: MySqlDatabase,
    }

    impl HighLevelModule {
        pub fn new(database: MySqlDatabase) -> Self {
            Self { database }
        }

        pub fn execute(&self, data: &str) {
            self.database.save(data);
        }
    }
}

pub mod compliant {
    /// Abstraction both sides depend on.
    pub trait Database {
        fn save(&self, data: &str);
    }

    impl<D: Database + ?Sized> Database for Box<D> {
        fn save(&self, data: &str) {
            (**self).save(data)
        }
    }

    /// Low-level module implementing the abstraction.
    #[derive(Debug, Default)]
    pub struct MySqlDatabase;

    impl Database for MySqlDatabase {
        fn save(&self, _data: &str) {}
    }

    /// High-level module that only knows about `Database`.
    pub struct HighLevelModule<D: Database> {
        database: D,
    }

    impl<D: Database> HighLevelModule<D> {
        pub fn new(database: D) -> Self {
            Self { database }
        }

        pub fn execute(&self, data: &str) {
            tracing::debug!(bytes = data.len(), "Saving through injected database");
            self.database.save(data);
        }

        pub fn database(&self) -> &D {
            &self.database
        }
    }
}

pub fn illustration() -> IllustrationBlock {
    IllustrationBlock {
        principle: Principle::DependencyInversion,
        summary: "Depend on abstractions rather than concrete implementations.",
        warning_signs: vec![
            "You cannot test the high-level module without the real low-level one",
            "Changing a low-level type forces changes in its callers",
        ],
        variants: vec![
            Variant::violation(
                "dependency_inversion::violation",
                "HighLevelModule holds a concrete MySqlDatabase",
            ),
            Variant::compliant(
                "dependency_inversion::compliant",
                "HighLevelModule is generic over the Database trait",
            ),
        ],
        takeaway: "Testing and refactoring become much easier.",
    }
}
