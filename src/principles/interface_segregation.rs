//! Interface segregation: no client should be forced to depend on methods it
//! does not use. Rather than growing an existing trait, add a new one.

use crate::domain::model::{IllustrationBlock, Principle, Variant};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub contents: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Post {
    pub body: String,
}

pub mod violation {
    use super::Document;

    pub trait Machine {
        fn print(&self, document: &Document);
        fn scan(&self, document: &Document);
        fn fax(&self, document: &Document);
    }

    /// A printer that has to implement scanning and faxing anyway.
    #[derive(Debug, Default)]
    pub struct BasicPrinter;

    impl Machine for BasicPrinter {
        fn print(&self, _document: &Document) {}

        fn scan(&self, _document: &Document) {}

        fn fax(&self, _document: &Document) {}
    }
}

/// Segregated capabilities that can be mixed and matched.
pub mod compliant {
    use super::Document;

    pub trait Printer {
        fn print(&self, document: &Document);
    }

    pub trait Scanner {
        fn scan(&self, document: &Document);
    }

    pub trait Faxer {
        fn fax(&self, document: &Document);
    }

    #[derive(Debug, Default)]
    pub struct RobustPrinter;

    impl Printer for RobustPrinter {
        fn print(&self, _document: &Document) {}
    }

    impl Scanner for RobustPrinter {
        fn scan(&self, _document: &Document) {}
    }

    #[derive(Debug, Default)]
    pub struct BasicPrinter;

    impl Printer for BasicPrinter {
        fn print(&self, _document: &Document) {}
    }
}

/// Real-world flavor. Another kind of account is another combination of
/// capability traits, and each one is easy to fake in a test.
pub mod social {
    use super::Post;

    pub trait Sharer {
        fn share(&self, post: &Post);
    }

    pub trait Creator {
        fn create(&self, post: &Post);
    }

    pub trait Commenter {
        fn comment(&self, post: &Post);
    }

    #[derive(Debug, Default)]
    pub struct Admin;

    impl Sharer for Admin {
        fn share(&self, _post: &Post) {}
    }

    impl Creator for Admin {
        fn create(&self, _post: &Post) {}
    }

    impl Commenter for Admin {
        fn comment(&self, _post: &Post) {}
    }

    #[derive(Debug, Default)]
    pub struct User;

    impl Sharer for User {
        fn share(&self, _post: &Post) {}
    }

    impl Commenter for User {
        fn comment(&self, _post: &Post) {}
    }
}

pub fn illustration() -> IllustrationBlock {
    IllustrationBlock {
        principle: Principle::InterfaceSegregation,
        summary: "No client should be forced to depend on interfaces it does not use.",
        warning_signs: vec!["An implementation stubs out methods that make no sense for it"],
        variants: vec![
            Variant::violation(
                "interface_segregation::violation",
                "BasicPrinter must implement print, scan and fax",
            ),
            Variant::compliant(
                "interface_segregation::compliant",
                "Printer, Scanner and Faxer are separate; RobustPrinter picks two",
            ),
            Variant::compliant(
                "interface_segregation::social",
                "Admin shares, creates and comments; User only shares and comments",
            ),
        ],
        takeaway: "Small capability traits can be combined per type without dead methods.",
    }
}
