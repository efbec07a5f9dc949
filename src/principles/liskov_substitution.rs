//! Liskov substitution: any implementation of an abstraction must be usable
//! wherever the abstraction is expected. What matters is behavior, not type.
//!
//! A type that is *classified* as something does not necessarily share that
//! thing's relationships. A lawyer represents a client but does not share the
//! client's relationship with the client's spouse.

use crate::domain::model::{IllustrationBlock, Principle, Variant};

/// The happy path: a function written against `Bird` accepts a `Sparrow`.
pub mod substitutable {
    pub trait Bird {
        fn fly(&self) {}
    }

    #[derive(Debug, Default)]
    pub struct Sparrow;

    impl Bird for Sparrow {}

    pub fn let_bird_fly(bird: &dyn Bird) {
        bird.fly();
    }
}

/// Violations look like empty methods, or methods that fail because they make
/// no sense for the implementing type.
pub mod violation {
    use crate::utils::error::{Result, SolidError};

    pub trait Bird {
        fn fly(&self) -> Result<()> {
            Ok(())
        }
    }

    #[derive(Debug, Default)]
    pub struct Sparrow;

    impl Bird for Sparrow {}

    /// Classified as a bird, but cannot fly.
    #[derive(Debug, Default)]
    pub struct Penguin;

    impl Bird for Penguin {
        fn fly(&self) -> Result<()> {
            Err(SolidError::UnsupportedOperation {
                subject: "Penguin".to_string(),
                operation: "fly".to_string(),
                reason: "Penguins do not fly".to_string(),
            })
        }
    }

    /// Callers now have to handle a failure that only one implementation produces.
    pub fn let_bird_fly(bird: &dyn Bird) -> Result<()> {
        bird.fly()
    }
}

/// Flying is a capability of some birds, so it gets its own trait.
pub mod compliant {
    pub trait Bird {
        fn eat(&self) {}
    }

    pub trait FlyingBird: Bird {
        fn fly(&self);
    }

    #[derive(Debug, Default)]
    pub struct Sparrow;

    impl Bird for Sparrow {}

    impl FlyingBird for Sparrow {
        fn fly(&self) {}
    }

    #[derive(Debug, Default)]
    pub struct Penguin;

    impl Bird for Penguin {}

    impl Penguin {
        pub fn swim(&self) {}
    }

    pub fn let_bird_fly(bird: &dyn FlyingBird) {
        bird.fly();
    }

    pub fn feed(bird: &dyn Bird) {
        bird.eat();
    }
}

pub fn illustration() -> IllustrationBlock {
    IllustrationBlock {
        principle: Principle::LiskovSubstitution,
        summary: "Any implementation of an abstraction must be interchangeable with any other.",
        warning_signs: vec![
            "An implementation leaves a method empty because it does not apply",
            "An implementation fails in a method that its peers handle normally",
        ],
        variants: vec![
            Variant::violation(
                "liskov_substitution::violation",
                "Penguin implements Bird but fly always fails",
            ),
            Variant::compliant(
                "liskov_substitution::substitutable",
                "Sparrow can be passed wherever a Bird is expected",
            ),
            Variant::compliant(
                "liskov_substitution::compliant",
                "Only FlyingBird has fly, so a Penguin cannot be asked to fly",
            ),
        ],
        takeaway: "Model capabilities, not classifications.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::SolidError;

    #[test]
    fn test_sparrow_substitutes_for_bird() {
        substitutable::let_bird_fly(&substitutable::Sparrow);
    }

    #[test]
    fn test_penguin_refuses_to_fly() {
        assert!(violation::let_bird_fly(&violation::Sparrow).is_ok());

        let err = violation::let_bird_fly(&violation::Penguin).unwrap_err();
        match err {
            SolidError::UnsupportedOperation {
                subject,
                operation,
                reason,
            } => {
                assert_eq!(subject, "Penguin");
                assert_eq!(operation, "fly");
                assert_eq!(reason, "Penguins do not fly");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_compliant_penguin_is_still_a_bird() {
        let penguin = compliant::Penguin;
        compliant::feed(&penguin);
        penguin.swim();

        let sparrow = compliant::Sparrow;
        compliant::feed(&sparrow);
        compliant::let_bird_fly(&sparrow);
    }
}
