//! Single responsibility: keep a type small and focused on one thing, or one
//! group of closely related things.
//!
//! How closely related is a judgement call. Signs that a function, method or
//! type is doing too much:
//! 1. You need "and" to describe what it does.
//! 2. Its name contains "and".
//! 3. Its parameters belong to different concerns, e.g. `account_id` and `jwt`.

use crate::domain::model::{IllustrationBlock, Principle, Variant};

pub mod violation {
    /// Every method except `render` is a CRUD operation. Rendering is a
    /// different concern, so `Post` has more than one reason to change.
    #[derive(Debug, Default)]
    pub struct Post;

    impl Post {
        pub fn save(&self) {}
        pub fn delete(&self) {}
        pub fn render(&self) {}
        pub fn update(&self) {}
    }
}

pub mod compliant {
    /// Only handles CRUD, which makes it easier to test and reason about.
    #[derive(Debug, Default)]
    pub struct Post;

    impl Post {
        pub fn save(&self) {}
        pub fn delete(&self) {}
        pub fn update(&self) {}
    }

    /// Changing how a post is rendered only touches this type.
    #[derive(Debug, Default)]
    pub struct Renderer;

    impl Renderer {
        pub fn render(&self, _post: &Post) {}
    }
}

pub fn illustration() -> IllustrationBlock {
    IllustrationBlock {
        principle: Principle::SingleResponsibility,
        summary: "Keep a type small and focused on one thing or group of closely related things.",
        warning_signs: vec![
            "You have to use \"and\" to describe its functionality",
            "The name contains \"and\"",
            "The parameters relate to different things, e.g. account_id and jwt",
        ],
        variants: vec![
            Variant::violation(
                "single_responsibility::violation",
                "Post mixes CRUD with render",
            ),
            Variant::compliant(
                "single_responsibility::compliant",
                "Post only does CRUD; Renderer owns rendering",
            ),
        ],
        takeaway: "A change to rendering no longer touches the type that persists posts.",
    }
}
