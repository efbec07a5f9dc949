// One module per principle. Modules never reach into each other; each exposes
// its own catalog entry through `illustration()`.

pub mod dependency_inversion;
pub mod interface_segregation;
pub mod liskov_substitution;
pub mod open_closed;
pub mod single_responsibility;
