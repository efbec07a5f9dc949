// Domain layer: catalog model and ports. Illustrations and adapters depend on this, never the reverse.

pub mod model;
pub mod ports;
