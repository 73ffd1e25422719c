// Domain layer: document models and the ports the processor depends on.

pub mod model;
pub mod ports;
