// Domain layer: the animal record model and the ports the adapters implement.

pub mod model;
pub mod ports;
