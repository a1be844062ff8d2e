// Domain layer: bet models and the form boundary. No dependencies beyond std/serde/chrono.

pub mod model;
pub mod ports;
