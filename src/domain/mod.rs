// Domain layer: core models, ports (interfaces) and compiled-in reference data. No I/O.

pub mod model;
pub mod ports;
pub mod reference;
