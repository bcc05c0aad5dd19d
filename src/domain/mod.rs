// Domain layer: pure operations, models and ports. Nothing here does I/O.

pub mod model;
pub mod ops;
pub mod ports;
