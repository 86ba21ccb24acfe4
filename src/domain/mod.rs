// Domain layer: timeline models and ports (interfaces).

pub mod date;
pub mod model;
pub mod ports;
