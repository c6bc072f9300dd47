// Domain layer: the Employee model and the ports the handlers depend on.

pub mod model;
pub mod ports;
