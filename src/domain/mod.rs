// Domain layer: presentational state and the ports the controllers talk to.

pub mod model;
pub mod ports;
