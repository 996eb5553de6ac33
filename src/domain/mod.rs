// Domain layer: storefront records and ports to the hosted backend. No I/O here.

pub mod model;
pub mod ports;
