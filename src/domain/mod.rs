// Domain layer: postal codes, the address model and the lookup port.

pub mod cep;
pub mod model;
pub mod ports;
