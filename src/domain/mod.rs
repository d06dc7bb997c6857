// Domain layer: core models and ports (interfaces). No dependencies on the
// adapters or on any concrete runtime surface.

pub mod model;
pub mod ports;
