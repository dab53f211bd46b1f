//! Domain layer for avia-calc: fuel balance models, policy constants,
//! and the calculation/parsing services.

pub mod constants;
pub mod model;
pub mod service;
