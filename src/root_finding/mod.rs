// common helpers
pub mod algorithms;
pub mod report;
pub mod errors;
pub mod precision;
pub mod tracker;
pub mod diagnostics;
pub mod ranking;
pub mod instrument;
pub(crate) mod config;
pub(crate) mod signs;
pub(crate) mod evaluate;
pub(crate) mod bracket;

// algorithms
pub mod bisection;
pub mod regula_falsi;
pub mod newton;
pub mod secant;
pub mod fixed_point;
