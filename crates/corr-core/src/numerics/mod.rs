pub mod acf;
pub mod integrate;

pub use acf::{AcfError, autocorrelation, population_variance, subtract_mean};
pub use integrate::{IntegrateError, integrate_trapezoid};
