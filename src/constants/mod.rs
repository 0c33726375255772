//! This module contains all the constant values used in the system
mod authorization;
pub use authorization::*;

mod catalog;
pub use catalog::*;

mod validation;
pub use validation::*;
