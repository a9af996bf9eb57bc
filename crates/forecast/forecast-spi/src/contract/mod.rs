//! Contract module containing trait definitions for forecast operations

mod fitted_model;
mod forecaster;

pub use fitted_model::FittedModel;
pub use forecaster::Forecaster;
