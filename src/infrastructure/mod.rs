pub mod mock;
pub mod prediction_api;
