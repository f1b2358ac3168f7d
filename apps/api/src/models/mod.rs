pub mod assessment;
pub mod framework;
