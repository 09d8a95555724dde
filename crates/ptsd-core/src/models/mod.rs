pub mod assessment;
pub mod categorical;
pub mod intake;
