pub mod assessments;
pub mod fields;
pub mod form;
pub mod health;
pub mod model;
