pub mod errors;
pub mod models;
pub mod quiz;
pub mod study;
pub mod tasks;

pub use errors::CardboxError;
