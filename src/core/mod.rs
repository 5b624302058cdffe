pub mod interfaces;
pub mod models;
