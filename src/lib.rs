pub mod app;
pub mod error;
pub mod models;

mod test;
