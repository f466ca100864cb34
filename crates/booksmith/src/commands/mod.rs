pub mod build;
pub mod generate_index;
pub mod serve;
pub mod setup;
