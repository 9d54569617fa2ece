pub mod engine;
pub mod file_store;
pub mod pipeline;
pub mod render;
