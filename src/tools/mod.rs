// Shared types
pub mod types;

// Modular tools
pub mod fetch;
pub mod merge;
pub mod render;
pub mod scrape;
pub mod validate;
