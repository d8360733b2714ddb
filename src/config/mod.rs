//! Configuration loading for the bonus allocation engine.

mod loader;

pub use loader::ConfigLoader;
