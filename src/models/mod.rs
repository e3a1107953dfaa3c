pub mod config;

pub use config::SketchConfig;
