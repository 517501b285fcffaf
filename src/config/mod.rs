//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::FinlogPaths;
pub use settings::Settings;
