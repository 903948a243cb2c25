//! Format handlers

mod json;
mod yaml;

pub use self::json::JsonHandler;
pub use self::yaml::YamlHandler;
