mod registry;
mod weather;

pub use registry::ToolRegistry;
pub use weather::WeatherTool;
