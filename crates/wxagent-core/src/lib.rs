pub mod config;
pub mod error;
pub mod seams;
pub mod types;

pub use config::{AppConfig, LlmConfig, MailConfig, ReportConfig, WeatherConfig};
pub use error::AgentError;
pub use seams::{ChatModel, ReportMailer, ReportRenderer, Tool};
pub use types::*;
