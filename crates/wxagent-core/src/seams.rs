use std::path::Path;

use async_trait::async_trait;

use crate::{AgentError, ToolObservation};

/// A capability the model can ask for by name.
#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &'static str;

    async fn call(&self, parameters: &serde_json::Value) -> Result<ToolObservation, AgentError>;
}

#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn chat(&self, system_prompt: &str, user_input: &str) -> Result<String, AgentError>;
}

pub trait ReportRenderer: Send + Sync {
    /// Writes `text` as a PDF to `path`, replacing whatever was there.
    fn save_to_pdf(&self, text: &str, path: &Path) -> Result<(), AgentError>;
}

#[async_trait]
pub trait ReportMailer: Send + Sync {
    async fn send_report(
        &self,
        to: &str,
        subject: &str,
        body: &str,
        file_path: &Path,
    ) -> Result<(), AgentError>;
}
