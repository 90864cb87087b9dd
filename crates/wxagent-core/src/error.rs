use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgentError {
    #[error("Failed to parse action: {0}")]
    ActionParse(String),

    #[error("Function not recognized: {0}")]
    UnrecognizedAction(String),

    #[error("LLM request failed: {0}")]
    LlmError(String),

    #[error("External API error: {0}")]
    ExternalApi(String),

    #[error("Failed to render report: {0}")]
    Render(String),

    #[error("Failed to send email: {0}")]
    Mail(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
