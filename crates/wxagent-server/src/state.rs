use std::sync::Arc;

use tracing::info;
use wxagent_core::{AgentError, AppConfig};
use wxagent_llm::LlmClient;
use wxagent_pipeline::ActionOrchestrator;
use wxagent_report::{PdfRenderer, SmtpMailer};
use wxagent_tools::{ToolRegistry, WeatherTool};

pub struct AppState {
    pub orchestrator: ActionOrchestrator,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Result<Self, AgentError> {
        std::fs::create_dir_all(&config.report.dir)?;

        let model = LlmClient::new(&config.llm);
        info!("Using model {}", model.model());

        let mut tools = ToolRegistry::new();
        tools.register(Arc::new(WeatherTool::new(config.weather.clone())));
        info!("Registered tools: {:?}", tools.names());

        let mailer = SmtpMailer::new(&config.mail)?;

        let orchestrator = ActionOrchestrator::new(
            Arc::new(model),
            tools,
            Arc::new(PdfRenderer::new()),
            Arc::new(mailer),
            config.report.clone(),
        );

        Ok(Self { orchestrator })
    }
}
