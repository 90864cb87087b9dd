use std::path::PathBuf;
use std::sync::Arc;

use tracing::{error, info, warn};
use uuid::Uuid;
use wxagent_core::{
    AgentError, ChatModel, Outcome, ReportConfig, ReportMailer, ReportRenderer,
};
use wxagent_tools::ToolRegistry;

use crate::action::{extract_action, extract_answer};
use crate::prompts::REACT_SYSTEM_PROMPT;

pub const REPORT_SUBJECT: &str = "🌦️ Your AI Weather Report";
pub const REPORT_BODY: &str = "Hi, see attached report.";

/// Drives one question through action → observation → answer → report.
pub struct ActionOrchestrator {
    model: Arc<dyn ChatModel>,
    tools: ToolRegistry,
    renderer: Arc<dyn ReportRenderer>,
    mailer: Arc<dyn ReportMailer>,
    report: ReportConfig,
}

impl ActionOrchestrator {
    pub fn new(
        model: Arc<dyn ChatModel>,
        tools: ToolRegistry,
        renderer: Arc<dyn ReportRenderer>,
        mailer: Arc<dyn ReportMailer>,
        report: ReportConfig,
    ) -> Self {
        Self {
            model,
            tools,
            renderer,
            mailer,
            report,
        }
    }

    pub async fn handle_question(&self, question: &str, email: &str) -> Outcome {
        let request_id = Uuid::new_v4();
        info!("ORCHESTRATOR: Request {} for {}", request_id, email);

        match self.run(request_id, question, email).await {
            Ok(answer) => {
                info!("ORCHESTRATOR: Request {} delivered", request_id);
                Outcome::Sent {
                    recipient: email.to_string(),
                    answer,
                }
            }
            Err(AgentError::UnrecognizedAction(name)) => {
                warn!("ORCHESTRATOR: Model asked for unknown function '{}'", name);
                Outcome::Unrecognized
            }
            Err(e) => {
                error!("ORCHESTRATOR: Request {} failed: {}", request_id, e);
                Outcome::Failed(e.to_string())
            }
        }
    }

    async fn run(
        &self,
        request_id: Uuid,
        question: &str,
        email: &str,
    ) -> Result<String, AgentError> {
        let initial = self.model.chat(REACT_SYSTEM_PROMPT, question).await?;
        let action = extract_action(&initial)?;

        info!(
            "ORCHESTRATOR: Model requested {} {}",
            action.function_name, action.function_parms
        );

        let observation = self.tools.dispatch(&action).await?;
        let followup = format!("Action_Response: {observation}");
        let final_response = self.model.chat(REACT_SYSTEM_PROMPT, &followup).await?;

        let answer = extract_answer(&final_response);
        info!(
            "ORCHESTRATOR: Answer ready ({} chars)",
            answer.chars().count()
        );

        let path = self.report_path(request_id);
        self.renderer.save_to_pdf(&answer, &path)?;

        let sent = self
            .mailer
            .send_report(email, REPORT_SUBJECT, REPORT_BODY, &path)
            .await;

        if !self.report.keep_files {
            if let Err(e) = tokio::fs::remove_file(&path).await {
                warn!("ORCHESTRATOR: Could not remove {}: {}", path.display(), e);
            }
        }

        sent.map(|_| answer)
    }

    fn report_path(&self, request_id: Uuid) -> PathBuf {
        self.report
            .dir
            .join(format!("weather_report_{}.pdf", request_id.simple()))
    }
}
