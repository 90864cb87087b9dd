use std::collections::HashMap;
use std::sync::Arc;

use wxagent_core::{ActionRequest, AgentError, Tool, ToolObservation};

/// Dispatch table from `function_name` to the tool that serves it.
pub struct ToolRegistry {
    tools: HashMap<&'static str, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        self.tools.insert(tool.name(), tool);
    }

    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.tools.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub async fn dispatch(&self, action: &ActionRequest) -> Result<ToolObservation, AgentError> {
        let tool = self
            .tools
            .get(action.function_name.as_str())
            .ok_or_else(|| AgentError::UnrecognizedAction(action.function_name.clone()))?;

        tool.call(&action.function_parms).await
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
