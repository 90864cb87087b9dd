mod action;
mod orchestrator;
mod prompts;

pub use orchestrator::ActionOrchestrator;
