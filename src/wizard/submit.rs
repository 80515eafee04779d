use super::engine::WizardEngine;
use super::persistence::ProgressPersister;
use crate::config::{ConfigError, ConfigModel, TimeStep};
use serde::Serialize;
use serde_json::Value;
use std::cell::RefCell;
use std::future::Future;

pub const MODEL_TYPE: &str = "mhia";
pub const DEFAULT_FAILURE_MESSAGE: &str = "Submission failed.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Success { message: Option<String> },
    Failure { message: Option<String> },
}

impl SubmitOutcome {
    pub fn success() -> Self {
        Self::Success { message: None }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success { message } | Self::Failure { message } => message.as_deref(),
        }
    }
}

/// Receives the finished config. Invoked at most once per confirmation, and
/// never while another submission is still pending.
pub trait SubmitGateway {
    fn submit(&self, config: ConfigModel) -> impl Future<Output = SubmitOutcome>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    InFlight,
    Failed { message: String },
    Completed,
}

impl SubmissionState {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::InFlight)
    }

    /// Inline message to show next to the submit control.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed { message } => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("submit is only available on the final step (current step {current}, final step {last})")]
    NotOnFinalStep { current: usize, last: usize },
    #[error("a submission is already in flight")]
    AlreadyInFlight,
    #[error("configuration was already submitted")]
    AlreadySubmitted,
}

/// Proof that a submission was started; carries the config being submitted.
#[derive(Debug)]
pub struct SubmitTicket {
    config: ConfigModel,
}

impl SubmitTicket {
    pub(crate) fn new(config: ConfigModel) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConfigModel {
        &self.config
    }
}

/// Body of the remote "create simulation" call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub model_type: String,
    pub time_step: TimeStep,
    pub start_date: String,
    pub end_date: String,
    pub configuration: Value,
}

impl SimulationRequest {
    pub fn from_config(config: &ConfigModel) -> Result<Self, ConfigError> {
        let project = &config.project;
        let description = if project.description.trim().is_empty() {
            None
        } else {
            Some(project.description.clone())
        };
        Ok(Self {
            name: project.simulation_name.clone(),
            description,
            model_type: MODEL_TYPE.to_string(),
            time_step: project.time_step,
            start_date: project.start_date.clone(),
            end_date: project.end_date.clone(),
            configuration: config.to_value().map_err(ConfigError::Encode)?,
        })
    }
}

/// Runs one full submission against a shared wizard.
///
/// The wizard is only borrowed around the start and the end of the call, so
/// navigation and edits stay possible while the gateway future is pending.
pub async fn submit_wizard<P, G>(
    wizard: &RefCell<WizardEngine<P>>,
    gateway: &G,
) -> Result<SubmitOutcome, SubmitError>
where
    P: ProgressPersister,
    G: SubmitGateway,
{
    let ticket = wizard.borrow_mut().begin_submit()?;
    let outcome = gateway.submit(ticket.config().clone()).await;
    wizard.borrow_mut().finish_submit(ticket, outcome.clone());
    Ok(outcome)
}
