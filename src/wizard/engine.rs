use super::navigation::{WizardAction, WizardEffect, WizardTransition};
use super::persistence::{NoProgress, ProgressPersister};
use super::steps::{StepDescriptor, StepRegistry, StepStatus};
use super::submit::{
    SubmissionState, SubmitError, SubmitOutcome, SubmitTicket, DEFAULT_FAILURE_MESSAGE,
};
use crate::config::{build_initial, merge_section, ConfigModel, SectionName};
use crate::shared::logging::EventLog;
use serde_json::Value;

/// The navigable state of one session: a step pointer plus the config.
#[derive(Debug, Clone, PartialEq)]
pub struct WizardState {
    pub current_step_order: usize,
    pub config: ConfigModel,
}

/// Drives one wizard session over the standard step registry.
///
/// Navigation only ever lands on visible steps, except that `jump_to` follows
/// an explicit request. Every accepted section update is handed to the
/// persister as an owned snapshot.
#[derive(Debug)]
pub struct WizardEngine<P: ProgressPersister = NoProgress> {
    registry: StepRegistry,
    state: WizardState,
    submission: SubmissionState,
    persister: P,
    log: EventLog,
}

impl Default for WizardEngine<NoProgress> {
    fn default() -> Self {
        Self::new(NoProgress)
    }
}

impl<P: ProgressPersister> WizardEngine<P> {
    /// Starts at step 0, seeded from whatever the persister has stored.
    pub fn new(persister: P) -> Self {
        let seed = persister.load();
        Self::with_seed(seed.as_ref(), persister)
    }

    pub fn with_seed(seed: Option<&Value>, persister: P) -> Self {
        Self {
            registry: StepRegistry::standard(),
            state: WizardState {
                current_step_order: 0,
                config: build_initial(&ConfigModel::default(), seed),
            },
            submission: SubmissionState::Idle,
            persister,
            log: EventLog::detached(),
        }
    }

    pub fn with_log(mut self, log: EventLog) -> Self {
        self.log = log;
        self
    }

    pub fn registry(&self) -> StepRegistry {
        self.registry
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn config(&self) -> &ConfigModel {
        &self.state.config
    }

    pub fn current_step_order(&self) -> usize {
        self.state.current_step_order
    }

    pub fn current_step(&self) -> Option<&'static StepDescriptor> {
        self.registry.get(self.state.current_step_order)
    }

    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    pub fn is_terminal(&self) -> bool {
        self.state.current_step_order == self.registry.last_order()
    }

    pub fn visible_steps(&self) -> Vec<&'static StepDescriptor> {
        self.registry.visible_steps(&self.state.config)
    }

    pub fn step_statuses(&self) -> Vec<StepStatus> {
        self.registry
            .step_statuses(&self.state.config, self.state.current_step_order)
    }

    pub fn is_step_complete(&self, section: SectionName) -> bool {
        self.registry
            .descriptor(section)
            .is_some_and(|step| step.is_complete(&self.state.config))
    }

    /// Moves to the next visible step. Returns false when there is none.
    pub fn advance(&mut self) -> bool {
        match self
            .registry
            .next_visible(&self.state.config, self.state.current_step_order)
        {
            Some(order) => {
                self.move_to(order);
                true
            }
            None => false,
        }
    }

    /// Moves to the previous visible step. Returns false when there is none.
    pub fn retreat(&mut self) -> bool {
        match self
            .registry
            .prev_visible(&self.state.config, self.state.current_step_order)
        {
            Some(order) => {
                self.move_to(order);
                true
            }
            None => false,
        }
    }

    /// Jumps to `order`, clamped to the last step. The target's visibility is
    /// not checked; callers only offer visible steps.
    pub fn jump_to(&mut self, order: usize) -> bool {
        let target = order.min(self.registry.last_order());
        if target == self.state.current_step_order {
            return false;
        }
        self.move_to(target);
        true
    }

    /// Merges a partial update into one section and persists the result.
    /// The step pointer never moves, even if the update hides the current step.
    ///
    /// Once a submission has completed the wizard is closed: updates are
    /// dropped so cleared progress is never written back. Returns whether the
    /// update was applied.
    pub fn update_section(&mut self, section: SectionName, update: &Value) -> bool {
        if self.submission == SubmissionState::Completed {
            self.log.warn(
                "wizard.update_after_submit",
                &format!("section={section}"),
            );
            return false;
        }
        self.state.config = merge_section(&self.state.config, section, update);
        self.log
            .debug("wizard.section_updated", &format!("section={section}"));
        self.persister.save(self.state.config.clone());
        true
    }

    pub fn can_submit(&self) -> bool {
        self.check_submittable().is_ok()
    }

    /// Marks a submission as in flight and hands back the config to send.
    pub fn begin_submit(&mut self) -> Result<SubmitTicket, SubmitError> {
        self.check_submittable()?;
        self.submission = SubmissionState::InFlight;
        self.log.info(
            "wizard.submit_started",
            &format!("simulation={}", self.state.config.project.simulation_name),
        );
        Ok(SubmitTicket::new(self.state.config.clone()))
    }

    /// Applies a gateway outcome. Success clears stored progress; failure
    /// keeps the wizard open for a retry.
    pub fn finish_submit(&mut self, ticket: SubmitTicket, outcome: SubmitOutcome) {
        let simulation = &ticket.config().project.simulation_name;
        match outcome {
            SubmitOutcome::Success { .. } => {
                self.submission = SubmissionState::Completed;
                self.persister.clear();
                self.log
                    .info("wizard.submit_succeeded", &format!("simulation={simulation}"));
            }
            SubmitOutcome::Failure { message } => {
                let message = message
                    .filter(|message| !message.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string());
                self.log.warn(
                    "wizard.submit_failed",
                    &format!("simulation={simulation} error={message}"),
                );
                self.submission = SubmissionState::Failed { message };
            }
        }
    }

    /// Applies one action. `Submit` only validates and reports
    /// `SubmitRequested`; the caller drives the gateway.
    pub fn dispatch(&mut self, action: WizardAction) -> WizardTransition {
        let from = self.state.current_step_order;
        match action {
            WizardAction::Advance => {
                if self.advance() {
                    self.moved(from)
                } else {
                    WizardTransition::no_op(Some("already on the last visible step".to_string()))
                }
            }
            WizardAction::Retreat => {
                if self.retreat() {
                    self.moved(from)
                } else {
                    WizardTransition::no_op(Some(
                        "already on the first visible step".to_string(),
                    ))
                }
            }
            WizardAction::JumpTo(order) => {
                if self.jump_to(order) {
                    self.moved(from)
                } else {
                    WizardTransition::no_op(None)
                }
            }
            WizardAction::Update { section, patch } => {
                if self.update_section(section, &patch) {
                    WizardTransition::with_effect(WizardEffect::Updated(section))
                } else {
                    WizardTransition::no_op(Some(SubmitError::AlreadySubmitted.to_string()))
                }
            }
            WizardAction::Submit => match self.check_submittable() {
                Ok(()) => WizardTransition::with_effect(WizardEffect::SubmitRequested),
                Err(err) => WizardTransition::no_op(Some(err.to_string())),
            },
        }
    }

    fn moved(&self, from: usize) -> WizardTransition {
        WizardTransition::with_effect(WizardEffect::Moved {
            from,
            to: self.state.current_step_order,
        })
    }

    fn move_to(&mut self, order: usize) {
        self.log.debug(
            "wizard.moved",
            &format!("from={} to={order}", self.state.current_step_order),
        );
        self.state.current_step_order = order;
    }

    fn check_submittable(&self) -> Result<(), SubmitError> {
        if !self.is_terminal() {
            return Err(SubmitError::NotOnFinalStep {
                current: self.state.current_step_order,
                last: self.registry.last_order(),
            });
        }
        match self.submission {
            SubmissionState::InFlight => Err(SubmitError::AlreadyInFlight),
            SubmissionState::Completed => Err(SubmitError::AlreadySubmitted),
            SubmissionState::Idle | SubmissionState::Failed { .. } => Ok(()),
        }
    }
}
