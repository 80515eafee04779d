use mhia_wizard::config::{ConfigModel, SectionName};
use mhia_wizard::wizard::{
    submit_wizard, FileProgressStore, NoProgress, ProgressPersister, SimulationRequest,
    SubmissionState, SubmitError, SubmitGateway, SubmitOutcome, WizardAction, WizardEffect,
    WizardEngine,
};
use serde_json::json;
use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;

struct ScriptedGateway {
    outcome: SubmitOutcome,
    calls: Cell<usize>,
    received: RefCell<Option<ConfigModel>>,
}

impl ScriptedGateway {
    fn new(outcome: SubmitOutcome) -> Self {
        Self {
            outcome,
            calls: Cell::new(0),
            received: RefCell::new(None),
        }
    }
}

impl SubmitGateway for ScriptedGateway {
    fn submit(&self, config: ConfigModel) -> impl Future<Output = SubmitOutcome> {
        self.calls.set(self.calls.get() + 1);
        *self.received.borrow_mut() = Some(config);
        let outcome = self.outcome.clone();
        async move { outcome }
    }
}

#[derive(Default)]
struct ClearCounter {
    cleared: Cell<usize>,
}

impl ProgressPersister for ClearCounter {
    fn save(&self, _snapshot: ConfigModel) {}

    fn clear(&self) {
        self.cleared.set(self.cleared.get() + 1);
    }
}

fn final_step_wizard() -> WizardEngine<NoProgress> {
    let mut wizard = WizardEngine::new(NoProgress);
    wizard.jump_to(7);
    wizard
}

#[test]
fn submit_is_rejected_off_the_final_step() {
    let mut wizard = WizardEngine::new(NoProgress);
    assert!(!wizard.can_submit());
    assert_eq!(
        wizard.begin_submit().expect_err("not terminal"),
        SubmitError::NotOnFinalStep {
            current: 0,
            last: 7
        }
    );
}

#[test]
fn only_one_submission_may_be_in_flight() {
    let mut wizard = final_step_wizard();
    let ticket = wizard.begin_submit().expect("first submit");
    assert!(wizard.submission().is_in_flight());
    assert_eq!(
        wizard.begin_submit().expect_err("second submit"),
        SubmitError::AlreadyInFlight
    );

    assert!(wizard.retreat());
    wizard.update_section(SectionName::Basin, &json!({ "meanFlow": 3 }));
    assert!(wizard.submission().is_in_flight());

    wizard.finish_submit(ticket, SubmitOutcome::failure("remote rejected"));
    assert_eq!(wizard.submission().error_message(), Some("remote rejected"));
}

#[test]
fn gateway_receives_the_current_config_once() {
    let wizard = RefCell::new(final_step_wizard());
    wizard
        .borrow_mut()
        .update_section(SectionName::Project, &json!({ "simulationName": "Run 7" }));
    let gateway = ScriptedGateway::new(SubmitOutcome::success());

    let outcome = pollster::block_on(submit_wizard(&wizard, &gateway)).expect("submit");

    assert!(outcome.is_success());
    assert_eq!(gateway.calls.get(), 1);
    let received = gateway.received.borrow();
    assert_eq!(
        received.as_ref().expect("config").project.simulation_name,
        "Run 7"
    );
    assert_eq!(wizard.borrow().submission(), &SubmissionState::Completed);
    assert_eq!(
        pollster::block_on(submit_wizard(&wizard, &gateway)).expect_err("completed"),
        SubmitError::AlreadySubmitted
    );
    assert_eq!(gateway.calls.get(), 1);
}

#[test]
fn failure_keeps_wizard_open_and_allows_retry() {
    let wizard = RefCell::new(final_step_wizard());
    let failing = ScriptedGateway::new(SubmitOutcome::Failure { message: None });

    let outcome = pollster::block_on(submit_wizard(&wizard, &failing)).expect("submit");
    assert!(!outcome.is_success());
    assert_eq!(
        wizard.borrow().submission().error_message(),
        Some("Submission failed.")
    );
    assert!(wizard.borrow().can_submit());

    let succeeding = ScriptedGateway::new(SubmitOutcome::success());
    pollster::block_on(submit_wizard(&wizard, &succeeding)).expect("retry");
    assert_eq!(wizard.borrow().submission(), &SubmissionState::Completed);
}

#[test]
fn success_clears_persisted_progress_and_failure_does_not() {
    let persister = Rc::new(ClearCounter::default());
    let wizard = RefCell::new(WizardEngine::new(Rc::clone(&persister)));
    wizard.borrow_mut().jump_to(7);

    let failing = ScriptedGateway::new(SubmitOutcome::failure("offline"));
    pollster::block_on(submit_wizard(&wizard, &failing)).expect("submit");
    assert_eq!(persister.cleared.get(), 0);

    let succeeding = ScriptedGateway::new(SubmitOutcome::success());
    pollster::block_on(submit_wizard(&wizard, &succeeding)).expect("submit");
    assert_eq!(persister.cleared.get(), 1);
}

#[test]
fn edits_after_success_do_not_restore_cleared_progress() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("wizard-progress.json");
    let store = FileProgressStore::new(&path);
    let wizard = RefCell::new(WizardEngine::new(&store));
    wizard
        .borrow_mut()
        .update_section(SectionName::Basin, &json!({ "basinArea": 5 }));
    wizard.borrow_mut().jump_to(7);
    assert!(path.is_file());

    let gateway = ScriptedGateway::new(SubmitOutcome::success());
    pollster::block_on(submit_wizard(&wizard, &gateway)).expect("submit");
    assert!(!path.exists());

    let applied = wizard
        .borrow_mut()
        .update_section(SectionName::Basin, &json!({ "basinArea": 6 }));
    assert!(!applied);
    let transition = wizard.borrow_mut().dispatch(WizardAction::Update {
        section: SectionName::Basin,
        patch: json!({ "basinArea": 7 }),
    });
    assert_eq!(transition.effect, WizardEffect::None);
    assert!(!path.exists());
    assert_eq!(wizard.borrow().config().basin.basin_area, 5.0);

    let next_session = WizardEngine::new(FileProgressStore::new(&path));
    assert_eq!(
        next_session.config().basin.basin_area,
        ConfigModel::default().basin.basin_area
    );
}

struct ReentrantGateway<'w> {
    wizard: &'w RefCell<WizardEngine<NoProgress>>,
    second_attempt: RefCell<Option<Result<(), SubmitError>>>,
}

impl SubmitGateway for ReentrantGateway<'_> {
    fn submit(&self, _config: ConfigModel) -> impl Future<Output = SubmitOutcome> {
        async move {
            let second = self.wizard.borrow_mut().begin_submit().map(|_| ());
            *self.second_attempt.borrow_mut() = Some(second);
            SubmitOutcome::success()
        }
    }
}

#[test]
fn wizard_stays_usable_while_gateway_is_pending() {
    let wizard = RefCell::new(final_step_wizard());
    let gateway = ReentrantGateway {
        wizard: &wizard,
        second_attempt: RefCell::new(None),
    };

    pollster::block_on(submit_wizard(&wizard, &gateway)).expect("submit");

    assert_eq!(
        gateway.second_attempt.borrow().clone(),
        Some(Err(SubmitError::AlreadyInFlight))
    );
    assert_eq!(wizard.borrow().submission(), &SubmissionState::Completed);
}

#[test]
fn simulation_request_carries_project_metadata() {
    let mut wizard = final_step_wizard();
    wizard.update_section(
        SectionName::Project,
        &json!({ "description": "Pilot basin", "timeStep": "monthly" }),
    );
    let request = SimulationRequest::from_config(wizard.config()).expect("request");
    let encoded = serde_json::to_value(&request).expect("encode");
    assert_eq!(encoded["description"], "Pilot basin");
    assert_eq!(encoded["time_step"], "monthly");
    assert_eq!(encoded["start_date"], "2023-01-01");
    assert_eq!(
        encoded["configuration"]["project"]["description"],
        "Pilot basin"
    );
}
