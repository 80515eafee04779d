pub mod engine;
pub mod navigation;
pub mod persistence;
pub mod steps;
pub mod submit;

pub use engine::{WizardEngine, WizardState};
pub use navigation::{
    parse_scripted_actions, patch_from_path, WizardAction, WizardEffect, WizardTransition,
    SCRIPT_ENV_VAR,
};
pub use persistence::{DetachedPersister, FileProgressStore, NoProgress, ProgressPersister};
pub use steps::{StepDescriptor, StepRegistry, StepStatus, STANDARD_STEPS, STEP_COUNT};
pub use submit::{
    submit_wizard, SimulationRequest, SubmissionState, SubmitError, SubmitGateway,
    SubmitOutcome, SubmitTicket, DEFAULT_FAILURE_MESSAGE, MODEL_TYPE,
};
