use crate::app::cli::{help_text, parse_cli_verb, CliVerb};
use crate::app::command_support::{
    parse_command_options, WizardPaths, OUTBOX_FLAG, PROGRESS_FLAG, SCRIPT_FLAG,
};
use crate::app::outbox::OutboxGateway;
use crate::config::render_yaml;
use crate::wizard::{
    parse_scripted_actions, submit_wizard, DetachedPersister, SubmitOutcome, WizardEffect,
    WizardEngine, SCRIPT_ENV_VAR,
};
use std::cell::RefCell;

pub fn run_cli(args: Vec<String>) -> Result<String, String> {
    if args.is_empty() {
        return Ok(help_text());
    }

    match parse_cli_verb(args[0].as_str()) {
        CliVerb::Steps => cmd_steps(&args[1..]),
        CliVerb::Show => cmd_show(&args[1..]),
        CliVerb::Run => cmd_run(&args[1..]),
        CliVerb::Reset => cmd_reset(&args[1..]),
        CliVerb::Help => Ok(help_text()),
        CliVerb::Unknown => Err(format!("unknown command `{}`\n\n{}", args[0], help_text())),
    }
}

pub fn cmd_steps(args: &[String]) -> Result<String, String> {
    let options = parse_command_options(args, &[PROGRESS_FLAG])?;
    let paths = WizardPaths::resolve(&options)?;
    let wizard = WizardEngine::new(paths.progress_store());
    let lines: Vec<String> = wizard
        .step_statuses()
        .into_iter()
        .map(|status| {
            format!(
                "{} {} label=\"{}\" {} {}",
                status.order,
                status.id,
                status.label,
                if status.visible { "visible" } else { "hidden" },
                if status.complete {
                    "complete"
                } else {
                    "incomplete"
                },
            )
        })
        .collect();
    Ok(lines.join("\n"))
}

pub fn cmd_show(args: &[String]) -> Result<String, String> {
    let options = parse_command_options(args, &[PROGRESS_FLAG])?;
    let paths = WizardPaths::resolve(&options)?;
    let wizard = WizardEngine::new(paths.progress_store());
    render_yaml(wizard.config()).map_err(|err| err.to_string())
}

pub fn cmd_run(args: &[String]) -> Result<String, String> {
    let options = parse_command_options(args, &[SCRIPT_FLAG, PROGRESS_FLAG, OUTBOX_FLAG])?;
    let script = match options.script.clone() {
        Some(script) => script,
        None => std::env::var(SCRIPT_ENV_VAR).unwrap_or_default(),
    };
    let actions = parse_scripted_actions(&script)?;
    let paths = WizardPaths::resolve(&options)?;
    let log = paths.event_log();
    let persister = DetachedPersister::spawn(paths.progress_store())
        .map_err(|err| format!("failed to start progress writer: {err}"))?;
    let wizard = RefCell::new(WizardEngine::new(persister).with_log(log));
    let gateway = OutboxGateway::new(&paths.outbox);

    let mut lines = Vec::new();
    for action in actions {
        let transition = wizard.borrow_mut().dispatch(action);
        if let Some(feedback) = transition.feedback {
            lines.push(format!("note={feedback}"));
        }
        if transition.effect != WizardEffect::SubmitRequested {
            continue;
        }
        let outcome = pollster::block_on(submit_wizard(&wizard, &gateway))
            .map_err(|err| err.to_string())?;
        match outcome {
            SubmitOutcome::Success { message } => {
                lines.push(format!("submitted={}", message.unwrap_or_default()));
                return Ok(lines.join("\n"));
            }
            SubmitOutcome::Failure { .. } => {
                let wizard = wizard.borrow();
                let message = wizard.submission().error_message().unwrap_or_default();
                return Err(format!("submission failed: {message}"));
            }
        }
    }

    let wizard = wizard.borrow();
    match wizard.current_step() {
        Some(step) => lines.push(format!(
            "step={} {} label=\"{}\"",
            step.order, step.id, step.label
        )),
        None => lines.push(format!("step={}", wizard.current_step_order())),
    }
    Ok(lines.join("\n"))
}

pub fn cmd_reset(args: &[String]) -> Result<String, String> {
    let options = parse_command_options(args, &[PROGRESS_FLAG])?;
    let paths = WizardPaths::resolve(&options)?;
    let removed = paths
        .progress_store()
        .remove()
        .map_err(|err| err.to_string())?;
    if removed {
        Ok(format!("progress=removed path={}", paths.progress.display()))
    } else {
        Ok(format!("progress=absent path={}", paths.progress.display()))
    }
}
