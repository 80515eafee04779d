use crate::config::{default_state_root, log_path, outbox_dir, progress_path};
use crate::shared::logging::EventLog;
use crate::wizard::FileProgressStore;
use std::path::PathBuf;

pub const PROGRESS_FLAG: &str = "--progress";
pub const SCRIPT_FLAG: &str = "--script";
pub const OUTBOX_FLAG: &str = "--outbox";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOptions {
    pub progress: Option<PathBuf>,
    pub script: Option<String>,
    pub outbox: Option<PathBuf>,
}

/// Parses `--flag VALUE` and `--flag=VALUE` pairs, rejecting flags a command
/// does not accept.
pub fn parse_command_options(args: &[String], allowed: &[&str]) -> Result<CommandOptions, String> {
    let mut options = CommandOptions::default();
    let mut index = 0;
    while index < args.len() {
        let arg = args[index].as_str();
        let (flag, inline_value) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag, Some(value.to_string())),
            _ => (arg, None),
        };
        if !allowed.contains(&flag) {
            return Err(format!("unexpected argument `{arg}`"));
        }
        let value = match inline_value {
            Some(value) => value,
            None => {
                index += 1;
                args.get(index)
                    .cloned()
                    .ok_or_else(|| format!("{flag} requires a value"))?
            }
        };
        match flag {
            PROGRESS_FLAG => options.progress = Some(PathBuf::from(value)),
            SCRIPT_FLAG => options.script = Some(value),
            OUTBOX_FLAG => options.outbox = Some(PathBuf::from(value)),
            _ => return Err(format!("unexpected argument `{arg}`")),
        }
        index += 1;
    }
    Ok(options)
}

/// Where one invocation reads and writes its state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardPaths {
    pub progress: PathBuf,
    pub outbox: PathBuf,
    pub log: PathBuf,
}

impl WizardPaths {
    pub fn resolve(options: &CommandOptions) -> Result<Self, String> {
        let root = default_state_root().map_err(|err| err.to_string())?;
        Ok(Self {
            progress: options
                .progress
                .clone()
                .unwrap_or_else(|| progress_path(&root)),
            outbox: options.outbox.clone().unwrap_or_else(|| outbox_dir(&root)),
            log: log_path(&root),
        })
    }

    pub fn event_log(&self) -> EventLog {
        EventLog::at(&self.log)
    }

    pub fn progress_store(&self) -> FileProgressStore {
        FileProgressStore::new(&self.progress).with_log(self.event_log())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn accepts_separate_and_inline_values() {
        let options = parse_command_options(
            &args(&["--progress", "/tmp/p.json", "--script=next;set:basin.basinArea=9"]),
            &[PROGRESS_FLAG, SCRIPT_FLAG],
        )
        .expect("options");
        assert_eq!(options.progress, Some(PathBuf::from("/tmp/p.json")));
        assert_eq!(options.script.as_deref(), Some("next;set:basin.basinArea=9"));
        assert!(options.outbox.is_none());
    }

    #[test]
    fn rejects_flags_the_command_does_not_take() {
        let err = parse_command_options(&args(&["--outbox", "/tmp"]), &[PROGRESS_FLAG])
            .expect_err("outbox not allowed");
        assert!(err.contains("--outbox"));
        let err = parse_command_options(&args(&["--progress"]), &[PROGRESS_FLAG])
            .expect_err("missing value");
        assert!(err.contains("requires a value"));
    }
}
