#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliVerb {
    Steps,
    Show,
    Run,
    Reset,
    Help,
    Unknown,
}

pub fn parse_cli_verb(input: &str) -> CliVerb {
    match input {
        "steps" => CliVerb::Steps,
        "show" => CliVerb::Show,
        "run" => CliVerb::Run,
        "reset" => CliVerb::Reset,
        "help" | "--help" | "-h" => CliVerb::Help,
        _ => CliVerb::Unknown,
    }
}

pub fn cli_help_lines() -> Vec<String> {
    vec![
        "Usage: mhia-wizard <command> [options]".to_string(),
        String::new(),
        "Commands:".to_string(),
        "  steps [--progress PATH]              List wizard steps with visibility and completion"
            .to_string(),
        "  show [--progress PATH]               Print the current configuration as YAML"
            .to_string(),
        "  run [--script ACTIONS] [--progress PATH] [--outbox DIR]".to_string(),
        "                                       Apply scripted actions; `submit` writes the request to the outbox"
            .to_string(),
        "  reset [--progress PATH]              Delete saved wizard progress".to_string(),
        String::new(),
        "Actions (`;`-separated, also read from MHIA_WIZARD_SCRIPT):".to_string(),
        "  next | back | jump:<order> | set:<section>.<field>[.<field>]=<value> | submit"
            .to_string(),
    ]
}

pub(crate) fn help_text() -> String {
    cli_help_lines().join("\n")
}
