use mhia_wizard::config::{ConfigModel, SectionName};
use mhia_wizard::wizard::{
    parse_scripted_actions, NoProgress, WizardAction, WizardEffect, WizardEngine,
};
use serde_json::json;

#[test]
fn scripted_actions_parse_in_order() {
    let actions = parse_scripted_actions(
        " next ; BACK;jump:7; set:project.includeAquifer=true ;submit;",
    )
    .expect("parse");
    assert_eq!(
        actions,
        vec![
            WizardAction::Advance,
            WizardAction::Retreat,
            WizardAction::JumpTo(7),
            WizardAction::Update {
                section: SectionName::Project,
                patch: json!({ "includeAquifer": "true" }),
            },
            WizardAction::Submit,
        ]
    );
}

#[test]
fn scripted_actions_reject_unknown_tokens() {
    let err = parse_scripted_actions("next;fly").expect_err("unknown token");
    assert!(err.contains("`fly`"));
    assert!(parse_scripted_actions("jump:x").is_err());
    assert!(parse_scripted_actions("set:basin.basinArea").is_err());
    assert!(parse_scripted_actions("").expect("empty").is_empty());
}

#[test]
fn scripted_set_values_go_through_input_coercion() {
    let mut wizard = WizardEngine::new(NoProgress);
    for action in parse_scripted_actions(
        "set:basin.basinArea=abc;set:aquifer.rechargeMonths=1,2;set:project.includeAquifer=true",
    )
    .expect("parse")
    {
        wizard.dispatch(action);
    }
    assert_eq!(wizard.config().basin.basin_area, 0.0);
    assert_eq!(wizard.config().aquifer.recharge_months, vec![1, 2]);
    assert!(wizard.config().project.include_aquifer);
    assert_eq!(
        wizard.config().basin.mean_flow,
        ConfigModel::default().basin.mean_flow
    );
}

#[test]
fn scripted_walk_to_final_step() {
    let mut wizard = WizardEngine::new(NoProgress);
    let mut moves = Vec::new();
    for action in parse_scripted_actions("next;next;next;next;next").expect("parse") {
        moves.push(wizard.dispatch(action).effect);
    }
    assert_eq!(moves[3], WizardEffect::Moved { from: 3, to: 7 });
    assert_eq!(moves[4], WizardEffect::None);
}
