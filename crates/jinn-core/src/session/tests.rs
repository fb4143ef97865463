//! Tests for the session reducer.

use super::*;
use crate::error::GenerationError;
use crate::generator::RegeneratedStep;
use crate::models::{Language, PlanItem, Stage, Step, StepId, Strategy, StrategyId};
use crate::tree;

fn failure() -> GenerationError {
    GenerationError::Parse("bad output".to_string())
}

/// State in PROCESS showing `[a, parallel{b, c}, d]` for the first strategy.
fn process_state() -> (GoalState, StrategyId, [StepId; 4]) {
    let a = Step::new("Measure the [Room]");
    let b = Step::new("Buy [Paint]");
    let c = Step::new("Buy [Brushes]");
    let d = Step::new("Paint the walls");
    let ids = [a.id.clone(), b.id.clone(), c.id.clone(), d.id.clone()];

    let mut strategy = Strategy::new("DIY", "Do it yourself");
    strategy.plan = Some(vec![
        PlanItem::single(a),
        PlanItem::parallel(vec![b, c]),
        PlanItem::single(d),
    ]);
    strategy.plan_language = Some(Language::En);
    let strategy_id = strategy.id.clone();

    let mut state = GoalState::new(Language::En);
    state.description = "Paint the bedroom".to_string();
    state.strategies = vec![strategy, Strategy::new("Hire", "Hire a painter")];
    state.selected_strategy_id = Some(strategy_id.clone());
    state.stage = Stage::Process;
    (state, strategy_id, ids)
}

fn plan_of<'a>(state: &'a GoalState, id: &StrategyId) -> &'a [PlanItem] {
    state.strategy(id).and_then(|s| s.plan.as_deref()).unwrap()
}

#[test]
fn test_generate_requires_description() {
    let mut state = GoalState::new(Language::En);
    assert!(reduce(&mut state, Action::GenerateStrategies).is_none());
    assert_eq!(state.stage, Stage::Input);

    reduce(&mut state, Action::set_goal("  ", Some("x".into()), None));
    assert!(reduce(&mut state, Action::GenerateStrategies).is_none());
}

#[test]
fn test_set_goal_drops_blank_context() {
    let mut state = GoalState::new(Language::En);
    reduce(
        &mut state,
        Action::set_goal(" Run a marathon ", Some("  ".into()), Some(" Berlin ".into())),
    );
    assert_eq!(state.description, "Run a marathon");
    assert_eq!(state.quantification, None);
    assert_eq!(state.environment.as_deref(), Some("Berlin"));
}

#[test]
fn test_generate_clears_previous_results() {
    let (mut state, _, _) = process_state();
    state.resources.merge_names(["Paint"], Language::En);
    state.stage = Stage::Input;

    let request = reduce(&mut state, Action::GenerateStrategies);
    assert!(matches!(request, Some(Request::Strategies { .. })));
    assert_eq!(state.stage, Stage::Processing);
    assert!(state.loading);
    assert!(state.strategies.is_empty());
    assert!(state.resources.is_empty());
    assert!(state.selected_strategy_id.is_none());

    // Only one strategies request at a time
    assert!(reduce(&mut state, Action::GenerateStrategies).is_none());
}

#[test]
fn test_strategies_success_and_failure() {
    let mut state = GoalState::new(Language::En);
    reduce(&mut state, Action::set_goal("Bake bread", None, None));
    reduce(&mut state, Action::GenerateStrategies);
    reduce(
        &mut state,
        Action::StrategiesGenerated(Ok(vec![Strategy::new("Sourdough", "Slow")])),
    );
    assert_eq!(state.stage, Stage::Selection);
    assert_eq!(state.strategies.len(), 3);
    assert!(!state.loading);

    reduce(&mut state, Action::GenerateStrategies);
    reduce(&mut state, Action::StrategiesGenerated(Err(failure())));
    assert_eq!(state.stage, Stage::Input);
    assert_eq!(
        state.error.as_deref(),
        Some(Language::En.generic_error())
    );
}

#[test]
fn test_empty_strategies_are_a_failure() {
    let mut state = GoalState::new(Language::En);
    reduce(&mut state, Action::set_goal("Bake bread", None, None));
    reduce(&mut state, Action::GenerateStrategies);
    reduce(&mut state, Action::StrategiesGenerated(Ok(vec![])));
    assert_eq!(state.stage, Stage::Input);
    assert!(state.error.is_some());
}

#[test]
fn test_select_cached_plan_skips_request() {
    let (mut state, strategy_id, _) = process_state();
    reduce(&mut state, Action::BackToSelection);
    assert_eq!(state.stage, Stage::Selection);
    assert!(state.selected_strategy_id.is_none());

    assert!(reduce(&mut state, Action::SelectStrategy(strategy_id.clone())).is_none());
    assert_eq!(state.stage, Stage::Process);
    assert_eq!(state.selected_strategy_id, Some(strategy_id));
}

#[test]
fn test_select_stale_plan_issues_one_request() {
    let (mut state, strategy_id, _) = process_state();
    reduce(&mut state, Action::BackToSelection);
    reduce(&mut state, Action::SetLanguage(Language::Zh));

    let request = reduce(&mut state, Action::SelectStrategy(strategy_id.clone()));
    let Some(Request::StrategyPlan { language, strategy, .. }) = request else {
        panic!("expected a strategy plan request");
    };
    assert_eq!(language, Language::Zh);
    assert_eq!(strategy.id, strategy_id);
    assert_eq!(state.stage, Stage::Processing);

    // The stale plan is kept until the new one arrives
    assert!(state.strategy(&strategy_id).unwrap().plan.is_some());
}

#[test]
fn test_plan_failure_returns_to_selection() {
    let (mut state, _, _) = process_state();
    let other = state.strategies[1].id.clone();
    reduce(&mut state, Action::BackToSelection);
    reduce(&mut state, Action::SelectStrategy(other.clone()));

    reduce(
        &mut state,
        Action::StrategyPlanGenerated {
            strategy_id: other.clone(),
            language: Language::En,
            result: Err(failure()),
        },
    );
    assert_eq!(state.stage, Stage::Selection);
    assert!(state.selected_strategy_id.is_none());
    assert!(state.strategy(&other).unwrap().plan.is_none());
    assert!(state.error.is_some());
}

#[test]
fn test_plan_success_merges_resources() {
    let (mut state, _, _) = process_state();
    let other = state.strategies[1].id.clone();
    state.resources.merge_names(["Paint"], Language::En);
    reduce(&mut state, Action::BackToSelection);
    reduce(&mut state, Action::SelectStrategy(other.clone()));

    let plan = vec![
        PlanItem::single(Step::new("Call a [Painter]")),
        PlanItem::single(Step::new("Pick a [paint] color")),
    ];
    reduce(
        &mut state,
        Action::StrategyPlanGenerated {
            strategy_id: other.clone(),
            language: Language::En,
            result: Ok(plan),
        },
    );

    assert_eq!(state.stage, Stage::Process);
    assert_eq!(state.selected_strategy_id, Some(other.clone()));
    assert!(state.strategy(&other).unwrap().has_plan_for(Language::En));
    let names: Vec<_> = state.resources.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Paint", "Painter"]);
}

#[test]
fn test_toggle_complete_keeps_children() {
    let (mut state, strategy_id, [a, ..]) = process_state();
    reduce(
        &mut state,
        Action::StepExpanded {
            step_id: a.clone(),
            language: Language::En,
            result: Ok(vec![Step::new("Get a [Tape Measure]")]),
        },
    );
    reduce(&mut state, Action::ToggleStepComplete(a.clone()));

    let step = tree::find_step(plan_of(&state, &strategy_id), &a).unwrap();
    assert!(step.is_completed);
    assert!(step.is_expanded);
    assert_eq!(step.sub_steps.as_ref().map(Vec::len), Some(1));
    assert!(state.resources.find_by_name("tape measure").is_some());
}

#[test]
fn test_expand_toggles_cached_children() {
    let (mut state, strategy_id, [_, b, ..]) = process_state();
    let request = reduce(&mut state, Action::ExpandStep(b.clone()));
    let Some(Request::ExpandStep { context, .. }) = request else {
        panic!("expected an expansion request");
    };
    assert_eq!(context, "Paint the bedroom (Strategy: DIY)");
    assert!(tree::find_step(plan_of(&state, &strategy_id), &b).unwrap().loading);

    // A second click while loading does nothing
    assert!(reduce(&mut state, Action::ExpandStep(b.clone())).is_none());

    reduce(
        &mut state,
        Action::StepExpanded {
            step_id: b.clone(),
            language: Language::En,
            result: Ok(vec![Step::new("Pick a color"), Step::new("Check the can")]),
        },
    );
    assert!(reduce(&mut state, Action::ExpandStep(b.clone())).is_none());
    let step = tree::find_step(plan_of(&state, &strategy_id), &b).unwrap();
    assert!(!step.is_expanded);
    assert!(step.has_children());
}

#[test]
fn test_expand_failure_leaves_step_childless() {
    let (mut state, strategy_id, [.., d]) = process_state();
    reduce(&mut state, Action::ExpandStep(d.clone()));
    reduce(
        &mut state,
        Action::StepExpanded {
            step_id: d.clone(),
            language: Language::En,
            result: Err(failure()),
        },
    );

    let step = tree::find_step(plan_of(&state, &strategy_id), &d).unwrap();
    assert!(step.sub_steps.is_none());
    assert!(!step.is_expanded);
    assert!(!step.loading);
    assert!(state.error.is_some());
}

#[test]
fn test_expansion_context_includes_environment() {
    let (mut state, _, [a, ..]) = process_state();
    state.environment = Some("Small flat".to_string());
    let Some(Request::ExpandStep { context, .. }) = reduce(&mut state, Action::ExpandStep(a))
    else {
        panic!("expected an expansion request");
    };
    assert_eq!(
        context,
        "Paint the bedroom [Environment: Small flat] (Strategy: DIY)"
    );
}

#[test]
fn test_edit_save_rederives_resources() {
    let (mut state, strategy_id, [_, _, c, _]) = process_state();
    let request = reduce(
        &mut state,
        Action::EditStep {
            step_id: c.clone(),
            text: "Borrow a [Roller] and a [Tray]".to_string(),
            mode: EditMode::Save,
        },
    );
    assert!(request.is_none());

    let step = tree::find_step(plan_of(&state, &strategy_id), &c).unwrap();
    assert_eq!(step.resources, vec!["Roller", "Tray"]);
    assert!(state.resources.find_by_name("roller").is_some());
    assert!(state.resources.find_by_name("tray").is_some());
}

#[test]
fn test_edit_unknown_step_is_noop() {
    let (mut state, _, _) = process_state();
    let before = state.clone();
    let request = reduce(
        &mut state,
        Action::EditStep {
            step_id: StepId::generate(),
            text: "Anything [Else]".to_string(),
            mode: EditMode::Future,
        },
    );
    assert!(request.is_none());
    assert_eq!(state, before);
}

#[test]
fn test_edit_substeps_discards_children() {
    let (mut state, strategy_id, [a, ..]) = process_state();
    reduce(
        &mut state,
        Action::StepExpanded {
            step_id: a.clone(),
            language: Language::En,
            result: Ok(vec![Step::new("Old child")]),
        },
    );

    let request = reduce(
        &mut state,
        Action::EditStep {
            step_id: a.clone(),
            text: "Measure the [Hall]".to_string(),
            mode: EditMode::SubSteps,
        },
    );
    let Some(Request::ExpandStep { instruction, .. }) = request else {
        panic!("expected an expansion request");
    };
    assert_eq!(instruction, "Measure the [Hall]");

    let step = tree::find_step(plan_of(&state, &strategy_id), &a).unwrap();
    assert!(step.sub_steps.is_none());
    assert!(!step.is_expanded);
    assert!(step.loading);
}

#[test]
fn test_future_edit_requests_following_items() {
    let (mut state, strategy_id, [a, b, c, d]) = process_state();
    let request = reduce(
        &mut state,
        Action::EditStep {
            step_id: a.clone(),
            text: "Measure the [Hall]".to_string(),
            mode: EditMode::Future,
        },
    );
    let Some(Request::FutureSteps {
        count,
        prior_instructions,
        snapshot,
        ..
    }) = request
    else {
        panic!("expected a future steps request");
    };
    assert_eq!(count, 2);
    assert_eq!(prior_instructions, vec!["Measure the [Hall]"]);
    assert_eq!(snapshot[0].summary(), "Measure the [Hall]");

    let plan = plan_of(&state, &strategy_id);
    assert!(!tree::find_step(plan, &a).unwrap().loading);
    for id in [&b, &c, &d] {
        assert!(tree::find_step(plan, id).unwrap().loading);
    }
}

#[test]
fn test_future_edit_on_parallel_member_only_edits() {
    let (mut state, strategy_id, [_, b, ..]) = process_state();
    let request = reduce(
        &mut state,
        Action::EditStep {
            step_id: b.clone(),
            text: "Buy [Primer]".to_string(),
            mode: EditMode::Future,
        },
    );
    assert!(request.is_none());
    let step = tree::find_step(plan_of(&state, &strategy_id), &b).unwrap();
    assert_eq!(step.instruction, "Buy [Primer]");
}

#[test]
fn test_future_edit_on_last_item_is_noop() {
    let (mut state, strategy_id, [.., d]) = process_state();
    let request = reduce(
        &mut state,
        Action::EditStep {
            step_id: d.clone(),
            text: "Paint the walls".to_string(),
            mode: EditMode::Future,
        },
    );
    assert!(request.is_none());
    let plan = plan_of(&state, &strategy_id);
    assert_eq!(plan.len(), 3);
    assert!(plan.iter().flat_map(PlanItem::steps).all(|step| !step.loading));
}

#[test]
fn test_future_failure_restores_snapshot() {
    let (mut state, strategy_id, [a, ..]) = process_state();
    let Some(request) = reduce(
        &mut state,
        Action::EditStep {
            step_id: a.clone(),
            text: "Measure the [Hall]".to_string(),
            mode: EditMode::Future,
        },
    ) else {
        panic!("expected a request");
    };
    let Request::FutureSteps {
        snapshot, count, ..
    } = request
    else {
        panic!("expected a future steps request");
    };

    reduce(
        &mut state,
        Action::FutureStepsGenerated {
            strategy_id: strategy_id.clone(),
            anchor_step_id: a.clone(),
            count,
            language: Language::En,
            snapshot: snapshot.clone(),
            result: Err(failure()),
        },
    );
    assert_eq!(plan_of(&state, &strategy_id), snapshot.as_slice());
    assert!(state.error.is_some());
}

#[test]
fn test_future_failure_keeps_expansion_that_finished_meanwhile() {
    let (mut state, strategy_id, [a, b, c, d]) = process_state();
    assert!(reduce(&mut state, Action::ExpandStep(a.clone())).is_some());

    let Some(Request::FutureSteps {
        snapshot, count, ..
    }) = reduce(
        &mut state,
        Action::EditStep {
            step_id: a.clone(),
            text: "Measure the [Hall]".to_string(),
            mode: EditMode::Future,
        },
    )
    else {
        panic!("expected a future steps request");
    };

    reduce(
        &mut state,
        Action::StepExpanded {
            step_id: a.clone(),
            language: Language::En,
            result: Ok(vec![
                Step::new("Measure the width"),
                Step::new("Measure the height"),
                Step::new("Write it down"),
            ]),
        },
    );
    reduce(
        &mut state,
        Action::FutureStepsGenerated {
            strategy_id: strategy_id.clone(),
            anchor_step_id: a.clone(),
            count,
            language: Language::En,
            snapshot,
            result: Err(failure()),
        },
    );

    let plan = plan_of(&state, &strategy_id);
    let step = tree::find_step(plan, &a).unwrap();
    assert!(!step.loading);
    assert!(step.is_expanded);
    assert_eq!(step.sub_steps.as_ref().map(Vec::len), Some(3));
    assert_eq!(step.instruction, "Measure the [Hall]");
    for id in [&b, &c, &d] {
        assert!(!tree::find_step(plan, id).unwrap().loading);
    }

    // The cached children toggle without another request.
    assert!(reduce(&mut state, Action::ExpandStep(a.clone())).is_none());
    assert!(!tree::find_step(plan_of(&state, &strategy_id), &a)
        .unwrap()
        .is_expanded);
}

#[test]
fn test_future_failure_leaves_other_requests_loading() {
    let (mut state, strategy_id, [a, _, _, d]) = process_state();
    assert!(reduce(&mut state, Action::ExpandStep(d.clone())).is_some());

    let Some(Request::FutureSteps {
        snapshot, count, ..
    }) = reduce(
        &mut state,
        Action::EditStep {
            step_id: a.clone(),
            text: "Measure the [Hall]".to_string(),
            mode: EditMode::Future,
        },
    )
    else {
        panic!("expected a future steps request");
    };
    reduce(
        &mut state,
        Action::FutureStepsGenerated {
            strategy_id: strategy_id.clone(),
            anchor_step_id: a,
            count,
            language: Language::En,
            snapshot,
            result: Err(failure()),
        },
    );

    // The expansion of `d` is still in flight.
    assert!(tree::find_step(plan_of(&state, &strategy_id), &d).unwrap().loading);
}

#[test]
fn test_edit_substeps_while_loading_sends_nothing() {
    let (mut state, strategy_id, [a, ..]) = process_state();
    assert!(reduce(&mut state, Action::ExpandStep(a.clone())).is_some());

    let request = reduce(
        &mut state,
        Action::EditStep {
            step_id: a.clone(),
            text: "Measure the [Hall]".to_string(),
            mode: EditMode::SubSteps,
        },
    );
    assert!(request.is_none());

    let step = tree::find_step(plan_of(&state, &strategy_id), &a).unwrap();
    assert_eq!(step.instruction, "Measure the [Hall]");
    assert!(step.loading);
}

#[test]
fn test_future_success_splices_after_anchor() {
    let (mut state, strategy_id, [a, ..]) = process_state();
    let snapshot = plan_of(&state, &strategy_id).to_vec();
    reduce(
        &mut state,
        Action::FutureStepsGenerated {
            strategy_id: strategy_id.clone(),
            anchor_step_id: a.clone(),
            count: 2,
            language: Language::En,
            snapshot,
            result: Ok(vec![
                PlanItem::single(Step::new("Rent a [Ladder]")),
                PlanItem::single(Step::new("Prime the walls")),
                PlanItem::single(Step::new("Extra item")),
            ]),
        },
    );

    let plan = plan_of(&state, &strategy_id);
    assert_eq!(plan.len(), 3);
    assert_eq!(plan[0].steps()[0].id, a);
    assert_eq!(plan[1].summary(), "Rent a [Ladder]");
    assert_eq!(plan[2].summary(), "Prime the walls");
    assert!(state.resources.find_by_name("ladder").is_some());
}

#[test]
fn test_regenerate_step_replaces_text_and_children() {
    let (mut state, strategy_id, [a, ..]) = process_state();
    reduce(
        &mut state,
        Action::StepExpanded {
            step_id: a.clone(),
            language: Language::En,
            result: Ok(vec![Step::new("Child")]),
        },
    );
    let Some(Request::RegenerateStep { context, .. }) =
        reduce(&mut state, Action::RegenerateStep(a.clone()))
    else {
        panic!("expected a regenerate request");
    };
    assert_eq!(context, "Paint the bedroom");

    reduce(
        &mut state,
        Action::StepRegenerated {
            step_id: a.clone(),
            language: Language::En,
            result: Ok(RegeneratedStep {
                instruction: "Use a [Laser Meter]".to_string(),
                resources: vec!["Laser Meter".to_string()],
            }),
        },
    );
    let step = tree::find_step(plan_of(&state, &strategy_id), &a).unwrap();
    assert_eq!(step.instruction, "Use a [Laser Meter]");
    assert!(step.sub_steps.is_none());
    assert!(!step.is_expanded);
    assert!(!step.loading);
    assert!(state.resources.find_by_name("laser meter").is_some());
}

#[test]
fn test_click_new_resource() {
    let (mut state, _, _) = process_state();
    state.resources.merge_names(["Paint"], Language::En);

    let request = reduce(&mut state, Action::ClickResource("[Drill]".to_string()));
    let Some(Request::ResourcePlan { resource_id, name, .. }) = request else {
        panic!("expected a resource plan request");
    };
    assert_eq!(name, "Drill");

    let first = state.resources.iter().next().unwrap();
    assert_eq!(first.id, resource_id);
    assert!(first.loading);
    assert!(first.is_expanded);
    assert_eq!(state.selected_resource_id, Some(resource_id.clone()));

    reduce(
        &mut state,
        Action::ResourcePlanGenerated {
            resource_id: resource_id.clone(),
            language: Language::En,
            result: Ok(vec![
                Step::new("Visit a hardware store"),
                Step::new("Compare models"),
                Step::new("Buy one"),
            ]),
        },
    );
    let resource = state.resources.get(&resource_id).unwrap();
    assert!(!resource.loading);
    assert_eq!(resource.acquisition_steps.as_ref().map(Vec::len), Some(3));
}

#[test]
fn test_click_existing_resource_reuses_plan() {
    let (mut state, _, _) = process_state();
    state.resources.merge_names(["Paint"], Language::En);
    let id = state.resources.find_by_name("paint").unwrap().id.clone();
    state.resources.update(&id, |resource| {
        resource.acquisition_steps = Some(vec![Step::new("Go to the shop")]);
    });

    assert!(reduce(&mut state, Action::ClickResource("PAINT".to_string())).is_none());
    assert_eq!(state.selected_resource_id, Some(id.clone()));

    reduce(&mut state, Action::SetLanguage(Language::Zh));
    let request = reduce(&mut state, Action::ClickResource("paint".to_string()));
    assert!(matches!(request, Some(Request::ResourcePlan { .. })));

    reduce(
        &mut state,
        Action::ResourcePlanGenerated {
            resource_id: id.clone(),
            language: Language::Zh,
            result: Err(failure()),
        },
    );
    let resource = state.resources.get(&id).unwrap();
    assert!(!resource.loading);
    assert_eq!(resource.acquisition_steps.as_ref().map(Vec::len), Some(1));
    assert_eq!(state.error.as_deref(), Some(Language::Zh.generic_error()));
}

#[test]
fn test_resource_panel_toggles() {
    let (mut state, _, _) = process_state();
    let Some(Request::ResourcePlan { resource_id, .. }) =
        reduce(&mut state, Action::ClickResource("Ladder".to_string()))
    else {
        panic!("expected a resource plan request");
    };
    let step = Step::new("Ask a neighbour");
    let step_id = step.id.clone();
    reduce(
        &mut state,
        Action::ResourcePlanGenerated {
            resource_id: resource_id.clone(),
            language: Language::En,
            result: Ok(vec![step]),
        },
    );

    reduce(
        &mut state,
        Action::ToggleResourceStepComplete {
            resource_id: resource_id.clone(),
            step_id,
        },
    );
    reduce(&mut state, Action::ToggleResourceExpanded(resource_id.clone()));
    let resource = state.resources.get(&resource_id).unwrap();
    assert!(resource.acquisition_steps.as_ref().unwrap()[0].is_completed);
    assert!(!resource.is_expanded);

    reduce(&mut state, Action::CloseResource);
    assert!(state.selected_resource_id.is_none());
}

#[test]
fn test_language_toggle_clears_error() {
    let mut state = GoalState::new(Language::En);
    state.error = Some("boom".to_string());
    reduce(&mut state, Action::ToggleLanguage);
    assert_eq!(state.language, Language::Zh);
    assert!(state.error.is_none());

    reduce(&mut state, Action::ProcessSaveFailed);
    assert_eq!(state.error.as_deref(), Some("保存流程失败"));
    reduce(&mut state, Action::DismissError);
    assert!(state.error.is_none());
}

#[test]
fn test_reset_keeps_language_only() {
    let (mut state, _, _) = process_state();
    state.language = Language::Zh;
    reduce(&mut state, Action::Reset);
    assert_eq!(state, GoalState::new(Language::Zh));
}

#[test]
fn test_load_process_sets_stage() {
    use crate::models::{ProcessId, ProcessSnapshot, SavedProcess};

    let (mut state, strategy_id, [_, b, ..]) = process_state();
    reduce(&mut state, Action::ExpandStep(b.clone()));
    let mut snapshot = ProcessSnapshot::from(&state);
    state.resources.merge_names(["Paint"], Language::En);

    let now = jiff::Timestamp::now();
    let mut saved = SavedProcess {
        id: ProcessId::generate(),
        user_id: "local".to_string(),
        snapshot: snapshot.clone(),
        created_at: now,
        updated_at: now,
    };

    let mut fresh = GoalState::new(Language::En);
    reduce(&mut fresh, Action::LoadProcess(saved.clone()));
    assert_eq!(fresh.stage, Stage::Process);
    assert_eq!(fresh.selected_strategy_id, Some(strategy_id.clone()));
    assert!(fresh.resources.is_empty());
    assert!(!tree::find_step(plan_of(&fresh, &strategy_id), &b).unwrap().loading);

    snapshot.selected_strategy_id = None;
    saved.snapshot = snapshot;
    reduce(&mut fresh, Action::LoadProcess(saved));
    assert_eq!(fresh.stage, Stage::Selection);
}
