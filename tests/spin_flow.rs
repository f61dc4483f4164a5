//! Spin lifecycle: request, prompt, confirm/cancel, settle, and how the
//! escalation session behaves across spins and tab switches.

use crux_core::testing::AppTester;
use mealwheel::app::Screen;
use mealwheel::escalation::Tier;
use mealwheel::menu::{Category, MenuList};
use mealwheel::wheel::pick_winner;
use mealwheel::{App, Effect, Event, Model, ToastKind};

fn settle_on_target(app: &AppTester<App, Effect>, model: &mut Model) {
    let plan = model
        .active_spin
        .as_ref()
        .expect("a spin should be in flight")
        .plan
        .clone();
    app.update(
        Event::SpinSettled {
            landing_angle_deg: plan.landing_angle_deg,
            wheel_rotation_deg: plan.wheel_rotation_deg,
        },
        model,
    );
}

#[test]
fn full_spin_reports_a_winner_from_the_list() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    let update = app.update(Event::SpinRequested, &mut model);
    assert!(update.effects.iter().any(|e| matches!(e, Effect::Render(_))));
    let prompt = model.prompt.clone().expect("prompt should be shown");
    assert_eq!(prompt.tier, Tier::FirstAttempt);
    assert_eq!(prompt.cancel_label, "Never Mind... 😅");

    app.update(Event::SpinConfirmed, &mut model);
    assert!(model.is_spinning());
    assert!(model.prompt.is_none());
    assert_eq!(model.session.attempts(), 1);

    let spin = model.active_spin.clone().expect("spin in flight");
    assert_eq!(spin.labels.len(), 16);
    assert_eq!(
        spin.plan.winning_index,
        pick_winner(
            spin.labels.len(),
            spin.plan.landing_angle_deg,
            spin.plan.wheel_rotation_deg
        )
    );

    settle_on_target(&app, &mut model);
    assert!(!model.is_spinning());
    let result = model.result.clone().expect("winner reported");
    assert_eq!(result.index, spin.plan.winning_index);
    assert_eq!(result.label, spin.labels[result.index]);
}

#[test]
fn settling_off_target_still_agrees_with_the_visual() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    app.update(Event::SpinRequested, &mut model);
    app.update(Event::SpinConfirmed, &mut model);
    let labels = model.active_spin.as_ref().unwrap().labels.clone();

    // The shell settled somewhere other than the drawn target; the reported
    // winner must match the reported angles, not the plan.
    app.update(
        Event::SpinSettled {
            landing_angle_deg: 123.0,
            wheel_rotation_deg: 1800.0 + 45.0,
        },
        &mut model,
    );

    let result = model.result.clone().expect("winner reported");
    assert_eq!(result.index, pick_winner(labels.len(), 123.0, 1845.0));
    assert_eq!(result.label, labels[result.index]);
}

#[test]
fn cancel_dismisses_the_prompt_without_advancing_the_session() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    app.update(Event::SpinRequested, &mut model);
    assert!(model.prompt.is_some());

    app.update(Event::SpinCancelled, &mut model);
    assert!(model.prompt.is_none());
    assert_eq!(model.session.attempts(), 0);
    assert!(!model.is_spinning());

    // The next request is still treated as the first attempt.
    app.update(Event::SpinRequested, &mut model);
    assert_eq!(model.prompt.as_ref().unwrap().tier, Tier::FirstAttempt);
}

#[test]
fn repeated_spins_escalate_and_saturate() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    let expected = [
        Tier::FirstAttempt,
        Tier::Disappointment,
        Tier::Anger(0),
        Tier::Anger(1),
        Tier::Anger(2),
        Tier::Anger(3),
        Tier::Anger(4),
        Tier::Anger(5),
        Tier::Anger(6),
        Tier::Anger(6),
        Tier::Anger(6),
    ];

    for tier in expected {
        app.update(Event::SpinRequested, &mut model);
        assert_eq!(model.prompt.as_ref().unwrap().tier, tier);
        app.update(Event::SpinConfirmed, &mut model);
        settle_on_target(&app, &mut model);
        app.update(Event::ResultDismissed, &mut model);
    }
}

#[test]
fn switching_tabs_resets_the_session() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    for _ in 0..4 {
        app.update(Event::SpinRequested, &mut model);
        app.update(Event::SpinConfirmed, &mut model);
        settle_on_target(&app, &mut model);
    }
    assert_eq!(model.session.attempts(), 4);

    let update = app.update(
        Event::ScreenSelected {
            screen: Screen::Wheel(Category::Restaurants),
        },
        &mut model,
    );

    assert_eq!(model.session.attempts(), 0);
    assert!(model.prompt.is_none());
    assert!(model.result.is_none());
    assert!(!model.is_spinning());
    // Regaining focus reloads the screen's list from the store.
    assert!(update.effects.iter().any(|e| matches!(e, Effect::KeyValue(_))));

    app.update(Event::SpinRequested, &mut model);
    assert_eq!(model.prompt.as_ref().unwrap().tier, Tier::FirstAttempt);
}

#[test]
fn empty_list_refuses_the_spin_with_guidance() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();
    model.menus.replace(Category::HomeFoods, MenuList::from_labels(vec![]));

    app.update(Event::SpinRequested, &mut model);

    assert!(model.prompt.is_none());
    let toast = model.active_toast.as_ref().expect("guidance toast");
    assert_eq!(toast.kind, ToastKind::Warning);
    assert!(toast.message.contains("Manage"));
}

#[test]
fn requests_and_confirms_are_ignored_mid_spin() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    app.update(Event::SpinRequested, &mut model);
    app.update(Event::SpinConfirmed, &mut model);
    let spin = model.active_spin.clone().unwrap();
    assert_eq!(model.session.attempts(), 1);

    // A second request while the ball is rolling does nothing.
    app.update(Event::SpinRequested, &mut model);
    assert!(model.prompt.is_none());

    // A stray confirm without a prompt does nothing either.
    app.update(Event::SpinConfirmed, &mut model);
    assert_eq!(model.session.attempts(), 1);
    assert_eq!(model.active_spin.as_ref(), Some(&spin));
}

#[test]
fn confirm_without_a_prompt_is_ignored() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    app.update(Event::SpinConfirmed, &mut model);
    assert!(!model.is_spinning());
    assert_eq!(model.session.attempts(), 0);
}

#[test]
fn settle_without_a_spin_is_ignored() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    app.update(
        Event::SpinSettled {
            landing_angle_deg: 10.0,
            wheel_rotation_deg: 20.0,
        },
        &mut model,
    );
    assert!(model.result.is_none());
}

#[test]
fn manage_screen_has_no_wheel_and_ignores_spin_requests() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    app.update(
        Event::ScreenSelected {
            screen: Screen::Manage,
        },
        &mut model,
    );
    app.update(Event::SpinRequested, &mut model);
    assert!(model.prompt.is_none());

    let view = app.view(&model);
    assert!(view.wheel.is_none());
    assert_eq!(view.home_foods.len(), 16);
    assert_eq!(view.restaurants.len(), 16);
}

#[test]
fn view_model_carries_the_wheel_geometry_and_spin_target() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    let view = app.view(&model);
    let wheel = view.wheel.expect("wheel screen");
    assert_eq!(wheel.labels.len(), 16);
    assert!((wheel.segment_angle_deg - 22.5).abs() < f64::EPSILON);
    assert_eq!(wheel.segment_colors.len(), 16);
    assert_eq!(wheel.segment_colors[0], "#d62c2c");
    assert!(!wheel.is_spinning);
    assert!(wheel.spin_target.is_none());

    app.update(Event::SpinRequested, &mut model);
    app.update(Event::SpinConfirmed, &mut model);

    let view = app.view(&model);
    let wheel = view.wheel.expect("wheel screen");
    assert!(wheel.is_spinning);
    let target = wheel.spin_target.expect("target for the shell animation");
    let plan = &model.active_spin.as_ref().unwrap().plan;
    assert!((target.wheel_rotation_deg - plan.wheel_rotation_deg).abs() < f64::EPSILON);
    assert!((target.landing_angle_deg - plan.landing_angle_deg).abs() < f64::EPSILON);
    assert_eq!(target.duration_ms, 4000);
}
