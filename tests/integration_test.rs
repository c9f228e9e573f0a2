use calcpad::engine::{dispatch, Action, Calculator, InputState, Operator, OVERFLOW_TEXT};
use calcpad::storage::{FileStore, PreferenceStore};
use calcpad::theme::{resolve_startup_theme, select_theme, ColorScheme, ThemeId};
use calcpad::ui::actions_from_keys;

fn run_keys(keys: &str) -> Calculator {
    let mut calculator = Calculator::new();
    for action in actions_from_keys(keys) {
        calculator.apply(action);
    }
    calculator
}

#[test]
fn mixed_operators_resolve_multiplication_first() {
    assert_eq!(run_keys("2+3*4=").display_text(), "14");
}

#[test]
fn repeated_operator_overwrites_pending_one() {
    assert_eq!(run_keys("5+*3=").display_text(), "15");
}

#[test]
fn second_decimal_point_is_ignored() {
    assert_eq!(run_keys("1.2.5").display_text(), "1.25");
}

#[test]
fn delete_never_empties_the_display() {
    let calculator = run_keys("12<<<<<");
    assert_eq!(calculator.display_text(), "0");
}

#[test]
fn division_by_zero_overflows_then_starts_fresh() {
    let mut calculator = run_keys("4/0=");
    assert!(calculator.is_overflow());
    assert_eq!(calculator.display_text(), OVERFLOW_TEXT);
    assert_eq!(calculator.state().first_operand, None);

    calculator.on_digit(7);
    assert!(!calculator.is_overflow());
    assert_eq!(calculator.display_text(), "7");

    calculator.on_operator(Operator::Add);
    calculator.on_digit(1);
    calculator.on_equals();
    assert_eq!(calculator.display_text(), "8");
}

#[test]
fn result_chains_into_next_operator() {
    let mut calculator = run_keys("2+3=");
    assert_eq!(calculator.display_text(), "5");

    calculator.on_operator(Operator::Multiply);
    calculator.on_digit(4);
    calculator.on_equals();
    assert_eq!(calculator.display_text(), "20");
}

#[test]
fn digit_after_result_starts_new_operand() {
    let mut calculator = run_keys("2+3=");
    calculator.on_digit(9);
    assert_eq!(calculator.display_text(), "9");
}

#[test]
fn floating_point_noise_is_rounded_away() {
    assert_eq!(run_keys(".1+.2=").display_text(), "0.3");
}

#[test]
fn negative_results_can_be_deleted_back_to_zero() {
    let mut calculator = run_keys("3-8=");
    assert_eq!(calculator.display_text(), "-5");
    calculator.on_delete();
    assert_eq!(calculator.display_text(), "0");
}

#[test]
fn deleting_from_a_result_edits_it() {
    let mut calculator = run_keys("12+3=");
    assert_eq!(calculator.display_text(), "15");
    calculator.on_delete();
    assert_eq!(calculator.display_text(), "1");
    calculator.on_digit(2);
    assert_eq!(calculator.display_text(), "12");
    calculator.on_operator(Operator::Multiply);
    calculator.on_digit(2);
    calculator.on_equals();
    assert_eq!(calculator.display_text(), "24");
}

#[test]
fn overlong_operand_shows_overflow_instead_of_inf() {
    let keys = format!("1+{}*", "9".repeat(400));
    let calculator = run_keys(&keys);
    let text = calculator.display_text();
    assert!(!text.contains("inf"));
    assert!(calculator.state().display.parse::<f64>().unwrap().is_finite());

    let calculator = run_keys(&format!("1+{}", "9".repeat(309)));
    assert!(calculator.is_overflow());
    assert_eq!(calculator.display_text(), OVERFLOW_TEXT);
}

#[test]
fn reset_returns_to_initial_state_from_anywhere() {
    for keys in ["", "12", "3+", "3+4", "4/0=", "9*9=", "1.5-"] {
        let mut calculator = run_keys(keys);
        calculator.on_reset();
        assert_eq!(calculator.state(), &InputState::default(), "after {keys:?}");
        assert_eq!(calculator.display_text(), "0");
    }
}

#[test]
fn pure_dispatch_leaves_input_untouched() {
    let before = dispatch(InputState::default(), Action::Digit(3));
    let after = dispatch(before.clone(), Action::Operator(Operator::Subtract));
    assert_eq!(before.display, "3");
    assert!(before.tokens.is_empty());
    assert_eq!(after.tokens.len(), 2);
}

#[test]
fn independent_calculators_do_not_share_state() {
    let mut a = Calculator::new();
    let b = Calculator::new();
    a.on_digit(8);
    assert_eq!(a.display_text(), "8");
    assert_eq!(b.display_text(), "0");
}

#[test]
fn theme_selection_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.toml");

    let mut store = FileStore::new(&path);
    assert_eq!(
        resolve_startup_theme(&store, ColorScheme::NoPreference, ThemeId::Theme1),
        ThemeId::Theme1
    );
    select_theme(&mut store, ThemeId::Theme3).unwrap();

    let reopened = FileStore::new(&path);
    assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("theme-3"));
    assert_eq!(
        resolve_startup_theme(&reopened, ColorScheme::Light, ThemeId::Theme1),
        ThemeId::Theme3
    );
}
