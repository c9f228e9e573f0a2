//! Property-based tests for the reducer and the input controller.

use calcpad::engine::{dispatch, reduce, Action, InputState, Operator, Token};
use proptest::prelude::*;

fn arbitrary_operator() -> impl Strategy<Value = Operator> {
    prop_oneof![
        Just(Operator::Add),
        Just(Operator::Subtract),
        Just(Operator::Multiply),
        Just(Operator::Divide),
    ]
}

fn non_dividing_operator() -> impl Strategy<Value = Operator> {
    prop_oneof![
        Just(Operator::Add),
        Just(Operator::Subtract),
        Just(Operator::Multiply),
    ]
}

fn arbitrary_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        4 => (0u8..=9).prop_map(Action::Digit),
        1 => Just(Action::DecimalPoint),
        2 => arbitrary_operator().prop_map(Action::Operator),
        1 => Just(Action::Equals),
        1 => Just(Action::Delete),
        1 => Just(Action::Reset),
    ]
}

prop_compose! {
    fn well_formed_sequence()(
        first in -1000.0f64..1000.0,
        rest in prop::collection::vec((non_dividing_operator(), -1000.0f64..1000.0), 0..6),
    ) -> Vec<Token> {
        let mut tokens = vec![Token::Number(first)];
        for (op, n) in rest {
            tokens.push(Token::Operator(op));
            tokens.push(Token::Number(n));
        }
        tokens
    }
}

proptest! {
    #[test]
    fn bounded_sequences_without_division_stay_finite(tokens in well_formed_sequence()) {
        let result = reduce(&tokens);
        prop_assert!(result.is_ok());
        prop_assert!(result.unwrap().is_finite());
    }

    #[test]
    fn single_number_reduces_to_itself(n in -1e12f64..1e12) {
        prop_assert_eq!(reduce(&[Token::Number(n)]), Ok(n));
    }

    #[test]
    fn even_length_sequences_are_rejected(tokens in well_formed_sequence(), op in arbitrary_operator()) {
        let mut tokens = tokens;
        tokens.push(Token::Operator(op));
        prop_assert!(reduce(&tokens).is_err());
    }

    #[test]
    fn display_always_parses_as_finite(actions in prop::collection::vec(arbitrary_action(), 0..40)) {
        let mut state = InputState::default();
        for action in actions {
            state = dispatch(state, action);
            prop_assert!(!state.display.is_empty());
            let value: f64 = state.display.parse().unwrap();
            prop_assert!(value.is_finite());
            prop_assert!(state.display.matches('.').count() <= 1);
        }
    }

    #[test]
    fn long_digit_runs_keep_display_finite(
        digit in 1u8..=9,
        len in 300usize..400,
        op in arbitrary_operator(),
    ) {
        let mut state = InputState::default();
        for _ in 0..len {
            state = dispatch(state, Action::Digit(digit));
            prop_assert!(state.display.parse::<f64>().unwrap().is_finite());
        }
        state = dispatch(state, Action::Operator(op));
        prop_assert!(state.display.parse::<f64>().unwrap().is_finite());
        prop_assert!(state.tokens.iter().all(|t| t.as_number().map_or(true, f64::is_finite)));
    }

    #[test]
    fn token_sequence_stays_operator_terminated(actions in prop::collection::vec(arbitrary_action(), 0..40)) {
        let mut state = InputState::default();
        for action in actions {
            state = dispatch(state, action);
            if let Some(last) = state.tokens.last() {
                prop_assert!(matches!(last, Token::Operator(_)));
                prop_assert_eq!(state.tokens.len() % 2, 0);
            }
        }
    }

    #[test]
    fn reset_is_total(actions in prop::collection::vec(arbitrary_action(), 0..40)) {
        let state = actions.into_iter().fold(InputState::default(), dispatch);
        prop_assert_eq!(dispatch(state, Action::Reset), InputState::default());
    }
}
