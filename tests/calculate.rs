//! End-to-end checks of the public evaluation API.

use yardcalc::calculator::{AssociativityRule, PopStrategy, Strictness};
use yardcalc::{CalcError, CalcOptions, Calculator, calculate};

fn with(options: CalcOptions) -> Calculator {
    Calculator::new(options)
}

#[test]
fn single_numbers_evaluate_to_themselves() {
    for n in ["0", "42", "-7", "3.25", "1e3", "0.1"] {
        let expected: f64 = n.parse().unwrap();
        assert_eq!(calculate(n), Ok(expected), "input {:?}", n);
    }
}

#[test]
fn basic_arithmetic() {
    assert_eq!(calculate("3 + 4"), Ok(7.0));
    assert_eq!(calculate("10 - 4"), Ok(6.0));
    assert_eq!(calculate("6 * 7"), Ok(42.0));
    assert_eq!(calculate("1 / 4"), Ok(0.25));
    assert_eq!(calculate("2 ^ 10"), Ok(1024.0));
}

#[test]
fn precedence_and_parentheses() {
    assert_eq!(calculate("3 + 4 * 2"), Ok(11.0));
    assert_eq!(calculate("( 3 + 4 ) * 2"), Ok(14.0));
    assert_eq!(calculate("3 + 4 * ( 2 - 1 )"), Ok(7.0));
    assert_eq!(calculate("( ( 1 + 2 ) * ( 3 + 4 ) )"), Ok(21.0));
}

#[test]
fn postfix_order() {
    let postfix = Calculator::default().to_postfix("3 + 4 * 2").unwrap();
    assert_eq!(postfix.symbols(), vec!["3", "4", "2", "*", "+"]);
}

#[test]
fn equal_precedence_folds_left_by_default() {
    assert_eq!(calculate("2 ^ 3 ^ 2"), Ok(64.0));
    assert_eq!(calculate("1 - 2 - 3"), Ok(-4.0));
    assert_eq!(calculate("8 / 2 / 2"), Ok(2.0));
}

#[test]
fn conventional_associativity() {
    let calc = with(CalcOptions::default().with_associativity(AssociativityRule::Conventional));
    assert_eq!(calc.calculate("2 ^ 3 ^ 2"), Ok(512.0));
    assert_eq!(calc.calculate("1 - 2 - 3"), Ok(-4.0));
    assert_eq!(calc.calculate("8 / 2 / 2"), Ok(2.0));
    assert_eq!(calc.calculate("3 + 4 * 2"), Ok(11.0));
}

#[test]
fn single_pop_versus_drain() {
    assert_eq!(calculate("2 * 3 ^ 2 + 1"), Ok(20.0));
    let drain = with(CalcOptions::default().with_pop_strategy(PopStrategy::Drain));
    assert_eq!(drain.calculate("2 * 3 ^ 2 + 1"), Ok(19.0));
}

#[test]
fn division_by_zero_follows_floating_point() {
    assert_eq!(calculate("10 / 0"), Ok(f64::INFINITY));
    assert!(calculate("0 / 0").unwrap().is_nan());
}

#[test]
fn lone_operator_underflows() {
    assert!(matches!(
        calculate("+"),
        Err(CalcError::StackUnderflow { operator: "+", .. })
    ));
    assert!(matches!(
        calculate("1 + * 2"),
        Err(CalcError::StackUnderflow { .. })
    ));
}

#[test]
fn empty_input_has_no_value() {
    assert_eq!(calculate(""), Err(CalcError::EmptyExpression));
    assert_eq!(calculate("3+4"), Err(CalcError::EmptyExpression));
}

#[test]
fn lenient_mode_tolerates_malformed_input() {
    assert_eq!(calculate("3 +  4"), Ok(7.0));
    assert_eq!(calculate("3 + 4 apples"), Ok(7.0));
    assert_eq!(calculate("( 1 + 2"), Ok(3.0));
    assert_eq!(calculate("1 + 2 )"), Ok(3.0));
    assert_eq!(calculate("1 2"), Ok(2.0));
}

#[test]
fn strict_mode_rejects_malformed_input() {
    let strict = with(CalcOptions::default().with_strictness(Strictness::Strict));
    assert!(matches!(
        strict.calculate("3+4"),
        Err(CalcError::UnrecognizedToken { .. })
    ));
    assert!(matches!(
        strict.calculate("3 +  4"),
        Err(CalcError::UnrecognizedToken { index: 2, .. })
    ));
    assert_eq!(
        strict.calculate("( 1 + 2"),
        Err(CalcError::UnmatchedOpenParen { index: 0 })
    );
    assert_eq!(
        strict.calculate("1 + 2 )"),
        Err(CalcError::UnmatchedCloseParen { index: 3 })
    );
    assert_eq!(
        strict.calculate("1 2"),
        Err(CalcError::UnusedOperands { count: 1 })
    );
    assert_eq!(strict.calculate("( 3 + 4 ) * 2"), Ok(14.0));
}

#[test]
fn hardened_options() {
    let calc = with(CalcOptions::hardened());
    assert_eq!(calc.calculate("2 * 3 ^ 2 + 1"), Ok(19.0));
    assert_eq!(calc.calculate("2 ^ 3 ^ 2"), Ok(512.0));
    assert!(calc.calculate("2 x 3").is_err());
}

#[test]
fn repeated_evaluation_is_identical() {
    let calc = Calculator::default();
    for input in ["3 + 4 * 2", "1 / 3", "2 ^ 0.5", "0 / 0"] {
        let first = calc.calculate(input).unwrap();
        let second = calc.calculate(input).unwrap();
        assert_eq!(first.to_bits(), second.to_bits(), "input {:?}", input);
    }
}

#[test]
fn concurrent_evaluation() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let input = format!("{} * ( 2 + 3 )", i);
                calculate(&input)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), Ok(i as f64 * 5.0));
    }
}
