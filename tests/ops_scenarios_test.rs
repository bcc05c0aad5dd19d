use basic_ops::{checked_divide, divide, greet, subtract, OpsError};

#[test]
fn test_greeting_scenarios() {
    assert_eq!(greet("World"), "Hello, World!");
    assert_eq!(greet(""), "Hello, !");
}

#[test]
fn test_subtraction_scenarios() {
    assert_eq!(subtract(5.0, 3.0), 2.0);
    assert_eq!(subtract(3.0, 5.0), -2.0);
}

#[test]
fn test_division_scenarios() {
    assert_eq!(divide(10.0, 2.0), 5.0);
    assert_eq!(divide(7.0, 2.0), 3.5);
}

/// 除以零沿用浮點數語義，只有 checked_divide 會回報錯誤
#[test]
fn test_division_by_zero_policies() {
    assert!(divide(7.0, 0.0).is_infinite());
    assert!(divide(0.0, 0.0).is_nan());
    assert!(matches!(
        checked_divide(7.0, 0.0),
        Err(OpsError::DivisionByZero { dividend }) if dividend == 7.0
    ));
}
