//! Constants of the program and the values derived from them.
use num_integer::Integer;
use thiserror::Error;

pub const NUMBER: i32 = 10;
pub const SINGLE_QUOTE: char = '\'';
pub const ARRAY: [i32; 3] = [1, 2, 3];

/// An error that can occur while computing a derived value.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationError {
    #[error("Integer overflow")]
    IntegerOverflow,
    #[error("Division by zero")]
    DivisionByZero,
}

/// Values computed from a number and a three-element array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Derived {
    /// `array[0] + array[1] + -array[2]`
    pub value: i32,
    /// `value > number`
    pub comparison: bool,
    /// `value | number`
    pub bitwise: i32,
    /// `value % number`, the remainder takes the sign of `value`.
    pub modulo: i32,
}

/// Computes all [`Derived`] values.
///
/// Fails only when the sum overflows or `number` is zero, neither of which
/// happens for [`NUMBER`] and [`ARRAY`].
pub fn derive(number: i32, array: [i32; 3]) -> Result<Derived, OperationError> {
    let [a, b, c] = array;
    let value = a
        .checked_add(b)
        .and_then(|sum| sum.checked_add(c.checked_neg()?))
        .ok_or(OperationError::IntegerOverflow)?;
    let comparison = value > number;
    let bitwise = value | number;
    if number == 0 {
        return Err(OperationError::DivisionByZero);
    }
    // i32::MIN % -1 overflows the quotient
    if value == i32::MIN && number == -1 {
        return Err(OperationError::IntegerOverflow);
    }
    let (_, modulo) = value.div_rem(&number);
    Ok(Derived { value, comparison, bitwise, modulo })
}

#[test]
fn derive_builtin_constants_test() {
    let d = derive(NUMBER, ARRAY).unwrap();
    assert_eq!(d.value, 1 + 2 - 3);
    assert_eq!(d.value, 0);
    assert!(!d.comparison);
    assert_eq!(d.bitwise, 0 | 10);
    assert_eq!(d.modulo, 0 % 10);
}

#[test]
fn derive_other_values_test() {
    let d = derive(4, [10, 5, 2]).unwrap();
    assert_eq!(d, Derived { value: 13, comparison: true, bitwise: 13, modulo: 1 });

    let d = derive(6, [1, 1, 9]).unwrap();
    assert_eq!(d.value, -7);
    assert!(!d.comparison);
    assert_eq!(d.bitwise, -7 | 6);
    // truncated, not floored
    assert_eq!(d.modulo, -1);

    let d = derive(-3, [7, 0, 0]).unwrap();
    assert_eq!(d.modulo, 1);
    assert!(d.comparison);
}

#[test]
fn derive_errors_test() {
    assert_eq!(derive(0, ARRAY), Err(OperationError::DivisionByZero));
    assert_eq!(derive(1, [i32::MAX, 1, 0]), Err(OperationError::IntegerOverflow));
    assert_eq!(derive(1, [0, 0, i32::MIN]), Err(OperationError::IntegerOverflow));
    assert_eq!(derive(-1, [i32::MIN, 0, 0]), Err(OperationError::IntegerOverflow));
    assert_eq!(derive(1, [i32::MIN, 0, 0]).unwrap().modulo, 0);
}
