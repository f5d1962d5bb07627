//! The element-type variants exercised by the battery.

/// An element type the battery can fill a container with.
///
/// Each variant supplies the constant value inserted during the fill step and
/// the predicate used by the three counting styles. The battery's counting
/// contract is that every inserted [`test_value`](Element::test_value)
/// satisfies [`matches`](Element::matches), so a full traversal after fill
/// counts exactly the number of inserted elements.
pub trait Element: Clone {
    /// The element type name reported in scenario metadata.
    const TYPE_NAME: &'static str;

    /// The constant value inserted during the fill step.
    fn test_value() -> Self;

    /// The scenario predicate.
    fn matches(&self) -> bool;
}

/// Small-value variant: fills with `2`, counts values `<= 2`.
impl Element for i32 {
    const TYPE_NAME: &'static str = "Integer";

    fn test_value() -> Self {
        2
    }

    fn matches(&self) -> bool {
        *self <= 2
    }
}

/// String variant: fills with `"foo"`, counts strings starting with `'f'`.
impl Element for String {
    const TYPE_NAME: &'static str = "String";

    fn test_value() -> Self {
        Self::from("foo")
    }

    fn matches(&self) -> bool {
        self.starts_with('f')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_test_value_matches_predicate() {
        assert_eq!(<i32 as Element>::test_value(), 2);
        assert!(<i32 as Element>::test_value().matches());
    }

    #[test]
    fn integer_predicate_is_less_or_equal_two() {
        assert!(1_i32.matches());
        assert!(2_i32.matches());
        assert!(!3_i32.matches());
        assert!((-5_i32).matches());
    }

    #[test]
    fn string_test_value_matches_predicate() {
        assert_eq!(<String as Element>::test_value(), "foo");
        assert!(<String as Element>::test_value().matches());
    }

    #[test]
    fn string_predicate_is_starts_with_f() {
        assert!(String::from("foo").matches());
        assert!(String::from("f").matches());
        assert!(!String::from("bar").matches());
        assert!(!String::new().matches());
    }
}
