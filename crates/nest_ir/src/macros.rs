/// Build a [`NestedValue`](crate::NestedValue) from bracket notation.
///
/// `[...]` builds a list, `(...)` builds a tuple, and any other single token
/// tree becomes a leaf. Multi-token leaves such as negative numbers must be
/// wrapped in braces. Parentheses always build a tuple, so `(1)` is a
/// one-element tuple here.
///
/// ```
/// use nest_ir::{nested, NestedValue};
///
/// let value: NestedValue<i32> = nested![[1, [2, 3], (4, {-5})]];
/// assert_eq!(value.seq().map(|s| s.len()), Some(3));
/// ```
#[macro_export]
macro_rules! nested {
    ([$($item:tt),* $(,)?]) => {
        $crate::NestedValue::list(::std::vec![$($crate::nested!($item)),*])
    };
    (($($item:tt),* $(,)?)) => {
        $crate::NestedValue::tuple(::std::vec![$($crate::nested!($item)),*])
    };
    ($leaf:expr) => {
        $crate::NestedValue::Leaf($leaf)
    };
}
