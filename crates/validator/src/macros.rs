//! Declarative helpers for assembling rule sets.

/// Builds a [`RuleSet`](crate::RuleSet) from `field => [rules...]` pairs.
///
/// Fields are registered in declaration order, which is also the order
/// `is_valid` checks them in.
///
/// ```
/// use fieldguard_validator::{Outcome, rule_set};
/// use serde_json::{Value, json};
///
/// fn is_one(v: &Value) -> Outcome { Outcome::check(v == &json!(1), "Data must be one.") }
/// fn is_two(v: &Value) -> Outcome { Outcome::check(v == &json!(2), "Data must be two.") }
///
/// let set = rule_set! {
///     "one" => [is_one],
///     "two" => [is_two],
/// };
/// assert_eq!(set.fields().collect::<Vec<_>>(), ["one", "two"]);
/// ```
#[macro_export]
macro_rules! rule_set {
    () => {
        $crate::RuleSet::new()
    };
    ($($field:expr => [$($rule:expr),* $(,)?]),+ $(,)?) => {{
        let mut set = $crate::RuleSet::new();
        $(
            set.insert($field, $crate::RuleList::new()$(.with($rule))*);
        )+
        set
    }};
}
