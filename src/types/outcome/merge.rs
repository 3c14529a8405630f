//! Combining many outcomes into one.

use crate::types::alloc_type::Vec;
use crate::types::maybe::Maybe;
use crate::types::outcome::Outcome;
use crate::types::reason::Reason;
use crate::types::ReasonVec;

/// Unions the reasons of every outcome, in input order, into one valueless
/// outcome. The merge succeeds iff no input carried an error reason.
///
/// ```
/// use reason_rail::{merge, Outcome};
///
/// let combined = merge([Outcome::ok(1), Outcome::fail("boom")]);
/// assert!(combined.is_failed());
/// assert_eq!(combined.reasons().len(), 1);
/// ```
pub fn merge<T, I>(outcomes: I) -> Outcome<()>
where
    I: IntoIterator<Item = Outcome<T>>,
{
    let mut reasons = ReasonVec::new();
    for outcome in outcomes {
        let (_, outcome_reasons) = outcome.into_parts();
        reasons.extend(outcome_reasons);
    }
    Outcome::from_parts(Maybe::None, reasons)
}

/// Unions reasons and, on overall success, collects every carried value in
/// input order.
///
/// The merged value is present only when the merge succeeded and every input
/// carried a value; an empty input merges to success with an empty vector.
///
/// ```
/// use reason_rail::{merge_values, Outcome};
///
/// let merged = merge_values(Vec::<Outcome<i32>>::new());
/// assert_eq!(*merged.value(), Vec::<i32>::new());
///
/// let merged = merge_values([Outcome::ok(1), Outcome::ok(2)]);
/// assert_eq!(*merged.value(), vec![1, 2]);
/// ```
pub fn merge_values<T, I>(outcomes: I) -> Outcome<Vec<T>>
where
    I: IntoIterator<Item = Outcome<T>>,
{
    let mut reasons: ReasonVec<Reason> = ReasonVec::new();
    let mut values = Vec::new();
    let mut every_value_present = true;
    for outcome in outcomes {
        let (value, outcome_reasons) = outcome.into_parts();
        reasons.extend(outcome_reasons);
        match value {
            Maybe::Some(value) => values.push(value),
            Maybe::None => every_value_present = false,
        }
    }
    let failed = reasons.iter().any(Reason::is_error);
    let value = if failed || !every_value_present {
        Maybe::None
    } else {
        Maybe::Some(values)
    };
    Outcome::from_parts(value, reasons)
}

impl<T> FromIterator<Outcome<T>> for Outcome<Vec<T>> {
    /// Collects outcomes the value-merging way: `merge_values` semantics.
    fn from_iter<I: IntoIterator<Item = Outcome<T>>>(iter: I) -> Self {
        merge_values(iter)
    }
}

impl<T> FromIterator<Outcome<T>> for Outcome<()> {
    /// Collects outcomes the reason-union way: `merge` semantics.
    fn from_iter<I: IntoIterator<Item = Outcome<T>>>(iter: I) -> Self {
        merge(iter)
    }
}
