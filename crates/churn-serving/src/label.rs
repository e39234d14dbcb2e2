//! Churn label output type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The predicted churn outcome for one customer.
///
/// Serializes to the wire strings `"Yes"` / `"No"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    /// The customer is predicted to churn.
    Yes,
    /// The customer is predicted to stay.
    No,
}

impl Label {
    /// Thresholds a churn probability at 0.5, ties rounding to [`Label::Yes`].
    ///
    /// # Example
    ///
    /// ```
    /// use churn_serving::label::Label;
    ///
    /// assert_eq!(Label::from_probability(0.9), Label::Yes);
    /// assert_eq!(Label::from_probability(0.5), Label::Yes);
    /// assert_eq!(Label::from_probability(0.49), Label::No);
    /// ```
    pub fn from_probability(probability: f32) -> Self {
        if probability >= 0.5 {
            Label::Yes
        } else {
            Label::No
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Yes => write!(f, "Yes"),
            Label::No => write!(f, "No"),
        }
    }
}
