use std::fmt;

use serde::{Deserialize, Serialize};

/// Calendar granularity a vendor report is published for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Frequency {
    Daily,
    /// Sunday-based weeks
    Weekly,
    Monthly,
    Yearly,
}

impl Frequency {
    /// Value sent as `filter[frequency]`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "DAILY",
            Frequency::Weekly => "WEEKLY",
            Frequency::Monthly => "MONTHLY",
            Frequency::Yearly => "YEARLY",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_strings_are_upper_case() {
        assert_eq!(Frequency::Weekly.to_string(), "WEEKLY");
        assert_eq!(
            serde_json::to_string(&Frequency::Yearly).unwrap(),
            "\"YEARLY\""
        );
    }
}
