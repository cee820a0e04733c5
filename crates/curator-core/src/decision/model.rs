//! Decision domain models.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The verdict a reviewer can attach to a staged photo.
///
/// "No action yet" is represented as `Option::<ReviewAction>::None` on
/// [`Decision::action`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ReviewAction {
    Approve,
    Reject,
}

/// Access tier assigned to an approved photo.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Visibility {
    #[default]
    #[strum(to_string = "public")]
    Public,
    /// Restricted to members.
    #[serde(alias = "restricted")]
    #[strum(to_string = "sanctum", serialize = "restricted", serialize = "members")]
    Sanctum,
    #[strum(to_string = "private")]
    Private,
}

impl Visibility {
    /// Human-readable label for selectors and cards.
    pub fn label(&self) -> &'static str {
        match self {
            Visibility::Public => "Public",
            Visibility::Sanctum => "Sanctum (Members)",
            Visibility::Private => "Private",
        }
    }
}

/// The pending verdict a reviewer attaches to one staged photo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// Identifier of the staged photo this decision belongs to
    pub ulid: String,
    /// `None` until the reviewer approves or rejects
    pub action: Option<ReviewAction>,
    /// Free-text context; empty means "none"
    pub context: String,
    pub visibility: Visibility,
}

impl Decision {
    /// Creates the neutral decision every fetched photo starts with.
    pub fn neutral(ulid: impl Into<String>) -> Self {
        Self {
            ulid: ulid.into(),
            action: None,
            context: String::new(),
            visibility: Visibility::default(),
        }
    }

    /// Converts an actioned decision into its wire form.
    ///
    /// Returns `None` when no action has been chosen.
    pub fn to_batch_entry(&self) -> Option<BatchDecision> {
        let action = self.action?;
        let context = if self.context.is_empty() {
            None
        } else {
            Some(self.context.clone())
        };

        Some(BatchDecision {
            ulid: self.ulid.clone(),
            action,
            context,
            visibility: self.visibility,
        })
    }
}

/// One entry of a batch submission request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchDecision {
    pub ulid: String,
    pub action: ReviewAction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    pub visibility: Visibility,
}

/// Aggregate counts of actioned decisions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionCounts {
    pub approve: usize,
    pub reject: usize,
}

impl DecisionCounts {
    pub fn total(&self) -> usize {
        self.approve + self.reject
    }

    /// Submission is gated on at least one actioned decision.
    pub fn has_any(&self) -> bool {
        self.total() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_neutral_decision() {
        let decision = Decision::neutral("01A");
        assert_eq!(decision.action, None);
        assert_eq!(decision.visibility, Visibility::Public);
        assert!(decision.context.is_empty());
        assert!(decision.to_batch_entry().is_none());
    }

    #[test]
    fn test_batch_entry_omits_empty_context() {
        let mut decision = Decision::neutral("01A");
        decision.action = Some(ReviewAction::Approve);

        let entry = decision.to_batch_entry().unwrap();
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"ulid": "01A", "action": "approve", "visibility": "public"})
        );
    }

    #[test]
    fn test_batch_entry_keeps_context() {
        let mut decision = Decision::neutral("01B");
        decision.action = Some(ReviewAction::Reject);
        decision.context = "blurry".to_string();
        decision.visibility = Visibility::Sanctum;

        let json = serde_json::to_value(decision.to_batch_entry().unwrap()).unwrap();
        assert_eq!(json["context"], "blurry");
        assert_eq!(json["visibility"], "sanctum");
        assert_eq!(json["action"], "reject");
    }

    #[test]
    fn test_visibility_parsing_accepts_aliases() {
        assert_eq!(Visibility::from_str("PUBLIC").unwrap(), Visibility::Public);
        assert_eq!(Visibility::from_str("restricted").unwrap(), Visibility::Sanctum);
        assert_eq!(Visibility::from_str("members").unwrap(), Visibility::Sanctum);
        assert_eq!(Visibility::Sanctum.to_string(), "sanctum");
        assert!(Visibility::from_str("secret").is_err());
    }

    #[test]
    fn test_action_parsing() {
        assert_eq!(ReviewAction::from_str("Approve").unwrap(), ReviewAction::Approve);
        assert_eq!(ReviewAction::Reject.to_string(), "reject");
    }
}
