//! Decoded Stack Exchange entities.
//!
//! Field names follow the wire format (`snake_case` JSON), so the structs
//! decode without renames. Values are read-only once decoded.

use serde::{Deserialize, Serialize};

/// Response envelope shared by every endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub quota_max: u32,
    #[serde(default)]
    pub quota_remaining: u32,
}

impl<T> Envelope<T> {
    /// Envelope carrying only `items`; quota fields zeroed.
    pub fn with_items(items: Vec<T>) -> Self {
        Self {
            items,
            has_more: false,
            quota_max: 0,
            quota_remaining: 0,
        }
    }
}

/// A Stack Overflow question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub question_id: u64,
    pub title: String,
    /// Present only when requested with the `withbody` filter.
    #[serde(default)]
    pub body: Option<String>,
    pub score: i64,
    #[serde(default)]
    pub answer_count: u64,
    #[serde(default)]
    pub view_count: u64,
    /// Unix seconds.
    pub creation_date: i64,
    /// Unix seconds.
    #[serde(default)]
    pub last_activity_date: i64,
    #[serde(default)]
    pub owner: Owner,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_answered: bool,
    #[serde(default)]
    pub accepted_answer_id: Option<u64>,
}

/// An answer attached to a question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub answer_id: u64,
    pub question_id: u64,
    #[serde(default)]
    pub body: String,
    pub score: i64,
    /// Unix seconds.
    pub creation_date: i64,
    #[serde(default)]
    pub owner: Owner,
    #[serde(default)]
    pub is_accepted: bool,
}

/// Author of a post. Deleted users come back without `user_id`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Owner {
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub reputation: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_question_envelope() {
        let json = r#"{
            "items": [{
                "question_id": 11227809,
                "title": "Why is processing a sorted array faster?",
                "body": "<p>Here is a piece of code</p>",
                "score": 27000,
                "answer_count": 25,
                "view_count": 1900000,
                "creation_date": 1340805096,
                "last_activity_date": 1700000000,
                "owner": {
                    "user_id": 87234,
                    "display_name": "GManNickG",
                    "profile_image": "https://example.com/a.png",
                    "reputation": 500000
                },
                "tags": ["java", "c++", "performance"],
                "is_answered": true,
                "accepted_answer_id": 11227902
            }],
            "has_more": true,
            "quota_max": 300,
            "quota_remaining": 299
        }"#;

        let envelope: Envelope<Question> = serde_json::from_str(json).unwrap();
        assert!(envelope.has_more);
        assert_eq!(envelope.quota_remaining, 299);
        let question = &envelope.items[0];
        assert_eq!(question.question_id, 11227809);
        assert_eq!(question.tags.len(), 3);
        assert_eq!(question.accepted_answer_id, Some(11227902));
        assert_eq!(question.owner.display_name, "GManNickG");
    }

    #[test]
    fn missing_optional_fields_use_defaults() {
        let json = r#"{"items": [{
            "question_id": 1,
            "title": "t",
            "score": -2,
            "creation_date": 10
        }]}"#;

        let envelope: Envelope<Question> = serde_json::from_str(json).unwrap();
        let question = &envelope.items[0];
        assert_eq!(question.body, None);
        assert_eq!(question.owner, Owner::default());
        assert!(question.tags.is_empty());
        assert_eq!(question.accepted_answer_id, None);
        assert!(!envelope.has_more);
    }

    #[test]
    fn decodes_answer_with_deleted_owner() {
        let json = r#"{"items": [{
            "answer_id": 5,
            "question_id": 1,
            "body": "<p>use a map</p>",
            "score": 3,
            "creation_date": 20,
            "owner": {"display_name": "user123", "user_type": "does_not_exist"},
            "is_accepted": true
        }]}"#;

        let envelope: Envelope<Answer> = serde_json::from_str(json).unwrap();
        let answer = &envelope.items[0];
        assert!(answer.is_accepted);
        assert_eq!(answer.owner.user_id, None);
        assert_eq!(answer.owner.display_name, "user123");
    }
}
