//! Core data types for the CompeteIQ record store
//!
//! This module defines the fundamental types used throughout the store layer:
//! - `Brief`: a single competitor-analysis record
//! - `SortKey`: a parsed sort directive for listing records
//!
//! A `Brief` carries three guaranteed fields (`id`, `created_date`,
//! `updated_date`) that only the store itself writes, plus an open map of
//! caller-defined attributes flattened into the same JSON object.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::cmp::Ordering;

/// A single competitor-analysis record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Brief {
    /// Unique identifier, assigned by the store and never reused
    pub id: u64,
    /// Set once at creation
    pub created_date: DateTime<Utc>,
    /// Refreshed on every successful update
    pub updated_date: DateTime<Utc>,
    /// Caller-defined attributes (untyped, unvalidated)
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Brief {
    /// Look up any field by name, including the guaranteed ones.
    ///
    /// The date fields are materialized as RFC 3339 strings, matching their
    /// persisted form.
    pub fn value_of(&self, field: &str) -> Option<Value> {
        match field {
            "id" => Some(Value::from(self.id)),
            "created_date" => Some(Value::String(self.created_date.to_rfc3339())),
            "updated_date" => Some(Value::String(self.updated_date.to_rfc3339())),
            _ => self.fields.get(field).cloned(),
        }
    }

    /// Get a caller-defined attribute as text, if it is a string
    pub fn text(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(Value::as_str)
    }
}

/// A parsed sort directive: field name plus direction
///
/// The textual form is the field name with an optional leading `-` for
/// descending order, e.g. `"-created_date"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    pub field: String,
    pub descending: bool,
}

impl SortKey {
    /// Parse a sort directive
    pub fn parse(directive: &str) -> Self {
        match directive.strip_prefix('-') {
            Some(field) => Self {
                field: field.to_string(),
                descending: true,
            },
            None => Self {
                field: directive.to_string(),
                descending: false,
            },
        }
    }

    /// Compare two records under this key.
    ///
    /// Records missing the field sort last in either direction; the
    /// direction only applies between records that both carry it.
    pub fn compare(&self, a: &Brief, b: &Brief) -> Ordering {
        match (sort_value(a, &self.field), sort_value(b, &self.field)) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(va), Some(vb)) => {
                let ord = va.cmp_value(&vb);
                if self.descending {
                    ord.reverse()
                } else {
                    ord
                }
            }
        }
    }
}

/// A field value lifted into a comparable form
#[derive(Debug, Clone)]
enum SortValue {
    Time(DateTime<Utc>),
    Number(f64),
    Text(String),
}

impl SortValue {
    fn rank(&self) -> u8 {
        match self {
            SortValue::Time(_) => 0,
            SortValue::Number(_) => 1,
            SortValue::Text(_) => 2,
        }
    }

    /// Total order: same-kind values compare naturally, mixed kinds by rank
    fn cmp_value(&self, other: &SortValue) -> Ordering {
        match (self, other) {
            (SortValue::Time(a), SortValue::Time(b)) => a.cmp(b),
            (SortValue::Number(a), SortValue::Number(b)) => a.total_cmp(b),
            (SortValue::Text(a), SortValue::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

/// Lift a record's field into a `SortValue`, if it is comparable.
///
/// The guaranteed fields have fixed kinds; open attributes are classified by
/// their JSON type, with RFC 3339 strings promoted to timestamps so that
/// date-valued attributes still sort chronologically.
fn sort_value(brief: &Brief, field: &str) -> Option<SortValue> {
    match field {
        "id" => Some(SortValue::Number(brief.id as f64)),
        "created_date" => Some(SortValue::Time(brief.created_date)),
        "updated_date" => Some(SortValue::Time(brief.updated_date)),
        _ => match brief.fields.get(field)? {
            Value::Number(n) => n.as_f64().map(SortValue::Number),
            Value::Bool(b) => Some(SortValue::Number(*b as u8 as f64)),
            Value::String(s) => Some(
                DateTime::parse_from_rfc3339(s)
                    .map(|dt| SortValue::Time(dt.with_timezone(&Utc)))
                    .unwrap_or_else(|_| SortValue::Text(s.clone())),
            ),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn brief(id: u64, fields: Value) -> Brief {
        Brief {
            id,
            created_date: Utc::now(),
            updated_date: Utc::now(),
            fields: fields.as_object().cloned().unwrap(),
        }
    }

    #[test]
    fn test_sort_key_parse() {
        let key = SortKey::parse("-created_date");
        assert_eq!(key.field, "created_date");
        assert!(key.descending);

        let key = SortKey::parse("competitor_name");
        assert_eq!(key.field, "competitor_name");
        assert!(!key.descending);
    }

    #[test]
    fn test_compare_text_field() {
        let a = brief(1, json!({"competitor_name": "Acme"}));
        let b = brief(2, json!({"competitor_name": "Zenith"}));

        let asc = SortKey::parse("competitor_name");
        assert_eq!(asc.compare(&a, &b), Ordering::Less);

        let desc = SortKey::parse("-competitor_name");
        assert_eq!(desc.compare(&a, &b), Ordering::Greater);
    }

    #[test]
    fn test_compare_missing_field_sorts_last() {
        let a = brief(1, json!({}));
        let b = brief(2, json!({"priority": 3}));

        // Missing stays last regardless of direction
        assert_eq!(SortKey::parse("priority").compare(&a, &b), Ordering::Greater);
        assert_eq!(SortKey::parse("-priority").compare(&a, &b), Ordering::Greater);
    }

    #[test]
    fn test_date_valued_attribute_sorts_chronologically() {
        // "2024-10-02" as text would sort before "2024-9-30"; as timestamps
        // the order is chronological
        let a = brief(1, json!({"reviewed_at": "2024-09-30T08:00:00Z"}));
        let b = brief(2, json!({"reviewed_at": "2024-10-02T08:00:00Z"}));
        assert_eq!(SortKey::parse("reviewed_at").compare(&a, &b), Ordering::Less);
    }

    #[test]
    fn test_brief_serialization_flattens_attributes() {
        let b = brief(3, json!({"competitor_name": "Acme", "priority": 2}));
        let encoded = serde_json::to_value(&b).unwrap();

        assert_eq!(encoded["id"], json!(3));
        assert_eq!(encoded["competitor_name"], json!("Acme"));
        assert_eq!(encoded["priority"], json!(2));
        assert!(encoded["created_date"].is_string());

        let restored: Brief = serde_json::from_value(encoded).unwrap();
        assert_eq!(restored, b);
    }

    #[test]
    fn test_value_of_covers_guaranteed_fields() {
        let b = brief(9, json!({"industry": "SaaS"}));
        assert_eq!(b.value_of("id"), Some(json!(9)));
        assert_eq!(b.value_of("industry"), Some(json!("SaaS")));
        assert!(b
            .value_of("created_date")
            .and_then(|v| v.as_str().map(String::from))
            .is_some());
        assert_eq!(b.value_of("nope"), None);
        assert_eq!(b.text("industry"), Some("SaaS"));
    }
}
