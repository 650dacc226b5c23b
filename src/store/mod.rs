//! CompeteIQ Record Store
//!
//! Durable CRUD over a single collection of loosely-typed Brief records:
//! - Write path: mutate the in-memory list → serialize the whole list →
//!   replace the backend slot
//! - Read path: snapshot the in-memory list → sort/filter/truncate
//!
//! The store is explicitly constructed with an injectable [`StorageBackend`]
//! rather than living as a global singleton, so tests run against
//! [`MemoryBackend`] and each frontend brings its own medium.
//!
//! Single-threaded by contract: there is exactly one logical writer per
//! process, and two stores opened over the same medium overwrite each other
//! with no conflict detection. Last writer wins.

pub mod backend;
pub mod error;
pub mod types;

pub use backend::{MemoryBackend, StorageBackend, STORAGE_KEY};
#[cfg(not(target_arch = "wasm32"))]
pub use backend::FileBackend;
pub use error::{StoreError, StoreResult};
pub use types::{Brief, SortKey};

use chrono::Utc;
use serde_json::{Map, Value};

/// Default sort directive for [`BriefStore::list`]: newest first
pub const DEFAULT_SORT: &str = "-created_date";

/// Fields authored exclusively by the store
const RESERVED_FIELDS: &[&str] = &["id", "created_date", "updated_date"];

/// The record store: an in-memory Brief collection mirrored to one backend slot
pub struct BriefStore {
    backend: Box<dyn StorageBackend>,
    briefs: Vec<Brief>,
    next_id: u64,
}

impl std::fmt::Debug for BriefStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BriefStore")
            .field("briefs", &self.briefs)
            .field("next_id", &self.next_id)
            .finish_non_exhaustive()
    }
}

impl BriefStore {
    /// Open a store over the given backend.
    ///
    /// An unwritten slot yields an empty collection with ids starting at 1.
    /// A malformed payload fails here, not on a later operation.
    pub fn open(backend: Box<dyn StorageBackend>) -> StoreResult<Self> {
        let briefs: Vec<Brief> = match backend.load()? {
            Some(payload) => serde_json::from_str(&payload)?,
            None => Vec::new(),
        };
        let next_id = briefs.iter().map(|b| b.id).max().unwrap_or(0) + 1;

        tracing::debug!(count = briefs.len(), next_id, "opened brief store");

        Ok(Self {
            backend,
            briefs,
            next_id,
        })
    }

    /// Number of live records
    pub fn len(&self) -> usize {
        self.briefs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.briefs.is_empty()
    }

    /// Look up a record by id
    pub fn get(&self, id: u64) -> Option<&Brief> {
        self.briefs.iter().find(|b| b.id == id)
    }

    /// Create a record from caller-supplied attributes.
    ///
    /// Assigns the next id and stamps both timestamps; reserved keys in
    /// `data` are dropped. No uniqueness validation on the attributes.
    pub fn create(&mut self, mut data: Map<String, Value>) -> StoreResult<Brief> {
        strip_reserved(&mut data);

        let now = Utc::now();
        let brief = Brief {
            id: self.next_id,
            created_date: now,
            updated_date: now,
            fields: data,
        };
        self.next_id += 1;

        self.briefs.push(brief.clone());
        self.persist()?;

        tracing::debug!(id = brief.id, "created brief");
        Ok(brief)
    }

    /// Snapshot of the collection, sorted and optionally truncated.
    ///
    /// `sort_by` defaults to [`DEFAULT_SORT`]; a leading `-` means
    /// descending. `limit` caps the result length after sorting.
    pub fn list(&self, sort_by: Option<&str>, limit: Option<usize>) -> Vec<Brief> {
        let key = SortKey::parse(sort_by.unwrap_or(DEFAULT_SORT));

        let mut sorted = self.briefs.clone();
        sorted.sort_by(|a, b| key.compare(a, b));

        if let Some(limit) = limit {
            sorted.truncate(limit);
        }
        sorted
    }

    /// All records matching every criterion by exact value.
    ///
    /// The `id` key is special-cased: the criterion is coerced to an integer
    /// (JSON number or numeric string) before comparing, and a non-coercible
    /// criterion matches nothing. Empty criteria match everything.
    pub fn filter(&self, criteria: &Map<String, Value>) -> Vec<Brief> {
        self.briefs
            .iter()
            .filter(|brief| {
                criteria.iter().all(|(key, expected)| {
                    if key == "id" {
                        coerce_id(expected).map_or(false, |id| brief.id == id)
                    } else {
                        brief.value_of(key).as_ref() == Some(expected)
                    }
                })
            })
            .cloned()
            .collect()
    }

    /// Shallow-merge `partial` over the record's attributes.
    ///
    /// Top-level keys replace whole values, never deep-merge. Reserved keys
    /// are dropped; `updated_date` is refreshed on success.
    pub fn update(&mut self, id: u64, mut partial: Map<String, Value>) -> StoreResult<Brief> {
        strip_reserved(&mut partial);

        let index = self.position(id)?;
        {
            let brief = &mut self.briefs[index];
            for (key, value) in partial {
                brief.fields.insert(key, value);
            }
            brief.updated_date = Utc::now();
        }
        self.persist()?;

        tracing::debug!(id, "updated brief");
        Ok(self.briefs[index].clone())
    }

    /// Remove a record, returning it. The id is never handed out again.
    pub fn delete(&mut self, id: u64) -> StoreResult<Brief> {
        let index = self.position(id)?;
        let removed = self.briefs.remove(index);
        self.persist()?;

        tracing::debug!(id, "deleted brief");
        Ok(removed)
    }

    fn position(&self, id: u64) -> StoreResult<usize> {
        self.briefs
            .iter()
            .position(|b| b.id == id)
            .ok_or(StoreError::NotFound { id })
    }

    /// Serialize the full collection and replace the backend slot
    fn persist(&mut self) -> StoreResult<()> {
        let payload = serde_json::to_string(&self.briefs)?;
        self.backend.store(&payload)
    }
}

fn strip_reserved(data: &mut Map<String, Value>) {
    for key in RESERVED_FIELDS {
        data.remove(*key);
    }
}

/// Coerce an id criterion to an integer
fn coerce_id(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn attrs(value: Value) -> Map<String, Value> {
        value.as_object().cloned().expect("object literal")
    }

    fn store() -> BriefStore {
        BriefStore::open(Box::new(MemoryBackend::new())).unwrap()
    }

    #[test]
    fn test_ids_are_monotonic_and_unique() {
        let mut store = store();

        let mut last = 0;
        for i in 0..5 {
            let brief = store
                .create(attrs(json!({"title": format!("brief {i}")})))
                .unwrap();
            assert!(brief.id > last);
            last = brief.id;
        }
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn test_ids_are_never_reused_after_delete() {
        let mut store = store();

        let a = store.create(attrs(json!({"title": "A"}))).unwrap();
        let b = store.create(attrs(json!({"title": "B"}))).unwrap();
        assert_eq!((a.id, b.id), (1, 2));

        store.delete(1).unwrap();
        let c = store.create(attrs(json!({"title": "C"}))).unwrap();
        assert_eq!(c.id, 3);
    }

    #[test]
    fn test_create_strips_reserved_fields() {
        let mut store = store();

        let brief = store
            .create(attrs(json!({
                "id": 999,
                "created_date": "1970-01-01T00:00:00Z",
                "competitor_name": "Acme"
            })))
            .unwrap();

        assert_eq!(brief.id, 1);
        assert!(brief.created_date.timestamp() > 0);
        assert!(!brief.fields.contains_key("id"));
        assert_eq!(brief.text("competitor_name"), Some("Acme"));
    }

    #[test]
    fn test_list_default_is_created_date_descending() {
        let mut store = store();
        store.create(attrs(json!({"title": "first"}))).unwrap();
        store.create(attrs(json!({"title": "second"}))).unwrap();
        store.create(attrs(json!({"title": "third"}))).unwrap();

        let listed = store.list(None, None);
        assert_eq!(listed.len(), 3);
        for pair in listed.windows(2) {
            assert!(pair[0].created_date >= pair[1].created_date);
        }
    }

    #[test]
    fn test_list_ascending_and_limit() {
        let mut store = store();
        for i in 0..4 {
            store.create(attrs(json!({"seq": i}))).unwrap();
        }

        let asc = store.list(Some("created_date"), None);
        for pair in asc.windows(2) {
            assert!(pair[0].created_date <= pair[1].created_date);
        }
        assert_eq!(asc.first().unwrap().fields["seq"], json!(0));

        let limited = store.list(Some("created_date"), Some(2));
        assert_eq!(limited.len(), 2);

        // Sorting by an arbitrary field uses its natural order
        let by_seq = store.list(Some("-seq"), None);
        assert_eq!(by_seq.first().unwrap().fields["seq"], json!(3));
    }

    #[test]
    fn test_filter_by_id_coerces_criterion() {
        let mut store = store();
        store.create(attrs(json!({"title": "A"}))).unwrap();
        let b = store.create(attrs(json!({"title": "B"}))).unwrap();

        let hits = store.filter(&attrs(json!({"id": b.id})));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].text("title"), Some("B"));

        // Numeric string coerces too
        let hits = store.filter(&attrs(json!({"id": "2"})));
        assert_eq!(hits.len(), 1);

        assert!(store.filter(&attrs(json!({"id": "nope"}))).is_empty());
        assert!(store.filter(&attrs(json!({"id": 42}))).is_empty());
    }

    #[test]
    fn test_filter_matches_exact_values_and_empty_criteria() {
        let mut store = store();
        store
            .create(attrs(json!({"industry": "SaaS", "tier": 1})))
            .unwrap();
        store
            .create(attrs(json!({"industry": "SaaS", "tier": 2})))
            .unwrap();
        store
            .create(attrs(json!({"industry": "Fintech", "tier": 1})))
            .unwrap();

        assert_eq!(store.filter(&attrs(json!({"industry": "SaaS"}))).len(), 2);
        assert_eq!(
            store
                .filter(&attrs(json!({"industry": "SaaS", "tier": 2})))
                .len(),
            1
        );
        // Exact match, no type coercion outside of id
        assert!(store.filter(&attrs(json!({"tier": "1"}))).is_empty());
        // Empty criteria match everything
        assert_eq!(store.filter(&Map::new()).len(), 3);
    }

    #[test]
    fn test_update_merges_shallow_and_advances_updated_date() {
        let mut store = store();
        let created = store
            .create(attrs(json!({"competitor_name": "Acme", "tier": 1})))
            .unwrap();

        let updated = store
            .update(created.id, attrs(json!({"tier": 2, "website": "acme.io"})))
            .unwrap();

        assert_eq!(updated.text("competitor_name"), Some("Acme"));
        assert_eq!(updated.fields["tier"], json!(2));
        assert_eq!(updated.text("website"), Some("acme.io"));
        assert_eq!(updated.created_date, created.created_date);
        assert!(updated.updated_date >= created.updated_date);
    }

    #[test]
    fn test_update_unknown_id_fails_and_leaves_collection_unchanged() {
        let mut store = store();
        let brief = store.create(attrs(json!({"title": "A"}))).unwrap();

        let err = store.update(99, attrs(json!({"title": "B"}))).unwrap_err();
        assert!(matches!(err, StoreError::NotFound { id: 99 }));
        assert_eq!(store.list(None, None), vec![brief]);
    }

    #[test]
    fn test_delete_returns_removed_record() {
        let mut store = store();
        store.create(attrs(json!({"title": "A"}))).unwrap();
        let b = store.create(attrs(json!({"title": "B"}))).unwrap();

        let removed = store.delete(b.id).unwrap();
        assert_eq!(removed, b);
        assert_eq!(store.len(), 1);
        assert!(store.get(b.id).is_none());

        let err = store.delete(b.id).unwrap_err();
        assert!(matches!(err, StoreError::NotFound { id } if id == b.id));
    }

    #[test]
    fn test_reload_from_file_backend_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("competitor_briefs.json");

        let mut first = BriefStore::open(Box::new(FileBackend::new(&path))).unwrap();
        first
            .create(attrs(json!({"competitor_name": "Acme"})))
            .unwrap();
        first
            .create(attrs(json!({"competitor_name": "Zenith"})))
            .unwrap();
        let before = first.list(Some("id"), None);

        let second = BriefStore::open(Box::new(FileBackend::new(&path))).unwrap();
        assert_eq!(second.list(Some("id"), None), before);
    }

    #[test]
    fn test_reload_seeds_next_id_from_max() {
        let mut seeded = BriefStore::open(Box::new(MemoryBackend::new())).unwrap();
        seeded.create(attrs(json!({"n": 1}))).unwrap();
        seeded.create(attrs(json!({"n": 2}))).unwrap();
        let payload = serde_json::to_string(&seeded.list(Some("id"), None)).unwrap();

        let mut reloaded =
            BriefStore::open(Box::new(MemoryBackend::with_payload(payload))).unwrap();
        let next = reloaded.create(attrs(json!({"n": 3}))).unwrap();
        assert_eq!(next.id, 3);
    }

    #[test]
    fn test_open_fails_on_malformed_payload() {
        let backend = MemoryBackend::with_payload("{not json");
        let err = BriefStore::open(Box::new(backend)).unwrap_err();
        assert!(matches!(err, StoreError::Serialization(_)));
    }
}
