//! Elasticsearch Query DSL for benchmark lookups.

use serde_json::{Value, json};

use crate::search::{DATETIME_FIELD, MAX_SEARCH_RESULTS, PROJECT_FIELD};

/// Builds the search body selecting the documents of `project`, newest first.
///
/// The project is matched exactly in filter context. A non-empty `id_prefix`
/// adds a prefix match on the document id.
pub fn build_search_body(project: &str, id_prefix: Option<&str>) -> Value {
    let mut bool_query = json!({
        "filter": { "term": { PROJECT_FIELD: project } }
    });

    if let Some(prefix) = id_prefix.filter(|p| !p.is_empty()) {
        bool_query["must"] = json!({ "prefix": { "_id": prefix } });
    }

    json!({
        "size": MAX_SEARCH_RESULTS,
        "sort": [{ DATETIME_FIELD: { "order": "desc" } }],
        "query": { "bool": bool_query }
    })
}
