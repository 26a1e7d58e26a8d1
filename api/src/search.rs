use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use crate::{endpoint, recording::RecordingId, send_json};

pub const DEFAULT_SEARCH_LIMIT: u32 = 10;
pub const MAX_SEARCH_LIMIT: u32 = 50;

// substring search over transcripts, summaries and filenames of completed
// recordings
//
// the backend rejects an empty query with a 400, so catch it before sending
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub query: String,
    pub limit: u32,
}

impl SearchQuery {
    pub fn new(query: &str, limit: u32) -> anyhow::Result<Self> {
        let query = query.trim();

        if query.is_empty() {
            return Err(anyhow::Error::msg("search query cannot be empty"));
        }

        Ok(SearchQuery {
            query: query.to_owned(),
            limit: limit.clamp(1, MAX_SEARCH_LIMIT),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub chunk_id: i64,
    pub recording_id: RecordingId,
    pub recording_title: String,
    // an excerpt of the transcript around the first match
    pub chunk_text: String,
    pub chunk_index: i64,
    pub similarity: f64,
    pub created_at: String,
    pub duration: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchResp {
    pub query: String,
    pub results: Vec<SearchResult>,
    pub total_results: usize,
}

pub async fn search_recordings(req: &SearchQuery) -> anyhow::Result<SearchResp> {
    let limit = req.limit.to_string();

    send_json(
        Request::get(&endpoint("/search/semantic"))
            .query([("query", req.query.as_str()), ("limit", limit.as_str())]),
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_queries_are_rejected() {
        assert!(SearchQuery::new("", 10).is_err());
        assert!(SearchQuery::new("   \t", 10).is_err());
    }

    #[test]
    fn query_is_trimmed_and_limit_clamped() {
        let req = SearchQuery::new("  budget review ", 500).unwrap();
        assert_eq!(req.query, "budget review");
        assert_eq!(req.limit, MAX_SEARCH_LIMIT);

        assert_eq!(SearchQuery::new("q", 0).unwrap().limit, 1);
    }

    #[test]
    fn search_fixture_deserializes() {
        let resp: SearchResp = serde_json::from_str(
            r#"{
                "query": "budget",
                "results": [{
                    "chunk_id": 3,
                    "recording_id": 3,
                    "recording_title": "q3-planning.mp3",
                    "chunk_text": "...the budget for next quarter...",
                    "chunk_index": 0,
                    "similarity": 0.9,
                    "created_at": "2024-04-02T14:00:00",
                    "duration": null
                }],
                "total_results": 1,
                "search_params": {"limit": 10, "search_type": "text_matching"}
            }"#,
        )
        .unwrap();

        assert_eq!(resp.total_results, 1);
        assert_eq!(resp.results[0].recording_id, 3);
        assert_eq!(resp.results[0].duration, None);
    }
}
