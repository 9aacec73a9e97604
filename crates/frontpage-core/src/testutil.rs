//! Test utilities: mock implementations of the core traits plus builders
//! for events, profiles, and records.
//!
//! Handwritten mocks for dependency injection in unit tests, following the
//! same queue-of-responses shape as the production fetcher.

use std::sync::{Arc, Mutex};

use crate::error::FetchError;
use crate::models::{
    AssemblyProfile, AuxFields, Classify, PostKind, PrimaryFields, Record, RegionEvent, SourceId,
    Target,
};
use crate::traits::{Fetcher, SourceAdapter};

// ---------------------------------------------------------------------------
// MockFetcher
// ---------------------------------------------------------------------------

/// Mock fetcher that returns a configurable response.
#[derive(Clone)]
pub struct MockFetcher {
    /// Queue of responses. Each call pops the first element.
    /// If empty, returns a default HTML string.
    responses: Arc<Mutex<Vec<Result<String, FetchError>>>>,
}

impl MockFetcher {
    pub fn new(html: &str) -> Self {
        Self {
            responses: Arc::new(Mutex::new(vec![Ok(html.to_string())])),
        }
    }

    pub fn with_error(error: FetchError) -> Self {
        Self {
            responses: Arc::new(Mutex::new(vec![Err(error)])),
        }
    }

    pub fn with_responses(responses: Vec<Result<String, FetchError>>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses)),
        }
    }
}

impl Fetcher for MockFetcher {
    async fn fetch(&self, _locator: &str) -> Result<String, FetchError> {
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Ok("<html><body>default</body></html>".to_string())
        } else {
            responses.remove(0)
        }
    }
}

// ---------------------------------------------------------------------------
// MockAdapter
// ---------------------------------------------------------------------------

/// Mock adapter that returns canned region events regardless of the markup.
pub struct MockAdapter {
    events: Vec<RegionEvent>,
    profile: AssemblyProfile,
}

impl MockAdapter {
    /// Adapter with the HN-shaped profile from [`hn_profile`].
    pub fn new(events: Vec<RegionEvent>) -> Self {
        Self {
            events,
            profile: hn_profile(),
        }
    }

    pub fn with_profile(events: Vec<RegionEvent>, profile: AssemblyProfile) -> Self {
        Self { events, profile }
    }
}

impl SourceAdapter for MockAdapter {
    fn source_id(&self) -> SourceId {
        self.profile.source
    }

    fn user_agent(&self) -> &str {
        "frontpage-tests/0.0"
    }

    fn build_locator(&self, _target: &Target) -> String {
        "https://example.com/listing".to_string()
    }

    fn scan(&self, _html: &str) -> Vec<RegionEvent> {
        self.events.clone()
    }

    fn profile(&self, _target: &Target) -> AssemblyProfile {
        self.profile.clone()
    }
}

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

pub fn primary(key: &str, title: &str, link: &str, rank: u32) -> RegionEvent {
    RegionEvent::Primary {
        key: key.to_string(),
        fields: PrimaryFields {
            title: title.to_string(),
            link: link.to_string(),
            rank,
        },
    }
}

pub fn auxiliary(key: &str, score: &str, author: &str, age: &str, comments: &str) -> RegionEvent {
    RegionEvent::Auxiliary {
        key: key.to_string(),
        fields: AuxFields {
            score: score.to_string(),
            author: author.to_string(),
            age: age.to_string(),
            comments: comments.to_string(),
        },
    }
}

/// Profile matching the paginated two-region source.
pub fn hn_profile() -> AssemblyProfile {
    AssemblyProfile {
        source: SourceId::Hn,
        base_origin: "https://news.ycombinator.com/",
        relative_prefix: "item?id=",
        classify: Classify::ByPrefix,
        subcollection: String::new(),
    }
}

/// Profile matching the sub-collection single-region source.
pub fn reddit_profile(subcollection: &str) -> AssemblyProfile {
    AssemblyProfile {
        source: SourceId::Reddit,
        base_origin: "https://old.reddit.com",
        relative_prefix: "/r/",
        classify: Classify::Fixed(PostKind::External),
        subcollection: subcollection.to_string(),
    }
}

/// Minimal record for builder/ordering tests.
pub fn make_record(title: &str, rank: u32) -> Record {
    Record {
        title: title.to_string(),
        link: "https://example.com/post".to_string(),
        score: String::new(),
        author: String::new(),
        age: String::new(),
        comments: String::new(),
        rank,
        kind: PostKind::Story,
        subcollection: String::new(),
        source: SourceId::Hn,
    }
}
