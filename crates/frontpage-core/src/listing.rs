use crate::assembler::RecordAssembler;
use crate::error::FetchError;
use crate::models::{Record, Target};
use crate::traits::{Fetcher, SourceAdapter};

/// Orchestrates one run: fetch → scan → assemble → finalize.
///
/// Generic over the fetcher for dependency injection in tests. Each run
/// owns its own assembler and builder, so concurrent runs spawned by a
/// caller share no mutable state. A failed fetch aborts the run with no
/// partial output; an empty record sequence is a valid non-error outcome.
pub struct ListingService<F: Fetcher> {
    fetcher: F,
}

impl<F: Fetcher> ListingService<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    pub async fn run(
        &self,
        adapter: &dyn SourceAdapter,
        target: &Target,
    ) -> Result<Vec<Record>, FetchError> {
        let locator = adapter.build_locator(target);
        tracing::info!(source = %adapter.source_id(), %locator, "Fetching listing");

        let html = self.fetcher.fetch(&locator).await?;
        tracing::debug!("Fetched {} bytes of HTML", html.len());

        let events = adapter.scan(&html);
        tracing::debug!("Scanned {} region events", events.len());

        let mut assembler = RecordAssembler::new(adapter.profile(target));
        for event in events {
            assembler.apply(event);
        }

        let records = assembler.finish().finalize();
        tracing::info!(count = records.len(), "Listing assembled");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PostKind;
    use crate::testutil::{MockAdapter, MockFetcher, auxiliary, primary};

    #[tokio::test]
    async fn assembles_the_front_page_scenario() {
        let adapter = MockAdapter::new(vec![
            primary("1", "Show HN: Foo", "https://example.com/foo", 1),
            auxiliary("1", "42 points", "alice", "2 hours ago", "3 comments"),
            primary("2", "Regular title", "https://example.com/bar", 2),
            auxiliary("2", "10 points", "bob", "1 hour ago", ""),
        ]);
        let service = ListingService::new(MockFetcher::new("<html></html>"));

        let records = service.run(&adapter, &Target::Page(1)).await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "Show HN: Foo");
        assert_eq!(records[0].kind, PostKind::Show);
        assert_eq!(records[0].score, "42 points");
        assert_eq!(records[0].rank, 1);
        assert_eq!(records[1].title, "Regular title");
        assert_eq!(records[1].kind, PostKind::Story);
        assert_eq!(records[1].score, "10 points");
        assert_eq!(records[1].rank, 2);
    }

    #[tokio::test]
    async fn empty_document_yields_empty_sequence_not_error() {
        let adapter = MockAdapter::new(vec![]);
        let service = ListingService::new(MockFetcher::new("<html></html>"));

        let records = service.run(&adapter, &Target::Page(1)).await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn fetch_timeout_aborts_the_run_with_no_records() {
        let adapter = MockAdapter::new(vec![primary("1", "Never seen", "x", 1)]);
        let service = ListingService::new(MockFetcher::with_error(FetchError::Timeout {
            locator: "https://example.com/listing".into(),
            timeout_secs: 30,
        }));

        let err = service.run(&adapter, &Target::Page(1)).await.unwrap_err();
        assert!(matches!(err, FetchError::Timeout { .. }));
        assert_eq!(err.locator(), Some("https://example.com/listing"));
    }

    #[tokio::test]
    async fn http_error_propagates() {
        let adapter = MockAdapter::new(vec![]);
        let service = ListingService::new(MockFetcher::with_error(FetchError::Status {
            locator: "https://example.com/listing".into(),
            status: 503,
        }));

        let err = service.run(&adapter, &Target::Page(1)).await.unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 503, .. }));
    }
}
