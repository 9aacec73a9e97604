use std::future::Future;

use crate::error::FetchError;
use crate::models::{AssemblyProfile, RegionEvent, SourceId, Target};

/// Fetches one page of raw markup for a fully-formed locator.
pub trait Fetcher: Send + Sync + Clone {
    fn fetch(&self, locator: &str) -> impl Future<Output = Result<String, FetchError>> + Send;
}

/// Knows the structural shape of one source.
///
/// Adapters are the only place where per-source markup knowledge lives:
/// how to build the request locator for a page or sub-collection, which
/// regions carry record data, and how to pull fields out of them. Adding a
/// source means adding one implementation; assembly and ordering never
/// change.
pub trait SourceAdapter: Send + Sync {
    fn source_id(&self) -> SourceId;

    /// Identification string sent with each request. Distinct per source,
    /// since sources may reject generic or absent identification.
    fn user_agent(&self) -> &str;

    /// Absolute request URL for the given page or sub-collection.
    fn build_locator(&self, target: &Target) -> String;

    /// Apply the adapter's selectors to the fetched markup and emit region
    /// events in document order. Missing fields come back as empty strings,
    /// never as errors.
    fn scan(&self, html: &str) -> Vec<RegionEvent>;

    /// Source facts the assembler needs: base origin for link resolution,
    /// classification mode, sub-collection name.
    fn profile(&self, target: &Target) -> AssemblyProfile;
}
