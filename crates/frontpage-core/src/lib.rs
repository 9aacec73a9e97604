pub mod assembler;
pub mod collection;
pub mod error;
pub mod listing;
pub mod models;
pub mod testutil;
pub mod traits;

pub use assembler::RecordAssembler;
pub use collection::CollectionBuilder;
pub use error::FetchError;
pub use listing::ListingService;
pub use models::{
    AssemblyProfile, AuxFields, Classify, PostKind, PrimaryFields, Record, RegionEvent, SourceId,
    Target, classify_title,
};
pub use traits::{Fetcher, SourceAdapter};
