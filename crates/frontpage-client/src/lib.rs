pub mod fetcher;
pub mod hackernews;
pub mod reddit;
pub mod select;

pub use fetcher::ReqwestFetcher;
pub use hackernews::HackerNewsAdapter;
pub use reddit::{DEFAULT_SUBREDDIT, RedditAdapter};
