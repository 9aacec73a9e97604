use std::sync::LazyLock;

use frontpage_core::models::{
    AssemblyProfile, AuxFields, Classify, PostKind, PrimaryFields, RegionEvent, SourceId, Target,
};
use frontpage_core::traits::SourceAdapter;
use scraper::{Html, Selector};

use crate::select::{child_attr, child_text};

pub const REDDIT_ORIGIN: &str = "https://old.reddit.com";
pub const DEFAULT_SUBREDDIT: &str = "popular";

// old.reddit serves the classic server-rendered listing; the redesign only
// ships a script container with nothing to select.
const REDDIT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko)";

/// Score text old.reddit shows when the real value is hidden. Carries no
/// information, so it normalizes to empty before assembly.
const SCORE_PLACEHOLDER: &str = "•";

static THING: LazyLock<Selector> = LazyLock::new(|| Selector::parse("div.thing").unwrap());
static TITLE_LINK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p.title > a.title").unwrap());
static AUTHOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p.tagline > a.author").unwrap());
static SCORE_UNVOTED: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.score.unvoted").unwrap());
static SCORE_ANY: LazyLock<Selector> = LazyLock::new(|| Selector::parse("div.score").unwrap());
static TAGLINE_TIME: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p.tagline > time").unwrap());
static COMMENTS: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"ul.flat-list > li > a[data-event-action="comments"]"#).unwrap()
});

/// Sub-collection single-region source.
///
/// Every `div.thing` carries all fields of one post, so there is no
/// identity attribute to correlate by; a monotonic sequence number plays
/// the identity-key role and arrival order supplies the rank.
pub struct RedditAdapter;

impl SourceAdapter for RedditAdapter {
    fn source_id(&self) -> SourceId {
        SourceId::Reddit
    }

    fn user_agent(&self) -> &str {
        REDDIT_USER_AGENT
    }

    fn build_locator(&self, target: &Target) -> String {
        format!("{REDDIT_ORIGIN}/r/{}", subreddit_of(target))
    }

    fn scan(&self, html: &str) -> Vec<RegionEvent> {
        let doc = Html::parse_document(html);
        let mut events = Vec::new();

        for (seq, thing) in doc.select(&THING).enumerate() {
            let key = seq.to_string();

            events.push(RegionEvent::Primary {
                key: key.clone(),
                fields: PrimaryFields {
                    title: child_text(thing, &TITLE_LINK),
                    link: child_attr(thing, &TITLE_LINK, "href"),
                    rank: 0,
                },
            });

            let mut score = child_text(thing, &SCORE_UNVOTED);
            if score == SCORE_PLACEHOLDER {
                score = child_text(thing, &SCORE_ANY);
            }
            if score == SCORE_PLACEHOLDER {
                score.clear();
            }

            // Hover title holds the absolute timestamp text; fall back to
            // the visible relative text when absent.
            let mut age = child_attr(thing, &TAGLINE_TIME, "title");
            if age.is_empty() {
                age = child_text(thing, &TAGLINE_TIME);
            }

            events.push(RegionEvent::Auxiliary {
                key,
                fields: AuxFields {
                    score,
                    author: child_text(thing, &AUTHOR),
                    age,
                    comments: child_text(thing, &COMMENTS),
                },
            });
        }

        events
    }

    fn profile(&self, target: &Target) -> AssemblyProfile {
        AssemblyProfile {
            source: SourceId::Reddit,
            base_origin: REDDIT_ORIGIN,
            relative_prefix: "/r/",
            classify: Classify::Fixed(PostKind::External),
            subcollection: subreddit_of(target),
        }
    }
}

fn subreddit_of(target: &Target) -> String {
    match target {
        Target::Collection(name) if !name.is_empty() => name.clone(),
        _ => DEFAULT_SUBREDDIT.to_string(),
    }
}
