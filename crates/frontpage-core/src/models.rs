use std::fmt;

/// Which adapter produced a record. Selects presentation rules downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceId {
    Hn,
    Reddit,
}

impl SourceId {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceId::Hn => "hn",
            SourceId::Reddit => "reddit",
        }
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Content classification derived from the title prefix, or fixed by the
/// adapter for sources with a single implicit type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PostKind {
    /// Plain submission, no recognized prefix.
    Story,
    Ask,
    Show,
    Tell,
    Launch,
    /// Record from a source that has no prefix taxonomy of its own.
    External,
}

impl PostKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostKind::Story => "story",
            PostKind::Ask => "ask",
            PostKind::Show => "show",
            PostKind::Tell => "tell",
            PostKind::Launch => "launch",
            PostKind::External => "external",
        }
    }
}

/// Ordered prefix table for title classification. First match wins.
const KIND_PREFIXES: &[(&str, PostKind)] = &[
    ("Ask HN:", PostKind::Ask),
    ("Show HN:", PostKind::Show),
    ("Tell HN:", PostKind::Tell),
    ("Launch HN:", PostKind::Launch),
];

/// Classify a title by exact, case-sensitive prefix match.
pub fn classify_title(title: &str) -> PostKind {
    KIND_PREFIXES
        .iter()
        .find(|(prefix, _)| title.starts_with(prefix))
        .map(|(_, kind)| *kind)
        .unwrap_or(PostKind::Story)
}

/// How the assembler derives a record's [`PostKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classify {
    /// Run the title through the prefix table.
    ByPrefix,
    /// Every record from this source gets the same kind.
    Fixed(PostKind),
}

/// One normalized listing item — the canonical unit handed to the renderer.
///
/// String fields other than `title` are best-effort: an empty string means
/// the source did not show that piece of information.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Record {
    pub title: String,
    /// Absolute URL, resolved at assembly time.
    pub link: String,
    /// Free-form score text, e.g. "42 points"; empty when hidden or absent.
    pub score: String,
    pub author: String,
    /// Relative-time text verbatim from the source; never parsed.
    pub age: String,
    /// Free-form comment summary, e.g. "17 comments".
    pub comments: String,
    /// Source-declared position; 0 when the source declares none.
    pub rank: u32,
    pub kind: PostKind,
    /// Named partition of the source (subreddit); empty for paginated sources.
    pub subcollection: String,
    pub source: SourceId,
}

/// Which slice of a source a single run fetches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Listing page number for paginated sources; page 1 is the front page.
    Page(u32),
    /// Sub-collection name for partitioned sources.
    Collection(String),
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Page(n) => write!(f, "page {n}"),
            Target::Collection(name) => write!(f, "r/{name}"),
        }
    }
}

/// Fields extracted from a primary region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrimaryFields {
    pub title: String,
    pub link: String,
    pub rank: u32,
}

/// Fields extracted from an auxiliary region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuxFields {
    pub score: String,
    pub author: String,
    pub age: String,
    pub comments: String,
}

/// One region of the fetched document, emitted by an adapter's scan in
/// document order. The key correlates a primary region with its auxiliary
/// sibling (markup id for two-region sources, sequence number otherwise).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionEvent {
    Primary { key: String, fields: PrimaryFields },
    Auxiliary { key: String, fields: AuxFields },
}

/// Everything the assembler needs to stay source-agnostic.
#[derive(Debug, Clone)]
pub struct AssemblyProfile {
    pub source: SourceId,
    /// Prepended to links that start with `relative_prefix`.
    pub base_origin: &'static str,
    pub relative_prefix: &'static str,
    pub classify: Classify,
    pub subcollection: String,
}
