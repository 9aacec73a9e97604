use std::sync::LazyLock;

use frontpage_core::models::{
    AssemblyProfile, AuxFields, Classify, PrimaryFields, RegionEvent, SourceId, Target,
};
use frontpage_core::traits::SourceAdapter;
use scraper::{ElementRef, Html, Selector};

use crate::select::{child_attr, child_text};

pub const HN_ORIGIN: &str = "https://news.ycombinator.com/";
const HN_USER_AGENT: &str = "Mozilla/5.0 (compatible; frontpage/0.2)";

static PRIMARY_ROW: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr.athing").unwrap());
static TITLE_LINK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td.title > span.titleline > a").unwrap());
static RANK: LazyLock<Selector> = LazyLock::new(|| Selector::parse("span.rank").unwrap());
static SCORE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("span.score").unwrap());
static AUTHOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a.hnuser").unwrap());
static AGE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("span.age").unwrap());
static ANCHORS: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").unwrap());

/// Paginated two-region source.
///
/// Each story is split across two sibling table rows: a `tr.athing` row
/// with title, link, and rank, and the following row with score, author,
/// age, and comment count. The row id attribute is the identity key.
pub struct HackerNewsAdapter;

impl SourceAdapter for HackerNewsAdapter {
    fn source_id(&self) -> SourceId {
        SourceId::Hn
    }

    fn user_agent(&self) -> &str {
        HN_USER_AGENT
    }

    fn build_locator(&self, target: &Target) -> String {
        match target {
            Target::Page(n) if *n > 1 => format!("{HN_ORIGIN}news?p={n}"),
            _ => HN_ORIGIN.to_string(),
        }
    }

    fn scan(&self, html: &str) -> Vec<RegionEvent> {
        let doc = Html::parse_document(html);
        let mut events = Vec::new();

        for row in doc.select(&PRIMARY_ROW) {
            // No id means no identity key; the row cannot be correlated.
            let Some(id) = row.value().attr("id") else {
                tracing::debug!("story row without id attribute, skipped");
                continue;
            };

            let rank = child_text(row, &RANK)
                .trim_end_matches('.')
                .parse()
                .unwrap_or(0);

            events.push(RegionEvent::Primary {
                key: id.to_string(),
                fields: PrimaryFields {
                    title: child_text(row, &TITLE_LINK),
                    link: child_attr(row, &TITLE_LINK, "href"),
                    rank,
                },
            });

            // The subtext row immediately follows its story row.
            if let Some(aux) = row.next_siblings().find_map(ElementRef::wrap) {
                events.push(RegionEvent::Auxiliary {
                    key: id.to_string(),
                    fields: extract_auxiliary(aux),
                });
            }
        }

        events
    }

    fn profile(&self, _target: &Target) -> AssemblyProfile {
        AssemblyProfile {
            source: SourceId::Hn,
            base_origin: HN_ORIGIN,
            relative_prefix: "item?id=",
            classify: Classify::ByPrefix,
            subcollection: String::new(),
        }
    }
}

fn extract_auxiliary(aux: ElementRef<'_>) -> AuxFields {
    // The comment link is the anchor into the item page whose text mentions
    // comments; other item?id= anchors ("hide", the age link) don't.
    let mut comments = String::new();
    for anchor in aux.select(&ANCHORS) {
        let href = anchor.value().attr("href").unwrap_or_default();
        let text = anchor.text().collect::<String>();
        if href.contains("item?id=") && text.contains("comment") {
            comments = text.trim().to_string();
        }
    }

    AuxFields {
        score: child_text(aux, &SCORE),
        author: child_text(aux, &AUTHOR),
        age: child_text(aux, &AGE),
        comments,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use frontpage_core::RecordAssembler;
    use frontpage_core::models::PostKind;

    const FRONT_PAGE: &str = r#"
        <html><body><table>
        <tr class="athing" id="1">
          <td class="title"><span class="rank">1.</span></td>
          <td class="title"><span class="titleline">
            <a href="https://example.com/foo">Show HN: Foo</a>
          </span></td>
        </tr>
        <tr>
          <td class="subtext">
            <span class="score">42 points</span> by
            <a class="hnuser" href="user?id=alice">alice</a>
            <span class="age"><a href="item?id=1">2 hours ago</a></span> |
            <a href="hide?id=1">hide</a> |
            <a href="item?id=1">3&nbsp;comments</a>
          </td>
        </tr>
        <tr class="athing" id="2">
          <td class="title"><span class="rank">2.</span></td>
          <td class="title"><span class="titleline">
            <a href="item?id=2">Regular title</a>
          </span></td>
        </tr>
        <tr>
          <td class="subtext">
            <span class="score">10 points</span> by
            <a class="hnuser" href="user?id=bob">bob</a>
            <span class="age"><a href="item?id=2">1 hour ago</a></span>
          </td>
        </tr>
        </table></body></html>
    "#;

    #[test]
    fn locator_for_page_one_is_the_bare_listing() {
        let adapter = HackerNewsAdapter;
        assert_eq!(
            adapter.build_locator(&Target::Page(1)),
            "https://news.ycombinator.com/"
        );
    }

    #[test]
    fn locator_for_later_pages_carries_the_page_parameter() {
        let adapter = HackerNewsAdapter;
        assert_eq!(
            adapter.build_locator(&Target::Page(3)),
            "https://news.ycombinator.com/news?p=3"
        );
    }

    #[test]
    fn scan_emits_primary_and_auxiliary_in_document_order() {
        let events = HackerNewsAdapter.scan(FRONT_PAGE);
        assert_eq!(events.len(), 4);
        assert!(matches!(&events[0], RegionEvent::Primary { key, .. } if key == "1"));
        assert!(matches!(&events[1], RegionEvent::Auxiliary { key, .. } if key == "1"));
        assert!(matches!(&events[2], RegionEvent::Primary { key, .. } if key == "2"));
        assert!(matches!(&events[3], RegionEvent::Auxiliary { key, .. } if key == "2"));
    }

    #[test]
    fn front_page_assembles_into_classified_ranked_records() {
        let adapter = HackerNewsAdapter;
        let target = Target::Page(1);
        let mut assembler = RecordAssembler::new(adapter.profile(&target));
        for event in adapter.scan(FRONT_PAGE) {
            assembler.apply(event);
        }
        let records = assembler.finish().finalize();

        assert_eq!(records.len(), 2);

        assert_eq!(records[0].title, "Show HN: Foo");
        assert_eq!(records[0].kind, PostKind::Show);
        assert_eq!(records[0].score, "42 points");
        assert_eq!(records[0].author, "alice");
        assert_eq!(records[0].age, "2 hours ago");
        assert_eq!(records[0].rank, 1);
        assert_eq!(records[0].link, "https://example.com/foo");

        assert_eq!(records[1].title, "Regular title");
        assert_eq!(records[1].kind, PostKind::Story);
        assert_eq!(records[1].score, "10 points");
        assert_eq!(records[1].rank, 2);
        // Self-links are relative and get the origin prepended.
        assert_eq!(records[1].link, "https://news.ycombinator.com/item?id=2");
    }

    #[test]
    fn comment_link_is_distinguished_from_other_item_anchors() {
        let events = HackerNewsAdapter.scan(FRONT_PAGE);
        let RegionEvent::Auxiliary { fields, .. } = &events[1] else {
            panic!("expected auxiliary event");
        };
        assert_eq!(fields.comments, "3\u{a0}comments");
    }

    #[test]
    fn rows_without_id_are_skipped() {
        let html = r#"
            <table><tr class="athing">
              <td class="title"><span class="titleline">
                <a href="https://example.com">No identity</a>
              </span></td>
            </tr></table>
        "#;
        assert!(HackerNewsAdapter.scan(html).is_empty());
    }

    #[test]
    fn unparsable_rank_falls_back_to_zero() {
        let html = r#"
            <table><tr class="athing" id="9">
              <td class="title"><span class="rank">n/a</span></td>
              <td class="title"><span class="titleline">
                <a href="https://example.com">Title</a>
              </span></td>
            </tr></table>
        "#;
        let events = HackerNewsAdapter.scan(html);
        let RegionEvent::Primary { fields, .. } = &events[0] else {
            panic!("expected primary event");
        };
        assert_eq!(fields.rank, 0);
    }
}
