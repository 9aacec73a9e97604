//! Colorized terminal rendering of the final record sequence.
//!
//! All presentation choices live in [`Theme`], injected by the caller and
//! keyed by classification and source; the core crates never reference
//! colors or layout.

use colored::{Color, Colorize};
use frontpage_core::models::{PostKind, Record, SourceId, Target};

const SEPARATOR_WIDTH: usize = 75;

/// Color configuration for the renderer.
pub struct Theme {
    pub title: Color,
    pub url: Color,
    pub rank: Color,
    pub author: Color,
    pub score: Color,
    pub comments: Color,
    pub age: Color,
    pub separator: Color,
    pub header: Color,
    pub subcollection: Color,
    /// Tag color per classification; unlisted kinds fall back to white.
    pub kind_colors: Vec<(PostKind, Color)>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title: Color::BrightCyan,
            url: Color::Blue,
            rank: Color::Yellow,
            author: Color::Green,
            score: Color::Magenta,
            comments: Color::BrightBlue,
            age: Color::BrightYellow,
            separator: Color::BrightBlack,
            header: Color::BrightWhite,
            subcollection: Color::BrightRed,
            kind_colors: vec![
                (PostKind::Story, Color::White),
                (PostKind::Ask, Color::BrightGreen),
                (PostKind::Show, Color::BrightMagenta),
                (PostKind::Tell, Color::BrightCyan),
                (PostKind::Launch, Color::BrightRed),
                (PostKind::External, Color::BrightYellow),
            ],
        }
    }
}

impl Theme {
    pub fn kind_color(&self, kind: PostKind) -> Color {
        self.kind_colors
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, c)| *c)
            .unwrap_or(Color::White)
    }
}

/// Render one run's output. An empty sequence is a valid outcome and gets
/// its own message, distinct from a fetch failure.
pub fn render(theme: &Theme, source: SourceId, target: &Target, records: &[Record]) {
    render_header(theme, source, target);

    if records.is_empty() {
        println!("{}", "No posts found.".red());
        return;
    }

    for record in records {
        render_record(theme, record);
    }
    println!();
}

fn render_header(theme: &Theme, source: SourceId, target: &Target) {
    let name = match source {
        SourceId::Hn => "HACKER NEWS",
        SourceId::Reddit => "REDDIT",
    };
    let subtitle = match target {
        Target::Page(n) => format!("PAGE {n}"),
        Target::Collection(sub) => format!("r/{sub}"),
    };

    let bar = "═".repeat(SEPARATOR_WIDTH - 4);
    println!();
    println!("  {}", format!("╔{bar}╗").color(theme.header).bold());
    println!(
        "  {}",
        format!("║{:^width$}║", name, width = SEPARATOR_WIDTH - 4)
            .color(theme.header)
            .bold()
    );
    println!(
        "  {}",
        format!("║{:^width$}║", subtitle, width = SEPARATOR_WIDTH - 4)
            .color(theme.header)
            .bold()
    );
    println!("  {}", format!("╚{bar}╝").color(theme.header).bold());
    println!();
}

fn render_record(theme: &Theme, record: &Record) {
    println!();
    print!(
        "{} ",
        format!(" #{:<2}", record.rank).color(theme.rank).bold()
    );

    let kind_color = theme.kind_color(record.kind);
    if record.source == SourceId::Reddit {
        print!("{} ", "[REDDIT]".color(kind_color));
        if !record.subcollection.is_empty() {
            print!(
                "{} ",
                format!("r/{}", record.subcollection).color(theme.subcollection)
            );
        }
    } else {
        print!(
            "{} ",
            format!("[{}]", record.kind.as_str().to_uppercase()).color(kind_color)
        );
    }
    println!("{}", record.title.as_str().color(theme.title).bold());

    println!("     {}", record.link.as_str().color(theme.url).underline());

    let meta = meta_line(theme, record);
    if !meta.is_empty() {
        println!("     {meta}");
    }

    println!(
        "{}",
        "─".repeat(SEPARATOR_WIDTH).color(theme.separator)
    );
}

/// The `score • by author • age • comments` line, skipping absent fields.
fn meta_line(theme: &Theme, record: &Record) -> String {
    let mut parts: Vec<String> = Vec::new();
    if !record.score.is_empty() {
        parts.push(record.score.as_str().color(theme.score).to_string());
    }
    if !record.author.is_empty() {
        parts.push(
            format!("by {}", record.author)
                .color(theme.author)
                .to_string(),
        );
    }
    if !record.age.is_empty() {
        parts.push(record.age.as_str().color(theme.age).to_string());
    }
    if !record.comments.is_empty() {
        parts.push(record.comments.as_str().color(theme.comments).to_string());
    }

    let sep = " • ".color(theme.separator).to_string();
    parts.join(&sep)
}
