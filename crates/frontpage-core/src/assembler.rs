use std::collections::HashMap;

use crate::collection::CollectionBuilder;
use crate::models::{AssemblyProfile, Classify, Record, RegionEvent, classify_title};

/// Merges a document-ordered stream of region events into records.
///
/// A record materializes only when its primary region is seen; auxiliary
/// events for an unknown key are discarded, so malformed documents with
/// unpaired auxiliary rows degrade silently instead of aborting the run.
/// The assembler is owned by a single run and never shared.
pub struct RecordAssembler {
    profile: AssemblyProfile,
    records: HashMap<String, Record>,
    /// Keys in order of first sight, used when the source declares no rank.
    arrival: Vec<String>,
}

impl RecordAssembler {
    pub fn new(profile: AssemblyProfile) -> Self {
        Self {
            profile,
            records: HashMap::new(),
            arrival: Vec::new(),
        }
    }

    /// Consume one region event.
    pub fn apply(&mut self, event: RegionEvent) {
        match event {
            RegionEvent::Primary { key, fields } => {
                if fields.title.is_empty() {
                    tracing::debug!(%key, "primary region without title, dropped");
                    return;
                }

                let kind = match self.profile.classify {
                    Classify::ByPrefix => classify_title(&fields.title),
                    Classify::Fixed(kind) => kind,
                };
                let link = self.resolve_link(&fields.link);

                if let Some(existing) = self.records.get_mut(&key) {
                    // Repeated primary for the same key: overwrite the
                    // primary-owned fields, keep merged auxiliary data.
                    existing.title = fields.title;
                    existing.link = link;
                    existing.rank = fields.rank;
                    existing.kind = kind;
                } else {
                    self.arrival.push(key.clone());
                    self.records.insert(
                        key,
                        Record {
                            title: fields.title,
                            link,
                            score: String::new(),
                            author: String::new(),
                            age: String::new(),
                            comments: String::new(),
                            rank: fields.rank,
                            kind,
                            subcollection: self.profile.subcollection.clone(),
                            source: self.profile.source,
                        },
                    );
                }
            }
            RegionEvent::Auxiliary { key, fields } => {
                let Some(record) = self.records.get_mut(&key) else {
                    tracing::debug!(%key, "auxiliary region without primary, discarded");
                    return;
                };
                record.score = fields.score;
                record.author = fields.author;
                record.age = fields.age;
                record.comments = fields.comments;
            }
        }
    }

    /// Links under the source's relative prefix get the base origin
    /// prepended; anything else passes through unchanged.
    fn resolve_link(&self, link: &str) -> String {
        if !self.profile.relative_prefix.is_empty()
            && link.starts_with(self.profile.relative_prefix)
        {
            format!("{}{}", self.profile.base_origin, link)
        } else {
            link.to_string()
        }
    }

    /// Hand the assembled records, in arrival order, to a collection builder.
    pub fn finish(mut self) -> CollectionBuilder {
        let mut builder = CollectionBuilder::new();
        for key in self.arrival {
            if let Some(record) = self.records.remove(&key) {
                builder.add(key, record);
            }
        }
        builder
    }
}
