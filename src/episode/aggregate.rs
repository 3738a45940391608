// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::Serialize;

use crate::guide::Fragment;

/// A single episode assembled from the guide page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Episode {
    pub title: String,
    pub summary: String,
    pub link: String,
}

/// What to do with the fields still accumulated when the stream ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingPolicy {
    /// Discard them. Only fields followed by a recurring field of the same
    /// kind ever become an episode.
    #[default]
    Drop,
    /// Emit them as a final episode when at least one field is set
    Flush,
}

/// Groups a stream of fragments into episodes
///
/// The aggregator has no notion of page structure. An episode boundary is
/// detected when a fragment arrives for a field that is already populated:
/// the current title, summary and link are emitted as an episode and the new
/// value replaces the old one. The other two fields are left as they are.
#[derive(Debug, Default)]
pub struct Aggregator {
    title: String,
    summary: String,
    link: String,
    episodes: Vec<Episode>,
    policy: TrailingPolicy,
}

impl Aggregator {
    pub fn new(policy: TrailingPolicy) -> Self {
        Self {
            policy,
            ..Default::default()
        }
    }

    /// Feed the next fragment in document order
    pub fn push(&mut self, fragment: Fragment) {
        let needs_flush = match &fragment {
            Fragment::Title(_) => !self.title.is_empty(),
            Fragment::Summary(_) => !self.summary.is_empty(),
            Fragment::Link(_) => !self.link.is_empty(),
        };
        if needs_flush {
            self.flush();
        }

        match fragment {
            Fragment::Title(value) => self.title = value,
            Fragment::Summary(value) => self.summary = value,
            Fragment::Link(value) => self.link = value,
        }
    }

    /// Number of episodes emitted so far
    pub fn len(&self) -> usize {
        self.episodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }

    /// End the stream and return every episode in the order it was completed
    pub fn finish(mut self) -> Vec<Episode> {
        let has_trailing =
            !(self.title.is_empty() && self.summary.is_empty() && self.link.is_empty());

        match self.policy {
            TrailingPolicy::Flush if has_trailing => self.flush(),
            TrailingPolicy::Drop if has_trailing => {
                tracing::debug!(
                    "Dropping trailing fields (title: {:?}, summary: {:?}, link: {:?})",
                    self.title,
                    self.summary,
                    self.link
                );
            }
            _ => {}
        }

        self.episodes
    }

    fn flush(&mut self) {
        tracing::debug!("Episode boundary after {:?}", self.title);
        self.episodes.push(Episode {
            title: self.title.clone(),
            summary: self.summary.clone(),
            link: self.link.clone(),
        });
    }
}

/// Aggregate a complete sequence of fragments
pub fn aggregate<I>(fragments: I, policy: TrailingPolicy) -> Vec<Episode>
where
    I: IntoIterator<Item = Fragment>,
{
    let mut aggregator = Aggregator::new(policy);
    for fragment in fragments {
        aggregator.push(fragment);
    }
    aggregator.finish()
}
