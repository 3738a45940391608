// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/// Attribute marker of an episode title heading
pub const TITLE_MARKER: &str = "episodeGuide-episodeTitle";

/// Attribute marker of an episode summary paragraph
pub const SUMMARY_MARKER: &str = "episodeGuide-episodeSummary";

/// Attribute marker of an episode link
pub const LINK_MARKER: &str = "episodeGuide-episodeLink";

/// A start tag as seen by the classifier: its lowercase name and its attributes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartTag<'a> {
    pub name: &'a str,
    pub attrs: Vec<(&'a str, &'a str)>,
}

impl<'a> StartTag<'a> {
    pub fn new(name: &'a str, attrs: Vec<(&'a str, &'a str)>) -> Self {
        Self { name, attrs }
    }

    fn has_marker(&self, marker: &str) -> bool {
        self.attrs.iter().any(|(_, value)| value.contains(marker))
    }
}

/// Whether the tag opens an episode title (`<h3>` carrying the title marker)
pub fn is_title_region(tag: &StartTag<'_>) -> bool {
    tag.name == "h3" && tag.has_marker(TITLE_MARKER)
}

/// Whether the tag opens an episode summary (`<p>` carrying the summary marker)
pub fn is_summary_region(tag: &StartTag<'_>) -> bool {
    tag.name == "p" && tag.has_marker(SUMMARY_MARKER)
}

/// Return the href of an episode link
///
/// The tag must be an `<a>` carrying the link marker in any attribute value and
/// an `href` attribute. When several `href` attributes are present the last one
/// wins.
pub fn classify_link<'a>(tag: &StartTag<'a>) -> Option<&'a str> {
    if tag.name != "a" || !tag.has_marker(LINK_MARKER) {
        return None;
    }

    tag.attrs
        .iter()
        .rev()
        .find(|(key, _)| *key == "href")
        .map(|(_, value)| *value)
}
