// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;

/// A labeled piece of an episode, in the order it was found on the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// Raw text found inside a title region
    Title(String),
    /// Raw text found inside a summary region
    Summary(String),
    /// The href of an episode link
    Link(String),
}

/// The field a fragment fills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentKind {
    Title,
    Summary,
    Link,
}

impl Fragment {
    pub fn kind(&self) -> FragmentKind {
        match self {
            Fragment::Title(_) => FragmentKind::Title,
            Fragment::Summary(_) => FragmentKind::Summary,
            Fragment::Link(_) => FragmentKind::Link,
        }
    }

    /// The text or href carried by this fragment
    pub fn value(&self) -> &str {
        match self {
            Fragment::Title(v) | Fragment::Summary(v) | Fragment::Link(v) => v,
        }
    }
}

impl fmt::Display for FragmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FragmentKind::Title => "title",
            FragmentKind::Summary => "summary",
            FragmentKind::Link => "link",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        assert_eq!(Fragment::Title("A".into()).kind(), FragmentKind::Title);
        assert_eq!(Fragment::Summary("B".into()).kind(), FragmentKind::Summary);
        assert_eq!(Fragment::Link("/x".into()).kind(), FragmentKind::Link);
    }

    #[test]
    fn value_is_untouched() {
        let fragment = Fragment::Title("\n  Episode 1 \n".into());
        assert_eq!(fragment.value(), "\n  Episode 1 \n");
    }

    #[test]
    fn kind_displays_lowercase() {
        assert_eq!(FragmentKind::Summary.to_string(), "summary");
    }
}
