// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::episode::Episode;
use crate::error::ReportError;

/// Render the plain-text report: a count line followed by one line per episode
pub fn render_text(episodes: &[Episode]) -> String {
    let mut out = format!("Found {} episodes:\n", episodes.len());

    for episode in episodes {
        out.push_str(&format_episode(episode));
        out.push('\n');
    }

    out
}

/// Format a single episode line
pub fn format_episode(episode: &Episode) -> String {
    format!(
        "Title: {} | Summary: {} | Link: {}",
        episode.title, episode.summary, episode.link
    )
}

/// Render the episodes as a pretty-printed JSON array
pub fn render_json(episodes: &[Episode]) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(episodes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Episode> {
        vec![
            Episode {
                title: "A".to_string(),
                summary: "B".to_string(),
                link: "/x".to_string(),
            },
            Episode {
                title: "C".to_string(),
                summary: "D".to_string(),
                link: "/y".to_string(),
            },
        ]
    }

    #[test]
    fn text_report_lists_count_then_episodes() {
        let report = render_text(&sample());

        assert_eq!(
            report,
            "Found 2 episodes:\n\
             Title: A | Summary: B | Link: /x\n\
             Title: C | Summary: D | Link: /y\n"
        );
    }

    #[test]
    fn empty_text_report_still_has_count() {
        assert_eq!(render_text(&[]), "Found 0 episodes:\n");
    }

    #[test]
    fn episode_text_is_not_trimmed() {
        let episode = Episode {
            title: "\nA ".to_string(),
            summary: String::new(),
            link: "/x".to_string(),
        };

        assert_eq!(
            format_episode(&episode),
            "Title: \nA  | Summary:  | Link: /x"
        );
    }

    #[test]
    fn json_report_is_an_array_of_records() {
        let json = render_json(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value.as_array().unwrap().len(), 2);
        assert_eq!(value[0]["title"], "A");
        assert_eq!(value[1]["link"], "/y");
    }
}
