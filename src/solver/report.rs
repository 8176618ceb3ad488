//! Report phase: scan the populated index for the maximal anagram
//! group(s) and render them.

use crate::error::Result;
use crate::index::WordMap;
use crate::types::{AnagramReport, WordList};

/// Single pass over the index tracking the largest group size seen and the
/// keys holding it: a new maximum clears the candidates, a tie appends.
/// Group contents and group order are both sorted afterward, so the report
/// never depends on backend iteration order.
pub fn build_report(map: &dyn WordMap) -> AnagramReport {
    let mut max_size = 0usize;
    let mut candidate_keys: Vec<String> = Vec::new();

    for entry in map.entries() {
        let size = entry.words.len();
        if size > max_size {
            max_size = size;
            candidate_keys.clear();
            candidate_keys.push(entry.key.to_string());
        } else if size == max_size {
            candidate_keys.push(entry.key.to_string());
        }
    }

    // A "group" of one word has no anagrams.
    if max_size < 2 {
        return AnagramReport {
            group_count: 0,
            anagram_count: 0,
            groups: Vec::new(),
        };
    }

    let mut groups: Vec<WordList> = candidate_keys
        .iter()
        .filter_map(|key| map.get(key))
        .cloned()
        .map(|mut group| {
            group.sort();
            group
        })
        .collect();
    groups.sort_by(|a, b| a.first().cmp(&b.first()));

    AnagramReport {
        group_count: groups.len(),
        anagram_count: max_size,
        groups,
    }
}

/// Render the report in the classic text format:
///
/// ```text
/// Groups: 2, Anagram count: 2
/// [act, cat]
/// [dog, god]
/// ```
pub fn render_text(report: &AnagramReport) -> String {
    if report.anagram_count < 2 {
        return "No anagrams found.\n".to_string();
    }
    let mut out = format!(
        "Groups: {}, Anagram count: {}\n",
        report.group_count, report.anagram_count
    );
    for group in &report.groups {
        let words: Vec<&str> = group.iter().collect();
        out.push_str(&format!("[{}]\n", words.join(", ")));
    }
    out
}

/// Render the report as pretty-printed JSON.
pub fn render_json(report: &AnagramReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
