use std::io::Cursor;

use anagram_index::index::{self, WordMap};
use anagram_index::solver::{build_report, load_words, render_json, render_text};
use anagram_index::types::MapKind;

const ALL_BACKENDS: [MapKind; 3] = [MapKind::Bst, MapKind::Rbt, MapKind::Hash];

fn build_index(kind: MapKind, dictionary: &str) -> Box<dyn WordMap> {
    let mut map = index::build(kind);
    load_words(Cursor::new(dictionary.to_string()), map.as_mut())
        .expect("reading from memory cannot fail");
    map
}

#[test]
fn full_pipeline_reports_tied_groups_in_lexicographic_order() {
    // cat/act and dog/god tie at two words apiece; the report must list
    // both, ordered by first sorted member, on every backend.
    for kind in ALL_BACKENDS {
        let map = build_index(kind, "cat\nact\ndog\ngod\n");
        assert_eq!(map.len(), 2, "{}: two canonical keys", kind);

        let report = build_report(map.as_ref());
        assert_eq!(report.group_count, 2, "{}", kind);
        assert_eq!(report.anagram_count, 2, "{}", kind);

        let text = render_text(&report);
        assert_eq!(
            text,
            "Groups: 2, Anagram count: 2\n[act, cat]\n[dog, god]\n",
            "{}: report text must be backend-independent",
            kind
        );
    }
}

#[test]
fn largest_group_wins_over_smaller_ones() {
    for kind in ALL_BACKENDS {
        let map = build_index(kind, "stop\nspot\ncat\npots\nact\ntops\n");
        let report = build_report(map.as_ref());
        assert_eq!(report.group_count, 1, "{}", kind);
        assert_eq!(report.anagram_count, 4, "{}", kind);
        assert_eq!(
            render_text(&report),
            "Groups: 1, Anagram count: 4\n[pots, spot, stop, tops]\n",
            "{}",
            kind
        );
    }
}

#[test]
fn report_is_identical_across_backends() {
    let dictionary = "\
pale\nleap\npeal\nplea\n\
note\ntone\n\
evil\nlive\nveil\nvile\n\
dusty\nstudy\n\
word\n";
    let mut rendered: Option<String> = None;
    for kind in ALL_BACKENDS {
        let map = build_index(kind, dictionary);
        let text = render_text(&build_report(map.as_ref()));
        match &rendered {
            None => rendered = Some(text),
            Some(expected) => assert_eq!(&text, expected, "{}: reports must agree", kind),
        }
    }
    let text = rendered.unwrap();
    assert!(text.starts_with("Groups: 2, Anagram count: 4\n"));
    assert!(text.contains("[evil, live, veil, vile]"));
    assert!(text.contains("[leap, pale, peal, plea]"));
}

#[test]
fn casing_differs_but_grouping_does_not() {
    for kind in ALL_BACKENDS {
        let map = build_index(kind, "Cat\nact\nTac\n");
        let report = build_report(map.as_ref());
        assert_eq!(report.anagram_count, 3, "{}", kind);
        // Original casing survives into the report.
        assert_eq!(
            render_text(&report),
            "Groups: 1, Anagram count: 3\n[Cat, Tac, act]\n",
            "{}",
            kind
        );
    }
}

#[test]
fn unique_words_find_no_anagrams() {
    for kind in ALL_BACKENDS {
        let map = build_index(kind, "apple\nbanana\ncherry\n");
        let report = build_report(map.as_ref());
        assert_eq!(report.group_count, 0, "{}", kind);
        assert_eq!(render_text(&report), "No anagrams found.\n", "{}", kind);
    }
}

#[test]
fn empty_dictionary_finds_no_anagrams() {
    for kind in ALL_BACKENDS {
        let map = build_index(kind, "");
        assert!(map.is_empty(), "{}", kind);
        assert_eq!(
            render_text(&build_report(map.as_ref())),
            "No anagrams found.\n",
            "{}",
            kind
        );
    }
}

#[test]
fn json_report_round_trips() {
    let map = build_index(MapKind::Rbt, "cat\nact\ndog\ngod\n");
    let report = build_report(map.as_ref());
    let json = render_json(&report).expect("report must serialize");
    let parsed: anagram_index::AnagramReport =
        serde_json::from_str(&json).expect("rendered JSON must parse back");
    assert_eq!(parsed.group_count, 2);
    assert_eq!(parsed.anagram_count, 2);
    assert_eq!(parsed.groups[0].first(), Some("act"));
}

#[test]
fn building_the_report_twice_gives_the_same_answer() {
    // entries() hands out fresh cursors, so a second scan must agree.
    for kind in ALL_BACKENDS {
        let map = build_index(kind, "cat\nact\ndog\ngod\n");
        let first = render_text(&build_report(map.as_ref()));
        let second = render_text(&build_report(map.as_ref()));
        assert_eq!(first, second, "{}", kind);
    }
}
