/// Derive the canonical grouping key for a word.
///
/// Rules:
/// - lowercase
/// - sort the characters ascending
///
/// Two words are anagrams exactly when their canonical keys are equal:
/// `"stop"`, `"spot"`, `"pots"`, and `"tops"` all map to `"opst"`.
pub fn canonical_key(word: &str) -> String {
    let mut chars: Vec<char> = word.to_lowercase().chars().collect();
    chars.sort_unstable();
    chars.into_iter().collect()
}
