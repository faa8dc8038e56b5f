use std::sync::LazyLock;

use regex::Regex;

/// Substitutions applied to each definition fragment, in order. The upstream
/// API interleaves highlight markup and parenthesized cross-references with
/// the definition text.
static SUBSTITUTIONS: LazyLock<Vec<(Regex, &str)>> = LazyLock::new(|| {
    [
        (r"</?span[^>]*>", ""),
        (r"</?strong[^>]*>", ""),
        (r"\(→(.*?)\)", ""),
        (r"\(=(.*?)\)", ""),
        (r"\(↔(.*?)\)", ""),
        (r"\(Abbr.\)", ""),
    ]
    .into_iter()
    .map(|(pattern, replacement)| (Regex::new(pattern).expect("cleaning pattern"), replacement))
    .collect()
});

/// Strip markup and annotations from a single fragment and trim the rest.
pub fn clean_fragment(raw: &str) -> String {
    let mut text = raw.to_string();
    for (pattern, replacement) in SUBSTITUTIONS.iter() {
        text = pattern.replace_all(&text, *replacement).into_owned();
    }
    text.trim().to_string()
}

/// Render fragments as a single numbered line, e.g. `"1. run 2. walk "`.
/// Fragments that clean down to nothing are dropped and consume no number,
/// so the numbering stays contiguous.
pub fn render_means(fragments: &[String]) -> String {
    let mut text = String::new();
    let mut index = 1;
    for fragment in fragments {
        let cleaned = clean_fragment(fragment);
        if !cleaned.is_empty() {
            text.push_str(&format!("{index}. {cleaned} "));
            index += 1;
        }
    }
    text
}
