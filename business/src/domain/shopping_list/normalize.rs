use once_cell::sync::Lazy;
use regex::Regex;

static APOSTROPHES: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"['’]").ok());
static PUNCTUATION: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"[^\p{L}\p{N}\s]+").ok());

/// Canonical form of an ingredient name used as the grouping key.
///
/// Lower-cases, drops apostrophes, turns any other punctuation into spaces,
/// collapses whitespace and singularizes the last word. Idempotent.
pub fn normalize_ingredient_name(name: &str) -> String {
    let lowered = name.to_lowercase();
    let without_apostrophes = replace(&APOSTROPHES, &lowered, "");
    let stripped = replace(&PUNCTUATION, &without_apostrophes, " ");

    let mut words: Vec<&str> = stripped.split_whitespace().collect();
    let last = match words.pop() {
        Some(last) => singularize(last),
        None => return String::new(),
    };
    words.push(&last);
    words.join(" ")
}

fn replace(pattern: &Lazy<Option<Regex>>, text: &str, with: &str) -> String {
    pattern
        .as_ref()
        .map(|re| re.replace_all(text, with).into_owned())
        .unwrap_or_else(|| text.to_string())
}

fn singularize(word: &str) -> String {
    let chars = word.chars().count();

    if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
        return word.to_string();
    }
    if chars > 4 && word.ends_with("ies") {
        return format!("{}y", &word[..word.len() - 3]);
    }
    if chars > 4 && word.ends_with("oes") {
        return word[..word.len() - 2].to_string();
    }
    if chars > 4 && ["ches", "shes", "sses"].iter().any(|s| word.ends_with(s)) {
        return word[..word.len() - 2].to_string();
    }
    if chars > 3 && word.ends_with("xes") {
        return word[..word.len() - 2].to_string();
    }
    if chars > 2 && word.ends_with('s') {
        return word[..word.len() - 1].to_string();
    }
    word.to_string()
}
