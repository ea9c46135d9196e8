use crate::domain::model::Athlete;

pub const LINE_BREAK: &str = "<br />";

/// Replaces every CRLF with an HTML line break. Lone `\r` or `\n` are kept.
pub fn nl2br(text: &str) -> String {
    text.replace("\r\n", LINE_BREAK)
}

/// Athlete names as shown next to a mark.
///
/// A single athlete keeps the full name; a relay team becomes its surnames
/// joined with `", "`. An empty list gives an empty list.
pub fn relay_names(athletes: &[Athlete]) -> Vec<String> {
    match athletes {
        [] => Vec::new(),
        [single] => vec![single.name.clone()],
        team => {
            let surnames: Vec<&str> = team.iter().map(|a| surname(&a.name)).collect();
            vec![surnames.join(", ")]
        }
    }
}

/// Text after the last whitespace, or the whole trimmed name.
fn surname(name: &str) -> &str {
    let name = name.trim();
    name.rsplit(char::is_whitespace).next().unwrap_or(name)
}
