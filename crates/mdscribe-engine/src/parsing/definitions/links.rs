use std::sync::OnceLock;

use regex::Regex;

use crate::models::{LinkDefinition, LinkDefinitions};

static DEFINITION_RE: OnceLock<Regex> = OnceLock::new();

fn definition_re() -> &'static Regex {
    DEFINITION_RE.get_or_init(|| {
        Regex::new(r#"^\[([^\]]+)\]:\s*(\S+)(?:\s+"([^"]+)")?$"#)
            .expect("Invalid link definition regex")
    })
}

/// Parses one `[label]: url "title"` line.
///
/// Labels starting with `^` are footnote syntax and never match.
pub fn parse_definition(line: &str) -> Option<LinkDefinition> {
    let caps = definition_re().captures(line.trim())?;
    let label = caps[1].to_string();
    if label.starts_with('^') {
        return None;
    }
    Some(LinkDefinition {
        label,
        url: caps[2].to_string(),
        title: caps.get(3).map(|m| m.as_str().to_string()),
    })
}

/// Removes link reference definitions from `lines`, keyed by lower-cased
/// label. The first definition of a label wins.
pub fn extract_links<'a>(lines: &[&'a str]) -> (LinkDefinitions, Vec<&'a str>) {
    let mut defs = LinkDefinitions::new();
    let mut rest = Vec::with_capacity(lines.len());

    for &line in lines {
        match parse_definition(line) {
            Some(def) => {
                defs.entry(def.label.to_lowercase()).or_insert(def);
            }
            None => rest.push(line),
        }
    }

    (defs, rest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("[foo]: http://x", "foo", "http://x", None)]
    #[case("[Foo Bar]: /path \"The Title\"", "Foo Bar", "/path", Some("The Title"))]
    #[case("  [a]:   https://e.com  ", "a", "https://e.com", None)]
    fn parses_definitions(
        #[case] line: &str,
        #[case] label: &str,
        #[case] url: &str,
        #[case] title: Option<&str>,
    ) {
        let def = parse_definition(line).unwrap();
        assert_eq!(def.label, label);
        assert_eq!(def.url, url);
        assert_eq!(def.title.as_deref(), title);
    }

    #[rstest]
    #[case("[^1]: a footnote")]
    #[case("[text](http://inline)")]
    #[case("[label]:")]
    #[case("plain text")]
    fn rejects_non_definitions(#[case] line: &str) {
        assert_eq!(parse_definition(line), None);
    }

    #[test]
    fn keys_are_lowercased_and_lines_removed() {
        let lines = ["Intro", "[Foo]: http://x", "Outro"];
        let (defs, rest) = extract_links(&lines);
        assert_eq!(defs["foo"].url, "http://x");
        assert_eq!(defs["foo"].label, "Foo");
        assert_eq!(rest, vec!["Intro", "Outro"]);
    }

    #[test]
    fn first_definition_wins() {
        let lines = ["[a]: /one", "[A]: /two"];
        let (defs, _) = extract_links(&lines);
        assert_eq!(defs.len(), 1);
        assert_eq!(defs["a"].url, "/one");
    }
}
