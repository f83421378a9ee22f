//! Reference resolution: the last pass over inline tokens.

use crate::models::{FootnoteDefinitions, LinkDefinitions};

use super::inline::InlineToken;

/// Rewrites reference and footnote tokens against the extracted definitions.
///
/// A reference with a definition (labels match case-insensitively) becomes a
/// `Link`; a footnote with a definition gains its number. Anything without a
/// definition is returned unchanged.
pub fn resolve_tokens(
    tokens: Vec<InlineToken>,
    links: &LinkDefinitions,
    footnotes: &FootnoteDefinitions,
) -> Vec<InlineToken> {
    tokens
        .into_iter()
        .map(|token| match token {
            InlineToken::Reference { text, label } => match links.get(&label.to_lowercase()) {
                Some(def) => InlineToken::Link {
                    text,
                    href: def.url.clone(),
                    title: def.title.clone(),
                },
                None => InlineToken::Reference { text, label },
            },
            InlineToken::Footnote { id, number } => {
                let number = footnotes.get(&id).map(|d| d.number).or(number);
                InlineToken::Footnote { id, number }
            }
            other => other,
        })
        .collect()
}
