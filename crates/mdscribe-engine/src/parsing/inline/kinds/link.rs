/// Bracketed link syntax.
pub struct LinkSyntax;

impl LinkSyntax {
    pub const OPEN: char = '[';
    pub const CLOSE: char = ']';
    pub const URL_OPEN: char = '(';
    pub const URL_CLOSE: char = ')';
    pub const TITLE_QUOTE: char = '"';
    /// Footnote reference `[^id]`.
    pub const FOOTNOTE_OPEN: &'static str = "[^";
}
