/// Emphasis delimiters.
pub struct Emphasis;

impl Emphasis {
    pub const STAR: &'static str = "*";
    pub const UNDERSCORE: &'static str = "_";
    pub const BOLD_STAR: &'static str = "**";
    pub const BOLD_UNDERSCORE: &'static str = "__";

    /// Bold-italic open/close pairs, in the order they are tried.
    pub const BOLD_ITALIC: [(&'static str, &'static str); 4] = [
        ("***", "***"),
        ("___", "___"),
        ("**_", "_**"),
        ("_**", "**_"),
    ];

    /// Characters that may not appear inside bold or italic text.
    pub const INNER_FORBIDDEN: [char; 2] = ['*', '_'];
}
