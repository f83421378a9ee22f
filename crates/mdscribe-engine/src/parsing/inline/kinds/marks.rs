/// Character-level marks other than emphasis.
pub struct Marks;

impl Marks {
    pub const STRIKE: &'static str = "~~";
    pub const SUBSCRIPT: &'static str = "~";
    pub const SUPERSCRIPT: &'static str = "^";
    pub const HIGHLIGHT: &'static str = "==";
    pub const UNDERLINE_OPEN: &'static str = "<u>";
    pub const UNDERLINE_CLOSE: &'static str = "</u>";
    pub const MARK_OPEN: &'static str = "<mark>";
    pub const MARK_CLOSE: &'static str = "</mark>";
}
