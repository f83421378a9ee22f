/// Hard and soft line breaks.
pub struct LineBreak;

impl LineBreak {
    /// `<br>`, `<br/>` and `<br />`.
    pub const BR_OPEN: &'static str = "<br";
    pub const TRAILING_SPACES: &'static str = "  \n";
    pub const BACKSLASH: &'static str = "\\\n";
    pub const NEWLINE: &'static str = "\n";
}
