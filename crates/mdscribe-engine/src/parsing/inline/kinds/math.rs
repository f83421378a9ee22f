pub struct InlineMath;

impl InlineMath {
    pub const DOLLAR: &'static str = "$";
    /// A dollar directly after this byte is literal.
    pub const ESCAPE: u8 = b'\\';
}
