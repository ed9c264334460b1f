/// Separator between the two principals of a channel id.
pub const CHANNEL_ID_SEPARATOR: &str = "-";

/// Channel id for the conversation between `a` and `b`.
///
/// The two principals are sorted lexicographically (byte order) and joined
/// with `-`, so both participants derive the same id. `(P, P)` yields `"P-P"`.
pub fn derive_channel_id(a: &str, b: &str) -> String {
    let (first, second) = if a <= b { (a, b) } else { (b, a) };
    [first, second].join(CHANNEL_ID_SEPARATOR)
}
