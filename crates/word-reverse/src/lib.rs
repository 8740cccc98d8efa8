mod tokens;

pub use tokens::{reverse_in_place, split_on_spaces};

/// Ordered sequence of tokens produced by a literal split on the space
/// character. Empty tokens are legal and meaningful.
pub type TokenSequence<'a> = Vec<&'a str>;

/// Reverses the order of space-delimited words in `input`.
///
/// The split is a literal single-character split, not a whitespace-collapsing
/// one: consecutive spaces produce empty tokens, and a leading or trailing
/// space produces a leading or trailing empty token. Empty tokens survive the
/// reversal, so irregular spacing is mirrored rather than collapsed
/// (`"a  b"` becomes `"b  a"`, `" leading"` becomes `"leading "`).
///
/// Total over all inputs: the empty string splits into a single empty token
/// and comes back as the empty string, and a delimiter-free string is
/// returned unchanged.
pub fn reverse_by_words(input: &str) -> String {
    let mut tokens = split_on_spaces(input);
    reverse_in_place(&mut tokens);
    tokens.join(" ")
}
