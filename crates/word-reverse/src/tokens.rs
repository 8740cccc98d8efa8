use crate::TokenSequence;

/// Splits on the space character only. Consecutive delimiters yield empty
/// tokens; callers that want them preserved must not filter the result.
pub fn split_on_spaces(input: &str) -> TokenSequence<'_> {
    input.split(' ').collect()
}

/// Reverses `tokens` in place with a two-pointer swap, walking from both
/// ends toward the middle.
pub fn reverse_in_place(tokens: &mut [&str]) {
    if tokens.is_empty() {
        return;
    }

    let mut left = 0;
    let mut right = tokens.len() - 1;
    while left < right {
        tokens.swap(left, right);
        left += 1;
        right -= 1;
    }
}
