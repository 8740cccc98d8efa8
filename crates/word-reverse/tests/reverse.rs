use word_reverse::reverse_by_words;

#[test]
fn should_reverse_a_simple_sentence() {
    // Given
    let input = "This is the day";

    // When
    let reversed = reverse_by_words(input);

    // Then
    assert_eq!(reversed, "day the is This");
}

#[test]
fn should_return_empty_output_for_empty_input() {
    // Given
    let input = "";

    // When
    let reversed = reverse_by_words(input);

    // Then
    assert_eq!(reversed, "");
}

#[test]
fn should_leave_a_single_word_unchanged() {
    // Given
    let input = "single";

    // When
    let reversed = reverse_by_words(input);

    // Then
    assert_eq!(reversed, "single");
}

#[test]
fn should_keep_middle_empty_token_in_place() {
    // Given: two spaces between tokens, so the token sequence is ["a", "", "b"]
    let input = "a  b";

    // When
    let reversed = reverse_by_words(input);

    // Then: ["b", "", "a"] joins back with the double space preserved
    assert_eq!(reversed, "b  a");
}

#[test]
fn should_move_leading_space_to_the_tail() {
    // Given: tokens ["", "leading"]
    let input = " leading";

    // When
    let reversed = reverse_by_words(input);

    // Then: tokens ["leading", ""] join as "leading "
    assert_eq!(reversed, "leading ");
}

#[test]
fn should_preserve_token_count_for_irregular_spacing() {
    for input in ["", " ", "a  b", "  a b   c ", "This is the day"] {
        let reversed = reverse_by_words(input);
        assert_eq!(
            reversed.split(' ').count(),
            input.split(' ').count(),
            "token count changed for {input:?}"
        );
    }
}

#[test]
fn should_restore_original_after_double_reversal() {
    for input in ["This is the day", "", "single", "a  b", " leading", "x y  z "] {
        let round_trip = reverse_by_words(&reverse_by_words(input));
        assert_eq!(round_trip, input, "double reversal diverged for {input:?}");
    }
}
