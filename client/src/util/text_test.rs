use super::*;

#[test]
fn capitalize_uppercases_first_letter() {
    assert_eq!(capitalize("bulbasaur"), "Bulbasaur");
}

#[test]
fn capitalize_leaves_rest_of_name_untouched() {
    assert_eq!(capitalize("mr-mime"), "Mr-mime");
}

#[test]
fn capitalize_is_stable_for_already_capitalized_input() {
    assert_eq!(capitalize("Pikachu"), "Pikachu");
}

#[test]
fn capitalize_handles_empty_and_single_char() {
    assert_eq!(capitalize(""), "");
    assert_eq!(capitalize("x"), "X");
}
