mod support;

use slotboard::sketch::glyphs::{
    ALPHABET, glyph, label_strokes, letter_for_index, stroke_face,
};

use crate::support::approx_eq;

#[test]
fn letter_index_wraps_around_the_alphabet() {
    assert_eq!(letter_for_index(0), 'A');
    assert_eq!(letter_for_index(25), 'Z');
    assert_eq!(letter_for_index(26), 'A');
    assert_eq!(letter_for_index(51), 'Z');
}

#[test]
fn alphabet_is_the_expected_26_letters() {
    assert_eq!(ALPHABET.len(), 26);
    assert!(ALPHABET.chars().all(|c| c.is_ascii_uppercase()));
}

#[test]
fn every_letter_has_strokes_on_the_unit_box() {
    for letter in ALPHABET.chars() {
        let g = glyph(letter);
        assert!(!g.strokes.is_empty(), "{letter} has no strokes");
        assert!(g.advance > 0.0, "{letter} has no advance");
        for stroke in &g.strokes {
            assert!(stroke.len() >= 2, "{letter} has a degenerate stroke");
            for p in stroke {
                assert!(p[0].is_finite() && p[1].is_finite());
                assert!(p[0] >= -1e-9 && p[0] <= g.advance + 1e-9, "{letter}: x {p:?}");
                // Q's tail dips just below the baseline
                assert!(p[1] >= -0.1 - 1e-9 && p[1] <= 1.0 + 1e-9, "{letter}: y {p:?}");
            }
        }
    }
}

#[test]
fn label_band_sits_one_cap_height_below_the_slot_top() {
    let cap = 3.0;
    let label = label_strokes(0, cap, 10.0, -6.0);
    assert_eq!(label.letter, 'A');
    for stroke in &label.strokes {
        for p in stroke {
            assert!(p[0] >= 10.0 - 1e-9, "left of the slot edge: {p:?}");
            assert!(
                p[1] <= -6.0 - cap + 1e-9 && p[1] >= -6.0 - 2.0 * cap - 1e-9,
                "outside the label band: {p:?}"
            );
        }
    }
}

#[test]
fn repeated_indices_produce_identical_strokes() {
    let a0 = label_strokes(0, 3.0, 10.0, -6.0);
    let a26 = label_strokes(26, 3.0, 10.0, -6.0);
    assert_eq!(a0.strokes, a26.strokes);
}

#[test]
fn straight_stroke_widens_to_a_channel_of_its_length() {
    let face = stroke_face(&[vec![[0.0, 0.0], [10.0, 0.0]]], 1.0);
    // 10 x 1 channel plus two rounded caps
    let area = face.area();
    assert!(area > 10.5 && area < 11.0, "area {area}");
}

#[test]
fn empty_strokes_widen_to_nothing() {
    assert!(stroke_face(&[], 1.0).is_empty());
}

#[test]
fn widened_label_has_positive_area() {
    for index in [0usize, 7, 12, 18, 25] {
        let label = label_strokes(index, 3.2875, 6.0, -6.0);
        let face = stroke_face(&label.strokes, 1.0);
        assert!(
            face.area() > 0.0,
            "letter {} produced an empty engraving",
            label.letter
        );
    }
}

#[test]
fn wide_and_narrow_letters_keep_their_proportions() {
    assert!(approx_eq(glyph('I').advance, 0.3, 1e-12));
    assert!(glyph('W').advance > glyph('I').advance);
    assert!(glyph('M').advance > glyph('E').advance);
}
