use crate::{Dialect, Recognizer};
use pretty_assertions::assert_eq;

fn r(src: &[u8]) -> Recognizer<'_> {
    Recognizer::new(src)
}

fn r7405(src: &[u8]) -> Recognizer<'_> {
    Recognizer::new(src).with_dialect(Dialect::Rfc7405)
}

// === char-val ===

#[test]
fn char_val_quoted() {
    assert_eq!(r(b"\"\"").char_val(0), 2);
    assert_eq!(r(b"\"abc\"").char_val(0), 5);
    assert_eq!(r(b"\"it's <ok>\"").char_val(0), 11);
}

#[test]
fn char_val_stops_at_first_closing_quote() {
    assert_eq!(r(b"\"a\"b\"").char_val(0), 3);
}

#[test]
fn char_val_unterminated_or_control() {
    assert_eq!(r(b"\"a").char_val(0), 0);
    assert_eq!(r(b"\"a\x01\"").char_val(0), 0);
    assert_eq!(r(b"\"a\r\n\"").char_val(0), 0);
}

#[test]
fn rfc5234_rejects_string_prefixes() {
    assert_eq!(r(b"%s\"a\"").char_val(0), 0);
    assert_eq!(r(b"%i\"a\"").char_val(0), 0);
}

#[test]
fn rfc7405_string_prefixes() {
    assert_eq!(r7405(b"%s\"a\"").char_val(0), 5);
    assert_eq!(r7405(b"%i\"a\"").char_val(0), 5);
    assert_eq!(r7405(b"%S\"a\"").char_val(0), 5);
    assert_eq!(r7405(b"\"a\"").char_val(0), 3);
    assert_eq!(r7405(b"%x41").char_val(0), 0);
    assert_eq!(r7405(b"%s").char_val(0), 0);
}

#[test]
fn rfc7405_string_productions_directly() {
    assert_eq!(r(b"%s\"AbC\"").case_sensitive_string(0), 7);
    assert_eq!(r(b"\"AbC\"").case_sensitive_string(0), 0);
    assert_eq!(r(b"\"AbC\"").case_insensitive_string(0), 5);
    assert_eq!(r(b"%I\"AbC\"").case_insensitive_string(0), 7);
    assert_eq!(r(b"%i").case_insensitive_string(0), 0);
}

#[test]
fn rfc7405_element_prefers_string_over_num_val() {
    assert_eq!(r7405(b"%s\"a\"").element(0), 5);
    assert_eq!(r7405(b"%d97").element(0), 4);
    // Under RFC 5234, "%s" is neither a char-val nor a num-val.
    assert_eq!(r(b"%s\"a\"").element(0), 0);
}

// === num-val ===

#[test]
fn num_val_each_radix() {
    assert_eq!(r(b"%b0101").num_val(0), 6);
    assert_eq!(r(b"%d65").num_val(0), 4);
    assert_eq!(r(b"%x41").num_val(0), 4);
    assert_eq!(r(b"%xfF").num_val(0), 4);
}

#[test]
fn num_val_series_and_range() {
    assert_eq!(r(b"%d65.66.67").num_val(0), 10);
    assert_eq!(r(b"%x41-5A").num_val(0), 7);
    assert_eq!(r(b"%b0-1").num_val(0), 5);
}

#[test]
fn num_val_requires_radix_and_digits() {
    assert_eq!(r(b"%").num_val(0), 0);
    assert_eq!(r(b"%q1").num_val(0), 0);
    assert_eq!(r(b"%x").num_val(0), 0);
    assert_eq!(r(b"%xg").num_val(0), 0);
    assert_eq!(r(b"x41").num_val(0), 0);
}

#[test]
fn radix_marker_accepts_either_case() {
    // Uppercase markers are accepted exactly like lowercase ones. A test that
    // required the byte to equal both cases at once would reject every marker.
    assert_eq!(r(b"%X41").num_val(0), 4);
    assert_eq!(r(b"%D65").num_val(0), 4);
    assert_eq!(r(b"%B1").num_val(0), 3);
    assert_eq!(r(b"X41").hex_val(0), 3);
    assert_eq!(r(b"D65").dec_val(0), 3);
    assert_eq!(r(b"B1").bin_val(0), 2);
}

#[test]
fn radix_values_reject_foreign_markers() {
    assert_eq!(r(b"d65").hex_val(0), 0);
    assert_eq!(r(b"x41").dec_val(0), 0);
    assert_eq!(r(b"x1").bin_val(0), 0);
}

#[test]
fn bin_val_stops_at_non_bit() {
    assert_eq!(r(b"b012").bin_val(0), 3);
    assert_eq!(r(b"b2").bin_val(0), 0);
}

#[test]
fn hex_val_series_mixed_case() {
    assert_eq!(r(b"xFF.a0").hex_val(0), 6);
}

// === num-val suffix back-off ===

#[test]
fn trailing_dot_is_not_consumed() {
    let src = b"%d1.";
    assert_eq!(r(src).dec_val(1), 2);
    assert_eq!(r(src).num_val(0), 3);
}

#[test]
fn trailing_dash_is_not_consumed() {
    assert_eq!(r(b"d1-").dec_val(0), 2);
    assert_eq!(r(b"d1-x").dec_val(0), 2);
}

#[test]
fn dotted_series_backs_off_only_the_last_dot() {
    assert_eq!(r(b"d1.2.").dec_val(0), 4);
    assert_eq!(r(b"d1.2.3").dec_val(0), 6);
}

#[test]
fn series_and_range_do_not_combine() {
    assert_eq!(r(b"d1-9").dec_val(0), 4);
    assert_eq!(r(b"d1.2-3").dec_val(0), 4);
    assert_eq!(r(b"d1-2-3").dec_val(0), 4);
    assert_eq!(r(b"d1-2.3").dec_val(0), 4);
}

// === prose-val ===

#[test]
fn prose_val_forms() {
    assert_eq!(r(b"<>").prose_val(0), 2);
    assert_eq!(r(b"<any text>").prose_val(0), 10);
    assert_eq!(r(b"<a>b>").prose_val(0), 3);
    assert_eq!(r(b"<a \"quoted\" <b>").prose_val(0), 15);
}

#[test]
fn prose_val_rejects_unterminated_and_control() {
    assert_eq!(r(b"<a").prose_val(0), 0);
    assert_eq!(r(b"<\x01>").prose_val(0), 0);
    assert_eq!(r(b"<a\r\n>").prose_val(0), 0);
    assert_eq!(r(b"a>").prose_val(0), 0);
}
