use crate::Recognizer;
use pretty_assertions::assert_eq;

fn r(src: &[u8]) -> Recognizer<'_> {
    Recognizer::new(src)
}

// === rulename ===

#[test]
fn rule_name_letters_digits_dashes() {
    assert_eq!(r(b"a").rule_name(0), 1);
    assert_eq!(r(b"rule-1 x").rule_name(0), 6);
    assert_eq!(r(b"A-").rule_name(0), 2);
    assert_eq!(r(b"c-wsp=").rule_name(0), 5);
}

#[test]
fn rule_name_must_start_with_letter() {
    assert_eq!(r(b"1abc").rule_name(0), 0);
    assert_eq!(r(b"-abc").rule_name(0), 0);
    assert_eq!(r(b"").rule_name(0), 0);
}

// === defined-as ===

#[test]
fn defined_as_plain_and_incremental() {
    assert_eq!(r(b"=").defined_as(0), 1);
    assert_eq!(r(b" = x").defined_as(0), 3);
    assert_eq!(r(b"=/").defined_as(0), 2);
    assert_eq!(r(b" =/ x").defined_as(0), 4);
}

#[test]
fn defined_as_accepts_folded_whitespace() {
    // SP, CRLF SP (a folded line), "=", SP
    assert_eq!(r(b" \r\n = ").defined_as(0), 6);
}

#[test]
fn defined_as_requires_equals() {
    assert_eq!(r(b"x").defined_as(0), 0);
    assert_eq!(r(b"  /").defined_as(0), 0);
    assert_eq!(r(b"  ").defined_as(0), 0);
}

// === elements ===

#[test]
fn elements_absorbs_trailing_whitespace() {
    assert_eq!(r(b"\"a\"  ").elements(0), 5);
    assert_eq!(r(b"a b\r\n").elements(0), 3);
}

#[test]
fn elements_requires_an_alternation() {
    assert_eq!(r(b"\r\n").elements(0), 0);
    assert_eq!(r(b" a").elements(0), 0);
}

// === c-wsp / c-nl ===

#[test]
fn c_wsp_forms() {
    assert_eq!(r(b" ").c_wsp(0), 1);
    assert_eq!(r(b"\t").c_wsp(0), 1);
    assert_eq!(r(b"\r\n ").c_wsp(0), 3);
    assert_eq!(r(b"; c\r\n\t").c_wsp(0), 6);
}

#[test]
fn c_wsp_rejects_line_end_without_indent() {
    assert_eq!(r(b"\r\nx").c_wsp(0), 0);
    assert_eq!(r(b"\r\n").c_wsp(0), 0);
    assert_eq!(r(b"x").c_wsp(0), 0);
}

#[test]
fn c_nl_comment_or_crlf() {
    assert_eq!(r(b"\r\n").c_nl(0), 2);
    assert_eq!(r(b"; hi\r\n").c_nl(0), 6);
    assert_eq!(r(b"\n").c_nl(0), 0);
    assert_eq!(r(b"").c_nl(0), 0);
}

// === comment ===

#[test]
fn comment_runs_to_crlf() {
    assert_eq!(r(b"; just a comment\r\n").comment(0), 18);
    assert_eq!(r(b";\r\n").comment(0), 3);
    assert_eq!(r(b";\tx\r\nnext").comment(0), 5);
}

#[test]
fn unterminated_comment_is_no_match() {
    assert_eq!(r(b"; no end").comment(0), 0);
    assert_eq!(r(b"; bare lf\n").comment(0), 0);
}

#[test]
fn comment_rejects_control_bytes() {
    assert_eq!(r(b"; bad\x01\r\n").comment(0), 0);
}

// === rule ===

#[test]
fn rule_simple() {
    assert_eq!(r(b"rule = \"a\"\r\n").rule(0), 12);
}

#[test]
fn rule_with_trailing_comment() {
    let src = b"a = b ; trailing comment\r\n";
    assert_eq!(r(src).rule(0), src.len());
}

#[test]
fn rule_with_continuation_line() {
    let src = b"c = d\r\n    / e\r\n";
    assert_eq!(r(src).rule(0), src.len());
}

#[test]
fn rule_requires_final_line_end() {
    assert_eq!(r(b"a = b").rule(0), 0);
}

#[test]
fn rule_missing_elements() {
    assert_eq!(r(b"rule = \r\n").elements(7), 0);
    assert_eq!(r(b"rule = \r\n").rule(0), 0);
}

// === rulelist ===

#[test]
fn rule_list_mixes_rules_blank_lines_and_comments() {
    let src = b"a = b\r\n\r\n; comment\r\nc = d\r\n    / e\r\n";
    assert_eq!(src.len(), 36);
    assert_eq!(r(src).rule_list(0), 36);
}

#[test]
fn rule_list_stops_before_garbage() {
    assert_eq!(r(b"a = b\r\nxyz").rule_list(0), 7);
}

#[test]
fn rule_list_needs_at_least_one_unit() {
    assert_eq!(r(b"").rule_list(0), 0);
    assert_eq!(r(b"xyz").rule_list(0), 0);
    assert_eq!(r(b"   ").rule_list(0), 0);
}

#[test]
fn rule_list_indented_blank_line() {
    assert_eq!(r(b"  \r\n").rule_list(0), 4);
}
