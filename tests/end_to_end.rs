//! Table-driven end-to-end matching scenarios.

use thompson_regex::{compile, is_match, postfix_string, try_compile};

fn check(regex: &[u8], cases: &[(&[u8], bool)]) {
    let program = compile(regex);
    for &(input, expected) in cases {
        assert_eq!(
            is_match(&program, input),
            expected,
            "regex {:?} against input {:?}",
            String::from_utf8_lossy(regex),
            String::from_utf8_lossy(input),
        );
    }
}

#[test]
fn a_bc_star() {
    check(
        b"a(b|c)*",
        &[
            (b"a" as &[u8], true),
            (b"abc", true),
            (b"abbc", true),
            (b"acbc", true),
            (b"", false),
            (b"ab c", false),
        ],
    );
}

#[test]
fn ab_plus_c_optional() {
    check(
        b"ab+c?",
        &[
            (b"ab" as &[u8], true),
            (b"abb", true),
            (b"abc", true),
            (b"abbc", true),
            (b"ac", false),
            (b"a", false),
        ],
    );
}

#[test]
fn alternation_of_pairs() {
    check(
        b"(a|b)(a|b)",
        &[
            (b"aa" as &[u8], true),
            (b"ab", true),
            (b"ba", true),
            (b"bb", true),
            (b"a", false),
            (b"abb", false),
        ],
    );
}

#[test]
fn escaped_star_is_literal() {
    check(
        br"a\*",
        &[(b"a*" as &[u8], true), (b"a", false), (b"**", false), (b"", false)],
    );
}

#[test]
fn kleene_star_over_single_operand() {
    check(b"a*", &[(b"" as &[u8], true), (b"a", true), (b"aaaa", true), (b"b", false)]);
}

#[test]
fn plus_over_grouped_sequence() {
    check(
        b"(ab)+",
        &[(b"ab" as &[u8], true), (b"abab", true), (b"", false), (b"a", false), (b"aba", false)],
    );
}

#[test]
fn postfix_rendering_table() {
    assert_eq!(postfix_string(&compile(b"a(b|c)*")), b"abc|*.");
    assert_eq!(postfix_string(&compile(b"ab")), b"ab.");
    assert_eq!(postfix_string(&compile(b"a|b")), b"ab|");
    assert_eq!(postfix_string(&compile(b"(ab)+")), b"ab.+");
}

#[test]
fn double_star_is_accepted_and_equivalent_to_single_star() {
    let double = compile(b"a**");
    let single = compile(b"a*");
    for input in [&b""[..], b"a", b"aaaa", b"b"] {
        assert_eq!(is_match(&double, input), is_match(&single, input), "input {input:?}");
    }
}

#[test]
fn malformed_parens_degrade_to_empty_program() {
    for bad in [&b"a("[..], b"a)", b")(", b"("] {
        let program = compile(bad);
        assert!(program.is_empty());
        assert!(!is_match(&program, b""));
    }
}

#[test]
fn try_compile_propagates_through_question_mark() -> anyhow::Result<()> {
    let program = try_compile(b"a(b|c)*")?;
    assert!(is_match(&program, b"abbc"));
    assert!(try_compile(b"a(b").is_err());
    Ok(())
}
