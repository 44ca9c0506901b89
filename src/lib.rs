//! A byte-oriented regex matcher built on Thompson's classical pipeline:
//! parse to postfix, compile to an NFA via Thompson's construction,
//! simulate with bit-set subset construction and precomputed ε-closures.
//!
//! The three core subsystems are the parser ([`lexer`], [`parser`]), the
//! NFA builder ([`fragment`], [`compiler`], [`automaton::Nfa::finalize`])
//! and the simulator ([`automaton::Nfa::is_match`]). [`compile`] and
//! [`is_match`] are the two entry points most callers need; [`try_compile`]
//! and [`postfix_string`] are available for diagnostics and tooling.

#![forbid(unsafe_code)]

pub mod alphabet;
pub mod automaton;
pub mod compiler;
pub mod error;
pub mod fragment;
pub mod lexer;
pub mod parser;
pub mod state;
pub mod token;

use log::debug;

pub use automaton::Nfa;
pub use error::CompileError;
use crate::token::{render, Token};

/// A compiled regex program: a postfix token sequence that the fragment
/// algebra can evaluate to exactly one fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program(Vec<Token>);

impl Program {
    /// The empty program. Evaluating it yields no fragments, so
    /// [`is_match`] against it rejects every input, including the empty
    /// string.
    pub fn empty() -> Program {
        Program(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.0
    }
}

/// Compile a regex source string to a [`Program`].
///
/// On malformed input (mismatched parentheses, or a postfix sequence
/// that underflows or over-fills the fragment stack), this silently
/// degrades to [`Program::empty`] rather than signalling an error. Use
/// [`try_compile`] if the reason for the failure matters.
pub fn compile(regex: &[u8]) -> Program {
    try_compile(regex).unwrap_or_else(|err| {
        debug!("compile: degrading to empty program ({err})");
        Program::empty()
    })
}

/// The fallible counterpart to [`compile`]: runs the full parser
/// pipeline and returns the typed reason for failure instead of
/// collapsing it.
pub fn try_compile(regex: &[u8]) -> Result<Program, CompileError> {
    let postfix = parser::parse(regex)?;
    Ok(Program(postfix))
}

/// Render a program's postfix form back to bytes, one byte per token in
/// program order.
pub fn postfix_string(program: &Program) -> Vec<u8> {
    render(&program.0)
}

/// Compile `program` into an NFA and decide whether it matches `input`
/// in full (anchored at both ends; no implicit `.*` wrapping).
///
/// Equivalent to `Nfa::compile(program).is_match(input)`, provided for
/// callers who only need a single match and don't want to hold onto the
/// compiled automaton.
pub fn is_match(program: &Program, input: &[u8]) -> bool {
    Nfa::compile(program).is_match(input)
}

impl Nfa {
    /// Compile a [`Program`]'s postfix tokens into a ready-to-run NFA.
    ///
    /// An empty program has no fragment to finalize, so it compiles to
    /// a degenerate automaton with no states and an empty accept set,
    /// which rejects every input.
    pub fn compile(program: &Program) -> Nfa {
        match compiler::evaluate_postfix(program.tokens()) {
            Ok((fragment, manager)) => Nfa::finalize(fragment, manager),
            Err(_) => Nfa::finalize_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_regex_degrades_to_empty_program() {
        let prog = compile(b"a(b");
        assert!(prog.is_empty());
        assert!(!is_match(&prog, b""));
        assert!(!is_match(&prog, b"anything"));
    }

    #[test]
    fn postfix_string_matches_reference_table() {
        assert_eq!(postfix_string(&compile(b"a(b|c)*")), b"abc|*.");
        assert_eq!(postfix_string(&compile(b"ab")), b"ab.");
        assert_eq!(postfix_string(&compile(b"a|b")), b"ab|");
        assert_eq!(postfix_string(&compile(b"(ab)+")), b"ab.+");
    }

    #[test]
    fn escape_identity() {
        for b in [b'*', b'+', b'?', b'.', b'|', b'(', b')', b'a'] {
            let prog = compile(&[b'\\', b]);
            assert!(is_match(&prog, &[b]), "should match the escaped byte {b:#04x}");
            assert!(!is_match(&prog, b""), "should reject empty input for {b:#04x}");
            assert!(!is_match(&prog, &[b, b]), "should reject repeated byte for {b:#04x}");
        }
    }
}
