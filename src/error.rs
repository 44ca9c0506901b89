//! The internal, typed reason a [`crate::try_compile`] call failed.
//!
//! The public [`crate::compile`] entry point collapses every variant here
//! to the empty program, per the silent-degradation policy. `CompileError`
//! exists so logging and tests can say *why* without changing that
//! contract.

use thiserror::Error;

/// Why parsing or postfix evaluation of a regex source string failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CompileError {
    /// A `)` was seen with no matching `(` on the paren stack.
    #[error("unmatched ')' at byte offset {offset}")]
    UnmatchedCloseParen { offset: usize },

    /// End of input reached with an unclosed `(`.
    #[error("unmatched '(': {count} paren(s) never closed")]
    UnmatchedOpenParen { count: usize },

    /// A binary or unary operator was evaluated against an empty fragment
    /// stack during postfix compilation.
    #[error("stack underflow evaluating postfix token at index {index}")]
    StackUnderflow { index: usize },

    /// More than one fragment remained on the stack after postfix
    /// evaluation completed.
    #[error("postfix evaluation left {remaining} fragments on the stack, expected 1")]
    TrailingFragments { remaining: usize },

    /// The postfix sequence evaluated to zero fragments.
    #[error("empty program")]
    EmptyProgram,
}
