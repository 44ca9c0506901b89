//! Components B and C: implicit-concatenation insertion and Dijkstra's
//! shunting yard, converting an infix token sequence into postfix form.

use log::debug;

use crate::error::CompileError;
use crate::lexer::tokenize;
use crate::token::{Token, TokenKind, TokenSeq};

/// Component B. Scans the token sequence and inserts an explicit `Concat`
/// token between every adjacent pair ⟨L, R⟩ where `L` is closing and `R`
/// is opening.
pub fn insert_concat(tokens: &[Token]) -> TokenSeq {
    let mut out = Vec::with_capacity(tokens.len() * 2);
    for (i, &tok) in tokens.iter().enumerate() {
        if i > 0 {
            let prev = tokens[i - 1];
            if prev.kind.is_closing() && tok.kind.is_opening() {
                out.push(Token::operator(TokenKind::Concat));
            }
        }
        out.push(tok);
    }
    out
}

/// Component C. Converts an infix token sequence (with explicit `Concat`
/// tokens already inserted) to postfix form via the shunting-yard
/// algorithm.
///
/// Returns [`CompileError::UnmatchedCloseParen`] or
/// [`CompileError::UnmatchedOpenParen`] for mismatched parentheses.
pub fn shunting_yard(tokens: &[Token]) -> Result<TokenSeq, CompileError> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut operators: Vec<Token> = Vec::new();

    for (offset, &tok) in tokens.iter().enumerate() {
        match tok.kind {
            TokenKind::Operand => output.push(tok),
            TokenKind::LParen => operators.push(tok),
            TokenKind::RParen => {
                loop {
                    match operators.pop() {
                        Some(top) if top.kind == TokenKind::LParen => break,
                        Some(top) => output.push(top),
                        None => {
                            debug!("shunting-yard: unmatched ')' at token {offset}");
                            return Err(CompileError::UnmatchedCloseParen { offset });
                        }
                    }
                }
            }
            _ => {
                let prec = tok.kind.precedence().expect("operator kind has a precedence");
                while let Some(&top) = operators.last() {
                    if top.kind == TokenKind::LParen {
                        break;
                    }
                    let top_prec = top.kind.precedence().expect("operator kind has a precedence");
                    if top_prec >= prec {
                        output.push(operators.pop().unwrap());
                    } else {
                        break;
                    }
                }
                operators.push(tok);
            }
        }
    }

    let mut unmatched_opens = 0;
    while let Some(top) = operators.pop() {
        if top.kind == TokenKind::LParen {
            unmatched_opens += 1;
        } else {
            output.push(top);
        }
    }
    if unmatched_opens > 0 {
        debug!("shunting-yard: {unmatched_opens} unmatched '(' at end of input");
        return Err(CompileError::UnmatchedOpenParen { count: unmatched_opens });
    }

    Ok(output)
}

/// Runs the full parser pipeline (A → B → C): tokenize, insert explicit
/// concatenation, then convert to postfix.
pub fn parse(re: &[u8]) -> Result<TokenSeq, CompileError> {
    let tokens = tokenize(re);
    let with_concat = insert_concat(&tokens);
    shunting_yard(&with_concat)
}
