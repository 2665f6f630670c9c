use winnow::combinator::{alt, delimited, repeat, separated, terminated};
use winnow::error::ModalResult;
use winnow::prelude::*;
use winnow::token::take_while;

/// Whole-string email check.
///
/// Local part: dot-separated atoms, or a non-empty double-quoted string.
/// Domain: a bracketed IPv4 literal, or dotted labels ending in an
/// alphabetic TLD of two or more letters.
pub(crate) fn is_email(input: &str) -> bool {
    (local_part, '@', domain).parse(input).is_ok()
}

// -- Local part -------------------------------------------------------------

fn is_atom_char(c: char) -> bool {
    !c.is_whitespace()
        && !matches!(
            c,
            '<' | '>' | '(' | ')' | '[' | ']' | '\\' | '.' | ',' | ';' | ':' | '@' | '"'
        )
}

fn dot_atom(input: &mut &str) -> ModalResult<()> {
    separated(1.., take_while(1.., is_atom_char), '.').parse_next(input)
}

fn quoted(input: &mut &str) -> ModalResult<()> {
    delimited('"', take_while(1.., |c: char| c != '"'), '"')
        .void()
        .parse_next(input)
}

fn local_part(input: &mut &str) -> ModalResult<()> {
    alt((quoted, dot_atom)).parse_next(input)
}

// -- Domain -----------------------------------------------------------------

fn octet<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1..=3, |c: char| c.is_ascii_digit()).parse_next(input)
}

fn ip_literal(input: &mut &str) -> ModalResult<()> {
    delimited(
        '[',
        (octet, '.', octet, '.', octet, '.', octet),
        ']',
    )
    .void()
    .parse_next(input)
}

fn is_label_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}

fn hostname(input: &mut &str) -> ModalResult<()> {
    let _: () = repeat(1.., terminated(take_while(1.., is_label_char), '.')).parse_next(input)?;
    take_while(2.., |c: char| c.is_ascii_alphabetic())
        .void()
        .parse_next(input)
}

fn domain(input: &mut &str) -> ModalResult<()> {
    alt((ip_literal, hostname)).parse_next(input)
}
