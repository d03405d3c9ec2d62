use pest::error::{Error, ErrorVariant};
use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;

use super::ast::{CallData, LiteralType, SignatureData};

#[derive(Parser)]
#[grammar = "parser/sig_grammar.pest"] // relative to src
pub struct SigParser;

/// Parse a signature descriptor like `greet(who, {greeting: "hello"})`.
pub fn parse_signature(descriptor: &str) -> Result<SignatureData, Error<Rule>> {
    let mut pairs = SigParser::parse(Rule::signature, descriptor)?;
    build_signature(pairs.next().unwrap())
}

/// Parse a call descriptor like `greet("world", punct: "?")`.
pub fn parse_call(descriptor: &str) -> Result<CallData, Error<Rule>> {
    let mut pairs = SigParser::parse(Rule::call, descriptor)?;
    build_call(pairs.next().unwrap())
}

fn build_signature(pair: Pair<Rule>) -> Result<SignatureData, Error<Rule>> {
    let mut name = None;
    let mut positional = vec![];
    let mut named = vec![];
    for p in pair.into_inner() {
        match p.as_rule() {
            Rule::identifier => name = Some(p.as_str().to_string()),
            Rule::param_list => {
                for q in p.into_inner() {
                    match q.as_rule() {
                        Rule::positional_params => {
                            for id in q.into_inner() {
                                positional.push(id.as_str().to_string());
                            }
                        }
                        Rule::named_block => {
                            for np in q.into_inner() {
                                named.push(build_named_pair(np)?);
                            }
                        }
                        _ => return Err(get_unexpected_error(1, &q)),
                    }
                }
            }
            Rule::EOI => { /* Do nothing */ }
            _ => return Err(get_unexpected_error(2, &p)),
        }
    }
    Ok(SignatureData {
        name,
        positional,
        named,
    })
}

fn build_call(pair: Pair<Rule>) -> Result<CallData, Error<Rule>> {
    let mut callee = None;
    let mut positional = vec![];
    let mut named: Vec<(String, LiteralType)> = vec![];
    for p in pair.into_inner() {
        match p.as_rule() {
            Rule::identifier => callee = Some(p.as_str().to_string()),
            Rule::arg_list => {
                for q in p.into_inner() {
                    if q.as_rule() != Rule::call_arg {
                        return Err(get_unexpected_error(3, &q));
                    }
                    let arg = q.into_inner().next().unwrap();
                    match arg.as_rule() {
                        Rule::named_arg => named.push(build_named_pair(arg)?),
                        Rule::literal => {
                            // Positional arguments must all come before the
                            // first named argument.
                            if !named.is_empty() {
                                return Err(get_semantic_error(
                                    "positional argument after named argument",
                                    &arg,
                                ));
                            }
                            positional.push(build_literal(arg)?);
                        }
                        _ => return Err(get_unexpected_error(4, &arg)),
                    }
                }
            }
            Rule::EOI => { /* Do nothing */ }
            _ => return Err(get_unexpected_error(5, &p)),
        }
    }
    Ok(CallData {
        callee,
        positional,
        named,
    })
}

fn build_named_pair(pair: Pair<Rule>) -> Result<(String, LiteralType), Error<Rule>> {
    let mut inner = pair.into_inner();
    let id = inner.next().unwrap();
    let lit = inner.next().unwrap();
    Ok((id.as_str().to_string(), build_literal(lit)?))
}

fn build_literal(pair: Pair<Rule>) -> Result<LiteralType, Error<Rule>> {
    let inner = pair.into_inner().next().unwrap();
    match inner.as_rule() {
        Rule::null_literal => Ok(LiteralType::NullLiteral),
        Rule::boolean_literal => Ok(LiteralType::BooleanLiteral(inner.as_str() == "true")),
        Rule::number_literal => {
            let s = inner.as_str();
            if s.contains('.') {
                s.parse::<f64>()
                    .map(LiteralType::DoubleLiteral)
                    .map_err(|_| get_semantic_error("malformed double literal", &inner))
            } else {
                s.parse::<i64>()
                    .map(LiteralType::IntegerLiteral)
                    .map_err(|_| get_semantic_error("integer literal out of range", &inner))
            }
        }
        Rule::string_literal => {
            let quoted = inner.into_inner().next().unwrap();
            Ok(LiteralType::StringLiteral(unescape(quoted.as_str())))
        }
        _ => Err(get_unexpected_error(6, &inner)),
    }
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n') => out.push('\n'),
                Some('r') => out.push('\r'),
                Some('t') => out.push('\t'),
                Some(other) => out.push(other),
                None => out.push('\\'),
            }
        } else {
            out.push(c);
        }
    }
    out
}

fn get_unexpected_error(tag: u16, pair: &Pair<Rule>) -> Error<Rule> {
    Error::new_from_span(
        ErrorVariant::CustomError {
            message: format!("Unexpected rule {:?} (#{})", pair.as_rule(), tag),
        },
        pair.as_span(),
    )
}

fn get_semantic_error(message: &str, pair: &Pair<Rule>) -> Error<Rule> {
    Error::new_from_span(
        ErrorVariant::CustomError {
            message: message.to_string(),
        },
        pair.as_span(),
    )
}
