use crate::parser::ast::LiteralType;
use crate::parser::{parse_call, parse_signature};

#[test]
fn test_signature_positional_only() {
    let sig = parse_signature("add(a, b)").unwrap();
    assert_eq!(sig.name, Some("add".to_string()));
    assert_eq!(sig.positional, vec!["a".to_string(), "b".to_string()]);
    assert!(sig.named.is_empty());
}

#[test]
fn test_signature_named_only() {
    let sig = parse_signature("make({width: 10, height: 20})").unwrap();
    assert_eq!(sig.name, Some("make".to_string()));
    assert!(sig.positional.is_empty());
    assert_eq!(
        sig.named,
        vec![
            ("width".to_string(), LiteralType::IntegerLiteral(10)),
            ("height".to_string(), LiteralType::IntegerLiteral(20)),
        ]
    );
}

#[test]
fn test_signature_mixed() {
    let sig = parse_signature("greet(who, {greeting: \"hello\", punct: '!'})").unwrap();
    assert_eq!(sig.positional, vec!["who".to_string()]);
    assert_eq!(
        sig.named,
        vec![
            (
                "greeting".to_string(),
                LiteralType::StringLiteral("hello".to_string())
            ),
            (
                "punct".to_string(),
                LiteralType::StringLiteral("!".to_string())
            ),
        ]
    );
}

#[test]
fn test_signature_anonymous() {
    let sig = parse_signature("(a, {b: null})").unwrap();
    assert_eq!(sig.name, None);
    assert_eq!(sig.positional, vec!["a".to_string()]);
}

#[test]
fn test_signature_empty_params() {
    let sig = parse_signature("tick()").unwrap();
    assert!(sig.positional.is_empty());
    assert!(sig.named.is_empty());
}

#[test]
fn test_signature_literal_defaults() {
    let sig = parse_signature("f({a: null, b: true, c: false, d: -3, e: 2.5})").unwrap();
    let defaults: Vec<&LiteralType> = sig.named.iter().map(|(_, l)| l).collect();
    assert_eq!(
        defaults,
        vec![
            &LiteralType::NullLiteral,
            &LiteralType::BooleanLiteral(true),
            &LiteralType::BooleanLiteral(false),
            &LiteralType::IntegerLiteral(-3),
            &LiteralType::DoubleLiteral(2.5),
        ]
    );
}

#[test]
fn test_signature_rejects_garbage() {
    assert!(parse_signature("add(a,").is_err());
    assert!(parse_signature("add(a) trailing").is_err());
    assert!(parse_signature("add(1)").is_err());
    assert!(parse_signature("add({x})").is_err());
}

#[test]
fn test_call_positional_only() {
    let call = parse_call("add(1, 2)").unwrap();
    assert_eq!(call.callee, Some("add".to_string()));
    assert_eq!(
        call.positional,
        vec![
            LiteralType::IntegerLiteral(1),
            LiteralType::IntegerLiteral(2)
        ]
    );
    assert!(call.named.is_empty());
}

#[test]
fn test_call_named_args() {
    let call = parse_call("greet(\"world\", punct: \"?\", greeting: 'hi')").unwrap();
    assert_eq!(
        call.positional,
        vec![LiteralType::StringLiteral("world".to_string())]
    );
    assert_eq!(
        call.named,
        vec![
            (
                "punct".to_string(),
                LiteralType::StringLiteral("?".to_string())
            ),
            (
                "greeting".to_string(),
                LiteralType::StringLiteral("hi".to_string())
            ),
        ]
    );
}

#[test]
fn test_call_rejects_positional_after_named() {
    assert!(parse_call("f(a: 1, 2)").is_err());
}

#[test]
fn test_call_string_escapes() {
    let call = parse_call("log(\"a\\nb\\\"c\")").unwrap();
    assert_eq!(
        call.positional,
        vec![LiteralType::StringLiteral("a\nb\"c".to_string())]
    );
}
