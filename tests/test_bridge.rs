//! Tests for the JSON shim and the debug-output relay.

extern crate callbind;

use callbind::runtime::bridge::{from_json, parse, stringify, to_json};
use callbind::runtime::callable::EvalContext;
use callbind::runtime::dispatch::{ClassInfo, ClassRegistry};
use callbind::runtime::error::RtErrorType;
use callbind::runtime::relay::{BufferSink, DebugRelay, MAX_MESSAGE_LEN, TRUNCATION_MARKER};
use callbind::runtime::value::{NumberType, Value};

fn int(i: i64) -> Value {
    Value::Number(NumberType::Integer(i))
}

#[test]
fn test_parse_scalars() {
    assert_eq!(parse("null").unwrap(), Value::Null);
    assert_eq!(parse("true").unwrap(), Value::Boolean(true));
    assert_eq!(parse("42").unwrap(), int(42));
    assert_eq!(
        parse("2.5").unwrap(),
        Value::Number(NumberType::Double(2.5))
    );
    assert_eq!(
        parse("\"hi\"").unwrap(),
        Value::String("hi".to_string())
    );
}

#[test]
fn test_parse_integral_numbers_stay_integers() {
    // i64-representable numbers map to Integer, everything else to Double.
    assert_eq!(parse("-7").unwrap(), int(-7));
    match parse("1e30").unwrap() {
        Value::Number(NumberType::Double(_)) => {}
        other => panic!("expected Double, got {:?}", other),
    }
}

#[test]
fn test_parse_nested_structure() {
    let v = parse("{\"a\": 1, \"b\": [true, null]}").unwrap();
    assert_eq!(
        v,
        Value::Map(vec![
            ("a".to_string(), int(1)),
            (
                "b".to_string(),
                Value::List(vec![Value::Boolean(true), Value::Null])
            ),
        ])
    );
}

#[test]
fn test_parse_rejects_malformed_text() {
    assert!(matches!(parse("{oops"), Err(RtErrorType::BridgeError(_))));
}

#[test]
fn test_stringify_round_trips_through_parse() {
    let v = Value::Map(vec![
        ("name".to_string(), Value::String("relay".to_string())),
        ("sizes".to_string(), Value::List(vec![int(1), int(2)])),
        ("active".to_string(), Value::Boolean(false)),
    ]);
    let text = stringify(&v).unwrap();
    let back = parse(&text).unwrap();
    match back {
        Value::Map(entries) => {
            assert_eq!(entries.len(), 3);
            assert!(entries.contains(&("active".to_string(), Value::Boolean(false))));
            assert!(entries.contains(&(
                "sizes".to_string(),
                Value::List(vec![int(1), int(2)])
            )));
        }
        other => panic!("expected Map, got {:?}", other),
    }
}

#[test]
fn test_non_finite_doubles_stringify_as_null() {
    let v = Value::Number(NumberType::Double(f64::NAN));
    assert_eq!(stringify(&v).unwrap(), "null");
}

#[test]
fn test_instances_do_not_cross_the_bridge() {
    let mut registry = ClassRegistry::new();
    registry.register(ClassInfo::new("Opaque")).unwrap();
    let o = registry.new_instance("Opaque").unwrap();
    let result = to_json(&Value::Object(o));
    assert!(matches!(result, Err(RtErrorType::BridgeError(_))));
}

#[test]
fn test_from_json_preserves_value_model() {
    let json: serde_json::Value = serde_json::from_str("[1, \"two\", 3.5]").unwrap();
    assert_eq!(
        from_json(json).unwrap(),
        Value::List(vec![
            int(1),
            Value::String("two".to_string()),
            Value::Number(NumberType::Double(3.5)),
        ])
    );
}

#[test]
fn test_relay_envelope_format() {
    let sink = BufferSink::new();
    let buffer = sink.buffer();
    let mut relay = DebugRelay::attached(Box::new(sink));

    relay.post("hi");
    assert_eq!(buffer.borrow().len(), 1);
    assert_eq!(buffer.borrow()[0], "{\"message\":\"hi\"}");
}

#[test]
fn test_relay_drops_messages_while_detached() {
    let mut relay = DebugRelay::new();
    assert!(!relay.is_attached());
    relay.post("lost");

    let sink = BufferSink::new();
    let buffer = sink.buffer();
    relay.attach(Box::new(sink));
    relay.post("kept");

    let posts = buffer.borrow();
    assert_eq!(posts.len(), 1);
    assert!(posts[0].contains("kept"));
}

#[test]
fn test_relay_truncates_oversized_messages() {
    let sink = BufferSink::new();
    let buffer = sink.buffer();
    let mut relay = DebugRelay::attached(Box::new(sink));

    let big: String = std::iter::repeat('a').take(MAX_MESSAGE_LEN + 10).collect();
    relay.post(&big);

    let posts = buffer.borrow();
    assert_eq!(posts.len(), 1);
    let envelope: serde_json::Value = serde_json::from_str(&posts[0]).unwrap();
    let message = envelope["message"].as_str().unwrap();
    assert!(message.ends_with(TRUNCATION_MARKER));
    assert_eq!(
        message.chars().count(),
        MAX_MESSAGE_LEN + TRUNCATION_MARKER.chars().count()
    );
}

#[test]
fn test_short_messages_pass_untouched() {
    let sink = BufferSink::new();
    let buffer = sink.buffer();
    let mut relay = DebugRelay::attached(Box::new(sink));

    let msg: String = std::iter::repeat('b').take(100).collect();
    relay.post(&msg);
    let envelope: serde_json::Value = serde_json::from_str(&buffer.borrow()[0]).unwrap();
    assert_eq!(envelope["message"].as_str().unwrap(), msg);
}

#[test]
fn test_eval_context_prints_through_relay() {
    let sink = BufferSink::new();
    let buffer = sink.buffer();
    let mut ctx = EvalContext::with_relay(DebugRelay::attached(Box::new(sink)));

    ctx.print("from native code");
    assert_eq!(buffer.borrow().len(), 1);
    assert!(buffer.borrow()[0].contains("from native code"));
}
