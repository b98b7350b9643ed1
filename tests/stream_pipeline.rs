use std::fs;

use keyed_stream::processing::{JsonFormat, Stream, StreamOptions};
use keyed_stream::types::{OrderedMap, Value};
use keyed_stream::{stream, stream_from_json, StreamError};

fn person_from_fixture() -> Stream {
    let text = fs::read_to_string("tests/fixtures/person.json").unwrap();
    stream_from_json(&text).unwrap()
}

fn pairs<V: Clone>(map: &OrderedMap<V>) -> Vec<(String, V)> {
    map.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
}

#[test]
fn fixture_decodes_in_key_order() {
    let s = person_from_fixture();
    assert_eq!(s.keys().collect::<Vec<_>>(), vec!["name", "age", "lang"]);
    assert_eq!(*s.get("age").unwrap(), Value::Int64(29));
    assert_eq!(
        *s.get("lang").unwrap(),
        Value::List(vec![Value::from("PHP"), Value::from("Kotlin"), Value::from("Coldfusion")])
    );
}

#[test]
fn chunked_splits_name_and_age() {
    let s = stream_from_json(r#"{"name":"Jamie","age":29}"#).unwrap();

    let ones = s.chunked(1).unwrap();
    assert_eq!(ones.len(), 2);
    assert_eq!(pairs(&ones[0]), vec![("name".to_string(), Value::from("Jamie"))]);
    assert_eq!(pairs(&ones[1]), vec![("age".to_string(), Value::from(29))]);

    let twos = s.chunked(2).unwrap();
    assert_eq!(twos.len(), 1);
    assert_eq!(twos[0], s.to_map());

    assert!(matches!(s.chunked(0), Err(StreamError::InvalidArgument { .. })));
}

#[test]
fn reject_filter_map_pipeline() {
    let mut s = person_from_fixture();
    s.reject(|k, _| k == "age")
        .unwrap()
        .filter(|_, v| *v == Value::from("Jamie"))
        .unwrap();
    assert_eq!(pairs(&s.to_map()), vec![("name".to_string(), Value::from("Jamie"))]);

    s.map(|k, v| Value::from(format!("k={k}, v={v}")));
    assert_eq!(
        pairs(&s.to_map()),
        vec![("name".to_string(), Value::from("k=name, v=Jamie"))]
    );
}

#[test]
fn non_boolean_predicate_aborts_without_partial_commit() {
    let mut s = person_from_fixture();
    let before = s.to_array();

    // The first two pairs produce valid verdicts; the third does not.
    let err = s
        .reject(|k, _| if k == "lang" { Value::from("yes") } else { Value::Bool(true) })
        .unwrap_err();
    assert!(matches!(
        err,
        StreamError::InvalidPredicateResult { operation: "reject", ref key } if key == "lang"
    ));
    assert_eq!(s.to_array(), before);

    assert!(s.all(|_, _| Value::Int64(1)).is_err());
    assert!(s.any(|_, _| Value::Null).is_err());
    assert!(s.none(|_, _| serde_json::json!("true")).is_err());
    assert!(s.partition(|_, _| None::<bool>).is_err());
}

#[test]
fn partition_returns_both_halves_and_leaves_stream_alone() {
    let s = person_from_fixture();
    let p = s.partition(|_, v| v.as_str().is_some()).unwrap();
    assert_eq!(p.first().keys().collect::<Vec<_>>(), vec!["name"]);
    assert_eq!(p.second().keys().collect::<Vec<_>>(), vec!["age", "lang"]);
    assert_eq!(s.len(), 3);
}

#[test]
fn fold_and_reduce_walk_in_insertion_order() {
    let s = person_from_fixture();
    let keys = s.fold(Vec::new(), |mut acc, k, _| {
        acc.push(k.to_string());
        acc
    });
    assert_eq!(keys, vec!["name", "age", "lang"]);

    let joined = s.reduce(|acc: Option<String>, k, _| match acc {
        None => k.to_string(),
        Some(prev) => format!("{prev},{k}"),
    });
    assert_eq!(joined.as_deref(), Some("name,age,lang"));

    let empty: Stream = Stream::new();
    assert_eq!(empty.reduce(|_: Option<i32>, _, _| 1), None);
    assert_eq!(empty.fold("seed", |acc, _, _| acc), "seed");
}

#[test]
fn indexed_access_and_cursor() {
    let mut s = stream(OrderedMap::new());
    s.set("a", Value::from(1)).set("b", Value::from(2)).set("a", Value::from(3));
    assert_eq!(s.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    assert!(matches!(s.get("z"), Err(StreamError::KeyNotFound { .. })));

    let mut cursor = s.as_iterable();
    let mut seen = Vec::new();
    while !cursor.is_done() {
        seen.push(cursor.next().unwrap().clone());
    }
    assert_eq!(seen, vec![Value::from(3), Value::from(2)]);
    assert!(matches!(cursor.next(), Err(StreamError::IteratorExhausted)));
}

#[test]
fn to_json_encodes_nested_values_structurally() {
    let s = person_from_fixture();
    assert_eq!(
        s.to_json().unwrap(),
        r#"{"name":"Jamie","age":29,"lang":["PHP","Kotlin","Coldfusion"]}"#
    );
    assert_eq!(Stream::<Value>::new().to_json().unwrap(), "{}");

    let pretty = Stream::with_options(
        s.to_map(),
        StreamOptions {
            json_format: JsonFormat::Pretty,
            ..Default::default()
        },
    );
    let text = pretty.to_json().unwrap();
    assert!(text.contains("\n  \"name\": \"Jamie\""));

    let back = stream_from_json(&text).unwrap();
    assert_eq!(back, s);
}

#[test]
fn to_array_is_idempotent_and_matches_to_map() {
    let s = person_from_fixture();
    assert_eq!(s.to_array(), s.to_array());
    assert_eq!(s.to_array(), s.to_map());
    assert_eq!(s.as_map(), &s.to_map());
}

#[test]
fn positional_text_is_rejected() {
    let err = stream_from_json(r#"["PHP","Kotlin"]"#).unwrap_err();
    assert!(err.to_string().contains("expected a key/value object"));
    assert!(matches!(
        stream_from_json("true"),
        Err(StreamError::InvalidShape { found: "boolean" })
    ));
    assert!(matches!(stream_from_json("{"), Err(StreamError::Json(_))));
}

#[test]
fn digit_keyed_object_keeps_its_keys() {
    let s = stream_from_json(r#"{"0":"a","1":"b"}"#).unwrap();
    assert_eq!(s.len(), 2);
    assert_eq!(s.keys().collect::<Vec<_>>(), vec!["0", "1"]);
    assert_eq!(*s.get("1").unwrap(), Value::from("b"));
}
