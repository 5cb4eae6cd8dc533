use nexus_slist::{SequenceRank, SortConfig, SortedList, TextRank, Value, ValueKind};

#[test]
fn ints_and_floats_stay_distinct() {
    let json = serde_json::to_string(&[Value::Int(5), Value::Float(5.0)]).unwrap();
    assert_eq!(json, "[5,5.0]");

    let back: Vec<Value> = serde_json::from_str(&json).unwrap();
    assert!(back[0].same_as(&Value::Int(5)));
    assert!(back[1].same_as(&Value::Float(5.0)));

    let negative: Value = serde_json::from_str("-3").unwrap();
    assert!(negative.same_as(&Value::Int(-3)));
}

#[test]
fn nested_sequences_round_trip() {
    let value = Value::Seq(vec![
        Value::Int(1),
        Value::from("a"),
        Value::Seq(vec![Value::Float(2.5), Value::Int(2)]),
    ]);

    let json = serde_json::to_string(&value).unwrap();
    assert_eq!(json, r#"[1,"a",[2.5,2]]"#);

    let back: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(format!("{back:?}"), format!("{value:?}"));
}

#[test]
fn config_round_trips_into_a_list() {
    let config = SortConfig::new(TextRank::CodePoints, SequenceRank::Sum);

    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(json, r#"{"text":"CodePoints","sequence":"Sum"}"#);

    let back: SortConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);

    let mut list = SortedList::with_config(back);
    list.insert("b").unwrap();
    list.insert("ab").unwrap();
    assert_eq!(list.to_string(), "['ab', 'b']");
}

#[test]
fn kinds_serialize_by_name() {
    assert_eq!(serde_json::to_string(&ValueKind::Sequence).unwrap(), r#""Sequence""#);
    let kind: ValueKind = serde_json::from_str(r#""Text""#).unwrap();
    assert_eq!(kind, ValueKind::Text);
}
