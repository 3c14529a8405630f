use reason_rail::{Metadata, MetadataValue};

#[test]
fn insertion_order_is_preserved() {
    let mut metadata = Metadata::new();
    metadata.insert("b", 1);
    metadata.insert("a", 2);

    let keys: Vec<&str> = metadata.iter().map(|(key, _)| key).collect();
    assert_eq!(keys, vec!["b", "a"]);
}

#[test]
fn last_write_wins_in_place() {
    let mut metadata = Metadata::new();
    metadata.insert("attempt", 1);
    metadata.insert("host", "db-3");
    metadata.insert("attempt", 2);

    assert_eq!(metadata.len(), 2);
    assert_eq!(metadata.get("attempt"), Some(&MetadataValue::Int(2)));
    // The rewritten key keeps its original position.
    let keys: Vec<&str> = metadata.iter().map(|(key, _)| key).collect();
    assert_eq!(keys, vec!["attempt", "host"]);
}

#[test]
fn display_joins_entries() {
    let mut metadata = Metadata::new();
    metadata.insert("attempt", 2);
    metadata.insert("transient", true);
    assert_eq!(metadata.to_string(), "attempt=2; transient=true");
}

#[test]
fn get_on_missing_key_is_none() {
    assert_eq!(Metadata::new().get("anything"), None);
}

#[test]
fn collects_from_pairs() {
    let metadata: Metadata = [("a", 1), ("b", 2)].into_iter().collect();
    assert_eq!(metadata.len(), 2);
    assert_eq!(metadata.get("b"), Some(&MetadataValue::Int(2)));
}

#[test]
fn value_conversions_cover_primitives() {
    assert_eq!(MetadataValue::from("s"), MetadataValue::Str("s".into()));
    assert_eq!(MetadataValue::from(3_i64), MetadataValue::Int(3));
    assert_eq!(MetadataValue::from(3_u32), MetadataValue::Int(3));
    assert_eq!(MetadataValue::from(0.5), MetadataValue::Float(0.5));
    assert_eq!(MetadataValue::from(false), MetadataValue::Bool(false));
}

#[test]
fn merge_applies_last_write_wins_across_maps() {
    let mut base: Metadata = [("a", 1), ("b", 2)].into_iter().collect();
    let incoming: Metadata = [("b", 9), ("c", 3)].into_iter().collect();
    base.merge(incoming);

    assert_eq!(base.len(), 3);
    assert_eq!(base.get("b"), Some(&MetadataValue::Int(9)));
}
