//! Relationship-aware conversion of records into JSON objects.
//!
//! Every record type carries default rules that cut expansion at its
//! back-references (`-reviews.game` on a game, for instance). Callers can
//! pass extra rules that apply to that call only. Rules are dotted paths of
//! field names relative to the record they are declared on; a leading `-`
//! excludes the path, anything else opts a field in.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::records::RecordSet;

mod rules;

pub use self::rules::Rules;

pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct RecordKey {
    pub table: &'static str,
    pub id: i32,
}

impl RecordKey {
    pub fn new(table: &'static str, id: i32) -> Self {
        RecordKey { table, id }
    }
}

pub enum Field<'a> {
    Value(Value),
    One(Option<&'a dyn Serializable>),
    Many(Vec<&'a dyn Serializable>),
    /// Computed relation, emitted only when a rule includes it.
    Derived(Vec<&'a dyn Serializable>),
    /// Column whose type has no JSON representation.
    Unsupported(&'static str),
}

impl<'a> Field<'a> {
    pub fn one<T: Serializable>(record: Option<&'a T>) -> Field<'a> {
        Field::One(record.map(|record| record as &dyn Serializable))
    }

    pub fn many<T: Serializable>(records: Vec<&'a T>) -> Field<'a> {
        Field::Many(as_dyn(records))
    }

    pub fn derived<T: Serializable>(records: Vec<&'a T>) -> Field<'a> {
        Field::Derived(as_dyn(records))
    }
}

fn as_dyn<'a, T: Serializable>(records: Vec<&'a T>) -> Vec<&'a dyn Serializable> {
    records
        .into_iter()
        .map(|record| record as &dyn Serializable)
        .collect()
}

pub trait Serializable {
    fn key(&self) -> RecordKey;

    /// Rules applied whenever a record of this type is expanded, relative to
    /// the record itself.
    fn serialize_rules(&self) -> &'static [&'static str] {
        &[]
    }

    /// Fields in output order. Relations resolve through `records`.
    fn fields<'a>(&'a self, records: &'a RecordSet) -> Vec<(&'static str, Field<'a>)>;

    fn to_dict(&self, records: &RecordSet) -> Map<String, Value>
    where
        Self: Sized,
    {
        to_dict(self, records, &[] as &[&str])
    }

    fn to_dict_with<S: AsRef<str>>(&self, records: &RecordSet, rules: &[S]) -> Map<String, Value>
    where
        Self: Sized,
    {
        to_dict(self, records, rules)
    }
}

pub fn timestamp(value: Option<&DateTime<Utc>>) -> Value {
    match value {
        Some(value) => Value::String(value.format(DATETIME_FORMAT).to_string()),
        None => Value::Null,
    }
}

/// Relations nested deeper than this are omitted. Default rules stop every
/// expansion long before it; the limit only bounds a type that declares no
/// rule against its own back-references.
pub const MAX_DEPTH: usize = 16;

pub fn to_dict<S: AsRef<str>>(
    record: &dyn Serializable,
    records: &RecordSet,
    rules: &[S],
) -> Map<String, Value> {
    let rules = Rules::parse(rules);
    expand(record, records, &rules, "", 0)
}

fn expand(
    record: &dyn Serializable,
    records: &RecordSet,
    inherited: &Rules,
    path: &str,
    depth: usize,
) -> Map<String, Value> {
    let mut rules = inherited.clone();
    rules.extend(path, record.serialize_rules());

    let mut dict = Map::new();
    for (name, field) in record.fields(records) {
        let candidate = rules::join(path, name);
        if rules.excludes(&candidate) {
            continue;
        }

        let value = match field {
            Field::Value(value) => value,
            Field::Unsupported(type_name) => {
                warn!(
                    "Skipping {}.{}: no JSON mapping for {}",
                    record.key().table,
                    candidate,
                    type_name
                );
                continue;
            }
            Field::One(None) => Value::Null,
            Field::One(Some(related)) => {
                match expand_nested(related, records, &rules, &candidate, depth + 1) {
                    Some(nested) => nested,
                    None => continue,
                }
            }
            Field::Many(related) => {
                expand_sequence(related, records, &rules, &candidate, depth + 1)
            }
            Field::Derived(related) => {
                if !rules.includes(&candidate) {
                    continue;
                }
                expand_sequence(related, records, &rules, &candidate, depth + 1)
            }
        };
        dict.insert(name.to_string(), value);
    }

    dict
}

fn expand_nested(
    record: &dyn Serializable,
    records: &RecordSet,
    rules: &Rules,
    path: &str,
    depth: usize,
) -> Option<Value> {
    if depth > MAX_DEPTH {
        let key = record.key();
        warn!(
            "Not expanding {}({}) at {}: nested deeper than {}",
            key.table, key.id, path, MAX_DEPTH
        );
        return None;
    }

    Some(Value::Object(expand(record, records, rules, path, depth)))
}

fn expand_sequence(
    related: Vec<&dyn Serializable>,
    records: &RecordSet,
    rules: &Rules,
    path: &str,
    depth: usize,
) -> Value {
    Value::Array(
        related
            .into_iter()
            .filter_map(|record| expand_nested(record, records, rules, path, depth))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use serde_json::{json, Value};

    use super::{timestamp, to_dict, Field, RecordKey, Serializable, MAX_DEPTH};
    use crate::records::RecordSet;

    struct Blob {
        id: i32,
    }

    impl Serializable for Blob {
        fn key(&self) -> RecordKey {
            RecordKey::new("blobs", self.id)
        }

        fn fields<'a>(&'a self, _: &'a RecordSet) -> Vec<(&'static str, Field<'a>)> {
            vec![
                ("id", Field::Value(json!(self.id))),
                ("payload", Field::Unsupported("bytea")),
            ]
        }
    }

    /// A record that points at itself, with no rule to stop it.
    struct Loop {
        id: i32,
    }

    impl Serializable for Loop {
        fn key(&self) -> RecordKey {
            RecordKey::new("loops", self.id)
        }

        fn fields<'a>(&'a self, _: &'a RecordSet) -> Vec<(&'static str, Field<'a>)> {
            vec![
                ("id", Field::Value(json!(self.id))),
                ("next", Field::one(Some(self))),
            ]
        }
    }

    struct Crate<'b> {
        id: i32,
        contents: Vec<&'b Blob>,
    }

    impl<'b> Serializable for Crate<'b> {
        fn key(&self) -> RecordKey {
            RecordKey::new("crates", self.id)
        }

        fn fields<'a>(&'a self, _: &'a RecordSet) -> Vec<(&'static str, Field<'a>)> {
            vec![
                ("id", Field::Value(json!(self.id))),
                ("contents", Field::many(self.contents.clone())),
            ]
        }
    }

    #[test]
    fn test_timestamp_format() {
        let value = Utc.with_ymd_and_hms(2023, 4, 5, 6, 7, 8).unwrap();
        assert_eq!(timestamp(Some(&value)), json!("2023-04-05 06:07:08"));
        assert_eq!(timestamp(None), Value::Null);
    }

    #[test]
    fn test_unsupported_field_is_omitted() {
        let records = RecordSet::default();
        let dict = Blob { id: 4 }.to_dict(&records);
        assert_eq!(Value::Object(dict), json!({ "id": 4 }));
    }

    #[test]
    fn test_self_reference_stops_at_max_depth() {
        let records = RecordSet::default();
        let dict = to_dict(&Loop { id: 1 }, &records, &[] as &[&str]);

        let mut levels = 0;
        let mut current = Value::Object(dict);
        while let Some(next) = current.get("next") {
            levels += 1;
            current = next.clone();
        }
        assert_eq!(levels, MAX_DEPTH);
        assert_eq!(current, json!({ "id": 1 }));
    }

    #[test]
    fn test_same_record_twice_in_a_collection_is_kept() {
        let records = RecordSet::default();
        let blob = Blob { id: 2 };
        let dict = Crate {
            id: 1,
            contents: vec![&blob, &blob],
        }
        .to_dict(&records);

        assert_eq!(
            Value::Object(dict),
            json!({ "id": 1, "contents": [{ "id": 2 }, { "id": 2 }] })
        );
    }
}
