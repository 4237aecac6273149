use crate::core::value::Value;
use indexmap::IndexMap;
use serde::Serialize;

pub type FieldId = String;

/// Field values accumulated across steps, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<FieldId, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<FieldId>, value: Value) {
        self.fields.insert(id.into(), value);
    }

    pub fn get(&self, id: &str) -> Option<&Value> {
        self.fields.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.fields.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FieldId, &Value)> {
        self.fields.iter()
    }

    pub fn merge(&mut self, values: impl IntoIterator<Item = (FieldId, Value)>) {
        for (id, value) in values {
            self.fields.insert(id, value);
        }
    }

    pub fn clear(&mut self) {
        self.fields.clear();
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::Record;
    use crate::core::value::Value;

    #[test]
    fn merge_keeps_first_seen_order_and_overwrites() {
        let mut record = Record::new();
        record.insert("first_name", Value::Text("Ada".to_string()));
        record.insert("millionaire", Value::Bool(false));

        record.merge(vec![
            ("first_name".to_string(), Value::Text("Grace".to_string())),
            ("money".to_string(), Value::Float(12.5)),
        ]);

        let ids: Vec<&str> = record.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["first_name", "millionaire", "money"]);
        assert_eq!(
            record.get("first_name"),
            Some(&Value::Text("Grace".to_string()))
        );
    }

    #[test]
    fn serializes_as_flat_json_object() {
        let mut record = Record::new();
        record.insert("name", Value::Text("Ada".to_string()));
        record.insert("millionaire", Value::Bool(true));
        record.insert("money", Value::Integer(2_000_000));

        let json = serde_json::to_value(&record).expect("record should serialize");
        assert_eq!(json["name"], "Ada");
        assert_eq!(json["millionaire"], true);
        assert_eq!(json["money"], 2_000_000);
    }
}
