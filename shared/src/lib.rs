use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// A place money moves in or out of (bank account, card, wallet...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    /// Kind of source, e.g. "bank" or "credit"
    #[serde(rename = "type")]
    pub source_type: String,
    pub name: String,
}

impl Source {
    /// Label shown in the source picker, e.g. "bank:Chase"
    pub fn option_label(&self) -> String {
        format!("{}:{}", self.source_type, self.name)
    }
}

/// Spending/income category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    #[serde(rename = "type")]
    pub category_type: String,
}

impl Category {
    pub fn option_label(&self) -> String {
        self.category_type.clone()
    }
}

/// Named collections exposed by the backing store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Source,
    Category,
    Transaction,
}

impl Table {
    pub fn as_str(&self) -> &'static str {
        match self {
            Table::Source => "source",
            Table::Category => "category",
            Table::Transaction => "transaction",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The editable fields of the transaction form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionField {
    Amount,
    SourceId,
    CategoryId,
    Date,
    Description,
}

impl TransactionField {
    pub const ALL: [TransactionField; 5] = [
        TransactionField::Amount,
        TransactionField::SourceId,
        TransactionField::CategoryId,
        TransactionField::Date,
        TransactionField::Description,
    ];

    /// Record key, also used as the input `name` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionField::Amount => "amount",
            TransactionField::SourceId => "source_id",
            TransactionField::CategoryId => "category_id",
            TransactionField::Date => "date",
            TransactionField::Description => "description",
        }
    }
}

impl fmt::Display for TransactionField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownField(pub String);

impl fmt::Display for UnknownField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unknown transaction field '{}'", self.0)
    }
}

impl std::error::Error for UnknownField {}

impl FromStr for TransactionField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TransactionField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Raw form input, sent to the store as-is.
///
/// Every value stays a string: coercion (numeric `amount`, date parsing) is
/// left to the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldValues {
    /// Signed amount, e.g. "-50.00"
    pub amount: String,
    pub source_id: String,
    pub category_id: String,
    /// Free text, conventionally MM-DD-YYYY
    pub date: String,
    pub description: String,
}

impl FieldValues {
    pub fn get(&self, field: TransactionField) -> &str {
        match field {
            TransactionField::Amount => &self.amount,
            TransactionField::SourceId => &self.source_id,
            TransactionField::CategoryId => &self.category_id,
            TransactionField::Date => &self.date,
            TransactionField::Description => &self.description,
        }
    }

    pub fn set(&mut self, field: TransactionField, value: String) {
        let slot = match field {
            TransactionField::Amount => &mut self.amount,
            TransactionField::SourceId => &mut self.source_id,
            TransactionField::CategoryId => &mut self.category_id,
            TransactionField::Date => &mut self.date,
            TransactionField::Description => &mut self.description,
        };
        *slot = value;
    }
}

// Stores keyed by integer columns hand back numbers; the form only ever
// needs the id as an option value.
fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_source_deserializes_type_and_numeric_id() {
        let source: Source = serde_json::from_value(json!({
            "id": 7,
            "type": "bank",
            "name": "Chase",
            "created_at": "2024-04-01T00:00:00Z"
        }))
        .unwrap();

        assert_eq!(source.id, "7");
        assert_eq!(source.option_label(), "bank:Chase");
    }

    #[test]
    fn test_category_label_is_its_type() {
        let category: Category =
            serde_json::from_value(json!({ "id": "c2", "type": "groceries" })).unwrap();

        assert_eq!(category.id, "c2");
        assert_eq!(category.option_label(), "groceries");
    }

    #[test]
    fn test_field_values_serialize_as_plain_strings() {
        let values = FieldValues {
            amount: "-50.00".to_string(),
            source_id: "s1".to_string(),
            category_id: "c2".to_string(),
            date: "04-01-2024".to_string(),
            description: "coffee".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&values).unwrap(),
            json!({
                "amount": "-50.00",
                "source_id": "s1",
                "category_id": "c2",
                "date": "04-01-2024",
                "description": "coffee"
            })
        );
    }

    #[test]
    fn test_set_touches_only_the_named_field() {
        let mut values = FieldValues::default();
        values.set(TransactionField::Date, "04-01-2024".to_string());

        assert_eq!(values.date, "04-01-2024");
        assert_eq!(values.amount, "");
        assert_eq!(values.description, "");
        assert_ne!(values, FieldValues::default());
    }

    #[test]
    fn test_field_names_parse_back() {
        for field in TransactionField::ALL {
            assert_eq!(field.as_str().parse::<TransactionField>(), Ok(field));
        }
        assert!("balance".parse::<TransactionField>().is_err());
    }
}
