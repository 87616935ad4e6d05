//! Insertion-ordered records.

use super::value::CellValue;

/// One flat entry being exported (an account, a budget, a transaction).
///
/// Fields keep the order in which they were first inserted. The exporter
/// derives CSV columns from that order, so a record built from a JSON object
/// keeps the object's key order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, CellValue)>,
}

impl Record {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Record::insert`].
    ///
    /// # Examples
    ///
    /// ```
    /// use finance_report::export::Record;
    ///
    /// let account = Record::new()
    ///     .with("id", "1")
    ///     .with("name", "Checking")
    ///     .with("balance", 2500.75);
    /// assert_eq!(account.field_names().collect::<Vec<_>>(), ["id", "name", "balance"]);
    /// ```
    pub fn with(mut self, name: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets a field, returning the previous value.
    ///
    /// An existing field is overwritten in place and keeps its position; a new
    /// field is appended.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<CellValue>,
    ) -> Option<CellValue> {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.fields.push((name, value));
                None
            }
        }
    }

    /// Returns the value of a field, if present.
    pub fn get(&self, name: &str) -> Option<&CellValue> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    /// Returns `true` if the field is present, even when its value is null.
    pub fn contains_field(&self, name: &str) -> bool {
        self.fields.iter().any(|(existing, _)| existing == name)
    }

    /// Field names in order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Fields in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<CellValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (name, value) in iter {
            record.insert(name, value);
        }
        record
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for Record {
    fn from(map: serde_json::Map<String, serde_json::Value>) -> Self {
        map.into_iter().collect()
    }
}
