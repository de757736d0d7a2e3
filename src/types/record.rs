//! Tweet record.
//!
//! A [Record] maps field names to textual values, keeping the order
//! in which fields were first inserted so that tables built from records
//! keep a stable column order.

/// Field name → value mapping for a single tweet.
///
/// An absent field is a missing value, written as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the value of `field`, if present.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value.as_str())
    }

    /// Get the value of `field`, or an empty string if it is missing.
    pub fn get_or_empty(&self, field: &str) -> &str {
        self.get(field).unwrap_or_default()
    }

    /// Insert or replace a value.
    ///
    /// A replaced field keeps its original position.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        let field = field.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(name, _)| *name == field) {
            Some((_, v)) => *v = value,
            None => self.fields.push((field, value)),
        }
    }

    pub fn remove(&mut self, field: &str) -> Option<String> {
        let pos = self.fields.iter().position(|(name, _)| name == field)?;
        Some(self.fields.remove(pos).1)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.iter().any(|(name, _)| name == field)
    }

    /// Iterate over field names, in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Iterate over `(name, value)` pairs, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut record = Record::new();
        for (k, v) in iter {
            record.insert(k, v);
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::Record;

    #[test]
    fn insert_keeps_position() {
        let mut r: Record = [("Texttw", "a"), ("Tweetid", "1")].into_iter().collect();
        r.insert("Texttw", "b");
        let names: Vec<&str> = r.names().collect();
        assert_eq!(names, vec!["Texttw", "Tweetid"]);
        assert_eq!(r.get("Texttw"), Some("b"));
    }

    #[test]
    fn missing_is_empty() {
        let r = Record::new();
        assert_eq!(r.get("Place"), None);
        assert_eq!(r.get_or_empty("Place"), "");
    }

    #[test]
    fn remove() {
        let mut r: Record = [("A", "1"), ("B", "2")].into_iter().collect();
        assert_eq!(r.remove("A"), Some("1".to_string()));
        assert!(!r.contains("A"));
        assert_eq!(r.len(), 1);
    }
}
