use serde::{Deserialize, Serialize};

/// A single dashboard tile: a label and its display value.
///
/// `value` is already formatted for display (`"5.2K"`, `"2.4%"`) and is
/// carried as-is; it has no numeric or unit semantics.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MetricRecord {
    pub name: String,
    pub value: String,
}

impl MetricRecord {
    /// Creates a record from a name and a pre-formatted value.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl std::fmt::Display for MetricRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_str_and_string() {
        let a = MetricRecord::new("CTR", "2.4%");
        let b = MetricRecord::new(String::from("CTR"), String::from("2.4%"));
        assert_eq!(a, b);
    }

    #[test]
    fn test_serializes_with_name_and_value_only() {
        let record = MetricRecord::new("Ad Spend", "$1.4K");
        let json = serde_json::to_value(&record).unwrap();

        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert_eq!(obj["name"], "Ad Spend");
        assert_eq!(obj["value"], "$1.4K");
    }

    #[test]
    fn test_value_is_not_parsed() {
        let json = r#"{"name":"Website Visitors","value":"5.2K"}"#;
        let record: MetricRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.value, "5.2K");
    }

    #[test]
    fn test_display() {
        let record = MetricRecord::new("Leads", "97");
        assert_eq!(record.to_string(), "Leads: 97");
    }
}
