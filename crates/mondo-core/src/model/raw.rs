// crates/mondo-core/src/model/raw.rs
use serde::Deserialize;
use serde_json::Value;

/// One hotel entry as found in `data/hotels/<destination>.json`.
///
/// Only the fields the aggregator reads are modelled; the feeds carry many
/// more and those are ignored. Price fields are kept as raw JSON values
/// because suppliers mix numbers, strings and `null`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HotelRecord {
    #[serde(default)]
    pub offer_country_name: Option<String>,
    #[serde(default)]
    pub location_heading: Option<String>,
    #[serde(default)]
    pub price: Option<Value>,
    #[serde(default)]
    pub value: Option<Value>,
    #[serde(default)]
    pub current_price: Option<Value>,
}

impl HotelRecord {
    /// The first set field among `price`, `value`, `current_price`, if it
    /// is a positive number.
    ///
    /// `null`, `0`, `""`, `false` and empty containers count as unset and
    /// fall through. Any other value is final: `"12"` or `-3` gives `None`
    /// even when a later field holds a valid price.
    pub fn price(&self) -> Option<f64> {
        [&self.price, &self.value, &self.current_price]
            .into_iter()
            .flatten()
            .find(|v| is_set(v))
            .and_then(|v| match v {
                Value::Number(n) => n.as_f64(),
                _ => None,
            })
            .filter(|p| *p > 0.0)
    }

    pub fn country(&self) -> Option<&str> {
        self.offer_country_name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    pub fn location(&self) -> Option<&str> {
        self.location_heading
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

fn is_set(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// A destination description from `data/en/destination/<slug>.json`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DestinationRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hotel(json: &str) -> HotelRecord {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn price_uses_first_set_field() {
        assert_eq!(hotel(r#"{"price": 120, "value": 90}"#).price(), Some(120.0));
        assert_eq!(hotel(r#"{"price": 0, "value": 90.5}"#).price(), Some(90.5));
        assert_eq!(hotel(r#"{"price": null, "value": "", "current_price": 42}"#).price(), Some(42.0));
        assert_eq!(hotel(r#"{"price": -3}"#).price(), None);
        assert_eq!(hotel(r#"{}"#).price(), None);
    }

    #[test]
    fn unusable_set_price_does_not_fall_through() {
        assert_eq!(hotel(r#"{"price": "12", "value": 20}"#).price(), None);
        assert_eq!(hotel(r#"{"price": -3, "value": 20}"#).price(), None);
        assert_eq!(hotel(r#"{"price": "cheap", "current_price": 42}"#).price(), None);
    }

    #[test]
    fn blank_country_is_none() {
        assert_eq!(hotel(r#"{"offer_country_name": "  "}"#).country(), None);
        assert_eq!(
            hotel(r#"{"offer_country_name": "Fiji"}"#).country(),
            Some("Fiji")
        );
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let h = hotel(r#"{"id": 7, "stars": 4, "location_heading": "Nadi"}"#);
        assert_eq!(h.location(), Some("Nadi"));
    }
}
