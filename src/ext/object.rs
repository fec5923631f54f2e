use crate::utils::error::{ExtError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T> {
    Ok(serde_json::from_str(json)?)
}

/// Serde-driven helpers for any serializable value.
pub trait ObjectExt: Serialize {
    fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Field name to value. Only values that serialize as JSON objects qualify.
    fn to_map(&self) -> Result<Map<String, Value>> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            other => Err(ExtError::invalid_value(
                "value",
                other,
                "Only structs and maps convert to a field map",
            )),
        }
    }

    fn deep_clone(&self) -> Result<Self>
    where
        Self: DeserializeOwned + Sized,
    {
        Ok(serde_json::from_value(serde_json::to_value(self)?)?)
    }

    /// Overwrites fields of `target` that share a name with fields of `self`.
    /// Returns how many fields were copied.
    fn copy_properties_to<U>(&self, target: &mut U) -> Result<usize>
    where
        U: Serialize + DeserializeOwned,
    {
        let source = self.to_map()?;
        let mut fields = target.to_map()?;
        let mut copied = 0;
        for (name, value) in source {
            if let Some(slot) = fields.get_mut(&name) {
                *slot = value;
                copied += 1;
            }
        }
        *target = serde_json::from_value(Value::Object(fields))?;
        Ok(copied)
    }
}

impl<T: Serialize + ?Sized> ObjectExt for T {}

pub trait CompareExt: PartialOrd + Sized {
    /// Inclusive on both ends.
    fn is_between(&self, min: Self, max: Self) -> bool {
        *self >= min && *self <= max
    }
}

impl<T: PartialOrd> CompareExt for T {}

pub trait InExt: PartialEq + Sized {
    fn is_in(&self, items: &[Self]) -> bool {
        items.contains(self)
    }
}

impl<T: PartialEq> InExt for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Customer {
        name: String,
        email: String,
        tags: Vec<String>,
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct ContactCard {
        name: String,
        email: String,
        phone: Option<String>,
    }

    fn customer() -> Customer {
        Customer {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            tags: vec!["vip".to_string()],
        }
    }

    #[test]
    fn test_json_round_trip() {
        let json = customer().to_json().unwrap();
        assert_eq!(
            json,
            r#"{"name":"Ada","email":"ada@example.com","tags":["vip"]}"#
        );
        let parsed: Customer = from_json(&json).unwrap();
        assert_eq!(parsed, customer());
        assert!(customer().to_json_pretty().unwrap().contains("\n  \"name\": \"Ada\""));
        assert!(matches!(
            from_json::<Customer>("{not json"),
            Err(ExtError::SerializationError(_))
        ));
    }

    #[test]
    fn test_to_map() {
        let map = customer().to_map().unwrap();
        assert_eq!(map.len(), 3);
        assert_eq!(map["name"], Value::String("Ada".to_string()));
        assert!(matches!(
            42.to_map(),
            Err(ExtError::InvalidValueError { .. })
        ));
    }

    #[test]
    fn test_deep_clone_is_independent() {
        let original = customer();
        let mut copy = original.deep_clone().unwrap();
        copy.tags.push("new".to_string());
        assert_eq!(original.tags.len(), 1);
        assert_eq!(copy.tags.len(), 2);
    }

    #[test]
    fn test_copy_properties() {
        let mut card = ContactCard {
            name: String::new(),
            email: String::new(),
            phone: Some("555-0100".to_string()),
        };
        let copied = customer().copy_properties_to(&mut card).unwrap();
        assert_eq!(copied, 2);
        assert_eq!(card.name, "Ada");
        assert_eq!(card.email, "ada@example.com");
        assert_eq!(card.phone.as_deref(), Some("555-0100"));
    }

    #[test]
    fn test_is_between() {
        assert!(5.is_between(1, 10));
        assert!(1.is_between(1, 10));
        assert!(!11.is_between(1, 10));
        assert!(2.5.is_between(2.0, 3.0));
        assert!('m'.is_between('a', 'z'));

        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert!(date.is_between(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
        ));
    }

    #[test]
    fn test_is_in() {
        assert!(3.is_in(&[1, 2, 3]));
        assert!(!"x".is_in(&["a", "b"]));
        assert!(!0.is_in(&[]));
    }
}
