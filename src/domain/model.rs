use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// One animal as returned by the lookup API or stored in the local dataset.
///
/// Only `name` is expected to be present; everything else may be missing at
/// any level of nesting, and unknown keys are ignored. Values of an
/// unexpected JSON type are kept as their JSON text instead of failing the
/// whole payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimalRecord {
    #[serde(default, deserialize_with = "lenient_name")]
    pub name: String,
    #[serde(
        default,
        deserialize_with = "lenient_characteristics",
        skip_serializing_if = "Option::is_none"
    )]
    pub characteristics: Option<Characteristics>,
    #[serde(
        default,
        deserialize_with = "lenient_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub locations: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Characteristics {
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub diet: Option<String>,
    #[serde(
        default,
        rename = "type",
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub animal_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub skin_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub lifespan: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_predators",
        skip_serializing_if = "Option::is_none"
    )]
    pub predators: Option<Predators>,
}

/// Predators arrive either as a list or, from the live API, as free text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Predators {
    List(Vec<String>),
    Text(String),
}

impl Predators {
    pub fn is_empty(&self) -> bool {
        match self {
            Predators::List(items) => items.is_empty(),
            Predators::Text(text) => text.trim().is_empty(),
        }
    }
}

/// Lists print in their literal form, e.g. `['Polar bears', 'Wolves']`.
impl fmt::Display for Predators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predators::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    if item.contains('\'') && !item.contains('"') {
                        write!(f, "\"{}\"", item)?;
                    } else {
                        write!(f, "'{}'", item.replace('\'', "\\'"))?;
                    }
                }
                f.write_str("]")
            }
            Predators::Text(text) => f.write_str(text),
        }
    }
}

fn value_to_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}

fn lenient_name<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(lenient_text(deserializer)?.unwrap_or_default())
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(value_to_text))
}

// Anything but an object carries no usable characteristics.
fn lenient_characteristics<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Characteristics>, D::Error> {
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Object(map)) => serde_json::from_value(Value::Object(map))
            .map(Some)
            .map_err(D::Error::custom),
        _ => Ok(None),
    }
}

// A lone scalar counts as a one-element list.
fn lenient_list<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Vec<String>>, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::Array(items)) => Some(items.into_iter().filter_map(value_to_text).collect()),
        Some(other) => value_to_text(other).map(|text| vec![text]),
    })
}

fn lenient_predators<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Predators>, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::Array(items)) => Some(Predators::List(
            items.into_iter().filter_map(value_to_text).collect(),
        )),
        Some(other) => value_to_text(other).map(Predators::Text),
    })
}

impl AnimalRecord {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn diet(&self) -> Option<&str> {
        self.characteristic(|c| c.diet.as_deref())
    }

    /// The full list; rendering only ever uses the first entry.
    pub fn locations(&self) -> Option<&[String]> {
        self.locations.as_deref()
    }

    pub fn animal_type(&self) -> Option<&str> {
        self.characteristic(|c| c.animal_type.as_deref())
    }

    pub fn skin_type(&self) -> Option<&str> {
        self.characteristic(|c| c.skin_type.as_deref())
    }

    pub fn lifespan(&self) -> Option<&str> {
        self.characteristic(|c| c.lifespan.as_deref())
    }

    pub fn color(&self) -> Option<&str> {
        self.characteristic(|c| c.color.as_deref())
    }

    pub fn predators(&self) -> Option<&Predators> {
        self.characteristic(|c| c.predators.as_ref())
    }

    fn characteristic<'a, T: ?Sized>(
        &'a self,
        field: impl FnOnce(&'a Characteristics) -> Option<&'a T>,
    ) -> Option<&'a T> {
        self.characteristics.as_ref().and_then(field)
    }
}
