//! Input schema served by the backend and the feature values edited against it.

use std::fmt;

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

/// Numeric range and statistics for one input field.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct FieldRange {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// Standard deviation, when the backend reports it.
    #[serde(default)]
    pub std: Option<f64>,
}

impl FieldRange {
    /// Clamp `value` into `[min, max]`.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Starting value for a fresh form: the mean at 4-digit precision, kept in range.
    pub fn seed_value(&self) -> f64 {
        self.clamp(round_to_display_precision(self.mean))
    }

    fn validate(&self) -> Result<(), String> {
        if !(self.min.is_finite() && self.max.is_finite() && self.mean.is_finite()) {
            return Err("min, max and mean must be finite".to_string());
        }
        if self.min > self.max {
            return Err(format!("min {} exceeds max {}", self.min, self.max));
        }
        Ok(())
    }
}

/// One named field in server order.
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaField {
    pub name: String,
    pub range: FieldRange,
}

/// Ordered description of every field the model expects.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Schema {
    fields: Vec<SchemaField>,
}

impl Schema {
    /// Build a schema from `(name, range)` pairs, rejecting invalid ranges and duplicates.
    pub fn from_fields<I, S>(fields: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = (S, FieldRange)>,
        S: Into<String>,
    {
        let mut schema = Self::default();
        for (name, range) in fields {
            schema.push(name.into(), range)?;
        }
        Ok(schema)
    }

    fn push(&mut self, name: String, range: FieldRange) -> Result<(), String> {
        range
            .validate()
            .map_err(|reason| format!("field '{name}': {reason}"))?;
        if self.get(&name).is_some() {
            return Err(format!("duplicate field '{name}'"));
        }
        self.fields.push(SchemaField { name, range });
        Ok(())
    }

    pub fn fields(&self) -> &[SchemaField] {
        &self.fields
    }

    pub fn get(&self, name: &str) -> Option<&FieldRange> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| &field.range)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Feature values seeded from each field's mean.
    pub fn initial_features(&self) -> FeatureVector {
        let mut features = FeatureVector::default();
        for field in &self.fields {
            features.insert(field.name.clone(), field.range.seed_value());
        }
        features
    }
}

impl<'de> Deserialize<'de> for Schema {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SchemaVisitor;

        impl<'de> Visitor<'de> for SchemaVisitor {
            type Value = Schema;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of field name to {min, max, mean}")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Schema, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut schema = Schema::default();
                while let Some((name, range)) = map.next_entry::<String, FieldRange>()? {
                    schema.push(name, range).map_err(de::Error::custom)?;
                }
                Ok(schema)
            }
        }

        deserializer.deserialize_map(SchemaVisitor)
    }
}

/// Current value of every field, sent as one event to the predict endpoint.
///
/// Entries keep insertion order, which is schema order once seeded.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeatureVector {
    values: Vec<(String, f64)>,
}

impl FeatureVector {
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| *value)
    }

    /// Store a value as-is, replacing in place when the name exists.
    /// Range checks belong to the caller holding the schema.
    pub fn insert(&mut self, name: impl Into<String>, value: f64) {
        let name = name.into();
        match self.values.iter_mut().find(|(key, _)| *key == name) {
            Some((_, slot)) => *slot = value,
            None => self.values.push((name, value)),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Serialize for FeatureVector {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (name, value) in &self.values {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Round to the 4 decimal digits shown in the numeric inputs.
pub fn round_to_display_precision(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
