use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::convert::TryFrom;
use std::fmt;

/// Dynamic value passed to and returned from named calculators
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum FactValue {
    /// String value
    String(String),
    /// Integer value
    Integer(i64),
    /// Floating point value
    Float(f64),
    /// Boolean value
    Boolean(bool),
    /// Array of `FactValues`
    Array(Vec<FactValue>),
    /// Object/map of string keys to `FactValues`
    Object(HashMap<String, FactValue>),
    /// Null value
    Null,
}

// -------------------------------------------------------------------------------------------------
// Conversions between `FactValue` and `serde_json::Value`, used by the API layer to turn request
// bodies into calculator arguments and calculator results back into response bodies.
// -------------------------------------------------------------------------------------------------

impl From<FactValue> for serde_json::Value {
    fn from(value: FactValue) -> Self {
        match value {
            FactValue::String(s) => Self::String(s),
            FactValue::Integer(i) => Self::Number(serde_json::Number::from(i)),
            FactValue::Float(f) => {
                serde_json::Number::from_f64(f).map_or(Self::Null, Self::Number)
            }
            FactValue::Boolean(b) => Self::Bool(b),
            FactValue::Array(arr) => {
                let vec: Vec<Self> = arr.into_iter().map(std::convert::Into::into).collect();
                Self::Array(vec)
            }
            FactValue::Object(map) => {
                let json_map = map
                    .into_iter()
                    .map(|(k, v)| (k, v.into()))
                    .collect::<serde_json::Map<String, Self>>();
                Self::Object(json_map)
            }
            FactValue::Null => Self::Null,
        }
    }
}

impl TryFrom<&serde_json::Value> for FactValue {
    type Error = anyhow::Error;

    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        Ok(match value {
            serde_json::Value::String(s) => Self::String(s.clone()),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Integer(i)
                } else if let Some(f) = n.as_f64() {
                    Self::Float(f)
                } else {
                    return Err(anyhow!("Unsupported number value: {}", n));
                }
            }
            serde_json::Value::Bool(b) => Self::Boolean(*b),
            serde_json::Value::Array(arr) => {
                let inner = arr.iter().map(Self::try_from).collect::<Result<Vec<_>, _>>()?;
                Self::Array(inner)
            }
            serde_json::Value::Object(map) => {
                let mut inner = HashMap::new();
                for (k, v) in map {
                    inner.insert(k.clone(), Self::try_from(v)?);
                }
                Self::Object(inner)
            }
            serde_json::Value::Null => Self::Null,
        })
    }
}

impl From<f64> for FactValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<i64> for FactValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for FactValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<&str> for FactValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl fmt::Display for FactValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "{s}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(fl) => write!(f, "{fl}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Array(arr) => {
                write!(f, "[")?;
                for (i, item) in arr.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Self::Object(obj) => {
                write!(f, "{{")?;
                let mut keys: Vec<_> = obj.keys().collect();
                keys.sort();
                for (i, key) in keys.into_iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {}", obj[key])?;
                }
                write!(f, "}}")
            }
            Self::Null => write!(f, "null"),
        }
    }
}

impl FactValue {
    /// Get the type name as a string
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Boolean(_) => "boolean",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
            Self::Null => "null",
        }
    }

    /// Whether the value should be treated as "not supplied": `Null` or a blank string.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Null => true,
            Self::String(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Convenience accessor returning an `f64` representation if this value is numeric.
    /// Returns `None` when the variant is not `Integer` or `Float`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Lenient numeric read used for form input: numbers as-is, strings parsed after trimming.
    ///
    /// A string that does not parse yields `Some(f64::NAN)` so that callers reject it the same
    /// way they reject any other non-finite input.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::String(s) => Some(s.trim().parse::<f64>().unwrap_or(f64::NAN)),
            other => other.as_f64(),
        }
    }

    /// Boolean read accepting `Boolean` and the strings `"true"`/`"false"`.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            Self::String(s) => match s.trim().to_ascii_lowercase().as_str() {
                "true" | "yes" | "on" => Some(true),
                "false" | "no" | "off" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }

    /// Try to convert to a string
    #[must_use]
    pub fn as_string(&self) -> String {
        match self {
            Self::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}
