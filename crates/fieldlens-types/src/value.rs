use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A captured target-program value.
///
/// Values are read-only snapshots of target memory: the toolkit never
/// constructs or mutates target state, it only labels and displays what was
/// captured. Field order inside a struct is the captured declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Value {
    /// Integer, flag word, or offset
    Int { value: i64 },

    /// Raw character-array data as captured from target memory
    /// (NUL-terminated C string bytes, not yet decoded)
    Bytes { data: Vec<u8> },

    /// Already-decoded text
    Text { value: String },

    /// Target pointer, optionally carrying its captured pointee.
    /// A null or uncaptured pointer has `pointee: None`.
    Pointer {
        address: u64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pointee: Option<Box<Value>>,
    },

    /// Structured value
    Struct { type_name: String, fields: Vec<Field> },
}

/// One named field of a captured struct
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub value: Value,
}

impl Value {
    pub fn int(value: i64) -> Self {
        Value::Int { value }
    }

    pub fn bytes(data: impl Into<Vec<u8>>) -> Self {
        Value::Bytes { data: data.into() }
    }

    pub fn text(value: impl Into<String>) -> Self {
        Value::Text {
            value: value.into(),
        }
    }

    pub fn pointer(address: u64, pointee: Option<Value>) -> Self {
        Value::Pointer {
            address,
            pointee: pointee.map(Box::new),
        }
    }

    pub fn record(type_name: impl Into<String>, fields: Vec<(&str, Value)>) -> Self {
        Value::Struct {
            type_name: type_name.into(),
            fields: fields
                .into_iter()
                .map(|(name, value)| Field {
                    name: name.to_string(),
                    value,
                })
                .collect(),
        }
    }

    /// Follow pointers to the underlying value.
    ///
    /// Errors with `NullDeref` when the pointer carries no pointee.
    pub fn resolve(&self) -> Result<&Value> {
        match self {
            Value::Pointer {
                address,
                pointee: None,
            } => Err(Error::NullDeref { address: *address }),
            Value::Pointer {
                pointee: Some(inner),
                ..
            } => inner.resolve(),
            other => Ok(other),
        }
    }

    /// Named-field access, dereferencing through pointers like `->`.
    pub fn field(&self, name: &str) -> Result<&Value> {
        match self.resolve()? {
            Value::Struct { type_name, fields } => fields
                .iter()
                .find(|f| f.name == name)
                .map(|f| &f.value)
                .ok_or_else(|| Error::MissingField {
                    type_name: type_name.clone(),
                    field: name.to_string(),
                }),
            _ => Err(Error::NotAStruct {
                field: name.to_string(),
            }),
        }
    }

    pub fn as_int(&self) -> Result<i64> {
        match self {
            Value::Int { value } => Ok(*value),
            _ => Err(Error::NotAnInt),
        }
    }

    /// Convert to plain text.
    ///
    /// `Bytes` is decoded as UTF-8 up to the first NUL; pointers are
    /// dereferenced first (a `char *` field reads like its string).
    pub fn as_text(&self) -> Result<String> {
        match self.resolve()? {
            Value::Text { value } => Ok(value.clone()),
            Value::Bytes { data } => {
                let end = data.iter().position(|&b| b == 0).unwrap_or(data.len());
                std::str::from_utf8(&data[..end])
                    .map(str::to_string)
                    .map_err(|e| Error::BadEncoding(e.to_string()))
            }
            _ => Err(Error::NotText),
        }
    }

    /// Struct type name used for printer dispatch.
    ///
    /// Pointers report their pointee's type name; a null pointer has none.
    pub fn type_name(&self) -> Option<&str> {
        match self {
            Value::Struct { type_name, .. } => Some(type_name),
            Value::Pointer {
                pointee: Some(inner),
                ..
            } => inner.type_name(),
            _ => None,
        }
    }
}
