//! The payload type cells hold, plus the conversions in and out of it

use super::*;
use serde::ser::{Serialize, SerializeSeq, Serializer};

/// A value held by a cell. Carries no kind information of its own; the owning cell's kind decides
/// how a value is rendered to and parsed from text.
#[derive(Debug, PartialEq, Clone)]
pub enum Value {
    Text(String),
    Integer(i64),
    Scalar(f64),
    Boolean(bool),
    Color(ColorRGB),
    List(Vec<Value>),
    Null,
}

/// Result of pulling a typed value out of a cell. Easiest way to use is to call .into() in a
/// context in which the type is implied.
pub type CastResult<T> = Result<T, CellError>;

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Builds a value from a JSON tree. Numbers become integers when they can; maps have no value
    /// shape and are rejected.
    pub fn from_json(json: serde_json::Value) -> CellResult<Value> {
        match json {
            serde_json::Value::Null => Ok(Value::Null),
            serde_json::Value::Bool(b) => Ok(Value::Boolean(b)),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Value::Integer(i))
                } else if let Some(f) = n.as_f64() {
                    Ok(Value::Scalar(f))
                } else {
                    Err(CellError::BadText(format!("{} is an invalid number", n)))
                }
            }
            serde_json::Value::String(text) => Ok(Value::Text(text)),
            serde_json::Value::Array(items) => Ok(Value::List(
                items
                    .into_iter()
                    .map(Value::from_json)
                    .collect::<CellResult<Vec<Value>>>()?,
            )),
            serde_json::Value::Object(_) => {
                Err(CellError::BadText("maps are not supported".to_string()))
            }
        }
    }

    /// Natural text form by value shape, used when a cell holds a value its kind does not expect
    pub(crate) fn shape_text(&self) -> String {
        match self {
            Value::Text(text) => text.clone(),
            Value::Integer(value) => value.to_string(),
            Value::Scalar(value) => value.to_string(),
            Value::Boolean(value) => value.to_string(),
            Value::Color(color) => color.to_hex(),
            list @ Value::List(_) => serde_json::to_string(list).unwrap_or_default(),
            Value::Null => String::new(),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Text(text) => serializer.serialize_str(text),
            Value::Integer(value) => serializer.serialize_i64(*value),
            Value::Scalar(value) => serializer.serialize_f64(*value),
            Value::Boolean(value) => serializer.serialize_bool(*value),
            Value::Color(color) => serializer.serialize_str(&color.to_hex()),
            Value::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Null => serializer.serialize_none(),
        }
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Scalar(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Scalar(f64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(i64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Integer(i64::from(value))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<ColorRGB> for Value {
    fn from(color: ColorRGB) -> Self {
        Value::Color(color)
    }
}

impl<T> From<Vec<T>> for Value
where
    T: Into<Value>,
{
    fn from(vec: Vec<T>) -> Self {
        Value::List(vec.into_iter().map(Into::into).collect())
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(value) => value.into(),
            None => Value::Null,
        }
    }
}

impl From<Value> for CastResult<Value> {
    fn from(value: Value) -> Self {
        Ok(value)
    }
}

impl From<Value> for CastResult<i64> {
    fn from(value: Value) -> Self {
        match value {
            Value::Integer(value) => Ok(value),
            Value::Scalar(value) => Err(CellError::WrongType(format!(
                "{} is a scalar, not an integer",
                value
            ))),
            _ => Err(CellError::WrongType(format!("{:?} is not a number", value))),
        }
    }
}

impl From<Value> for CastResult<f64> {
    fn from(value: Value) -> Self {
        match value {
            Value::Scalar(value) => Ok(value),
            Value::Integer(value) => Ok(value as f64),
            _ => Err(CellError::WrongType(format!("{:?} is not a number", value))),
        }
    }
}

impl From<Value> for CastResult<String> {
    fn from(value: Value) -> Self {
        match value {
            Value::Text(value) => Ok(value),
            _ => Err(CellError::WrongType(format!("{:?} is not text", value))),
        }
    }
}

impl From<Value> for CastResult<bool> {
    fn from(value: Value) -> Self {
        match value {
            Value::Boolean(value) => Ok(value),
            _ => Err(CellError::WrongType(format!("{:?} is not a boolean", value))),
        }
    }
}

impl From<Value> for CastResult<ColorRGB> {
    fn from(value: Value) -> Self {
        match value {
            Value::Color(color) => Ok(color),
            Value::Text(text) => ColorRGB::from_hex(&text),
            _ => Err(CellError::WrongType(format!("{:?} is not a color", value))),
        }
    }
}

impl<T> From<Value> for CastResult<Vec<T>>
where
    Value: Into<CastResult<T>>,
{
    fn from(value: Value) -> Self {
        match value {
            Value::List(vec) => vec.into_iter().map(Into::into).collect(),
            _ => Err(CellError::WrongType(format!("{:?} is not a list", value))),
        }
    }
}

impl From<Value> for CastResult<()> {
    fn from(value: Value) -> Self {
        if value.is_null() {
            Ok(())
        } else {
            Err(CellError::WrongType(format!("{:?} is not null", value)))
        }
    }
}

impl<T> From<Value> for CastResult<Option<T>>
where
    Value: Into<CastResult<T>>,
{
    fn from(value: Value) -> Self {
        if value.is_null() {
            Ok(None)
        } else {
            Ok(Some(value.into()?))
        }
    }
}
