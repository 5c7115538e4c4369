use super::*;

/// The property kinds a cell can take. The kind owns the text codec: render() produces the
/// canonical string form and parse() accepts it back, so parse(render(v)) yields a value
/// semantically equal to v for any value the kind can hold.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CellKind {
    Text,
    Integer,
    Scalar,
    Boolean,
    Color,
    List,
}

impl CellKind {
    pub fn render(&self, value: &Value) -> String {
        match (self, value) {
            (CellKind::Text, Value::Text(text)) => text.clone(),
            (CellKind::Integer, Value::Integer(value)) => value.to_string(),
            (CellKind::Scalar, Value::Scalar(value)) => value.to_string(),
            // integers are accepted where scalars are expected
            (CellKind::Scalar, Value::Integer(value)) => value.to_string(),
            (CellKind::Boolean, Value::Boolean(value)) => value.to_string(),
            (CellKind::Color, Value::Color(color)) => color.to_hex(),
            (CellKind::List, list @ Value::List(_)) => serde_json::to_string(list)
                .unwrap_or_else(|e| {
                    error!("failed to serialize list value: {}", e);
                    String::new()
                }),
            (_, Value::Null) => String::new(),
            (kind, value) => {
                warn!("{:?} cell holds {:?}; rendering by value shape", kind, value);
                value.shape_text()
            }
        }
    }

    pub fn parse(&self, text: &str) -> CellResult<Value> {
        if text.is_empty() && *self != CellKind::Text {
            return Ok(Value::Null);
        }
        match self {
            CellKind::Text => Ok(Value::Text(text.to_string())),
            CellKind::Integer => text
                .trim()
                .parse::<i64>()
                .map(Value::Integer)
                .map_err(|e| CellError::BadText(format!("{:?} is not an integer: {}", text, e))),
            CellKind::Scalar => text
                .trim()
                .parse::<f64>()
                .map(Value::Scalar)
                .map_err(|e| CellError::BadText(format!("{:?} is not a number: {}", text, e))),
            CellKind::Boolean => match text.trim() {
                "true" => Ok(Value::Boolean(true)),
                "false" => Ok(Value::Boolean(false)),
                other => Err(CellError::BadText(format!("{:?} is not a boolean", other))),
            },
            CellKind::Color => ColorRGB::from_hex(text.trim()).map(Value::Color),
            CellKind::List => {
                let json: serde_json::Value = serde_json::from_str(text)
                    .map_err(|e| CellError::BadText(format!("{}", e)))?;
                match Value::from_json(json)? {
                    list @ Value::List(_) => Ok(list),
                    value => Err(CellError::BadText(format!("{:?} is not a list", value))),
                }
            }
        }
    }
}
