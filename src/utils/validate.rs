//! Request shape validation.
//!
//! A [`Schema`] turns the raw JSON body into a typed value, collecting one
//! [`Issue`] per violated field constraint instead of stopping at the first.

use std::sync::LazyLock;

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::core::error::Error;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+'-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub(crate) struct Issue {
    pub(crate) code: String,
    pub(crate) path: Vec<String>,
    pub(crate) message: String,
}

impl Issue {
    pub(crate) fn new(code: &str, path: &[&str], message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            path: path.iter().map(|s| s.to_string()).collect(),
            message: message.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Validation failed with {} issue(s)", issues.len())]
pub(crate) struct ValidationError {
    pub(crate) issues: Vec<Issue>,
}

impl ValidationError {
    pub(crate) fn new(issues: Vec<Issue>) -> Self {
        Self { issues }
    }

    pub(crate) fn single(issue: Issue) -> Self {
        Self::new(vec![issue])
    }
}

pub(crate) trait Schema: Sized {
    fn parse(raw: &Value) -> Result<Self, ValidationError>;
}

/// Extracts a JSON body and runs it through `T`'s schema.
#[derive(Debug)]
pub(crate) struct Validated<T>(pub(crate) T);

impl<S, T> FromRequest<S> for Validated<T>
where
    T: Schema,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            ValidationError::single(Issue::new("invalid_body", &["body"], e.body_text()))
        })?;

        let raw = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice::<Value>(&bytes).map_err(|e| {
                ValidationError::single(Issue::new(
                    "invalid_json",
                    &["body"],
                    format!("Malformed JSON: {e}"),
                ))
            })?
        };

        Ok(Validated(T::parse(&raw)?))
    }
}

/// Field-by-field reader over a JSON object that accumulates issues.
pub(crate) struct Fields<'a> {
    object: &'a Map<String, Value>,
    root: &'static str,
    issues: Vec<Issue>,
}

impl<'a> Fields<'a> {
    pub(crate) fn of(raw: &'a Value, root: &'static str) -> Result<Self, ValidationError> {
        match raw {
            Value::Object(object) => Ok(Self {
                object,
                root,
                issues: Vec::new(),
            }),
            other => Err(ValidationError::single(Issue::new(
                "invalid_type",
                &[root],
                format!("Expected object, received {}", type_name(other)),
            ))),
        }
    }

    fn push(&mut self, code: &str, field: &str, message: impl Into<String>) {
        let issue = Issue::new(code, &[self.root, field], message);
        self.issues.push(issue);
    }

    fn required(&mut self, field: &str) -> Option<&'a Value> {
        match self.object.get(field) {
            None | Some(Value::Null) => {
                self.push("invalid_type", field, "Required");
                None
            }
            Some(value) => Some(value),
        }
    }

    pub(crate) fn string(&mut self, field: &str) -> Option<&'a str> {
        match self.required(field)? {
            Value::String(s) => Some(s.as_str()),
            other => {
                let message = format!("Expected string, received {}", type_name(other));
                self.push("invalid_type", field, message);
                None
            }
        }
    }

    pub(crate) fn non_empty(&mut self, field: &str) -> Option<&'a str> {
        let value = self.string(field)?;

        if value.is_empty() {
            self.push(
                "too_small",
                field,
                "String must contain at least 1 character(s)",
            );
            return None;
        }

        Some(value)
    }

    pub(crate) fn email(&mut self, field: &str) -> Option<&'a str> {
        let value = self.string(field)?;

        if !EMAIL_PATTERN.is_match(value) {
            self.push("invalid_string", field, "Invalid email");
            return None;
        }

        Some(value)
    }

    pub(crate) fn integer(&mut self, field: &str) -> Option<i32> {
        match self.required(field)? {
            Value::Number(n) if n.is_f64() => {
                self.push("invalid_type", field, "Expected integer, received float");
                None
            }
            Value::Number(n) => {
                let wide = n.as_i64();

                match wide.and_then(|v| i32::try_from(v).ok()) {
                    Some(v) => Some(v),
                    None if matches!(wide, Some(v) if v < 0) => {
                        let message =
                            format!("Number must be greater than or equal to {}", i32::MIN);
                        self.push("too_small", field, message);
                        None
                    }
                    None => {
                        let message = format!("Number must be less than or equal to {}", i32::MAX);
                        self.push("too_big", field, message);
                        None
                    }
                }
            }
            other => {
                let message = format!("Expected number, received {}", type_name(other));
                self.push("invalid_type", field, message);
                None
            }
        }
    }

    pub(crate) fn one_of(&mut self, field: &str, allowed: &[&str]) -> Option<&'a str> {
        let value = self.string(field)?;

        if !allowed.contains(&value) {
            let expected = allowed
                .iter()
                .map(|v| format!("'{v}'"))
                .collect::<Vec<_>>()
                .join(" | ");

            self.push(
                "invalid_enum_value",
                field,
                format!("Invalid enum value. Expected {expected}, received '{value}'"),
            );
            return None;
        }

        Some(value)
    }

    /// Yields `value` only when no field reported an issue.
    pub(crate) fn finish<T>(self, value: Option<T>) -> Result<T, ValidationError> {
        match (self.issues.is_empty(), value) {
            (true, Some(value)) => Ok(value),
            _ => Err(ValidationError::new(self.issues)),
        }
    }
}

/// Validates a route `:id` segment.
pub(crate) fn parse_id(raw: &str) -> Result<i32, ValidationError> {
    match raw.parse::<i32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ValidationError::single(Issue::new(
            "invalid_type",
            &["params", "id"],
            format!("Expected positive integer id, received '{raw}'"),
        ))),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
