//! Typed access to Sipfile variables.
//!
//! The Sipfile is TOML. Each top-level key is a variable that is either unset,
//! a single value, or an array of values; loaders state which shape they need
//! through [`ConfigVar::expect_array`] / [`ConfigVar::expect_scalar`].

use toml::{Table, Value};

use crate::error::{Shape, SipfileError};

/// A Sipfile variable as declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigVar {
    Unset,
    Scalar(String),
    Array(Vec<String>),
}

impl ConfigVar {
    /// Entries of an array variable; an unset variable has none.
    pub fn expect_array(self, name: &str) -> Result<Vec<String>, SipfileError> {
        match self {
            ConfigVar::Unset => Ok(Vec::new()),
            ConfigVar::Array(items) => Ok(items),
            ConfigVar::Scalar(_) => Err(SipfileError::Schema {
                var: name.to_string(),
                expected: Shape::Array,
            }),
        }
    }

    /// Value of a single-value variable, `None` if unset.
    pub fn expect_scalar(self, name: &str) -> Result<Option<String>, SipfileError> {
        match self {
            ConfigVar::Unset => Ok(None),
            ConfigVar::Scalar(value) => Ok(Some(value)),
            ConfigVar::Array(_) => Err(SipfileError::Schema {
                var: name.to_string(),
                expected: Shape::Scalar,
            }),
        }
    }
}

/// Parsed Sipfile contents.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SipfileConfig {
    table: Table,
}

impl SipfileConfig {
    pub fn parse(contents: &str) -> Result<Self, SipfileError> {
        let table: Table = toml::from_str(contents)?;
        Ok(Self { table })
    }

    /// Look up variable `name`.
    ///
    /// Numbers and booleans are accepted wherever text is expected; tables,
    /// and arrays nested inside arrays, are rejected.
    pub fn var(&self, name: &str) -> Result<ConfigVar, SipfileError> {
        let invalid = |detail: &str| SipfileError::InvalidValue {
            var: name.to_string(),
            detail: detail.to_string(),
        };
        match self.table.get(name) {
            None => Ok(ConfigVar::Unset),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| {
                    scalar_text(item)
                        .ok_or_else(|| invalid("cannot contain tables or nested arrays"))
                })
                .collect::<Result<Vec<_>, _>>()
                .map(ConfigVar::Array),
            Some(value) => scalar_text(value)
                .map(ConfigVar::Scalar)
                .ok_or_else(|| invalid("cannot be a table")),
        }
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Integer(number) => Some(number.to_string()),
        Value::Float(number) => Some(number.to_string()),
        Value::Boolean(flag) => Some(flag.to_string()),
        Value::Datetime(datetime) => Some(datetime.to_string()),
        Value::Array(_) | Value::Table(_) => None,
    }
}
