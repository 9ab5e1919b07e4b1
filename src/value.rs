use std::{
    fmt::{self, Display},
    mem::discriminant,
};

/// Runtime-typed scalar for data whose type is only known when it arrives
/// (values read from delimited warehouse files, for instance).
///
/// This is the one place where the single-element-type rule of
/// [`Factory`](crate::Factory) is a runtime concern rather than a compile-time
/// one; `Factory::homogeneous` checks it by comparing variant kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Boolean(bool),
    Int(i64),
    Float(f64),
    Varchar(String),
}

impl Value {
    /// Name of the variant, as reported by homogeneity errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Boolean(..) => "boolean",
            Value::Int(..) => "int",
            Value::Float(..) => "float",
            Value::Varchar(..) => "varchar",
        }
    }

    pub fn same_kind(&self, other: &Self) -> bool {
        discriminant(self) == discriminant(other)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Boolean(v) => write!(f, "{}", v),
            Value::Int(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Varchar(v) => f.write_str(v),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}
impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}
impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}
impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Varchar(value)
    }
}
impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Varchar(value.into())
    }
}

#[cfg(test)]
mod tests {
    use super::Value;

    #[test]
    fn kind_names() {
        assert_eq!(Value::from(true).kind(), "boolean");
        assert_eq!(Value::from(7_i64).kind(), "int");
        assert_eq!(Value::from(0.5).kind(), "float");
        assert_eq!(Value::from("x").kind(), "varchar");
    }

    #[test]
    fn same_kind_ignores_payload() {
        assert!(Value::Int(1).same_kind(&Value::Int(2)));
        assert!(!Value::Int(1).same_kind(&Value::Float(1.0)));
    }

    #[test]
    fn display_is_canonical_text() {
        assert_eq!(Value::from(true).to_string(), "true");
        assert_eq!(Value::from(42_i64).to_string(), "42");
        assert_eq!(Value::from("id").to_string(), "id");
    }
}
