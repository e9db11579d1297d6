//! Runtime values produced by evaluation.

/// A runtime value.  Number literals produce `Int`, string and emoji literals
/// produce `Str`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Int(i64),
    Str(String),
}

impl Value {
    /// Kind name used in type error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Int(_) => "number",
            Value::Str(_) => "string",
        }
    }

    /// String form of the value, as written by `print` and stored by
    /// `ejkey`.
    pub fn into_text(self) -> String {
        match self {
            Value::Int(n) => itoa::Buffer::new().format(n).to_owned(),
            Value::Str(s) => s,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Int(n) => f.write_str(itoa::Buffer::new().format(*n)),

            Value::Str(s) => write!(f, "{}", s),
        }
    }
}
