//! Configuration types for C++ emission.

/// Configuration for C++ emission.
#[derive(Clone, Debug)]
pub struct Config {
    /// Whether to emit the "generated code" banner
    pub(crate) banner: bool,
    /// Name of the value struct expression visitors return
    pub(crate) value_type: String,
    /// Name of the expression kind enumeration
    pub(crate) kind_enum: String,
    /// Header declaring `Token`
    pub(crate) token_header: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            banner: true,
            value_type: "ExprValue".to_string(),
            kind_enum: "ExprType".to_string(),
            token_header: "token.h".to_string(),
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to emit the generated-code banner.
    pub fn banner(mut self, value: bool) -> Self {
        self.banner = value;
        self
    }

    /// Set the value struct name.
    pub fn value_type(mut self, name: impl Into<String>) -> Self {
        self.value_type = name.into();
        self
    }

    /// Set the kind enumeration name.
    pub fn kind_enum(mut self, name: impl Into<String>) -> Self {
        self.kind_enum = name.into();
        self
    }

    /// Set the header included for `Token` fields.
    pub fn token_header(mut self, name: impl Into<String>) -> Self {
        self.token_header = name.into();
        self
    }
}
