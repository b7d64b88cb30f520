/// Convert PascalCase or camelCase to snake_case.
///
/// # Examples
/// ```
/// use astgen_core::utils::to_snake_case;
/// assert_eq!(to_snake_case("PrimitiveString"), "primitive_string");
/// assert_eq!(to_snake_case("Binary"), "binary");
/// ```
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    for (i, c) in s.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 && !result.ends_with('_') {
                result.push('_');
            }
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}

/// C++ keywords that can come out of lowercasing a type name.
const CPP_KEYWORDS: &[&str] = &[
    "break", "case", "catch", "class", "const", "continue", "default", "delete", "do", "else",
    "enum", "for", "goto", "if", "new", "operator", "private", "protected", "public", "return",
    "sizeof", "static", "struct", "switch", "this", "throw", "try", "union", "using", "virtual",
    "while",
];

/// Parameter name a visitor method uses for a node of type `type_name`.
///
/// Keywords get a trailing underscore.
///
/// # Examples
/// ```
/// use astgen_core::utils::param_name;
/// assert_eq!(param_name("Grouping"), "grouping");
/// assert_eq!(param_name("Return"), "return_");
/// ```
pub fn param_name(type_name: &str) -> String {
    let mut name = to_snake_case(type_name);
    if CPP_KEYWORDS.contains(&name.as_str()) {
        name.push('_');
    }
    name
}
