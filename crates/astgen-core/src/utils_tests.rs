use crate::utils::{param_name, to_snake_case};

#[test]
fn snake_case_from_pascal() {
    assert_eq!(to_snake_case("Binary"), "binary");
    assert_eq!(to_snake_case("PrimitiveNumber"), "primitive_number");
}

#[test]
fn snake_case_keeps_lowercase() {
    assert_eq!(to_snake_case("var"), "var");
    assert_eq!(to_snake_case("fooBar"), "foo_bar");
}

#[test]
fn param_name_escapes_keywords() {
    assert_eq!(param_name("If"), "if_");
    assert_eq!(param_name("While"), "while_");
    assert_eq!(param_name("Return"), "return_");
    assert_eq!(param_name("Print"), "print");
}
