use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert_eq!(
        DisplayError::invalid("$.left", "Invalid operator: %").to_string(),
        "invalid expression at $.left: Invalid operator: %"
    );
    assert_eq!(
        DisplayError::depth_exceeded("$.right.inputs[0]", 4).to_string(),
        "expression at $.right.inputs[0] exceeds the maximum depth of 4"
    );
    assert!(
        DisplayError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn invalid_expression_predicate() {
    assert!(DisplayError::invalid("$", "x").is_invalid_expression());
    assert!(!DisplayError::depth_exceeded("$", 1).is_invalid_expression());
    assert!(!DisplayError::serde("x").is_invalid_expression());
}
