//! Java type rendering.
//!
//! Converts a [`TypeClassification`] into the type string that appears in
//! field declarations, constructor parameters, and accessor signatures.

use crate::schema::{TypeClassification, TypeKind, simple_name};

/// Render the declaration type for a classified field: two generic arguments
/// for maps, one for list/set, bare for arrays, scalars, and opaque types
/// (an array's display type already carries its `[]`).
pub fn render_type(classification: &TypeClassification) -> String {
    match classification.kind {
        TypeKind::Map => format!(
            "{}<{}, {}>",
            classification.display_type,
            classification.key_type.as_deref().unwrap_or("Object"),
            classification.value_type.as_deref().unwrap_or("Object"),
        ),
        TypeKind::List | TypeKind::Set => format!(
            "{}<{}>",
            classification.display_type,
            classification.element_type.as_deref().unwrap_or("Object"),
        ),
        _ => classification.display_type.clone(),
    }
}

/// The simple class name used inside a `@JsonSerialize(using = ...)`
/// directive. A blank reference falls back to the baseline serializer.
pub fn serializer_simple_name(reference: &str) -> &str {
    let trimmed = reference.trim();
    if trimmed.is_empty() {
        "StdSerializer"
    } else {
        simple_name(trimmed)
    }
}

/// Whether a serializer reference looks like a qualified class token:
/// dot-separated identifiers with an upper-cased final segment. Only
/// consulted in strict mode; the default treats references as free-form.
pub fn is_class_token(reference: &str) -> bool {
    let mut last = "";
    for segment in reference.split('.') {
        let mut chars = segment.chars();
        match chars.next() {
            Some(first) if first == '_' || first.is_ascii_alphabetic() => {}
            _ => return false,
        }
        if !chars.all(|c| c == '_' || c.is_ascii_alphanumeric()) {
            return false;
        }
        last = segment;
    }
    last.chars().next().is_some_and(|c| c.is_ascii_uppercase())
}

/// Accessor-name fragment: the field name with its first letter upper-cased,
/// rest untouched (`userProfile` → `UserProfile`, `id` → `Id`).
pub fn capitalize_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{TypeDescriptor, classify};

    #[test]
    fn map_renders_two_arguments() {
        let c = classify(&TypeDescriptor::map(
            TypeDescriptor::boxed("java.lang.String"),
            TypeDescriptor::opaque("com.example.UserProfile"),
        ));
        assert_eq!(render_type(&c), "Map<String, UserProfile>");
    }

    #[test]
    fn list_renders_one_argument() {
        let c = classify(&TypeDescriptor::list(TypeDescriptor::boxed(
            "java.lang.String",
        )));
        assert_eq!(render_type(&c), "List<String>");
    }

    #[test]
    fn array_renders_without_generics() {
        let c = classify(&TypeDescriptor::array(TypeDescriptor::boxed(
            "java.lang.String",
        )));
        assert_eq!(render_type(&c), "String[]");
    }

    #[test]
    fn scalar_renders_bare() {
        let c = classify(&TypeDescriptor::primitive("long"));
        assert_eq!(render_type(&c), "long");
    }

    #[test]
    fn serializer_names() {
        assert_eq!(
            serializer_simple_name("com.example.PasswordSerializer"),
            "PasswordSerializer"
        );
        assert_eq!(serializer_simple_name("Plain"), "Plain");
        assert_eq!(serializer_simple_name("   "), "StdSerializer");
    }

    #[test]
    fn class_tokens() {
        assert!(is_class_token("com.example.PasswordSerializer"));
        assert!(is_class_token("Standalone"));
        assert!(!is_class_token("com.example.lowercase"));
        assert!(!is_class_token("com..Broken"));
        assert!(!is_class_token("1com.Bad"));
        assert!(!is_class_token(""));
    }

    #[test]
    fn capitalization_touches_only_the_first_letter() {
        assert_eq!(capitalize_first("userProfile"), "UserProfile");
        assert_eq!(capitalize_first("created_at"), "Created_at");
        assert_eq!(capitalize_first(""), "");
    }
}
