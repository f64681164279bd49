//! Declarative entity descriptions and field-type classification.
//!
//! # Design Philosophy
//!
//! This module is the boundary between the host and the generator. The host
//! (whatever discovers entities — a parser, reflection, manual declaration)
//! resolves each field's real type into a [`TypeDescriptor`] and hands the
//! core a fully-materialized [`EntityDescription`]. The core never inspects a
//! live type system:
//!
//! - **No compiler handles** — a `TypeDescriptor` is plain data
//! - **Shape over identity** — classification only answers "how do I spell
//!   this declaration and what do I import", never "what does this type do"
//! - **Total classification** — unrecognized shapes degrade to opaque rather
//!   than erroring, because an unknown external type is still a legitimate
//!   field type to carry through unchanged

use std::collections::BTreeMap;

use crate::diagnostics::{DiagnosticKind, Diagnostics};

/// The shape of a declared field type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    /// Language primitive (`int`, `long`, ...).
    Primitive,
    /// Boxed scalar wrapper (`java.lang.Long`, `java.lang.String`, ...).
    BoxedScalar,
    /// Ordered collection with one element type.
    List,
    /// Unordered collection with one element type.
    Set,
    /// Two-type-argument key/value collection.
    Map,
    /// Array with one element type.
    Array,
    /// Anything else — an externally defined entity type.
    Opaque,
}

/// A structured description of one declared type, including its generic
/// arguments. This is what replaces a compiler's internal type handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    pub kind: TypeKind,
    /// Fully-qualified name as it would appear in source
    /// (e.g. `"java.util.List"`, `"long"`, `"com.example.UserProfile"`).
    pub qualified_name: String,
    /// Nested type descriptors: 2 for maps, 1 for list/set/array, 0 otherwise.
    pub type_arguments: Vec<TypeDescriptor>,
}

impl TypeDescriptor {
    pub fn primitive(name: impl Into<String>) -> Self {
        Self {
            kind: TypeKind::Primitive,
            qualified_name: name.into(),
            type_arguments: Vec::new(),
        }
    }

    pub fn boxed(qualified_name: impl Into<String>) -> Self {
        Self {
            kind: TypeKind::BoxedScalar,
            qualified_name: qualified_name.into(),
            type_arguments: Vec::new(),
        }
    }

    pub fn list(element: TypeDescriptor) -> Self {
        Self {
            kind: TypeKind::List,
            qualified_name: "java.util.List".into(),
            type_arguments: vec![element],
        }
    }

    pub fn set(element: TypeDescriptor) -> Self {
        Self {
            kind: TypeKind::Set,
            qualified_name: "java.util.Set".into(),
            type_arguments: vec![element],
        }
    }

    pub fn map(key: TypeDescriptor, value: TypeDescriptor) -> Self {
        Self {
            kind: TypeKind::Map,
            qualified_name: "java.util.Map".into(),
            type_arguments: vec![key, value],
        }
    }

    pub fn array(element: TypeDescriptor) -> Self {
        let qualified_name = format!("{}[]", element.qualified_name);
        Self {
            kind: TypeKind::Array,
            qualified_name,
            type_arguments: vec![element],
        }
    }

    pub fn opaque(qualified_name: impl Into<String>) -> Self {
        Self {
            kind: TypeKind::Opaque,
            qualified_name: qualified_name.into(),
            type_arguments: Vec::new(),
        }
    }
}

/// One field of the source entity as seen by the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: String,
    pub declared_type: TypeDescriptor,
}

/// A complete generation request for one entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityDescription {
    /// Identifier of the originating entity; used only in the provenance
    /// comment of the generated file.
    pub source_qualified_name: String,
    /// Name of the generated type (e.g. `"UserDTO"`).
    pub output_name: String,
    /// Dotted package path for the generated type.
    pub output_package: String,
    /// Fields requiring no custom serialization directive, in order.
    pub plain_fields: Vec<String>,
    /// Fields paired positionally with `serializers`, in order.
    pub serialized_fields: Vec<String>,
    /// Serializer references (fully-qualified names, treated as opaque
    /// strings). Same index = same field in `serialized_fields`.
    pub serializers: Vec<String>,
    /// Field name → spec, covering the union of both field lists. Names
    /// missing here classify as opaque-unknown with a diagnostic.
    pub fields: BTreeMap<String, FieldSpec>,
}

// ============================================================================
// Classification
// ============================================================================

/// The boxed scalars that are always in scope and never imported.
const BOXED_SCALARS: &[(&str, &str)] = &[
    ("java.lang.Integer", "Integer"),
    ("java.lang.Long", "Long"),
    ("java.lang.Double", "Double"),
    ("java.lang.Float", "Float"),
    ("java.lang.Boolean", "Boolean"),
    ("java.lang.Character", "Character"),
    ("java.lang.Byte", "Byte"),
    ("java.lang.Short", "Short"),
    ("java.lang.String", "String"),
    ("java.lang.Object", "Object"),
];

fn boxed_scalar_name(qualified_name: &str) -> Option<&'static str> {
    BOXED_SCALARS
        .iter()
        .find(|(qn, _)| *qn == qualified_name)
        .map(|(_, short)| *short)
}

/// Everything after the last `.`, or the whole name if unqualified.
pub fn simple_name(qualified_name: &str) -> &str {
    qualified_name
        .rsplit_once('.')
        .map_or(qualified_name, |(_, last)| last)
}

fn is_implicit_namespace(qualified_name: &str) -> bool {
    qualified_name.starts_with("java.lang.") || !qualified_name.contains('.')
}

/// The emitter's view of one field's declared type: how to spell the
/// declaration, which generic arguments it takes, and what to import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeClassification {
    /// The shape rule that matched; drives the rendering of generic arguments.
    pub kind: TypeKind,
    /// Short name used in generated declarations (`List`, `String`, `int`,
    /// `UserProfile`, `String[]`).
    pub display_type: String,
    /// True for list/set/map/array.
    pub is_collection_like: bool,
    /// True only for maps; drives two-type-argument rendering.
    pub is_map: bool,
    pub element_type: Option<String>,
    pub key_type: Option<String>,
    pub value_type: Option<String>,
    /// True when the declaration pulls anything into the import block.
    pub requires_import: bool,
    /// Fully-qualified names this declaration needs imported: the container,
    /// opaque element/key/value types, or the opaque entity itself.
    pub import_paths: Vec<String>,
}

impl TypeClassification {
    fn scalar(kind: TypeKind, display_type: impl Into<String>) -> Self {
        Self {
            kind,
            display_type: display_type.into(),
            is_collection_like: false,
            is_map: false,
            element_type: None,
            key_type: None,
            value_type: None,
            requires_import: false,
            import_paths: Vec::new(),
        }
    }

    /// Fallback for a field name with no entry in the `fields` mapping.
    /// Still produces a compilable (if imprecise) declaration.
    pub fn unknown() -> Self {
        Self::scalar(TypeKind::Opaque, "Object")
    }
}

fn arity_for(kind: TypeKind) -> Option<usize> {
    match kind {
        TypeKind::Map => Some(2),
        TypeKind::List | TypeKind::Set | TypeKind::Array => Some(1),
        TypeKind::Primitive | TypeKind::BoxedScalar | TypeKind::Opaque => None,
    }
}

fn has_valid_arity(ty: &TypeDescriptor) -> bool {
    arity_for(ty.kind).is_none_or(|expected| ty.type_arguments.len() == expected)
}

/// Classify a declared type for code emission.
///
/// Pure and total: never fails. Ordered precedence, first match wins —
/// primitive, boxed scalar, map, list/set, array, then opaque for everything
/// else (including boxed scalars outside the built-in set and generic types
/// with the wrong number of arguments).
pub fn classify(ty: &TypeDescriptor) -> TypeClassification {
    if !has_valid_arity(ty) {
        // Degrade to opaque with the raw qualified name as display type; the
        // declaration stays spellable even if the generics were nonsense.
        return TypeClassification::scalar(TypeKind::Opaque, ty.qualified_name.clone());
    }

    match ty.kind {
        TypeKind::Primitive => {
            TypeClassification::scalar(TypeKind::Primitive, ty.qualified_name.clone())
        }
        TypeKind::BoxedScalar => match boxed_scalar_name(&ty.qualified_name) {
            Some(short) => TypeClassification::scalar(TypeKind::BoxedScalar, short),
            None => classify_opaque(ty),
        },
        TypeKind::Map => {
            // Nested classifications carry their own import needs; fold them
            // into the container's so deeply nested opaque types still resolve.
            let key = classify(&ty.type_arguments[0]);
            let value = classify(&ty.type_arguments[1]);
            let mut import_paths = vec!["java.util.Map".to_string()];
            import_paths.extend(key.import_paths);
            import_paths.extend(value.import_paths);
            TypeClassification {
                kind: TypeKind::Map,
                display_type: "Map".into(),
                is_collection_like: true,
                is_map: true,
                element_type: None,
                key_type: Some(key.display_type),
                value_type: Some(value.display_type),
                requires_import: true,
                import_paths,
            }
        }
        TypeKind::List | TypeKind::Set => {
            let container = if ty.kind == TypeKind::List {
                "List"
            } else {
                "Set"
            };
            let element = classify(&ty.type_arguments[0]);
            let mut import_paths = vec![format!("java.util.{container}")];
            import_paths.extend(element.import_paths);
            TypeClassification {
                kind: ty.kind,
                display_type: container.into(),
                is_collection_like: true,
                is_map: false,
                element_type: Some(element.display_type),
                key_type: None,
                value_type: None,
                requires_import: true,
                import_paths,
            }
        }
        TypeKind::Array => {
            // Arrays need no container import — only the element, if opaque.
            let element = classify(&ty.type_arguments[0]);
            TypeClassification {
                kind: TypeKind::Array,
                display_type: format!("{}[]", element.display_type),
                is_collection_like: true,
                is_map: false,
                element_type: Some(element.display_type),
                key_type: None,
                value_type: None,
                requires_import: !element.import_paths.is_empty(),
                import_paths: element.import_paths,
            }
        }
        TypeKind::Opaque => classify_opaque(ty),
    }
}

fn classify_opaque(ty: &TypeDescriptor) -> TypeClassification {
    let requires_import = !is_implicit_namespace(&ty.qualified_name);
    TypeClassification {
        kind: TypeKind::Opaque,
        display_type: simple_name(&ty.qualified_name).to_string(),
        is_collection_like: false,
        is_map: false,
        element_type: None,
        key_type: None,
        value_type: None,
        requires_import,
        import_paths: if requires_import {
            vec![ty.qualified_name.clone()]
        } else {
            Vec::new()
        },
    }
}

/// Classify every field referenced by either field list of an entity.
///
/// Missing fields fall back to [`TypeClassification::unknown`], malformed
/// generic arities degrade inside [`classify`]; both are reported as
/// warnings, never failures.
pub fn classify_fields(
    entity: &EntityDescription,
) -> (BTreeMap<String, TypeClassification>, Diagnostics) {
    let mut classifications = BTreeMap::new();
    let mut diagnostics = Diagnostics::new();

    for name in entity
        .plain_fields
        .iter()
        .chain(entity.serialized_fields.iter())
    {
        if classifications.contains_key(name) {
            continue;
        }
        let classification = match entity.fields.get(name) {
            Some(spec) => {
                if !has_valid_arity(&spec.declared_type) {
                    diagnostics.warn(DiagnosticKind::MalformedGenericSpec {
                        field: name.clone(),
                        qualified_name: spec.declared_type.qualified_name.clone(),
                        expected: arity_for(spec.declared_type.kind).unwrap_or(0),
                        actual: spec.declared_type.type_arguments.len(),
                    });
                }
                classify(&spec.declared_type)
            }
            None => {
                diagnostics.warn(DiagnosticKind::UnresolvedField {
                    entity: entity.source_qualified_name.clone(),
                    field: name.clone(),
                });
                TypeClassification::unknown()
            }
        };
        classifications.insert(name.clone(), classification);
    }

    (classifications, diagnostics)
}
