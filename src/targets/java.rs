//! Java DTO generation.
//!
//! [`generate`] takes a fully-materialized [`EntityDescription`] through the
//! whole pipeline: classify every referenced field, pair serialized fields
//! with their serializer references, resolve the import block, and assemble a
//! [`GeneratedSource`]. The pipeline is pure and total — bad input degrades
//! to a best-effort artifact plus diagnostics, never a failure.

pub mod class_body;
pub mod imports;
pub mod types;

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::schema::{EntityDescription, TypeClassification, classify_fields};
use crate::source::{FieldDecl, GeneratedSource};

/// Knobs for Java generation. `Default` matches the permissive baseline.
#[derive(Debug, Clone, Default)]
pub struct JavaOptions {
    /// When set, serializer references must be dotted class tokens with an
    /// upper-cased final segment; anything else renders the field without a
    /// `using` directive and reports a diagnostic. Off by default, where
    /// references are free-form strings trusted as given.
    pub strict_serializer_tokens: bool,
}

/// The outcome of one generation request: the artifact, plus everything the
/// pipeline wants the host to surface.
#[derive(Debug, Clone)]
pub struct Generated {
    pub source: GeneratedSource,
    pub diagnostics: Diagnostics,
}

/// Generate with default options.
pub fn generate(entity: &EntityDescription) -> Generated {
    generate_with(entity, &JavaOptions::default())
}

/// Generate a Java DTO source for one entity description.
pub fn generate_with(entity: &EntityDescription, options: &JavaOptions) -> Generated {
    let (classifications, mut diagnostics) = classify_fields(entity);

    // Serializers pair positionally; pairing stops at the shorter list and
    // the tail is reported, not dropped silently (unmatched fields still
    // render, as plain).
    let paired = entity.serialized_fields.len().min(entity.serializers.len());
    if entity.serialized_fields.len() != entity.serializers.len() {
        let unmatched = if entity.serialized_fields.len() > paired {
            entity.serialized_fields[paired..].to_vec()
        } else {
            entity.serializers[paired..].to_vec()
        };
        diagnostics.warn(DiagnosticKind::SerializerArityMismatch { unmatched });
    }

    let mut serializer_refs: Vec<Option<&str>> = Vec::with_capacity(paired);
    for (field, reference) in entity
        .serialized_fields
        .iter()
        .zip(entity.serializers.iter())
    {
        if options.strict_serializer_tokens && !types::is_class_token(reference) {
            diagnostics.warn(DiagnosticKind::InvalidSerializerToken {
                field: field.clone(),
                reference: reference.clone(),
            });
            serializer_refs.push(None);
        } else {
            serializer_refs.push(Some(reference));
        }
    }

    let classification_for = |name: &str| {
        classifications
            .get(name)
            .cloned()
            .unwrap_or_else(TypeClassification::unknown)
    };

    let mut fields = Vec::with_capacity(entity.plain_fields.len() + entity.serialized_fields.len());
    for name in &entity.plain_fields {
        fields.push(field_decl(name, &classification_for(name), None));
    }
    for (i, name) in entity.serialized_fields.iter().enumerate() {
        let reference = serializer_refs.get(i).copied().flatten();
        fields.push(field_decl(name, &classification_for(name), reference));
    }

    let imports = imports::resolve_imports(
        classifications.values(),
        serializer_refs
            .iter()
            .flatten()
            .map(|r| r.trim())
            .filter(|r| !r.is_empty() && r.contains('.'))
            .map(str::to_string),
    );

    let source = GeneratedSource {
        package: entity.output_package.clone(),
        source_entity: entity.source_qualified_name.clone(),
        class_name: entity.output_name.clone(),
        imports,
        fields,
    };

    tracing::debug!(
        entity = %entity.source_qualified_name,
        class = %source.class_name,
        fields = source.fields.len(),
        "assembled generated source"
    );
    for diagnostic in &diagnostics {
        tracing::warn!(%diagnostic, entity = %entity.source_qualified_name, "generation diagnostic");
    }

    Generated {
        source,
        diagnostics,
    }
}

fn field_decl(
    name: &str,
    classification: &TypeClassification,
    serializer: Option<&str>,
) -> FieldDecl {
    let mut annotations = vec![format!("@JsonProperty(\"{name}\")")];
    if let Some(reference) = serializer {
        annotations.push(format!(
            "@JsonSerialize(using = {}.class)",
            types::serializer_simple_name(reference)
        ));
    }
    if classification.is_collection_like {
        annotations.push("@JsonSerialize(contentUsing = StdSerializer.class)".to_string());
    }
    FieldDecl {
        name: name.to_string(),
        ty: types::render_type(classification),
        annotations,
    }
}
