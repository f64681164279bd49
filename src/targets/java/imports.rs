//! Import resolution for generated sources.
//!
//! The import block is two parts: a fixed baseline every generated class
//! needs (annotations, `Serializable`, `Objects`), then a deduplicated,
//! lexicographically sorted set resolved from the entity's fields and
//! serializer references. Sorting makes the block independent of field
//! iteration order, so identical inputs always render identical text.

use std::collections::BTreeSet;

use crate::schema::TypeClassification;

/// Imports present in every generated class, in fixed order.
pub const BASELINE_IMPORTS: [&str; 4] = [
    "com.fasterxml.jackson.annotation.JsonProperty",
    "com.fasterxml.jackson.databind.annotation.JsonSerialize",
    "java.io.Serializable",
    "java.util.Objects",
];

/// Imported whenever any field is collection-like, to back the
/// `contentUsing` directive on its annotation.
pub const CONTENT_SERIALIZER_IMPORT: &str = "com.fasterxml.jackson.databind.ser.std.StdSerializer";

/// The import section of a generated class: fixed baseline plus the sorted
/// set resolved for this entity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportBlock {
    resolved: BTreeSet<String>,
}

impl ImportBlock {
    /// All import paths in emission order: baseline first, then resolved.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        BASELINE_IMPORTS
            .iter()
            .copied()
            .chain(self.resolved.iter().map(String::as_str))
    }

    /// The entity-specific imports, sorted.
    pub fn resolved(&self) -> impl Iterator<Item = &str> {
        self.resolved.iter().map(String::as_str)
    }

    pub fn contains(&self, import: &str) -> bool {
        BASELINE_IMPORTS.contains(&import) || self.resolved.contains(import)
    }
}

/// Build the import block for one entity.
///
/// `serializer_imports` must already be filtered to importable references
/// (qualified, non-blank, and token-valid when strict mode is on); this
/// function only owns dedup, baseline overlap, and the collection-support
/// import.
pub fn resolve_imports<'a>(
    classifications: impl IntoIterator<Item = &'a TypeClassification>,
    serializer_imports: impl IntoIterator<Item = String>,
) -> ImportBlock {
    let mut resolved = BTreeSet::new();
    let mut any_collection_like = false;

    for classification in classifications {
        any_collection_like |= classification.is_collection_like;
        resolved.extend(classification.import_paths.iter().cloned());
    }
    resolved.extend(serializer_imports);
    if any_collection_like {
        resolved.insert(CONTENT_SERIALIZER_IMPORT.to_string());
    }
    // A resolved path may coincide with a baseline import; the baseline line
    // already covers it.
    resolved.retain(|import| !BASELINE_IMPORTS.contains(&import.as_str()));

    ImportBlock { resolved }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{TypeDescriptor, classify};

    #[test]
    fn collection_fields_pull_the_content_serializer() {
        let list = classify(&TypeDescriptor::list(TypeDescriptor::boxed(
            "java.lang.String",
        )));
        let block = resolve_imports([&list], []);
        assert!(block.contains(CONTENT_SERIALIZER_IMPORT));
        assert!(block.contains("java.util.List"));
    }

    #[test]
    fn scalar_only_entities_resolve_nothing() {
        let id = classify(&TypeDescriptor::boxed("java.lang.Long"));
        let block = resolve_imports([&id], []);
        assert_eq!(block.resolved().count(), 0);
    }

    #[test]
    fn resolved_imports_are_sorted_and_deduplicated() {
        let set = classify(&TypeDescriptor::set(TypeDescriptor::opaque(
            "com.example.Role",
        )));
        let list = classify(&TypeDescriptor::list(TypeDescriptor::opaque(
            "com.example.Role",
        )));
        let block = resolve_imports(
            [&set, &list],
            ["com.example.RoleSerializer".to_string()],
        );

        let resolved: Vec<_> = block.resolved().collect();
        assert_eq!(
            resolved,
            vec![
                "com.example.Role",
                "com.example.RoleSerializer",
                CONTENT_SERIALIZER_IMPORT,
                "java.util.List",
                "java.util.Set",
            ]
        );
    }

    #[test]
    fn baseline_overlap_is_not_duplicated() {
        let objects = classify(&TypeDescriptor::opaque("java.util.Objects"));
        let block = resolve_imports([&objects], []);
        assert_eq!(block.resolved().count(), 0);
        assert!(block.contains("java.util.Objects"));
    }
}
