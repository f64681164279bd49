//! The generated artifact, modeled as ordered, typed sections.
//!
//! Rather than concatenating raw text inline, generation builds this record
//! (imports as a deduplicated set, fields as ordered render records) and
//! rendering to text happens as a final, isolated step — which keeps the
//! ordering and dedup invariants testable independently of formatting.

use std::fs;
use std::path::{Path, PathBuf};

use crate::targets::java::imports::ImportBlock;

/// One field ready for emission: its name, fully-rendered declaration type,
/// and the annotation lines that precede it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    pub name: String,
    /// Rendered type, generics included (e.g. `Map<String, UserProfile>`).
    pub ty: String,
    /// Annotation lines in emission order (e.g. `@JsonProperty("id")`).
    pub annotations: Vec<String>,
}

/// A complete generated source file, section by section.
///
/// Field order is the output contract: `fields` holds plain fields first,
/// then serialized fields, each group in the order the entity description
/// gave them. Declarations, constructor parameters, accessors, and the
/// equals/hashCode/toString bodies all follow this one ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSource {
    /// Dotted package of the generated type; empty packages render no
    /// package line and cannot be written to disk.
    pub package: String,
    /// Qualified name of the originating entity, for the provenance comment.
    pub source_entity: String,
    /// Name of the generated class.
    pub class_name: String,
    pub imports: ImportBlock,
    pub fields: Vec<FieldDecl>,
}

/// Failure to place a generated file on disk. Fatal for the affected entity
/// only; the pure generation core never produces these.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("cannot resolve a destination for `{class_name}`: output package is empty")]
    DestinationUnresolvable { class_name: String },

    #[error("failed to write generated source")]
    Io(#[from] std::io::Error),
}

impl GeneratedSource {
    /// Write the rendered source under an explicit source root, mapping the
    /// package to a directory path. Replaces any existing file. Returns the
    /// path written.
    pub fn write_to(&self, source_root: &Path) -> Result<PathBuf, WriteError> {
        if self.package.is_empty() {
            return Err(WriteError::DestinationUnresolvable {
                class_name: self.class_name.clone(),
            });
        }
        let dir = source_root.join(self.package.replace('.', "/"));
        fs::create_dir_all(&dir)?;
        let path = dir.join(format!("{}.java", self.class_name));
        fs::write(&path, self.render())?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_source() -> GeneratedSource {
        GeneratedSource {
            package: "com.example.dto".into(),
            source_entity: "com.example.User".into(),
            class_name: "UserDTO".into(),
            imports: ImportBlock::default(),
            fields: Vec::new(),
        }
    }

    #[test]
    fn write_to_maps_package_to_directories() {
        let root = std::env::temp_dir().join("dto-codegen-write-test");
        let _ = fs::remove_dir_all(&root);

        let path = minimal_source().write_to(&root).unwrap();
        assert!(path.ends_with("com/example/dto/UserDTO.java"));
        assert!(path.exists());

        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn empty_package_is_unresolvable() {
        let mut source = minimal_source();
        source.package.clear();
        let err = source.write_to(Path::new("/tmp")).unwrap_err();
        assert!(matches!(err, WriteError::DestinationUnresolvable { .. }));
    }
}
