#![deny(unsafe_code)]
//! Generates Java DTO classes from declarative entity descriptions.
//!
//! The host hands over an [`EntityDescription`] — field lists, serializer
//! references, and a [`TypeDescriptor`] per field — and gets back a complete,
//! compilable Java source file plus any diagnostics the pipeline collected
//! along the way:
//!
//! 1. **Classification** ([`schema`]): each declared type is resolved to a
//!    shape (scalar, list/set, map, array, opaque) that decides how the
//!    declaration is spelled and what it imports.
//! 2. **Assembly** ([`targets::java`]): fields are ordered, serializers
//!    paired, annotations stacked, and imports resolved into a
//!    [`GeneratedSource`] — a typed record of the file's sections.
//! 3. **Rendering** ([`GeneratedSource::render`]): the record becomes text in
//!    one isolated step, so identical inputs always produce identical bytes.
//!
//! ```ignore
//! use dto_codegen::{EntityDescription, generate};
//!
//! let entity: EntityDescription = /* built by the host */;
//! let generated = generate(&entity);
//! for diagnostic in &generated.diagnostics {
//!     eprintln!("{diagnostic}");
//! }
//! generated.source.write_to(std::path::Path::new("target/generated-sources"))?;
//! ```

pub mod code_writer;
pub mod diagnostics;
pub mod schema;
pub mod source;
pub mod targets;

pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics, Severity};
pub use schema::{
    EntityDescription, FieldSpec, TypeClassification, TypeDescriptor, TypeKind, classify,
    classify_fields,
};
pub use source::{FieldDecl, GeneratedSource, WriteError};
pub use targets::java::{Generated, JavaOptions, generate, generate_with};
