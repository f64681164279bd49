//! Language targets. Each target consumes an [`crate::schema::EntityDescription`]
//! plus field classifications and produces a complete source artifact.

pub mod java;
