//! HTTP handlers, one module per entity.

pub mod student;
pub mod subject;
pub mod teacher;
