//! Teacher → Subject → Student records, request bodies and response trees.

mod entity;
pub mod reference;
pub mod student;
pub mod subject;
pub mod teacher;
pub mod tree;

pub use entity::{Entity, Owned};
pub use reference::{BackRef, EntityRef, Position};
pub use student::{Student, StudentDocument};
pub use subject::{Subject, SubjectDocument};
pub use teacher::{Teacher, TeacherDocument};
