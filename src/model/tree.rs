//! Builds response trees from flat rows. Children are attached under the parent named
//! by their foreign key and rendered as nested nodes, so back-references never appear
//! below the root.

use crate::model::reference::Position;
use crate::model::student::{Student, StudentDocument};
use crate::model::subject::{Subject, SubjectDocument};
use crate::model::teacher::{Teacher, TeacherDocument};
use crate::model::Owned;
use std::collections::HashMap;

/// Groups rows by owner id, keeping their input order. Rows without an owner are dropped.
fn group_by_owner<E: Owned>(rows: Vec<E>) -> HashMap<i64, Vec<E>> {
    let mut groups: HashMap<i64, Vec<E>> = HashMap::new();
    for row in rows {
        if let Some(owner) = row.owner_id() {
            groups.entry(owner).or_default().push(row);
        }
    }
    groups
}

fn take_children<E>(groups: &mut HashMap<i64, Vec<E>>, owner: Option<i64>) -> Vec<E> {
    owner.and_then(|id| groups.remove(&id)).unwrap_or_default()
}

fn subject_node(
    subject: Subject,
    students_by_subject: &mut HashMap<i64, Vec<Student>>,
    position: Position,
) -> SubjectDocument {
    let students = take_children(students_by_subject, subject.id)
        .into_iter()
        .map(|s| StudentDocument::new(s, Position::Nested))
        .collect();
    SubjectDocument::new(subject, students, position)
}

/// `students` may contain students of other subjects; they are ignored.
pub fn subject_tree(subjects: Vec<Subject>, students: Vec<Student>, position: Position) -> Vec<SubjectDocument> {
    let mut students_by_subject = group_by_owner(students);
    subjects
        .into_iter()
        .map(|subject| subject_node(subject, &mut students_by_subject, position))
        .collect()
}

pub fn teacher_tree(teachers: Vec<Teacher>, subjects: Vec<Subject>, students: Vec<Student>) -> Vec<TeacherDocument> {
    let mut subjects_by_teacher = group_by_owner(subjects);
    let mut students_by_subject = group_by_owner(students);
    teachers
        .into_iter()
        .map(|teacher| {
            let subjects = take_children(&mut subjects_by_teacher, teacher.id)
                .into_iter()
                .map(|subject| subject_node(subject, &mut students_by_subject, Position::Nested))
                .collect();
            TeacherDocument::new(teacher, subjects)
        })
        .collect()
}
