//! TaskFlow Catalog
//!
//! Static sample courses and lessons shown by the browsing screens.
//! Nothing here is persisted.

mod course;
mod lesson;

pub use course::{course, courses, filter_courses, Course, COURSE_CATEGORIES};
pub use lesson::{filter_lessons, lesson, lessons, Lesson, LESSON_CATEGORIES};
