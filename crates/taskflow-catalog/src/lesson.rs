//! Lesson catalog

use serde::Serialize;

/// Category tabs. The first entry selects every lesson.
pub const LESSON_CATEGORIES: [&str; 6] =
    ["Todas", "Yoga", "Cardio", "Força", "Meditação", "Flexibilidade"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lesson {
    pub id: &'static str,
    pub title: &'static str,
    pub level: &'static str,
    pub duration: &'static str,
    pub category: &'static str,
}

static LESSONS: [Lesson; 6] = [
    Lesson {
        id: "1",
        title: "Respiração Pranayama",
        level: "Iniciante",
        duration: "15 min",
        category: "Meditação",
    },
    Lesson {
        id: "2",
        title: "Vinyasa Flow",
        level: "Intermediário",
        duration: "45 min",
        category: "Yoga",
    },
    Lesson {
        id: "3",
        title: "Alongamento Pós-Treino",
        level: "Todos",
        duration: "20 min",
        category: "Flexibilidade",
    },
    Lesson {
        id: "4",
        title: "HIIT Cardio",
        level: "Intermediário",
        duration: "30 min",
        category: "Cardio",
    },
    Lesson {
        id: "5",
        title: "Yoga Restaurativa",
        level: "Iniciante",
        duration: "25 min",
        category: "Yoga",
    },
    Lesson {
        id: "6",
        title: "Core Strengthening",
        level: "Intermediário",
        duration: "35 min",
        category: "Força",
    },
];

pub fn lessons() -> &'static [Lesson] {
    &LESSONS
}

pub fn lesson(id: &str) -> Option<&'static Lesson> {
    LESSONS.iter().find(|l| l.id == id)
}

pub fn filter_lessons(category: Option<&str>) -> Vec<&'static Lesson> {
    LESSONS
        .iter()
        .filter(|l| category.map_or(true, |cat| l.category == cat))
        .collect()
}
