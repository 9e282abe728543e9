//! Course catalog

use serde::Serialize;

/// Category tabs. The first entry selects every course.
pub const COURSE_CATEGORIES: [&str; 4] = ["Todos", "IA", "Gestão", "Sustentabilidade"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Course {
    pub id: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub duration: &'static str,
    pub level: &'static str,
    pub students: u32,
    pub rating: f32,
    pub image: &'static str,
}

static COURSES: [Course; 6] = [
    Course {
        id: "1",
        title: "Introdução à Inteligência Artificial",
        category: "IA",
        duration: "8 horas",
        level: "Iniciante",
        students: 1234,
        rating: 4.8,
        image: "🤖",
    },
    Course {
        id: "2",
        title: "Gestão de Projetos Ágeis",
        category: "Gestão",
        duration: "6 horas",
        level: "Intermediário",
        students: 856,
        rating: 4.6,
        image: "📊",
    },
    Course {
        id: "3",
        title: "Sustentabilidade Empresarial",
        category: "Sustentabilidade",
        duration: "5 horas",
        level: "Iniciante",
        students: 642,
        rating: 4.7,
        image: "🌱",
    },
    Course {
        id: "4",
        title: "Machine Learning Avançado",
        category: "IA",
        duration: "12 horas",
        level: "Avançado",
        students: 423,
        rating: 4.9,
        image: "🧠",
    },
    Course {
        id: "5",
        title: "Liderança e Gestão de Equipes",
        category: "Gestão",
        duration: "7 horas",
        level: "Intermediário",
        students: 978,
        rating: 4.5,
        image: "👥",
    },
    Course {
        id: "6",
        title: "Economia Circular",
        category: "Sustentabilidade",
        duration: "4 horas",
        level: "Iniciante",
        students: 534,
        rating: 4.6,
        image: "♻️",
    },
];

pub fn courses() -> &'static [Course] {
    &COURSES
}

pub fn course(id: &str) -> Option<&'static Course> {
    COURSES.iter().find(|c| c.id == id)
}

/// Courses in `category` (all when `None`) whose title contains `search`,
/// ignoring case.
pub fn filter_courses(category: Option<&str>, search: &str) -> Vec<&'static Course> {
    let search = search.to_lowercase();
    COURSES
        .iter()
        .filter(|c| category.map_or(true, |cat| c.category == cat))
        .filter(|c| c.title.to_lowercase().contains(&search))
        .collect()
}
