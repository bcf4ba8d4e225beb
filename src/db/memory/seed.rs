//! Fixed demo content loaded on every start.

use crate::db::{NewCourse, NewEducation, NewProject, NewSkill};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn projects() -> Vec<NewProject> {
    vec![
        NewProject {
            title: "Car assistant".to_string(),
            description: "Приложение, позволяющее пользователям отслеживать расходы на топливо и обслуживание автомобиля.".to_string(),
            technologies: strings(&[
                "React",
                "React Native",
                "TypeScript",
                "Node.js",
                "Express",
                "SQLite",
            ]),
            live_url: Some("https://t.me/Car_Ass_bot/CarAss".to_string()),
            github_url: None,
            image_url: Some("/images/car-ass.png".to_string()),
            featured: 3,
        },
        NewProject {
            title: "eBilet".to_string(),
            description: "Веб-сервис для бронирования билетов на различные мероприятия".to_string(),
            technologies: strings(&["React", "TypeScript", "Redux", "Node.js", "Express", "SQLite"]),
            live_url: Some("https://xlittlewretchx.github.io/ebilet/".to_string()),
            github_url: Some("https://github.com/XlittlewretchX/ebilet".to_string()),
            image_url: Some("/images/eBilet.png".to_string()),
            featured: 2,
        },
        NewProject {
            title: "Mesto".to_string(),
            description: "Интерактивная веб-страница, которая позволяет пользователям делиться фотографиями.".to_string(),
            technologies: strings(&["JavaScript"]),
            live_url: Some("https://xlittlewretchx.github.io/mesto-project/".to_string()),
            github_url: Some("https://github.com/XlittlewretchX/mesto-project".to_string()),
            image_url: Some("/images/mesto.png".to_string()),
            featured: 0,
        },
    ]
}

pub fn education() -> Vec<NewEducation> {
    vec![NewEducation {
        institution: "РТУ МИРЭА".to_string(),
        degree: "Бакалавр".to_string(),
        field: Some("Программная инженерия".to_string()),
        start_year: "2023".to_string(),
        end_year: Some("2027".to_string()),
        description: Some(
            "Разработка программных продуктов и проектирование информационных систем".to_string(),
        ),
    }]
}

pub fn courses() -> Vec<NewCourse> {
    vec![NewCourse {
        name: "Frontend-разработчик".to_string(),
        platform: "Яндекс Практикум".to_string(),
        completion_date: "Июль 2025".to_string(),
        certificate_url: Some(
            "https://education.yandex.ru/profile/docs?id=c227a7e4-340f-4eff-b9be-b006b0a77b65"
                .to_string(),
        ),
        description: Some("HTML, CSS, JavaScript, React, TypeScript, Redux, Git, Figma".to_string()),
    }]
}

pub fn skills() -> Vec<NewSkill> {
    [
        ("React", "Фронтенд", "react"),
        ("TypeScript", "Фронтенд", "typescript"),
        ("JavaScript", "Фронтенд", "javascript"),
        ("HTML5", "Фронтенд", "html5"),
        ("CSS3", "Фронтенд", "css3"),
        ("React Native", "Фронтенд", "react-native"),
        ("Node.js", "Бэкенд", "nodejs"),
        ("Git", "Инструменты", "git"),
        ("Figma", "Инструменты", "figma"),
    ]
    .into_iter()
    .map(|(name, category, icon)| NewSkill {
        name: name.to_string(),
        category: category.to_string(),
        icon: icon.to_string(),
    })
    .collect()
}
