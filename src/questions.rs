// src/questions.rs

use std::sync::LazyLock;

use crate::models::question::{Question, QuestionOption};

/// The scanner's fixed question set, built once and shared read-only.
pub static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
    vec![
        Question {
            id: 1,
            text: "Have you ever stolen a cookie before dinner?".to_string(),
            options: vec![
                QuestionOption::new("Never! I always ask permission", 0),
                QuestionOption::new("Only when they smell irresistible", 5),
                QuestionOption::new("I'm a serial cookie thief!", 10),
            ],
        },
        Question {
            id: 2,
            text: "Would you rather give or keep all the presents?".to_string(),
            options: vec![
                QuestionOption::new("Give them all away!", 0),
                QuestionOption::new("Keep a few special ones", 5),
                QuestionOption::new("Mine! All mine!", 10),
            ],
        },
        Question {
            id: 3,
            text: "How many snowballs have you thrown at innocent victims?".to_string(),
            options: vec![
                QuestionOption::new("Zero - I'm an angel", 0),
                QuestionOption::new("Just a few... they deserved it", 5),
                QuestionOption::new("I've lost count!", 10),
            ],
        },
        Question {
            id: 4,
            text: "What do you leave for Santa on Christmas Eve?".to_string(),
            options: vec![
                QuestionOption::new("Cookies, milk, and carrots for the reindeer", 0),
                QuestionOption::new("Whatever's left in the fridge", 5),
                QuestionOption::new("A note saying 'Better luck next house!'", 10),
            ],
        },
    ]
});
