use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[serde(rename_all = "lowercase")]
pub enum AgeGroup {
    Kids,
    Teens,
}

impl AgeGroup {
    /// Etiqueta que se enseña en el panel del perfil
    pub fn label(&self) -> &'static str {
        match self {
            AgeGroup::Kids => "Young Explorer",
            AgeGroup::Teens => "Science Enthusiast",
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    pub title: String,
    pub description: String,
    pub duration: String, // "3:42"
    pub category: String,
    pub thumbnail: String,
    pub embed_url: String,
    pub age_groups: Vec<AgeGroup>,
    pub difficulty: Difficulty,
}

impl Video {
    pub fn is_for(&self, group: AgeGroup) -> bool {
        self.age_groups.contains(&group)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_answer: usize, // índice 0-based dentro de options
}

impl Question {
    pub fn correct_option(&self) -> Option<&str> {
        self.options.get(self.correct_answer).map(String::as_str)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: String,
    pub video_id: String,
    pub questions: Vec<Question>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: String,
}

/// Contador del perfil contra el que se mide una insignia
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BadgeCounter {
    Videos,
    Quizzes,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BadgeDefinition {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub requirement: usize,
    pub counter: BadgeCounter,
}

impl BadgeDefinition {
    /// Texto del reto, p.ej. "Watch 10 videos"
    pub fn challenge(&self) -> String {
        match self.counter {
            BadgeCounter::Videos => format!("Watch {} videos", self.requirement),
            BadgeCounter::Quizzes => format!("Complete {} quizzes", self.requirement),
        }
    }
}

/// Avatar del perfil: un emoji del catálogo o una imagen subida (data URL).
///
/// Se serializa como un string plano para que el perfil guardado siga siendo
/// una copia estructural directa de la entidad.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Avatar {
    Emoji(String),
    Image(String),
}

impl Avatar {
    pub fn is_image(&self) -> bool {
        matches!(self, Avatar::Image(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Avatar::Emoji(s) | Avatar::Image(s) => s,
        }
    }
}

impl From<String> for Avatar {
    fn from(value: String) -> Self {
        if value.starts_with("data:") {
            Avatar::Image(value)
        } else {
            Avatar::Emoji(value)
        }
    }
}

impl From<Avatar> for String {
    fn from(value: Avatar) -> Self {
        match value {
            Avatar::Emoji(s) | Avatar::Image(s) => s,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub age_group: AgeGroup,
    pub avatar: Avatar,
    #[serde(default)]
    pub videos_watched: BTreeSet<String>,
    #[serde(default)]
    pub quizzes_completed: BTreeSet<String>,
    #[serde(default)]
    pub badges: BTreeSet<String>,
    pub created_at: DateTime<Utc>,
}

impl Profile {
    /// Perfil recién creado, sin progreso
    pub fn new(
        name: impl Into<String>,
        age: u32,
        age_group: AgeGroup,
        avatar: Avatar,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: created_at.timestamp_millis().to_string(),
            name: name.into(),
            age,
            age_group,
            avatar,
            videos_watched: BTreeSet::new(),
            quizzes_completed: BTreeSet::new(),
            badges: BTreeSet::new(),
            created_at,
        }
    }

    pub fn has_watched(&self, video_id: &str) -> bool {
        self.videos_watched.contains(video_id)
    }

    pub fn counter(&self, counter: BadgeCounter) -> usize {
        match counter {
            BadgeCounter::Videos => self.videos_watched.len(),
            BadgeCounter::Quizzes => self.quizzes_completed.len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    Onboarding,
    Home,
    Explore,
    Video(String),
    Quiz(String),
    Dashboard,
    Settings,
}
