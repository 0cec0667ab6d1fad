// src/data.rs

use crate::error::CatalogError;
use crate::model::{AgeGroup, Avatar, BadgeDefinition, Category, Profile, Quiz, Video};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};

/// Catálogo estático: vídeos, quizzes, categorías, insignias y avatares
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    pub avatars: Vec<String>,
    pub categories: Vec<Category>,
    pub badges: Vec<BadgeDefinition>,
    pub videos: Vec<Video>,
    pub quizzes: Vec<Quiz>,
}

impl Catalog {
    /// Carga el catálogo desde el YAML embebido
    pub fn load_embedded() -> Result<Self, CatalogError> {
        Self::from_yaml(include_str!("data/catalog.yaml"))
    }

    pub fn from_yaml(raw: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_yaml::from_str(raw)?;
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for id in self
            .videos
            .iter()
            .map(|v| &v.id)
            .chain(self.quizzes.iter().map(|q| &q.id))
        {
            if !seen.insert(id) {
                return Err(CatalogError::DuplicateId(id.clone()));
            }
        }

        let mut badge_ids = HashSet::new();
        for badge in &self.badges {
            if badge.id.is_empty() {
                return Err(CatalogError::EmptyBadgeId);
            }
            if !badge_ids.insert(&badge.id) {
                return Err(CatalogError::DuplicateId(badge.id.clone()));
            }
        }

        // Un quiz por vídeo como mucho
        let mut quiz_by_video: HashMap<&str, &str> = HashMap::new();
        for quiz in &self.quizzes {
            if let Some(first) = quiz_by_video.insert(&quiz.video_id, &quiz.id) {
                return Err(CatalogError::DuplicateQuizForVideo {
                    video: quiz.video_id.clone(),
                    first: first.to_owned(),
                    second: quiz.id.clone(),
                });
            }
            if quiz.questions.is_empty() {
                return Err(CatalogError::EmptyQuiz(quiz.id.clone()));
            }
            if self.video(&quiz.video_id).is_none() {
                return Err(CatalogError::UnknownVideo {
                    quiz: quiz.id.clone(),
                    video: quiz.video_id.clone(),
                });
            }
            for q in &quiz.questions {
                if q.correct_answer >= q.options.len() {
                    return Err(CatalogError::CorrectAnswerOutOfRange {
                        question: q.id.clone(),
                        index: q.correct_answer,
                        options: q.options.len(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn video(&self, id: &str) -> Option<&Video> {
        self.videos.iter().find(|v| v.id == id)
    }

    pub fn quiz_for_video(&self, video_id: &str) -> Option<&Quiz> {
        self.quizzes.iter().find(|q| q.video_id == video_id)
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn default_avatar(&self) -> Avatar {
        Avatar::Emoji(self.avatars.first().cloned().unwrap_or_else(|| "🚀".to_owned()))
    }

    /// Primeros `limit` vídeos para el grupo de edad
    pub fn recommended(&self, group: AgeGroup, limit: usize) -> Vec<&Video> {
        self.videos.iter().filter(|v| v.is_for(group)).take(limit).collect()
    }

    /// Últimos `limit` vídeos vistos, en orden de catálogo
    pub fn continue_watching(&self, profile: &Profile, limit: usize) -> Vec<&Video> {
        let watched: Vec<&Video> = self
            .videos
            .iter()
            .filter(|v| profile.has_watched(&v.id))
            .collect();
        let skip = watched.len().saturating_sub(limit);
        watched.into_iter().skip(skip).collect()
    }

    pub fn related(&self, video: &Video, limit: usize) -> Vec<&Video> {
        self.videos
            .iter()
            .filter(|v| v.category == video.category && v.id != video.id)
            .take(limit)
            .collect()
    }

    /// Filtro de Explorar: texto en título o descripción y categoría opcional
    pub fn search(&self, query: &str, category: Option<&str>) -> Vec<&Video> {
        let query = query.trim().to_lowercase();
        self.videos
            .iter()
            .filter(|v| {
                query.is_empty()
                    || v.title.to_lowercase().contains(&query)
                    || v.description.to_lowercase().contains(&query)
            })
            .filter(|v| category.is_none_or(|c| v.category == c))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BadgeCounter;
    use chrono::Utc;

    fn catalog() -> Catalog {
        Catalog::load_embedded().unwrap()
    }

    #[test]
    fn embedded_catalog_is_valid() {
        let c = catalog();
        assert_eq!(c.videos.len(), 6);
        assert_eq!(c.quizzes.len(), 3);
        assert_eq!(c.categories.len(), 6);
        assert_eq!(c.avatars.len(), 10);
        let ids: Vec<_> = c.badges.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, ["curious", "explorer", "genius", "master"]);
        assert_eq!(c.badges[3].counter, BadgeCounter::Quizzes);
        assert!(c.badges.iter().all(|b| b.requirement > 0));
    }

    #[test]
    fn quiz_without_questions_is_rejected() {
        let raw = r#"
avatars: []
categories: []
badges: []
videos:
  - { id: "1", title: t, description: d, duration: "1:00", category: space,
      thumbnail: x, embedUrl: y, ageGroups: [kids], difficulty: easy }
quizzes:
  - { id: q1, videoId: "1", questions: [] }
"#;
        assert!(matches!(Catalog::from_yaml(raw), Err(CatalogError::EmptyQuiz(id)) if id == "q1"));
    }

    #[test]
    fn second_quiz_for_the_same_video_is_rejected() {
        let raw = r#"
avatars: []
categories: []
badges: []
videos:
  - { id: "1", title: t, description: d, duration: "1:00", category: space,
      thumbnail: x, embedUrl: y, ageGroups: [kids], difficulty: easy }
quizzes:
  - id: qa
    videoId: "1"
    questions:
      - { id: a, prompt: p, options: [x, y], correctAnswer: 0 }
  - id: qb
    videoId: "1"
    questions:
      - { id: b, prompt: p, options: [x, y], correctAnswer: 1 }
"#;
        assert!(matches!(
            Catalog::from_yaml(raw),
            Err(CatalogError::DuplicateQuizForVideo { video, first, second })
                if video == "1" && first == "qa" && second == "qb"
        ));
    }

    #[test]
    fn correct_answer_must_index_an_option() {
        let raw = r#"
avatars: []
categories: []
badges: []
videos:
  - { id: "1", title: t, description: d, duration: "1:00", category: space,
      thumbnail: x, embedUrl: y, ageGroups: [kids], difficulty: easy }
quizzes:
  - id: q1
    videoId: "1"
    questions:
      - { id: a, prompt: p, options: [x, y], correctAnswer: 2 }
"#;
        assert!(matches!(
            Catalog::from_yaml(raw),
            Err(CatalogError::CorrectAnswerOutOfRange { index: 2, options: 2, .. })
        ));
    }

    #[test]
    fn quiz_lookup_by_video() {
        let c = catalog();
        assert_eq!(c.quiz_for_video("2").map(|q| q.id.as_str()), Some("q2"));
        assert!(c.quiz_for_video("6").is_none());
        assert!(c.video("99").is_none());
    }

    #[test]
    fn recommended_respects_age_group() {
        let c = catalog();
        let teens: Vec<_> = c.recommended(AgeGroup::Teens, 3).iter().map(|v| v.id.as_str()).collect();
        assert_eq!(teens, ["1", "3", "5"]);
        let kids: Vec<_> = c.recommended(AgeGroup::Kids, 3).iter().map(|v| v.id.as_str()).collect();
        assert_eq!(kids, ["1", "2", "3"]);
    }

    #[test]
    fn continue_watching_keeps_last_two_in_catalog_order() {
        let c = catalog();
        let mut p = Profile::new("Ana", 9, AgeGroup::Kids, c.default_avatar(), Utc::now());
        for id in ["5", "1", "3"] {
            p.videos_watched.insert(id.into());
        }
        let ids: Vec<_> = c.continue_watching(&p, 2).iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, ["3", "5"]);
    }

    #[test]
    fn search_matches_text_and_category() {
        let c = catalog();
        assert_eq!(c.search("WATER", None).len(), 1);
        assert_eq!(c.search("", Some("space")).len(), 1);
        assert!(c.search("stars", Some("physics")).is_empty());
        assert_eq!(c.search("", None).len(), 6);
    }

    #[test]
    fn related_excludes_self() {
        let c = catalog();
        let v = c.video("1").unwrap();
        assert!(c.related(v, 3).is_empty());
    }
}
