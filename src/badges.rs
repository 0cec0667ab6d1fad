//! Insignias y progreso.
//!
//! Todo aquí es puro: se recalcula a partir de los contadores del perfil cada
//! vez que la UI lo pide y no se guarda ningún estado derivado.

use crate::model::{BadgeDefinition, Profile};

/// Fracción de progreso hacia un umbral, en [0, 1].
/// Un umbral de 0 cuenta como ya cumplido.
pub fn progress_fraction(counter: usize, requirement: usize) -> f32 {
    if requirement == 0 {
        return 1.0;
    }
    (counter as f32 / requirement as f32).min(1.0)
}

pub fn is_earned(profile: &Profile, badge: &BadgeDefinition) -> bool {
    profile.counter(badge.counter) >= badge.requirement
}

#[derive(Debug, Clone, PartialEq)]
pub struct NextBadge<'a> {
    pub badge: &'a BadgeDefinition,
    pub current: usize,
    pub fraction: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BadgeState<'a> {
    /// Conseguidas, en el orden en que están declaradas
    pub earned: Vec<&'a BadgeDefinition>,
    /// Primera no conseguida en orden de declaración
    pub next: Option<NextBadge<'a>>,
}

impl BadgeState<'_> {
    pub fn is_earned(&self, badge_id: &str) -> bool {
        self.earned.iter().any(|b| b.id == badge_id)
    }
}

pub fn compute_badge_state<'a>(
    profile: &Profile,
    definitions: &'a [BadgeDefinition],
) -> BadgeState<'a> {
    let earned: Vec<&BadgeDefinition> = definitions
        .iter()
        .filter(|b| is_earned(profile, b))
        .collect();

    // Se compara por id, nunca por identidad del objeto
    let next = definitions
        .iter()
        .find(|b| !earned.iter().any(|e| e.id == b.id))
        .map(|badge| {
            let current = profile.counter(badge.counter);
            NextBadge {
                badge,
                current,
                fraction: progress_fraction(current, badge.requirement),
            }
        });

    BadgeState { earned, next }
}

/// Contadores del panel de progreso
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSummary {
    pub videos_watched: usize,
    pub quizzes_completed: usize,
    pub badges_earned: usize,
    pub total_score: usize,
}

impl ProgressSummary {
    pub const POINTS_PER_VIDEO: usize = 10;
    pub const POINTS_PER_QUIZ: usize = 5;

    pub fn from_profile(profile: &Profile, definitions: &[BadgeDefinition]) -> Self {
        let videos_watched = profile.videos_watched.len();
        let quizzes_completed = profile.quizzes_completed.len();
        Self {
            videos_watched,
            quizzes_completed,
            badges_earned: compute_badge_state(profile, definitions).earned.len(),
            total_score: videos_watched * Self::POINTS_PER_VIDEO
                + quizzes_completed * Self::POINTS_PER_QUIZ,
        }
    }
}
