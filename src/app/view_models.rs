use super::*;
use crate::model::Video;
use crate::view_models::icon_symbol;

impl SciWorldApp {
    pub fn video_card(&self, video: &Video) -> VideoCard {
        let category = self
            .catalog
            .category(&video.category)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| video.category.clone());
        VideoCard {
            id: video.id.clone(),
            title: video.title.clone(),
            duration: video.duration.clone(),
            category,
            difficulty: video.difficulty.as_str(),
            watched: self.has_watched(&video.id),
            has_quiz: self.catalog.quiz_for_video(&video.id).is_some(),
        }
    }

    pub fn video_cards(&self, videos: &[&Video]) -> Vec<VideoCard> {
        videos.iter().map(|v| self.video_card(v)).collect()
    }

    pub fn stat_tiles(&self) -> Vec<StatTile> {
        let Some(s) = self.progress_summary() else {
            return Vec::new();
        };
        vec![
            StatTile { title: "Videos Watched", value: s.videos_watched, icon: "▶" },
            StatTile { title: "Quizzes Completed", value: s.quizzes_completed, icon: "✔" },
            StatTile { title: "Badges Earned", value: s.badges_earned, icon: "🏆" },
            StatTile { title: "Total Score", value: s.total_score, icon: "⭐" },
        ]
    }

    pub fn badge_tiles(&self) -> Vec<BadgeTile> {
        let state = self.badge_state();
        self.catalog
            .badges
            .iter()
            .map(|b| BadgeTile {
                id: b.id.clone(),
                name: b.name.clone(),
                icon: icon_symbol(&b.icon),
                earned: state.as_ref().is_some_and(|s| s.is_earned(&b.id)),
            })
            .collect()
    }

    pub fn next_badge_card(&self) -> Option<NextBadgeCard> {
        let next = self.badge_state()?.next?;
        Some(NextBadgeCard {
            name: next.badge.name.clone(),
            icon: icon_symbol(&next.badge.icon),
            challenge: next.badge.challenge(),
            current: next.current,
            requirement: next.badge.requirement,
            fraction: next.fraction,
        })
    }
}
