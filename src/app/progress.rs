use super::*;
use crate::badges::{BadgeState, ProgressSummary, compute_badge_state};

impl SciWorldApp {
    /// Estado de insignias recalculado en cada llamada; nunca se cachea
    pub fn badge_state(&self) -> Option<BadgeState<'_>> {
        let profile = self.store.profile()?;
        Some(compute_badge_state(profile, &self.catalog.badges))
    }

    pub fn progress_summary(&self) -> Option<ProgressSummary> {
        let profile = self.store.profile()?;
        Some(ProgressSummary::from_profile(profile, &self.catalog.badges))
    }

    /// Apunta en el perfil las insignias que los contadores ya cumplen
    pub fn award_badges(&mut self) {
        let Some(state) = self.badge_state() else {
            return;
        };
        let newly: Vec<String> = state
            .earned
            .iter()
            .map(|b| b.id.clone())
            .filter(|id| {
                self.store
                    .profile()
                    .is_some_and(|p| !p.badges.contains(id))
            })
            .collect();
        for id in newly {
            self.store.add_badge(&id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;

    #[test]
    fn fifth_video_awards_curious() {
        let mut app = app_with_profile();
        for (i, id) in ["1", "2", "3", "4", "5"].iter().enumerate() {
            let t = i as f64 * 10.0;
            app.open_video(id, t);
            app.tick(t + 5.0);
        }
        let p = app.store.profile().unwrap();
        assert_eq!(p.videos_watched.len(), 5);
        assert!(p.badges.contains("curious"));
        assert!(!p.badges.contains("explorer"));

        let state = app.badge_state().unwrap();
        assert_eq!(state.next.unwrap().badge.id, "explorer");
        assert_eq!(app.progress_summary().unwrap().total_score, 50);
    }

    #[test]
    fn no_profile_no_badges() {
        let mut app = app();
        app.award_badges();
        assert!(app.badge_state().is_none());
        assert!(app.progress_summary().is_none());
    }
}
