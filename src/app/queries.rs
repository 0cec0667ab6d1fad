use super::*;
use crate::model::{AgeGroup, Video};

impl SciWorldApp {
    /// Sin perfil se recomienda como a los peques
    pub fn age_group(&self) -> AgeGroup {
        self.store
            .profile()
            .map(|p| p.age_group)
            .unwrap_or(AgeGroup::Kids)
    }

    pub fn recommended_videos(&self) -> Vec<&Video> {
        self.catalog
            .recommended(self.age_group(), self.config.recommended_count)
    }

    pub fn continue_watching(&self) -> Vec<&Video> {
        match self.store.profile() {
            Some(p) => self
                .catalog
                .continue_watching(p, self.config.continue_watching_count),
            None => Vec::new(),
        }
    }

    pub fn related_videos(&self, video: &Video) -> Vec<&Video> {
        self.catalog.related(video, self.config.related_count)
    }

    pub fn explore_results(&self) -> Vec<&Video> {
        self.catalog
            .search(&self.explore.query, self.explore.category.as_deref())
    }

    /// Título de la lista de Explorar
    pub fn explore_heading(&self) -> String {
        let count = self.explore_results().len();
        match self
            .explore
            .category
            .as_deref()
            .and_then(|c| self.catalog.category(c))
        {
            Some(cat) => format!("{} Videos ({count})", cat.name),
            None => format!("All Videos ({count})"),
        }
    }

    pub fn has_watched(&self, video_id: &str) -> bool {
        self.store
            .profile()
            .is_some_and(|p| p.has_watched(video_id))
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;

    #[test]
    fn explore_heading_names_category() {
        let mut app = app_with_profile();
        assert_eq!(app.explore_heading(), "All Videos (6)");
        app.toggle_category("physics");
        assert_eq!(app.explore_heading(), "Physics Videos (1)");
        app.explore.query = "zzz".into();
        assert_eq!(app.explore_heading(), "Physics Videos (0)");
    }

    #[test]
    fn recommendations_follow_profile_age_group() {
        let app = app_with_profile();
        let ids: Vec<_> = app.recommended_videos().iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
        assert!(app.continue_watching().is_empty());
    }
}
