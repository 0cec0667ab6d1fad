// src/view_models.rs

#[derive(Clone, Debug)]
pub struct VideoCard {
    pub id: String,
    pub title: String,
    pub duration: String,
    pub category: String,
    pub difficulty: &'static str,
    pub watched: bool,
    pub has_quiz: bool,
}

#[derive(Clone, Debug)]
pub struct StatTile {
    pub title: &'static str,
    pub value: usize,
    pub icon: &'static str,
}

#[derive(Clone, Debug)]
pub struct BadgeTile {
    pub id: String,
    pub name: String,
    pub icon: &'static str,
    pub earned: bool,
}

#[derive(Clone, Debug)]
pub struct NextBadgeCard {
    pub name: String,
    pub icon: &'static str,
    pub challenge: String,
    pub current: usize,
    pub requirement: usize,
    pub fraction: f32,
}

impl VideoCard {
    pub fn label(&self) -> String {
        if self.watched {
            format!("{} ✅", self.title)
        } else {
            self.title.clone()
        }
    }

    pub fn subtitle(&self) -> String {
        format!("⏱ {} · {} · {}", self.duration, self.category, self.difficulty)
    }
}

impl BadgeTile {
    pub fn label(&self) -> String {
        if self.earned {
            format!("{} {}", self.icon, self.name)
        } else {
            format!("🔒 {}", self.name)
        }
    }
}

impl NextBadgeCard {
    pub fn counter_label(&self) -> String {
        format!("{}/{}", self.current, self.requirement)
    }
}

/// Símbolo para un icono del catálogo. La resolución de iconos es cosa de la UI.
pub fn icon_symbol(icon: &str) -> &'static str {
    match icon {
        "Eye" => "👁",
        "Compass" => "🧭",
        "Brain" => "🧠",
        "Award" => "🏆",
        "Zap" => "⚡",
        "Flask" => "⚗",
        "Leaf" => "🍃",
        "Laptop" => "💻",
        "Globe" => "🌍",
        "Rocket" => "🚀",
        _ => "⭐",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_icons_fall_back_to_star() {
        assert_eq!(icon_symbol("Award"), "🏆");
        assert_eq!(icon_symbol("Nope"), "⭐");
    }

    #[test]
    fn locked_badge_shows_padlock() {
        let tile = BadgeTile {
            id: "genius".into(),
            name: "Young Genius".into(),
            icon: "🧠",
            earned: false,
        };
        assert_eq!(tile.label(), "🔒 Young Genius");
    }
}
