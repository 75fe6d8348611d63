use artlearn_core::model::{Achievement, AchievementId, LessonProgress, User};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AchievementBadgeVm {
    pub id: AchievementId,
    pub name: String,
    pub icon: String,
    pub unlocked: bool,
    pub description: Option<String>,
}

impl From<&Achievement> for AchievementBadgeVm {
    fn from(achievement: &Achievement) -> Self {
        Self {
            id: achievement.id,
            name: achievement.name.clone(),
            icon: achievement.icon.clone(),
            unlocked: achievement.unlocked,
            description: achievement.description.clone(),
        }
    }
}

/// Home page progress card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressVm {
    pub completed_lessons: u32,
    pub total_lessons: u32,
    pub percent: u8,
}

impl ProgressVm {
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} of {} lessons completed",
            self.completed_lessons, self.total_lessons
        )
    }
}

/// Completed lessons come from the profile when the server reports them,
/// otherwise from the progress list.
#[must_use]
pub fn build_progress(
    user: Option<&User>,
    total_lessons: usize,
    progress: &[LessonProgress],
) -> ProgressVm {
    let total_lessons = u32::try_from(total_lessons).unwrap_or(u32::MAX);
    let from_progress = progress.iter().filter(|entry| entry.completed).count();
    let completed_lessons = user
        .and_then(|user| user.completed_lessons)
        .unwrap_or_else(|| u32::try_from(from_progress).unwrap_or(u32::MAX));

    ProgressVm {
        completed_lessons,
        total_lessons,
        percent: percent_of(completed_lessons, total_lessons),
    }
}

#[must_use]
pub fn map_achievement_badges(achievements: &[Achievement]) -> Vec<AchievementBadgeVm> {
    achievements.iter().map(AchievementBadgeVm::from).collect()
}

fn percent_of(done: u32, total: u32) -> u8 {
    if total == 0 {
        return 0;
    }
    let scaled = (u64::from(done.min(total)) * 200 + u64::from(total)) / (2 * u64::from(total));
    u8::try_from(scaled).unwrap_or(100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use artlearn_core::model::{LessonId, UserId};

    fn user(completed: Option<u32>) -> User {
        User {
            id: UserId::new(1),
            username: "Ana".into(),
            email: "ana@x.com".into(),
            level: "Beginner".into(),
            total_xp: 0,
            avatar_url: None,
            completed_lessons: completed,
            completed_exercises: None,
        }
    }

    #[test]
    fn percent_rounds_to_nearest() {
        assert_eq!(percent_of(0, 0), 0);
        assert_eq!(percent_of(1, 3), 33);
        assert_eq!(percent_of(2, 3), 67);
        assert_eq!(percent_of(5, 4), 100);
    }

    #[test]
    fn prefers_server_count() {
        let progress = vec![LessonProgress {
            lesson_id: LessonId::new(1),
            completed: true,
            completed_at: None,
            rating: None,
        }];
        let vm = build_progress(Some(&user(Some(3))), 4, &progress);
        assert_eq!(vm.completed_lessons, 3);
        assert_eq!(vm.percent, 75);
        assert_eq!(vm.summary(), "3 of 4 lessons completed");

        let vm = build_progress(Some(&user(None)), 4, &progress);
        assert_eq!(vm.completed_lessons, 1);
        let vm = build_progress(None, 4, &[]);
        assert_eq!(vm.percent, 0);
    }

    #[test]
    fn badges_keep_unlock_state() {
        let badges = map_achievement_badges(&[Achievement {
            id: AchievementId::new(2),
            name: "Speed sketcher".into(),
            icon: "Zap".into(),
            unlocked: true,
            description: Some("Finish five exercises".into()),
            requirement_type: None,
            requirement_value: None,
            unlocked_at: None,
        }]);
        assert_eq!(badges.len(), 1);
        assert!(badges[0].unlocked);
        assert_eq!(badges[0].name, "Speed sketcher");
    }
}
