use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::Utc;
use reqwest::StatusCode;

use artlearn_core::model::{
    Achievement, AchievementId, Exercise, ExerciseCompletion, ExerciseCompletionResult,
    GalleryItem, GalleryItemId, Lesson, LessonCompletion, LessonCompletionResult, LessonId,
    LessonProgress, NewProfile, UnlockedAchievement, UploadReceipt, User, UserId,
};

use super::{GalleryUploadRequest, RemoteGateway};
use crate::error::GatewayError;

const DEFAULT_LEVEL: &str = "Beginner";
const LESSON_XP: u64 = 100;

/// Remote operations, used to inject failures into `InMemoryGateway`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GatewayOp {
    CreateUser,
    FetchUser,
    ListLessons,
    GetLesson,
    ListExercises,
    CompleteExercise,
    ListAchievements,
    ListProgress,
    CompleteLesson,
    ListGallery,
    UploadGalleryItem,
}

#[derive(Default)]
struct State {
    users: Vec<User>,
    lessons: Vec<Lesson>,
    exercises: Vec<Exercise>,
    achievements: Vec<Achievement>,
    unlocked: HashMap<UserId, HashMap<AchievementId, chrono::NaiveDateTime>>,
    progress: HashMap<UserId, Vec<LessonProgress>>,
    exercise_counts: HashMap<UserId, u32>,
    gallery: Vec<GalleryItem>,
    failing: HashSet<GatewayOp>,
    calls: Vec<GatewayOp>,
    next_id: u64,
}

impl State {
    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn user_mut(&mut self, id: UserId) -> Result<&mut User, GatewayError> {
        self.users
            .iter_mut()
            .find(|user| user.id == id)
            .ok_or(GatewayError::HttpStatus(StatusCode::NOT_FOUND))
    }

    /// Unlock every pending achievement satisfied by the user's counters.
    fn unlock_pending(
        &mut self,
        user_id: UserId,
        lesson_id: Option<LessonId>,
    ) -> Vec<UnlockedAchievement> {
        let lessons_done = self.progress.get(&user_id).map_or(0, |entries| {
            entries.iter().filter(|entry| entry.completed).count()
        });
        let exercises_done = self.exercise_counts.get(&user_id).copied().unwrap_or(0);
        let now = Utc::now().naive_utc();
        let unlocked = self.unlocked.entry(user_id).or_default();

        let mut fresh = Vec::new();
        for achievement in &self.achievements {
            if unlocked.contains_key(&achievement.id) {
                continue;
            }
            let Some(required) = achievement.requirement_value else {
                continue;
            };
            let satisfied = match achievement.requirement_type.as_deref() {
                Some("lessons_completed") => i64::try_from(lessons_done).unwrap_or(i64::MAX) >= required,
                Some("exercises_completed") => i64::from(exercises_done) >= required,
                Some("specific_lesson") => {
                    lesson_id.is_some_and(|id| i64::try_from(id.value()).ok() == Some(required))
                }
                _ => false,
            };
            if satisfied {
                unlocked.insert(achievement.id, now);
                fresh.push(UnlockedAchievement {
                    id: achievement.id,
                    name: achievement.name.clone(),
                });
            }
        }
        fresh
    }
}

/// In-process stand-in for the remote services.
///
/// Mirrors the server rules that matter to the client: completions award XP,
/// counter-based achievements unlock once, uploads appear first in the feed.
/// Individual operations can be made to fail with `fail_on`.
#[derive(Clone, Default)]
pub struct InMemoryGateway {
    state: Arc<Mutex<State>>,
}

impl InMemoryGateway {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn enter(&self, op: GatewayOp) -> Result<MutexGuard<'_, State>, GatewayError> {
        let mut state = self.lock();
        state.calls.push(op);
        if state.failing.contains(&op) {
            return Err(GatewayError::HttpStatus(StatusCode::SERVICE_UNAVAILABLE));
        }
        Ok(state)
    }

    /// Make `op` fail with `503 Service Unavailable` until `recover` is called.
    pub fn fail_on(&self, op: GatewayOp) {
        self.lock().failing.insert(op);
    }

    pub fn recover(&self, op: GatewayOp) {
        self.lock().failing.remove(&op);
    }

    /// Operations invoked so far, in call order.
    #[must_use]
    pub fn calls(&self) -> Vec<GatewayOp> {
        self.lock().calls.clone()
    }

    #[must_use]
    pub fn call_count(&self, op: GatewayOp) -> usize {
        self.lock().calls.iter().filter(|call| **call == op).count()
    }

    pub fn insert_user(&self, user: User) {
        let mut state = self.lock();
        state.next_id = state.next_id.max(user.id.value());
        state.users.retain(|existing| existing.id != user.id);
        state.users.push(user);
    }

    pub fn seed_lessons(&self, lessons: Vec<Lesson>) {
        let mut state = self.lock();
        state.lessons = lessons;
        state.lessons.sort_by_key(|lesson| lesson.order_index);
    }

    pub fn seed_exercises(&self, exercises: Vec<Exercise>) {
        self.lock().exercises = exercises;
    }

    /// Achievement definitions; per-user `unlocked` flags are computed on read.
    pub fn seed_achievements(&self, achievements: Vec<Achievement>) {
        self.lock().achievements = achievements;
    }

    /// Feed items, newest first.
    pub fn seed_gallery(&self, items: Vec<GalleryItem>) {
        let mut state = self.lock();
        let max_id = items.iter().map(|item| item.id.value()).max().unwrap_or(0);
        state.next_id = state.next_id.max(max_id);
        state.gallery = items;
    }

    #[must_use]
    pub fn user(&self, id: UserId) -> Option<User> {
        self.lock().users.iter().find(|user| user.id == id).cloned()
    }
}

#[async_trait]
impl RemoteGateway for InMemoryGateway {
    async fn create_user(&self, profile: &NewProfile) -> Result<User, GatewayError> {
        let mut state = self.enter(GatewayOp::CreateUser)?;
        if profile.username().is_empty() || profile.email().is_empty() {
            return Err(GatewayError::HttpStatus(StatusCode::BAD_REQUEST));
        }
        let user = User {
            id: UserId::new(state.next_id()),
            username: profile.username().to_owned(),
            email: profile.email().to_owned(),
            level: DEFAULT_LEVEL.to_owned(),
            total_xp: 0,
            avatar_url: None,
            completed_lessons: None,
            completed_exercises: None,
        };
        state.users.push(user.clone());
        Ok(user)
    }

    async fn fetch_user(&self, id: UserId) -> Result<User, GatewayError> {
        let mut state = self.enter(GatewayOp::FetchUser)?;
        let lessons = state.progress.get(&id).map_or(0, |entries| {
            entries.iter().filter(|entry| entry.completed).count()
        });
        let exercises = state.exercise_counts.get(&id).copied().unwrap_or(0);
        let user = state.user_mut(id)?;
        let mut snapshot = user.clone();
        snapshot.completed_lessons = Some(u32::try_from(lessons).unwrap_or(u32::MAX));
        snapshot.completed_exercises = Some(exercises);
        Ok(snapshot)
    }

    async fn list_lessons(&self) -> Result<Vec<Lesson>, GatewayError> {
        let state = self.enter(GatewayOp::ListLessons)?;
        Ok(state.lessons.clone())
    }

    async fn get_lesson(&self, id: LessonId) -> Result<Lesson, GatewayError> {
        let state = self.enter(GatewayOp::GetLesson)?;
        state
            .lessons
            .iter()
            .find(|lesson| lesson.id == id)
            .cloned()
            .ok_or(GatewayError::HttpStatus(StatusCode::NOT_FOUND))
    }

    async fn list_exercises(&self) -> Result<Vec<Exercise>, GatewayError> {
        let state = self.enter(GatewayOp::ListExercises)?;
        Ok(state.exercises.clone())
    }

    async fn complete_exercise(
        &self,
        completion: &ExerciseCompletion,
    ) -> Result<ExerciseCompletionResult, GatewayError> {
        let mut state = self.enter(GatewayOp::CompleteExercise)?;
        let points = state
            .exercises
            .iter()
            .find(|exercise| exercise.id == completion.exercise_id)
            .map(|exercise| u64::from(exercise.points))
            .ok_or(GatewayError::HttpStatus(StatusCode::NOT_FOUND))?;
        let user = state.user_mut(completion.user_id)?;
        user.total_xp += points;
        let total_xp = user.total_xp;
        *state.exercise_counts.entry(completion.user_id).or_default() += 1;
        let new_achievements = state.unlock_pending(completion.user_id, None);
        let id = state.next_id();

        Ok(ExerciseCompletionResult {
            id: Some(id),
            xp_earned: points,
            total_xp,
            new_achievements,
        })
    }

    async fn list_achievements(&self, user_id: UserId) -> Result<Vec<Achievement>, GatewayError> {
        let state = self.enter(GatewayOp::ListAchievements)?;
        let unlocked = state.unlocked.get(&user_id);
        Ok(state
            .achievements
            .iter()
            .map(|achievement| {
                let unlocked_at = unlocked.and_then(|map| map.get(&achievement.id)).copied();
                Achievement {
                    unlocked: unlocked_at.is_some(),
                    unlocked_at,
                    ..achievement.clone()
                }
            })
            .collect())
    }

    async fn list_progress(&self, user_id: UserId) -> Result<Vec<LessonProgress>, GatewayError> {
        let state = self.enter(GatewayOp::ListProgress)?;
        Ok(state.progress.get(&user_id).cloned().unwrap_or_default())
    }

    async fn complete_lesson(
        &self,
        completion: &LessonCompletion,
    ) -> Result<LessonCompletionResult, GatewayError> {
        let mut state = self.enter(GatewayOp::CompleteLesson)?;
        if !state.lessons.iter().any(|lesson| lesson.id == completion.lesson_id) {
            return Err(GatewayError::HttpStatus(StatusCode::NOT_FOUND));
        }
        state.user_mut(completion.user_id)?.total_xp += LESSON_XP;

        let now = Utc::now().naive_utc();
        let entries = state.progress.entry(completion.user_id).or_default();
        match entries
            .iter_mut()
            .find(|entry| entry.lesson_id == completion.lesson_id)
        {
            Some(entry) => {
                entry.completed = true;
                entry.completed_at = Some(now);
                entry.rating = completion.rating;
            }
            None => entries.push(LessonProgress {
                lesson_id: completion.lesson_id,
                completed: true,
                completed_at: Some(now),
                rating: completion.rating,
            }),
        }
        let new_achievements = state.unlock_pending(completion.user_id, Some(completion.lesson_id));
        let id = state.next_id();

        Ok(LessonCompletionResult {
            id: Some(id),
            xp_earned: LESSON_XP,
            new_achievements,
        })
    }

    async fn list_gallery(&self) -> Result<Vec<GalleryItem>, GatewayError> {
        let state = self.enter(GatewayOp::ListGallery)?;
        Ok(state.gallery.clone())
    }

    async fn upload_gallery_item(
        &self,
        request: &GalleryUploadRequest,
    ) -> Result<UploadReceipt, GatewayError> {
        let mut state = self.enter(GatewayOp::UploadGalleryItem)?;
        let image = STANDARD
            .decode(&request.image)
            .map_err(|_| GatewayError::HttpStatus(StatusCode::BAD_REQUEST))?;
        if image.is_empty() {
            return Err(GatewayError::HttpStatus(StatusCode::BAD_REQUEST));
        }
        let (author, level) = {
            let user = state.user_mut(request.user_id)?;
            (user.username.clone(), user.level.clone())
        };
        let id = GalleryItemId::new(state.next_id());
        let image_url = format!("memory://gallery/{}_{}.png", request.user_id, id);

        state.gallery.insert(
            0,
            GalleryItem {
                id,
                user_id: Some(request.user_id),
                author,
                level,
                title: Some(request.title.clone()),
                description: Some(request.description.clone()),
                image_url: Some(image_url.clone()),
                likes: 0,
                comments: 0,
                created_at: Some(Utc::now().naive_utc()),
            },
        );

        Ok(UploadReceipt {
            id,
            image_url: Some(image_url),
        })
    }
}
