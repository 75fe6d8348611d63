use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! remote_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            #[must_use]
            pub fn new(id: u64) -> Self {
                Self(id)
            }

            /// Returns the underlying u64 value
            #[must_use]
            pub fn value(&self) -> u64 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim()
                    .parse::<u64>()
                    .map($name::new)
                    .map_err(|_| ParseIdError {
                        kind: stringify!($name),
                    })
            }
        }
    };
}

remote_id!(
    /// Server-assigned identifier of a user profile.
    UserId
);
remote_id!(
    /// Identifier of a lesson.
    LessonId
);
remote_id!(
    /// Identifier of a timed exercise.
    ExerciseId
);
remote_id!(
    /// Identifier of an achievement definition.
    AchievementId
);
remote_id!(
    /// Identifier of a community gallery post.
    GalleryItemId
);

/// Error type for parsing ID from string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    kind: &'static str,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse {} from string", self.kind)
    }
}

impl std::error::Error for ParseIdError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_display() {
        let id = UserId::new(42);
        assert_eq!(id.to_string(), "42");
        assert_eq!(format!("{id:?}"), "UserId(42)");
    }

    #[test]
    fn test_lesson_id_from_str() {
        let id: LessonId = "123".parse().unwrap();
        assert_eq!(id, LessonId::new(123));
    }

    #[test]
    fn test_exercise_id_from_str_invalid() {
        let err = "not-a-number".parse::<ExerciseId>().unwrap_err();
        assert_eq!(err.to_string(), "failed to parse ExerciseId from string");
    }

    #[test]
    fn test_ids_serialize_as_plain_numbers() {
        let json = serde_json::to_string(&GalleryItemId::new(7)).unwrap();
        assert_eq!(json, "7");
        let parsed: AchievementId = serde_json::from_str("9").unwrap();
        assert_eq!(parsed, AchievementId::new(9));
    }
}
