//! Suggestion endpoint logic: behavior parsing plus ranked recommendations.

use crate::models::{BehaviorAnalysis, Course, SuggestionResponse, UserBehavior};

use super::recommendations;

/// Suggestions returned when no behavior snapshot is available
const DEFAULT_LIMIT: usize = 3;
/// Suggestions returned by the client-side degradation ranking
const FALLBACK_LIMIT: usize = 6;

/// Builds the suggestion payload for an optional raw behavior parameter
///
/// `behavior` is the still-encoded JSON string from the query. A missing
/// parameter yields the popularity default; a malformed one is logged and
/// degrades to the same default rather than failing the request.
pub fn build(courses: &[Course], behavior: Option<&str>) -> SuggestionResponse {
    let behavior = match behavior {
        Some(raw) => match serde_json::from_str::<UserBehavior>(raw) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring malformed behavior parameter");
                return SuggestionResponse {
                    suggestions: top_popular(courses, DEFAULT_LIMIT),
                    message: "Gợi ý khóa học phổ biến".to_string(),
                    behavior_analysis: None,
                };
            }
        },
        None => None,
    };

    match behavior {
        Some(behavior) => {
            let suggestions = recommendations::behavior_weighted(courses, &behavior);
            let message = format!(
                "Dựa trên {} khóa học yêu thích và {} danh mục quan tâm của bạn",
                behavior.favorite_courses.len(),
                behavior.favorite_categories.len()
            );
            SuggestionResponse {
                suggestions,
                message,
                behavior_analysis: Some(BehaviorAnalysis::from(&behavior)),
            }
        }
        None => SuggestionResponse {
            suggestions: top_popular(courses, DEFAULT_LIMIT),
            message: "Gợi ý phổ biến dành cho bạn".to_string(),
            behavior_analysis: None,
        },
    }
}

/// Locally computed degradation list used when the endpoint itself fails
pub fn fallback(courses: &[Course]) -> Vec<Course> {
    top_popular(courses, FALLBACK_LIMIT)
}

fn top_popular(courses: &[Course], limit: usize) -> Vec<Course> {
    let mut ranked = recommendations::popular(courses);
    ranked.truncate(limit);
    ranked
}
