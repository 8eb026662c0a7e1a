//! Heuristic course ranking strategies.
//!
//! All rankings are pure functions over the full course list plus a behavior
//! snapshot. Sorts are stable, so ties keep their catalog order and repeated
//! calls produce identical output.

use std::cmp::Ordering;

use crate::models::{Course, UserBehavior};

/// List size for the trending and similar-to-favorites rankings
const STRATEGY_LIMIT: usize = 6;
/// List size for the behavior-weighted ranking
const WEIGHTED_LIMIT: usize = 4;

/// Relevance weight for a favorite-category match
const CATEGORY_WEIGHT: f64 = 50.0;
/// Relevance weight for a favorite-instructor match
const INSTRUCTOR_WEIGHT: f64 = 30.0;
/// Mid-range price band that earns a small relevance bonus, VND
const PRICE_BAND: std::ops::RangeInclusive<u64> = 500_000..=1_500_000;

fn sort_by_score_desc(courses: &mut [Course], score: impl Fn(&Course) -> f64) {
    courses.sort_by(|a, b| {
        score(b)
            .partial_cmp(&score(a))
            .unwrap_or(Ordering::Equal)
    });
}

fn popularity(course: &Course) -> f64 {
    course.rating * course.students as f64
}

fn momentum(course: &Course) -> f64 {
    course.rating * (course.students.max(1) as f64).ln()
}

/// Courses ordered by raw popularity (`rating * students`), the shared
/// fallback ordering for the chat general intent and degraded suggestions
pub fn popular(courses: &[Course]) -> Vec<Course> {
    let mut ranked = courses.to_vec();
    sort_by_score_desc(&mut ranked, popularity);
    ranked
}

/// Top trending courses: `rating * ln(students)`, favorites excluded
pub fn trending(courses: &[Course], behavior: &UserBehavior) -> Vec<Course> {
    let mut ranked: Vec<Course> = courses
        .iter()
        .filter(|course| !behavior.has_favorited(&course.id))
        .cloned()
        .collect();
    sort_by_score_desc(&mut ranked, momentum);
    ranked.truncate(STRATEGY_LIMIT);
    ranked
}

/// Courses sharing a category or instructor with the favorite set, by rating
///
/// An empty favorite set yields an empty list.
pub fn similar_to_favorites(courses: &[Course], behavior: &UserBehavior) -> Vec<Course> {
    if behavior.favorite_courses.is_empty() {
        return Vec::new();
    }

    let mut ranked: Vec<Course> = courses
        .iter()
        .filter(|course| {
            !behavior.has_favorited(&course.id)
                && (behavior.likes_category(course.category)
                    || behavior
                        .favorite_instructors
                        .iter()
                        .any(|fav| fav == &course.instructor))
        })
        .cloned()
        .collect();
    sort_by_score_desc(&mut ranked, |c| c.rating);
    ranked.truncate(STRATEGY_LIMIT);
    ranked
}

/// Additive relevance score of a course against the behavior snapshot
pub fn relevance_score(course: &Course, behavior: &UserBehavior) -> f64 {
    let mut score = 0.0;

    if behavior.likes_category(course.category) {
        score += CATEGORY_WEIGHT;
    }

    if behavior.likes_instructor(&course.instructor) {
        score += INSTRUCTOR_WEIGHT;
    }

    score += course.rating * 5.0;
    score += (course.students.max(1) as f64).ln() * 2.0;

    if PRICE_BAND.contains(&course.price) {
        score += 10.0;
    }

    score
}

/// Behavior-weighted ranking used by the suggestion endpoint
///
/// Keeps courses matching a favorite category, a favorite instructor, or a
/// 4.7+ rating, always excluding already-favorited ids. When that filter
/// leaves nothing, degrades to the rating-sorted remainder.
pub fn behavior_weighted(courses: &[Course], behavior: &UserBehavior) -> Vec<Course> {
    let mut candidates: Vec<Course> = courses
        .iter()
        .filter(|course| {
            !behavior.has_favorited(&course.id)
                && (behavior.likes_category(course.category)
                    || behavior.likes_instructor(&course.instructor)
                    || course.rating >= 4.7)
        })
        .cloned()
        .collect();

    if candidates.is_empty() {
        candidates = courses
            .iter()
            .filter(|course| !behavior.has_favorited(&course.id))
            .cloned()
            .collect();
        sort_by_score_desc(&mut candidates, |c| c.rating);
    } else {
        sort_by_score_desc(&mut candidates, |c| relevance_score(c, behavior));
    }

    candidates.truncate(WEIGHTED_LIMIT);
    candidates
}
