//! Scripted assistant: keyword intent classification plus catalog filtering.
//!
//! Classification is a single pass over a fixed priority table; the first
//! group with a substring hit wins. The same input always produces the same
//! reply, there is no model behind this.

use crate::models::{Category, ChatReply, Course, Intent, Level};

use super::recommendations;

/// Maximum suggestions attached to a reply
const SUGGESTION_LIMIT: usize = 3;

/// Rating floor for the quality-inquiry filter
const QUALITY_RATING_FLOOR: f64 = 4.7;

/// One row of the classification table: keywords checked in table order
struct IntentRule {
    intent: Intent,
    keywords: &'static [&'static str],
}

/// Priority-ordered keyword table; earlier rows win
const INTENT_RULES: &[IntentRule] = &[
    IntentRule {
        intent: Intent::English,
        keywords: &["tiếng anh", "english", "người mỹ", "giao tiếp"],
    },
    IntentRule {
        intent: Intent::Programming,
        keywords: &["lập trình", "code", "web", "react", "javascript"],
    },
    IntentRule {
        intent: Intent::Marketing,
        keywords: &["marketing", "quảng cáo", "bán hàng"],
    },
    IntentRule {
        intent: Intent::Design,
        keywords: &["thiết kế", "design", "photoshop", "đồ họa"],
    },
    IntentRule {
        intent: Intent::DataScience,
        keywords: &["python", "data", "dữ liệu", "machine learning", "ai"],
    },
    IntentRule {
        intent: Intent::Business,
        keywords: &["kinh doanh", "business", "quản lý", "lãnh đạo"],
    },
    IntentRule {
        intent: Intent::PriceInquiry,
        keywords: &["giá rẻ", "khuyến mãi", "miễn phí", "sale"],
    },
    IntentRule {
        intent: Intent::QualityInquiry,
        keywords: &["tốt nhất", "chất lượng", "đánh giá cao", "nổi tiếng"],
    },
    IntentRule {
        intent: Intent::BeginnerInquiry,
        keywords: &["người mới", "cơ bản", "bắt đầu", "beginner"],
    },
    IntentRule {
        intent: Intent::AdvancedInquiry,
        keywords: &["nâng cao", "chuyên sâu", "advanced", "expert"],
    },
];

const NO_MATCH_RESPONSE: &str = "Xin lỗi, tôi chưa tìm thấy khóa học phù hợp với yêu cầu của bạn. \
     Bạn có thể thử mô tả chi tiết hơn về những gì bạn muốn học không?";

/// Classifies free-text input into an intent label
pub fn classify(message: &str) -> Intent {
    let message = message.to_lowercase();
    INTENT_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|keyword| message.contains(keyword)))
        .map(|rule| rule.intent)
        .unwrap_or(Intent::General)
}

/// Produces the canned response and ranked suggestions for a message
pub fn respond(message: &str, courses: &[Course]) -> ChatReply {
    let intent = classify(message);
    let suggestions = suggestions_for(intent, courses);

    let message = if suggestions.is_empty() {
        NO_MATCH_RESPONSE.to_string()
    } else {
        response_for(intent).to_string()
    };

    ChatReply {
        message,
        suggestions,
        intent,
    }
}

/// Prompts surfaced to users as conversation openers
pub fn conversation_starters() -> Vec<String> {
    [
        "Tôi muốn học tiếng Anh với người Mỹ",
        "Khóa học lập trình web cho người mới bắt đầu",
        "Marketing online hiệu quả nhất",
        "Thiết kế đồ họa từ cơ bản",
        "Python cho khoa học dữ liệu",
        "Kỹ năng kinh doanh và lãnh đạo",
        "Khóa học nào đang có khuyến mãi?",
        "Khóa học nào được đánh giá cao nhất?",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn category_tag_filter(
    courses: &[Course],
    category: Category,
    tags: &[&str],
) -> Vec<Course> {
    courses
        .iter()
        .filter(|course| course.category == category || tags.iter().any(|tag| course.has_tag(tag)))
        .cloned()
        .collect()
}

fn suggestions_for(intent: Intent, courses: &[Course]) -> Vec<Course> {
    let mut suggestions = match intent {
        Intent::English => category_tag_filter(courses, Category::Language, &["Tiếng Anh"]),
        Intent::Programming => category_tag_filter(
            courses,
            Category::Programming,
            &["React", "JavaScript", "Node.js", "Lập trình"],
        ),
        Intent::Marketing => {
            category_tag_filter(courses, Category::Marketing, &["SEO", "Marketing", "Quảng cáo"])
        }
        Intent::Design => category_tag_filter(
            courses,
            Category::Design,
            &["Thiết kế", "Photoshop", "Illustrator"],
        ),
        Intent::DataScience => category_tag_filter(
            courses,
            Category::DataScience,
            &["Python", "AI", "Machine Learning"],
        ),
        Intent::Business => category_tag_filter(
            courses,
            Category::Business,
            &["Kinh doanh", "Lãnh đạo", "Quản lý"],
        ),
        Intent::PriceInquiry => {
            let mut discounted: Vec<Course> =
                courses.iter().filter(|c| c.is_discounted()).cloned().collect();
            discounted.sort_by_key(|c| c.price);
            discounted
        }
        Intent::QualityInquiry => {
            let mut rated: Vec<Course> = courses
                .iter()
                .filter(|c| c.rating >= QUALITY_RATING_FLOOR)
                .cloned()
                .collect();
            rated.sort_by(|a, b| {
                b.rating
                    .partial_cmp(&a.rating)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
            rated
        }
        Intent::BeginnerInquiry => courses
            .iter()
            .filter(|c| c.level == Level::Beginner)
            .cloned()
            .collect(),
        Intent::AdvancedInquiry => courses
            .iter()
            .filter(|c| c.level == Level::Advanced)
            .cloned()
            .collect(),
        Intent::General => recommendations::popular(courses),
    };

    suggestions.truncate(SUGGESTION_LIMIT);
    suggestions
}

fn response_for(intent: Intent) -> &'static str {
    match intent {
        Intent::English => {
            "Tuyệt vời! Tôi hiểu bạn muốn học tiếng Anh. Đây là những khóa học tiếng Anh \
             chất lượng cao với giáo viên bản xứ mà tôi gợi ý cho bạn:"
        }
        Intent::Programming => {
            "Bạn quan tâm đến lập trình! Đây là những khóa học lập trình từ cơ bản đến \
             nâng cao mà tôi khuyên bạn nên xem:"
        }
        Intent::Marketing => {
            "Marketing là lĩnh vực rất thú vị! Tôi có một số khóa học marketing hiệu quả cho bạn:"
        }
        Intent::Design => {
            "Thiết kế là một kỹ năng tuyệt vời! Đây là những khóa học thiết kế phù hợp với bạn:"
        }
        Intent::DataScience => {
            "Khoa học dữ liệu và AI đang rất hot! Tôi gợi ý những khóa học này cho bạn:"
        }
        Intent::Business => {
            "Kỹ năng kinh doanh rất quan trọng! Đây là những khóa học kinh doanh chất lượng:"
        }
        Intent::PriceInquiry => {
            "Tôi hiểu bạn đang tìm khóa học có giá tốt! Đây là những khóa học đang có \
             khuyến mãi hấp dẫn:"
        }
        Intent::QualityInquiry => {
            "Bạn muốn tìm khóa học chất lượng cao! Đây là những khóa học được đánh giá tốt nhất:"
        }
        Intent::BeginnerInquiry => {
            "Tuyệt vời! Bạn đang muốn bắt đầu học một kỹ năng mới. Đây là những khóa học \
             cơ bản phù hợp:"
        }
        Intent::AdvancedInquiry => {
            "Bạn đã có kinh nghiệm và muốn nâng cao kỹ năng! Đây là những khóa học nâng cao \
             tôi gợi ý:"
        }
        Intent::General => {
            "Tôi hiểu bạn đang tìm hiểu về các khóa học. Đây là những khóa học phổ biến nhất \
             mà nhiều học viên lựa chọn:"
        }
    }
}
