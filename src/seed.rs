//! Static mock data the storefront runs on.
//!
//! Loaded once at startup; courses are mutated only through favorite toggles
//! and coupons never change at runtime.

use chrono::{TimeZone, Utc};

use crate::models::{Category, Coupon, Course, DiscountKind, Level};

#[allow(clippy::too_many_arguments)]
fn course(
    id: &str,
    title: &str,
    instructor: &str,
    price: u64,
    original_price: Option<u64>,
    description: &str,
    rating: f64,
    students: u64,
    duration: &str,
    level: Level,
    category: Category,
    tags: &[&str],
) -> Course {
    Course {
        id: id.to_string(),
        title: title.to_string(),
        instructor: instructor.to_string(),
        price,
        original_price,
        description: description.to_string(),
        rating,
        students,
        duration: duration.to_string(),
        level,
        category,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        is_favorite: false,
    }
}

/// The full course catalog
pub fn courses() -> Vec<Course> {
    vec![
        course(
            "1",
            "Tiếng Anh Giao Tiếp Cùng Người Mỹ",
            "Cô Sarah Johnson",
            899_000,
            Some(1_200_000),
            "Luyện giao tiếp tiếng Anh hàng ngày với giáo viên bản xứ",
            4.8,
            2341,
            "12 tuần",
            Level::Beginner,
            Category::Language,
            &["Tiếng Anh", "Giao tiếp", "Người Mỹ"],
        ),
        course(
            "2",
            "Lập Trình Web Toàn Diện với React & Node.js",
            "Thầy Minh Đức",
            1_299_000,
            Some(1_800_000),
            "Xây dựng ứng dụng web hoàn chỉnh từ frontend đến backend",
            4.9,
            3156,
            "16 tuần",
            Level::Intermediate,
            Category::Programming,
            &["React", "JavaScript", "Node.js", "Lập trình"],
        ),
        course(
            "3",
            "Digital Marketing Từ Cơ Bản Đến Nâng Cao",
            "Cô Thu Hà",
            799_000,
            None,
            "Chiến lược marketing số thực chiến cho doanh nghiệp nhỏ",
            4.6,
            1876,
            "10 tuần",
            Level::Beginner,
            Category::Marketing,
            &["Marketing", "SEO", "Quảng cáo"],
        ),
        course(
            "4",
            "Thiết Kế Đồ Họa Chuyên Nghiệp với Photoshop",
            "Thầy Quang Huy",
            699_000,
            Some(950_000),
            "Làm chủ Photoshop và tư duy thiết kế thị giác",
            4.7,
            1543,
            "8 tuần",
            Level::Beginner,
            Category::Design,
            &["Thiết kế", "Photoshop", "Đồ họa"],
        ),
        course(
            "5",
            "Python Cho Khoa Học Dữ Liệu",
            "TS. Lan Anh",
            1_199_000,
            None,
            "Phân tích dữ liệu với Python, pandas và trực quan hóa",
            4.8,
            2087,
            "14 tuần",
            Level::Intermediate,
            Category::DataScience,
            &["Python", "Data Science", "AI"],
        ),
        course(
            "6",
            "Quản Trị Kinh Doanh Hiện Đại",
            "Thầy Hoàng Nam",
            899_000,
            None,
            "Kỹ năng quản lý và lãnh đạo cho người mới lên vị trí quản lý",
            4.5,
            1234,
            "12 tuần",
            Level::Intermediate,
            Category::Business,
            &["Kinh doanh", "Quản lý", "Lãnh đạo"],
        ),
        course(
            "7",
            "JavaScript & TypeScript Nâng Cao",
            "Thầy Alex Kim",
            950_000,
            None,
            "Đi sâu vào JavaScript và TypeScript hiện đại cho phát triển chuyên nghiệp",
            4.7,
            1234,
            "10 tuần",
            Level::Advanced,
            Category::Programming,
            &["JavaScript", "TypeScript", "ES6+", "Advanced"],
        ),
        course(
            "8",
            "Nguyên Tắc Thiết Kế UI/UX",
            "Cô Lisa Wang",
            750_000,
            None,
            "Học các nguyên tắc cơ bản về thiết kế giao diện và trải nghiệm người dùng",
            4.6,
            987,
            "8 tuần",
            Level::Beginner,
            Category::Design,
            &["UI", "UX", "Design", "Figma"],
        ),
        course(
            "9",
            "Advanced English Conversation",
            "Mr. John Smith",
            899_000,
            Some(1_200_000),
            "Nâng cao kỹ năng giao tiếp tiếng Anh với giáo viên bản xứ",
            4.9,
            2156,
            "12 tuần",
            Level::Advanced,
            Category::Language,
            &["Tiếng Anh", "Giao tiếp", "Advanced", "Native Speaker"],
        ),
        course(
            "10",
            "Digital Marketing Strategy 2024",
            "Cô Anna Nguyen",
            1_100_000,
            None,
            "Chiến lược marketing số toàn diện cho năm 2024",
            4.8,
            1876,
            "14 tuần",
            Level::Intermediate,
            Category::Marketing,
            &["Digital Marketing", "Strategy", "ROI"],
        ),
        course(
            "11",
            "Machine Learning với Python",
            "TS. David Park",
            1_350_000,
            None,
            "Khóa học machine learning thực hành với Python và TensorFlow",
            4.7,
            1543,
            "16 tuần",
            Level::Advanced,
            Category::DataScience,
            &["Python", "Machine Learning", "TensorFlow", "AI"],
        ),
        course(
            "12",
            "Startup & Entrepreneurship",
            "Thầy Michael Tran",
            980_000,
            None,
            "Hướng dẫn khởi nghiệp và xây dựng startup thành công",
            4.5,
            876,
            "10 tuần",
            Level::Beginner,
            Category::Business,
            &["Startup", "Entrepreneurship", "Business Plan", "Funding"],
        ),
    ]
}

/// The active coupon set
pub fn coupons() -> Vec<Coupon> {
    let expires_at = Utc.with_ymd_and_hms(2030, 12, 31, 23, 59, 59).unwrap();
    vec![
        Coupon {
            id: "1".to_string(),
            code: "WELCOME10".to_string(),
            kind: DiscountKind::Percentage,
            value: 10,
            description: "Giảm 10% cho đơn hàng đầu tiên".to_string(),
            min_amount: 500_000,
            max_discount: Some(200_000),
            expires_at,
            is_active: true,
        },
        Coupon {
            id: "2".to_string(),
            code: "STUDENT20".to_string(),
            kind: DiscountKind::Percentage,
            value: 20,
            description: "Giảm 20% cho sinh viên".to_string(),
            min_amount: 800_000,
            max_discount: Some(500_000),
            expires_at,
            is_active: true,
        },
        Coupon {
            id: "3".to_string(),
            code: "COMBO30".to_string(),
            kind: DiscountKind::Percentage,
            value: 30,
            description: "Giảm 30% khi mua từ 3 khóa học".to_string(),
            min_amount: 1_500_000,
            max_discount: Some(1_000_000),
            expires_at,
            is_active: true,
        },
        Coupon {
            id: "4".to_string(),
            code: "SAVE100K".to_string(),
            kind: DiscountKind::Fixed,
            value: 100_000,
            description: "Giảm 100.000 VNĐ cho đơn hàng từ 1 triệu".to_string(),
            min_amount: 1_000_000,
            max_discount: None,
            expires_at,
            is_active: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_ids_are_unique() {
        let courses = courses();
        let mut ids: Vec<_> = courses.iter().map(|c| c.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), courses.len());
    }

    #[test]
    fn test_discounted_prices_stay_below_original() {
        for course in courses() {
            if let Some(original) = course.original_price {
                assert!(course.price <= original, "course {}", course.id);
            }
        }
    }

    #[test]
    fn test_percentage_coupons_are_in_range() {
        for coupon in coupons() {
            if coupon.kind == DiscountKind::Percentage {
                assert!(coupon.value > 0 && coupon.value <= 100, "coupon {}", coupon.code);
            }
        }
    }
}
