mod behavior;
mod cart;
mod chat;
mod coupon;
mod course;

pub use behavior::{ApiResponse, BehaviorAnalysis, SuggestionResponse, UserBehavior};
pub use cart::{CartItem, CartLine, CartView};
pub use chat::{ChatMessage, ChatReply, Intent, Sender};
pub use coupon::{Coupon, DiscountKind};
pub use course::{Category, Course, Level};
