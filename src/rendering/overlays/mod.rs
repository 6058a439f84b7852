//! Frame items drawn over the board
//!
//! - [`status`] - caption under the board
//! - [`promotion`] - promotion overlay layout, hit-testing and drawing

pub mod promotion;
pub mod status;

pub use promotion::{promotion_overlay_items, PromotionLayout, PROMOTION_TITLE};
pub use status::{status_items, status_text};
