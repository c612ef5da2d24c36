pub mod error_state;
pub mod expandable_card;
pub mod image_carousel;
pub mod loader;
pub mod page_header;
pub mod quick_tip;
pub mod truncated_text;
pub mod ui;

pub use error_state::ErrorState;
pub use expandable_card::{CardVariant, ExpandableCard};
pub use image_carousel::ImageCarousel;
pub use loader::Loader;
pub use page_header::PageHeader;
pub use quick_tip::QuickTip;
pub use truncated_text::TruncatedText;
