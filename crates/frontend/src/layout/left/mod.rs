pub mod left;
pub mod nav;
pub mod sidebar;

pub use left::Overlay;
pub use sidebar::Sidebar;
