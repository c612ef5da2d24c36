//! Read-only category view (MVVM: model / view_model / page)

mod model;
mod page;
mod view_model;

pub use page::CategoryView;
