pub mod grid;
pub mod html;
pub mod page;

pub use grid::{CellView, Expanded, Grid, Recommendations, COLUMNS, PRIMARY_LIMIT, RECOMMENDATION_LIMIT};
pub use html::{escape, page_link, render_error_page, render_page};
pub use page::PageModel;
