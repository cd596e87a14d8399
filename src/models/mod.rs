pub mod filter;
pub mod genre;
pub mod movie;
pub mod validation;

pub use filter::{current_year, FilterParams, FilterState, Mode, ALL_SENTINEL};
pub use genre::Genre;
pub use movie::{join_image_url, Movie};
pub use validation::{NumberValidator, StringValidator, ValidationError, MAX_RATING, MIN_RATING, MIN_YEAR, RATING_STEP};
