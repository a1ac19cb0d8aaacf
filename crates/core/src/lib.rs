pub mod category;
pub mod money;
pub mod window;

pub use category::{Category, ParseCategoryError};
pub use money::Money;
pub use window::DateRange;
