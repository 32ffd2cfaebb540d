pub mod card;
pub mod page;
pub mod series;

pub use card::*;
pub use page::*;
pub use series::*;
