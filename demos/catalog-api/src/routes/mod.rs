pub mod cards;
pub mod favorites;
