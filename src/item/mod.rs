pub mod item;
pub mod parse;

pub use item::Item;
pub use parse::parse_number;
