pub mod card;

pub use card::{build_card, CardDocument};
