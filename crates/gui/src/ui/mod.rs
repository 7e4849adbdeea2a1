pub mod fallback;
pub mod prompt_card;
