//! Small shared helpers.

pub mod emoji;

pub use emoji::random_emoji;
