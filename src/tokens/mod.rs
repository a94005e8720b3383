// Tokenization — token sources and normalized token sets.

pub mod set;
pub mod source;

pub use set::TokenSet;
pub use source::TokenSource;
