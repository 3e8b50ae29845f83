mod guard;
mod words;

pub use guard::LengthGuard;
pub use words::count_words;
