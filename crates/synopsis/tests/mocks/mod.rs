pub mod fallback;
pub mod model;
pub mod primary;
