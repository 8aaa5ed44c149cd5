pub mod analyze;
pub mod not_found;

pub use analyze::AnalyzePage;
pub use not_found::NotFoundPage;
