mod analytics;
mod faq;
mod home;
mod not_found;
mod settings;

pub use analytics::AnalyticsPage;
pub use faq::FaqPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use settings::SettingsPage;
