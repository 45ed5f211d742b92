mod dashboard;
mod error;
mod login;
mod project_detail;
mod projects;
mod register;
mod settings;

pub use dashboard::DashboardPage;
pub use error::ErrorPage;
pub use login::LoginPage;
pub use project_detail::ProjectDetailPage;
pub use projects::ProjectsPage;
pub use register::RegisterPage;
pub use settings::SettingsPage;
