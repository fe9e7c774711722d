mod chat;
mod content;
mod doctors;
mod health;
mod predict;
mod status;

pub use chat::chatbot_handler;
pub use content::{emergency_info_handler, health_tips_handler};
pub use doctors::nearby_doctors_handler;
pub use health::health_handler;
pub use predict::{diabetes_handler, heart_handler, kidney_handler};
pub use status::status_handler;
