pub mod messages;
pub mod status_style;
