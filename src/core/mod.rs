pub mod calculator;
pub mod day_view;
pub mod rules;
pub mod store;
pub mod time_grid;

pub use day_view::DayScheduleView;
pub use rules::BookingRules;
pub use store::AppointmentStore;
pub use time_grid::TimeGrid;
