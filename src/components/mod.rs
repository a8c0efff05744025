pub mod help;
pub mod month_view;
pub mod reminder_list;
pub mod status_bar;

pub use help::Help;
pub use month_view::MonthView;
pub use reminder_list::ReminderList;
pub use status_bar::StatusBar;
