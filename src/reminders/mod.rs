pub mod store;

pub use store::ReminderStore;
