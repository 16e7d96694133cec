pub mod command;
pub mod reservation;
pub mod room;
