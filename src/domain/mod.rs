pub mod draw;
pub mod room;
pub mod user;
