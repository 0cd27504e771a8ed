pub mod date;
pub mod logging;
pub mod path;
pub mod table;
