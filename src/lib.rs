pub mod io;
pub mod logging;
pub mod state;
pub mod ui;
