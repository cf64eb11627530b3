pub mod command;
pub mod data_model;
pub mod delimiter;
pub mod table_state;
