pub mod dictionary_store;
pub mod sweeper;
