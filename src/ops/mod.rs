pub mod item_controller;
pub mod script;
pub mod task_store;
