pub mod overview_handler;
