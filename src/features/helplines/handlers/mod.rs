pub mod helpline_handler;
