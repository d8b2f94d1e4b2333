pub mod geocoding_handler;
