pub mod submit_service;
