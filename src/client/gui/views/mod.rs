pub mod submit_form;
