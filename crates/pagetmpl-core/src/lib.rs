pub mod config;
pub mod logging;

pub mod form;
pub mod source;
pub mod submit;
pub mod template;
pub mod url_model;
