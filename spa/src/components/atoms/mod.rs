pub mod eye_icon;
pub mod field_error;
pub mod input_text;
