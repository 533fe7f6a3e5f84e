pub mod get_upload;
