pub mod staged_file;
