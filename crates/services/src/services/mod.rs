pub mod class_directory;
