pub mod figure;
pub mod file_io;
pub mod palette;
pub mod viewer;
