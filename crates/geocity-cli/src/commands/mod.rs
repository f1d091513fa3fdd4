pub mod check;
pub mod init;
pub mod play;
pub mod sample;
pub mod validate;
