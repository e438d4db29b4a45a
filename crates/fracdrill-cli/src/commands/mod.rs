pub mod arithmetic;
pub mod bank;
pub mod benchmark;
pub mod init;
pub mod solve;
