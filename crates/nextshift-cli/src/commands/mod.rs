pub mod analyze;
pub mod init;
pub mod routes;
pub mod translate;
