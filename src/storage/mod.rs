pub mod file_system_storage;
pub mod storage;
pub mod util;
