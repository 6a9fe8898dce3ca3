// storage/mod.rs
// Database access module

pub mod pool;

pub use pool::init_db_pool_with_path;
