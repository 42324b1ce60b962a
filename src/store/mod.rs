pub mod filter;
pub mod storage;
pub mod types;

pub use filter::{search_jobs, JobQuery};
pub use storage::{get_data_path, load_store, save_store};
pub use types::{JobRepository, MemoryStore, ProfileRepository};
