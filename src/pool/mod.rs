//! Worker thread pool and its supporting primitives.

mod semaphore;
mod thread_pool;

pub use semaphore::Semaphore;
pub use thread_pool::ThreadPool;
