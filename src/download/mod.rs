//! Download primitives and the bounded download queue.

mod queue;
mod stream;

pub use queue::{resolve_all, run_queue, ResolvedTask, TaskOutcome, DEFAULT_CONCURRENCY};
pub use stream::stream_to_file;
