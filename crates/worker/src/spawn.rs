use std::future::Future;
use std::sync::OnceLock;

use tokio::runtime::{Builder, Handle, Runtime};
use tokio::task::JoinHandle;
use tracing::Instrument;

use crate::TaskClass;

/// Runtime for callers that are not inside tokio, e.g. a synchronous UI
/// event handler kicking off a refresh.
fn fallback_runtime() -> &'static Runtime {
	static FALLBACK: OnceLock<Runtime> = OnceLock::new();
	FALLBACK.get_or_init(|| {
		Builder::new_multi_thread()
			.enable_all()
			.worker_threads(1)
			.thread_name("vesta-worker")
			.build()
			.expect("vesta-worker fallback runtime must build")
	})
}

/// Spawns `fut` inside a `worker` span tagged with `class`.
///
/// Runs on the current tokio runtime when there is one, otherwise on a
/// process-wide single-thread fallback.
pub fn spawn<F>(class: TaskClass, fut: F) -> JoinHandle<F::Output>
where
	F: Future + Send + 'static,
	F::Output: Send + 'static,
{
	let fut = fut.instrument(tracing::debug_span!("worker", class = class.as_str()));
	match Handle::try_current() {
		Ok(handle) => {
			tracing::trace!(worker_class = class.as_str(), "worker.spawn");
			handle.spawn(fut)
		}
		Err(_) => {
			tracing::trace!(worker_class = class.as_str(), "worker.spawn fallback");
			fallback_runtime().spawn(fut)
		}
	}
}
