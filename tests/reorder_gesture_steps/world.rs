//! Shared world state for drag-reorder BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use syncboard::list::{
    adapters::memory::{InMemoryRemoteTasks, RemoteCall},
    domain::{Task, TaskId},
    services::{
        reorder::{ReorderEngine, ReorderResult},
        sync::SyncController,
    },
    state::{DraftInput, TaskStore},
};
use syncboard::notice::board::NoticeBoard;

/// Engine type used by the BDD world.
pub type TestReorderEngine = ReorderEngine<InMemoryRemoteTasks, DefaultClock>;

/// Controller type used for scenario setup.
pub type TestSyncController = SyncController<InMemoryRemoteTasks, DefaultClock>;

/// Scenario world for drag-reorder behaviour tests.
pub struct ReorderWorld {
    pub remote: Arc<InMemoryRemoteTasks>,
    pub store: TaskStore,
    pub notices: NoticeBoard<DefaultClock>,
    pub controller: TestSyncController,
    pub engine: TestReorderEngine,
    pub last_drop: Option<ReorderResult<()>>,
}

impl ReorderWorld {
    /// Creates a world over a fresh in-memory remote store.
    #[must_use]
    pub fn new() -> Self {
        let remote = Arc::new(InMemoryRemoteTasks::new());
        let store = TaskStore::new();
        let draft = DraftInput::new();
        let notices = NoticeBoard::new(Arc::new(DefaultClock));
        let controller = SyncController::new(
            Arc::clone(&remote),
            store.clone(),
            draft.clone(),
            notices.clone(),
        );
        let engine = ReorderEngine::new(Arc::clone(&remote), store.clone(), notices.clone());

        Self {
            remote,
            store,
            notices,
            controller,
            engine,
            last_drop: None,
        }
    }

    /// Resolves a locally cached task id by its title.
    pub fn id_of(&self, title: &str) -> Result<TaskId, eyre::Report> {
        self.store
            .snapshot()
            .iter()
            .find(|task| task.title().as_str() == title)
            .map(Task::id)
            .ok_or_else(|| eyre::eyre!("no cached task titled {title:?}"))
    }
}

impl Default for ReorderWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ReorderWorld {
    ReorderWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Splits a scenario title list on the literal ", " separator.
pub fn split_titles(list: &str) -> Vec<String> {
    list.split(", ").map(str::to_owned).collect()
}

/// Returns the titles of `tasks` in sequence order.
pub fn titles_of(tasks: &[Task]) -> Vec<String> {
    tasks
        .iter()
        .map(|task| task.title().as_str().to_owned())
        .collect()
}

/// Maps a scenario operation name onto the matching remote call.
pub fn call_named(name: &str) -> Result<RemoteCall, eyre::Report> {
    match name {
        "fetch_all" => Ok(RemoteCall::FetchAll),
        "create" => Ok(RemoteCall::Create),
        "remove" => Ok(RemoteCall::Remove),
        "toggle" => Ok(RemoteCall::Toggle),
        "rename" => Ok(RemoteCall::Rename),
        "persist_order" => Ok(RemoteCall::PersistOrder),
        other => Err(eyre::eyre!("unknown remote call name {other:?}")),
    }
}
