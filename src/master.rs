//! src/master.rs
use crate::aggregate::RevenueTable;
use crate::error::PipelineError;
use crate::splitter::InputSplit;
use crate::worker::{Worker, WorkerId};
use tokio::task::JoinSet;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq)]
pub enum TaskState {
    Idle,
    InProgress,
    Completed,
}

#[derive(Clone, Debug)]
pub struct MapTask {
    pub task_id: Uuid,
    pub state: TaskState,
    pub worker_id: Option<WorkerId>,
    pub input_split: InputSplit,
}

impl MapTask {
    pub fn new(input_split: InputSplit) -> Self {
        MapTask {
            task_id: Uuid::new_v4(),
            state: TaskState::Idle,
            worker_id: None,
            input_split,
        }
    }
}

pub struct Master {
    workers: Vec<Worker>,
    map_tasks: Vec<MapTask>,
}

impl Master {
    pub fn new(mut workers: Vec<Worker>, input_splits: Vec<InputSplit>) -> Self {
        if workers.is_empty() {
            workers.push(Worker::new());
        }
        let map_tasks = input_splits.into_iter().map(MapTask::new).collect();
        let mut master = Master { workers, map_tasks };
        master.assign_tasks();
        master
    }

    fn assign_tasks(&mut self) {
        let num_workers = self.workers.len();
        for (curr_worker, task) in self.map_tasks.iter_mut().enumerate() {
            let worker = &mut self.workers[curr_worker % num_workers];
            task.worker_id = Some(worker.id().clone());
            worker.assign_map(task.clone());
        }
    }

    fn get_map_task_mut(&mut self, task_id: Uuid) -> Option<&mut MapTask> {
        self.map_tasks
            .iter_mut()
            .find(|task| task.task_id == task_id)
    }

    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }

    pub fn map_tasks(&self) -> &[MapTask] {
        &self.map_tasks
    }

    /// Runs every busy worker on the blocking pool and returns their partial
    /// tables ordered by worker position, independent of completion order.
    #[tracing::instrument(name = "Run map phase", skip(self), fields(workers = self.workers.len(), tasks = self.map_tasks.len()))]
    pub async fn run(&mut self) -> Result<Vec<RevenueTable>, PipelineError> {
        let mut pending = JoinSet::new();
        let mut idle = Vec::new();
        for (position, mut worker) in std::mem::take(&mut self.workers).into_iter().enumerate() {
            if worker.has_task() {
                pending.spawn_blocking(move || {
                    let table = worker.run();
                    (position, worker, table)
                });
            } else {
                idle.push((position, worker));
            }
        }

        let mut finished = Vec::with_capacity(pending.len());
        while let Some(joined) = pending.join_next().await {
            finished.push(joined.map_err(PipelineError::Worker)?);
        }
        finished.sort_by_key(|(position, _, _)| *position);

        let mut partials = Vec::with_capacity(finished.len());
        let mut workers = Vec::with_capacity(finished.len() + idle.len());
        for (position, worker, table) in finished {
            self.record_completion(&worker);
            workers.push((position, worker));
            partials.push(table);
        }
        workers.extend(idle);
        workers.sort_by_key(|(position, _)| *position);
        self.workers = workers.into_iter().map(|(_, worker)| worker).collect();

        tracing::info!("map phase produced {} partial tables", partials.len());
        Ok(partials)
    }

    fn record_completion(&mut self, worker: &Worker) {
        for done in worker.map_tasks() {
            if let Some(task) = self.get_map_task_mut(done.task_id) {
                task.state = done.state.clone();
            }
        }
    }
}
