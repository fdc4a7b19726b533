//! src/worker.rs
use crate::aggregate::RevenueTable;
use crate::functions::{CombiningEmitter, Mapper};
use crate::mappers::SearchRevenueMapper;
use crate::master::{MapTask, TaskState};
use uuid::Uuid;

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct WorkerId(Uuid);

impl WorkerId {
    pub fn new() -> Self {
        WorkerId(Uuid::new_v4())
    }

    pub fn id(&self) -> Uuid {
        self.0
    }
}

impl Default for WorkerId {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug)]
pub struct Worker {
    id: WorkerId,
    map_tasks: Vec<MapTask>,
}

impl Default for Worker {
    fn default() -> Self {
        Self::new()
    }
}

impl Worker {
    pub fn new() -> Self {
        Worker {
            id: WorkerId::new(),
            map_tasks: vec![],
        }
    }

    pub fn id(&self) -> &WorkerId {
        &self.id
    }

    pub fn assign_map(&mut self, task: MapTask) {
        self.map_tasks.push(task);
    }

    pub fn has_task(&self) -> bool {
        !self.map_tasks.is_empty()
    }

    pub fn map_tasks(&self) -> &[MapTask] {
        &self.map_tasks
    }

    /// Runs every assigned map task through one combiner and returns this
    /// worker's partial sums.
    #[tracing::instrument(name = "Run map worker", skip(self), fields(worker_id = %self.id.id()))]
    pub fn run(&mut self) -> RevenueTable {
        let mut mapper = SearchRevenueMapper::build(CombiningEmitter::default());
        for task in self.map_tasks.iter_mut() {
            task.state = TaskState::InProgress;
            for record in task.input_split.records() {
                mapper.map(record);
            }
            task.state = TaskState::Completed;
            tracing::debug!(
                task_id = %task.task_id,
                records = task.input_split.len(),
                "map task completed"
            );
        }
        let emitter = mapper.into_emitter();
        tracing::debug!(rows = emitter.rows_seen(), "worker finished mapping");
        emitter.into_table()
    }
}
