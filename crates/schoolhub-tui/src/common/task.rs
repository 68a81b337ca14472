//! Async task lifecycle tracking.
//!
//! Every provider call runs as a spawned task identified by a [`TaskId`].
//! The reducer only accepts a completion whose id matches the active one for
//! that kind, so a response that outlives its flow (Back pressed, feature
//! reset) is dropped instead of mutating state it no longer owns.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub u64);

#[derive(Debug, Default)]
pub struct TaskSeq {
    next: u64,
}

impl TaskSeq {
    pub fn next_id(&mut self) -> TaskId {
        let id = TaskId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    SessionFetch,
    RequestCode,
    VerifyCode,
    SignOut,
}

#[derive(Debug, Clone)]
pub struct TaskStarted {
    pub id: TaskId,
}

#[derive(Debug)]
pub struct TaskCompleted<E> {
    pub id: TaskId,
    pub result: E,
}

/// Per-kind task state (stored in `TuiState`, mutated only by the reducer).
///
/// One outstanding call per kind: the active id doubles as the busy flag the
/// submit gating checks.
#[derive(Debug, Default, Clone)]
pub struct TaskState {
    pub active: Option<TaskId>,
}

impl TaskState {
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn on_started(&mut self, started: &TaskStarted) {
        self.active = Some(started.id);
    }

    pub fn finish_if_active(&mut self, id: TaskId) -> bool {
        let ok = self.active == Some(id);
        if ok {
            self.active = None;
        }
        ok
    }
}

#[derive(Debug, Default, Clone)]
pub struct Tasks {
    pub session_fetch: TaskState,
    pub request_code: TaskState,
    pub verify_code: TaskState,
    pub sign_out: TaskState,
}

impl Tasks {
    pub fn state_mut(&mut self, kind: TaskKind) -> &mut TaskState {
        match kind {
            TaskKind::SessionFetch => &mut self.session_fetch,
            TaskKind::RequestCode => &mut self.request_code,
            TaskKind::VerifyCode => &mut self.verify_code,
            TaskKind::SignOut => &mut self.sign_out,
        }
    }

    pub fn is_any_running(&self) -> bool {
        self.session_fetch.is_running()
            || self.request_code.is_running()
            || self.verify_code.is_running()
            || self.sign_out.is_running()
    }
}
