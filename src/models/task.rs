//! Task model.

use serde::{Deserialize, Serialize};

use crate::store::Record;

/// A project task assigned to a team member.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u64,
    pub member_name: String,
    pub project: String,
    pub task_description: String,
    pub start_date: String,
    pub due_date: String,
    pub status: String,
}

impl Record for Task {
    const FILE: &'static str = "tasks.json";
    const NAME: &'static str = "Task";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}

/// Request body for adding a task.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    pub member_name: String,
    #[serde(default)]
    pub project: String,
    pub task_description: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub due_date: String,
    #[serde(default)]
    pub status: String,
}

impl CreateTaskRequest {
    pub fn into_record(self) -> Task {
        Task {
            id: 0,
            member_name: self.member_name,
            project: self.project,
            task_description: self.task_description,
            start_date: self.start_date,
            due_date: self.due_date,
            status: self.status,
        }
    }
}

/// Request body for updating a task.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    #[serde(default)]
    pub member_name: Option<String>,
    #[serde(default)]
    pub project: Option<String>,
    #[serde(default)]
    pub task_description: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl UpdateTaskRequest {
    pub fn apply(self, task: &mut Task) {
        if let Some(member_name) = self.member_name {
            task.member_name = member_name;
        }
        if let Some(project) = self.project {
            task.project = project;
        }
        if let Some(task_description) = self.task_description {
            task.task_description = task_description;
        }
        if let Some(start_date) = self.start_date {
            task.start_date = start_date;
        }
        if let Some(due_date) = self.due_date {
            task.due_date = due_date;
        }
        if let Some(status) = self.status {
            task.status = status;
        }
    }
}
