use serde::Serialize;

use crate::model::task::{Task, TaskId};

// ---------------------------------------------------------------------------
// JSON output structs

#[derive(Serialize)]
pub struct TaskJson {
    pub id: TaskId,
    pub title: String,
    pub done: bool,
}

#[derive(Serialize)]
pub struct TaskListJson {
    pub count: usize,
    pub done: usize,
    pub tasks: Vec<TaskJson>,
}

pub fn task_to_json(task: &Task) -> TaskJson {
    TaskJson {
        id: task.id,
        title: task.title.clone(),
        done: task.done,
    }
}

pub fn task_list_to_json(tasks: &[Task]) -> TaskListJson {
    TaskListJson {
        count: tasks.len(),
        done: tasks.iter().filter(|t| t.done).count(),
        tasks: tasks.iter().map(task_to_json).collect(),
    }
}

// ---------------------------------------------------------------------------
// Text output

/// One task per line: `[x] 3 Buy oat milk`
pub fn format_task_line(task: &Task) -> String {
    format!("{} {} {}", task.checkbox(), task.id, task.title)
}

/// The whole list, or `(no tasks)` when empty
pub fn format_task_list(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "(no tasks)".to_string();
    }
    tasks
        .iter()
        .map(format_task_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// `1 task` / `3 tasks`
pub fn task_count_label(count: usize) -> String {
    format!("{} task{}", count, if count == 1 { "" } else { "s" })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Task> {
        vec![
            Task {
                id: TaskId(1),
                title: "Buy oat milk".into(),
                done: true,
            },
            Task::new(TaskId(3), "Walk dog"),
        ]
    }

    #[test]
    fn test_text_list() {
        assert_eq!(
            format_task_list(&sample()),
            "[x] 1 Buy oat milk\n[ ] 3 Walk dog"
        );
        assert_eq!(format_task_list(&[]), "(no tasks)");
    }

    #[test]
    fn test_count_label() {
        assert_eq!(task_count_label(0), "0 tasks");
        assert_eq!(task_count_label(1), "1 task");
        assert_eq!(task_count_label(2), "2 tasks");
    }

    #[test]
    fn test_json_list() {
        let json = serde_json::to_string_pretty(&task_list_to_json(&sample())).unwrap();
        insta::assert_snapshot!(json, @r#"
        {
          "count": 2,
          "done": 1,
          "tasks": [
            {
              "id": 1,
              "title": "Buy oat milk",
              "done": true
            },
            {
              "id": 3,
              "title": "Walk dog",
              "done": false
            }
          ]
        }
        "#);
    }
}
