//! Backend Record Projections
//!
//! Data structures matching backend entities. Everything here is a transient
//! in-memory view held by the page that fetched it; the backend owns the
//! records and stays authoritative.

use serde::{Deserialize, Serialize};

/// Status literal the backend sets once proof has been submitted
pub const STATUS_SUBMITTED: &str = "submitted";

/// Event data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "_id")]
    pub id: String,
    /// List endpoints call this `title`, the get-one endpoint `name`
    #[serde(alias = "name")]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub date: String,
    #[serde(rename = "totalAttendees", default)]
    pub total_attendees: u32,
    /// Ids of the tasks under this event
    #[serde(rename = "task", default)]
    pub tasks: Vec<String>,
    #[serde(rename = "taskCompleted", default)]
    pub tasks_completed: Vec<String>,
}

impl Event {
    /// Task completion percentage, rounded; 0 when the event has no tasks
    pub fn completion_pct(&self) -> u32 {
        let total = self.tasks.len() as u32;
        if total == 0 {
            return 0;
        }
        let completed = self.tasks_completed.len() as u32;
        (completed * 100 + total / 2) / total
    }
}

/// Reference to an attendee as embedded in a task's assignee list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendeeRef {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "fullName", default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
}

/// Owning event of a task, which the backend returns either populated or as
/// a bare id depending on the endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventRef {
    Populated {
        #[serde(rename = "_id", default)]
        id: String,
        #[serde(alias = "title", default)]
        name: String,
    },
    Id(String),
}

impl EventRef {
    pub fn label(&self) -> &str {
        match self {
            EventRef::Populated { name, .. } => name,
            EventRef::Id(id) => id,
        }
    }
}

/// Task as seen by the admin views. A task carries zero or more assignees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventTask {
    #[serde(rename = "_id")]
    pub id: String,
    pub agenda: String,
    #[serde(default)]
    pub status: String,
    #[serde(rename = "lastdate", default)]
    pub due: String,
    #[serde(rename = "relatedEvent", default)]
    pub related_event: Option<EventRef>,
    #[serde(rename = "assignedAttendees", default)]
    pub assigned: Vec<AttendeeRef>,
}

/// Attendee as seen by the admin roster views
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attendee {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub username: String,
    #[serde(rename = "coverImage", default)]
    pub cover_image: Option<String>,
    #[serde(rename = "task", default)]
    pub tasks: Vec<String>,
}

impl Attendee {
    pub fn is_assigned(&self) -> bool {
        !self.tasks.is_empty()
    }
}

/// Task as seen by the end user who has to complete it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserTask {
    #[serde(rename = "taskId")]
    pub task_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: String,
}

impl UserTask {
    pub fn is_submitted(&self) -> bool {
        self.status == STATUS_SUBMITTED
    }
}

/// The logged-in end user's own profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "fullName", default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub username: String,
}

// ========================
// Optimistic List Patches
// ========================
//
// Applied to a page's in-memory list after the server confirms a mutation,
// instead of refetching.

/// Remove a confirmed-deleted event from the list
pub fn remove_event(events: &mut Vec<Event>, event_id: &str) {
    events.retain(|event| event.id != event_id);
}

/// Record a confirmed assignment on the matching task
pub fn assign_to_task(tasks: &mut [EventTask], task_id: &str, attendee: AttendeeRef) {
    if let Some(task) = tasks.iter_mut().find(|task| task.id == task_id) {
        task.assigned.push(attendee);
    }
}

/// Rewrite a confirmed-updated task's editable fields in place
pub fn rewrite_task(tasks: &mut [EventTask], task_id: &str, agenda: &str, due: &str) {
    if let Some(task) = tasks.iter_mut().find(|task| task.id == task_id) {
        task.agenda = agenda.to_string();
        task.due = due.to_string();
    }
}

/// Remove a confirmed-deleted task from the list
pub fn remove_task(tasks: &mut Vec<EventTask>, task_id: &str) {
    tasks.retain(|task| task.id != task_id);
}

/// Flip a task to submitted after the proof upload was confirmed
pub fn mark_submitted(tasks: &mut [UserTask], task_id: &str) {
    if let Some(task) = tasks.iter_mut().find(|task| task.task_id == task_id) {
        task.status = STATUS_SUBMITTED.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_event(id: &str, tasks: usize, completed: usize) -> Event {
        Event {
            id: id.to_string(),
            title: format!("Event {}", id),
            description: String::new(),
            location: String::new(),
            date: String::new(),
            total_attendees: 0,
            tasks: (0..tasks).map(|n| n.to_string()).collect(),
            tasks_completed: (0..completed).map(|n| n.to_string()).collect(),
        }
    }

    fn make_task(id: &str) -> EventTask {
        EventTask {
            id: id.to_string(),
            agenda: format!("Task {}", id),
            status: "pending".to_string(),
            due: "2025-01-10".to_string(),
            related_event: None,
            assigned: Vec::new(),
        }
    }

    #[test]
    fn test_completion_pct() {
        assert_eq!(make_event("a", 0, 0).completion_pct(), 0);
        assert_eq!(make_event("a", 4, 1).completion_pct(), 25);
        assert_eq!(make_event("a", 3, 1).completion_pct(), 33);
        assert_eq!(make_event("a", 3, 2).completion_pct(), 67);
        assert_eq!(make_event("a", 2, 2).completion_pct(), 100);
    }

    #[test]
    fn test_remove_event() {
        let mut events = vec![make_event("a", 0, 0), make_event("b", 0, 0)];
        remove_event(&mut events, "a");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, "b");

        // Unknown id leaves the list unchanged
        remove_event(&mut events, "zzz");
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_assign_to_task() {
        let mut tasks = vec![make_task("t1"), make_task("t2")];
        let attendee = AttendeeRef {
            id: "u1".to_string(),
            full_name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        };
        assign_to_task(&mut tasks, "t2", attendee.clone());
        assert!(tasks[0].assigned.is_empty());
        assert_eq!(tasks[1].assigned, vec![attendee.clone()]);

        // A second assignee accumulates rather than replacing
        let second = AttendeeRef {
            id: "u2".to_string(),
            full_name: "Grace".to_string(),
            email: "grace@example.com".to_string(),
        };
        assign_to_task(&mut tasks, "t2", second);
        assert_eq!(tasks[1].assigned.len(), 2);
    }

    #[test]
    fn test_rewrite_and_remove_task() {
        let mut tasks = vec![make_task("t1"), make_task("t2")];
        rewrite_task(&mut tasks, "t1", "New agenda", "2025-02-01");
        assert_eq!(tasks[0].agenda, "New agenda");
        assert_eq!(tasks[0].due, "2025-02-01");
        assert_eq!(tasks[1].agenda, "Task t2");

        remove_task(&mut tasks, "t1");
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, "t2");
    }

    #[test]
    fn test_mark_submitted() {
        let mut tasks = vec![
            UserTask {
                task_id: "t1".to_string(),
                title: "Setup".to_string(),
                description: String::new(),
                status: "pending".to_string(),
            },
            UserTask {
                task_id: "t2".to_string(),
                title: "Teardown".to_string(),
                description: String::new(),
                status: "pending".to_string(),
            },
        ];
        mark_submitted(&mut tasks, "t1");
        assert!(tasks[0].is_submitted());
        assert!(!tasks[1].is_submitted());
    }

    #[test]
    fn test_event_ref_populated_or_bare() {
        let populated: EventRef =
            serde_json::from_str(r#"{"_id":"e1","name":"Kickoff"}"#).expect("populated");
        assert_eq!(populated.label(), "Kickoff");

        let bare: EventRef = serde_json::from_str(r#""e1""#).expect("bare id");
        assert_eq!(bare.label(), "e1");
    }

    #[test]
    fn test_event_title_alias() {
        let from_list: Event = serde_json::from_str(
            r#"{"_id":"e1","title":"Kickoff","location":"HQ","date":"2025-01-10"}"#,
        )
        .expect("list shape");
        assert_eq!(from_list.title, "Kickoff");

        let from_get_one: Event =
            serde_json::from_str(r#"{"_id":"e1","name":"Kickoff"}"#).expect("get-one shape");
        assert_eq!(from_get_one.title, "Kickoff");
    }
}
