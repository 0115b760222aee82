use todo_core::entities::Task;

const SEPARATOR_WIDTH: usize = 50;

/// Render the task listing shown by "View Tasks".
pub fn render_tasks(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return String::from("No tasks found!\n");
    }

    let separator = "-".repeat(SEPARATOR_WIDTH);
    let mut out = format!("\nYour Tasks:\n{separator}\n");
    for task in tasks {
        out.push_str(&render_task(task));
        out.push_str(&separator);
        out.push('\n');
    }
    out
}

fn render_task(task: &Task) -> String {
    format!(
        "ID: {}\nTitle: {}\nDescription: {}\nStatus: {}\n",
        task.id,
        task.title,
        task.description.as_deref().unwrap_or_default(),
        task.status
    )
}
