//! Interactive menu loop.
//!
//! The shell owns the task service for the whole session and closes it when
//! the user exits or input ends. Storage failures are reported and the loop
//! carries on; only console I/O failures end it early.

mod menu;
mod parse;
mod render;

use std::io::{BufRead, Write};
use std::ops::ControlFlow;

use todo_core::outcomes::{DeleteOutcome, UpdateOutcome};
use todo_db::error::DatabaseError;
use todo_db::service::TaskService;

use menu::{CHOICE_PROMPT, MENU, MenuChoice};
use parse::parse_task_id;
use render::render_tasks;

/// `Break` means input ended mid-operation.
type Step = anyhow::Result<ControlFlow<()>>;

pub struct Shell<R, W> {
    service: TaskService,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub const fn new(service: TaskService, input: R, output: W) -> Self {
        Self {
            service,
            input,
            output,
        }
    }

    /// Run until the user picks Exit or input ends, then close storage.
    pub async fn run(mut self) -> anyhow::Result<()> {
        loop {
            write!(self.output, "{MENU}")?;
            let Some(line) = self.prompt(CHOICE_PROMPT)? else {
                break;
            };

            let step = match MenuChoice::parse(&line) {
                Some(MenuChoice::Add) => self.add().await?,
                Some(MenuChoice::View) => self.view().await?,
                Some(MenuChoice::Edit) => self.edit().await?,
                Some(MenuChoice::Delete) => self.delete().await?,
                Some(MenuChoice::Exit) => break,
                None => {
                    writeln!(self.output, "Invalid choice! Please try again.")?;
                    ControlFlow::Continue(())
                }
            };
            if step.is_break() {
                break;
            }
        }

        let Self {
            service,
            mut output,
            ..
        } = self;
        service.close();
        writeln!(output, "Goodbye!")?;
        output.flush()?;
        Ok(())
    }

    /// Print `label`, read one line. `None` at end of input.
    fn prompt(&mut self, label: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Prompt for a task id. `Some(None)` when the line was not a number.
    fn prompt_id(&mut self, label: &str) -> anyhow::Result<Option<Option<i64>>> {
        let Some(raw) = self.prompt(label)? else {
            return Ok(None);
        };
        match parse_task_id(&raw) {
            Ok(id) => Ok(Some(Some(id))),
            Err(error) => {
                tracing::debug!(%error, "rejected task id");
                writeln!(self.output, "{error}")?;
                Ok(Some(None))
            }
        }
    }

    fn report(&mut self, action: &str, error: &DatabaseError) -> anyhow::Result<()> {
        tracing::warn!(%error, action, "task operation failed");
        writeln!(self.output, "Error {action}: {error}")?;
        Ok(())
    }

    async fn add(&mut self) -> Step {
        let Some(title) = self.prompt("Enter task title: ")? else {
            return Ok(ControlFlow::Break(()));
        };
        let Some(description) = self.prompt("Enter task description: ")? else {
            return Ok(ControlFlow::Break(()));
        };

        match self.service.add_task(&title, Some(description.as_str())).await {
            Ok(_) => writeln!(self.output, "Task added successfully!")?,
            Err(error) => self.report("adding task", &error)?,
        }
        Ok(ControlFlow::Continue(()))
    }

    async fn view(&mut self) -> Step {
        match self.service.list_tasks().await {
            Ok(tasks) => write!(self.output, "{}", render_tasks(&tasks))?,
            Err(error) => self.report("viewing tasks", &error)?,
        }
        Ok(ControlFlow::Continue(()))
    }

    async fn edit(&mut self) -> Step {
        let id = match self.prompt_id("Enter task ID to edit: ")? {
            None => return Ok(ControlFlow::Break(())),
            Some(None) => return Ok(ControlFlow::Continue(())),
            Some(Some(id)) => id,
        };
        let Some(title) = self.prompt("Enter new title: ")? else {
            return Ok(ControlFlow::Break(()));
        };
        let Some(description) = self.prompt("Enter new description: ")? else {
            return Ok(ControlFlow::Break(()));
        };

        match self.service.update_task(id, &title, Some(description.as_str())).await {
            Ok(UpdateOutcome::Updated) => writeln!(self.output, "Task updated successfully!")?,
            Ok(UpdateOutcome::NotFound) => writeln!(self.output, "Task not found!")?,
            Err(error) => self.report("updating task", &error)?,
        }
        Ok(ControlFlow::Continue(()))
    }

    async fn delete(&mut self) -> Step {
        let id = match self.prompt_id("Enter task ID to delete: ")? {
            None => return Ok(ControlFlow::Break(())),
            Some(None) => return Ok(ControlFlow::Continue(())),
            Some(Some(id)) => id,
        };

        match self.service.delete_task(id).await {
            Ok(DeleteOutcome::Deleted) => writeln!(self.output, "Task deleted successfully!")?,
            Ok(DeleteOutcome::NotFound) => writeln!(self.output, "Task not found!")?,
            Err(error) => self.report("deleting task", &error)?,
        }
        Ok(ControlFlow::Continue(()))
    }
}
