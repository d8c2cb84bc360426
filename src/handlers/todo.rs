use axum::{
    extract::{Form, State},
    response::{IntoResponse, Response, Redirect},
};
use crate::errors::{AppError, AppResult};
use crate::models::{TaskForm, TaskGuard};
use crate::state::TodoState;
use crate::store::TaskOutcome;
use crate::views::escape;
use super::extract::{FormData, RoutePath};

pub async fn index(
    State(state): State<TodoState>,
) -> AppResult<Response> {
    let tasks = state.tasks.lock().await.load()?;

    let rows = tasks.iter().enumerate().map(|(index, task)| {
        let text = escape(task);
        format!(
            r#"<li>
                <span class="task-text">{text}</span>
                <a href="/edit/{index}" class="edit-btn">Edit</a>
                <form action="/delete/{index}" method="post" class="inline-form">
                    <input type="hidden" name="expected" value="{text}">
                    <button type="submit" class="delete-btn">Delete</button>
                </form>
            </li>"#,
        )
    }).collect::<Vec<_>>().join("\n");

    let html = state.templates.render(
        "index.html",
        &[("tasks", &rows), ("task_count", &tasks.len().to_string())],
    )?;
    Ok(html.into_response())
}

pub async fn serve_add_page(
    State(state): State<TodoState>,
) -> AppResult<Response> {
    Ok(state.templates.render("add_task.html", &[])?.into_response())
}

pub async fn add_task(
    State(state): State<TodoState>,
    FormData(form): FormData<TaskForm>,
) -> AppResult<Response> {
    match state.tasks.lock().await.add(&form.task)? {
        TaskOutcome::Applied => tracing::info!("Added task"),
        outcome => tracing::debug!("Task not added: {:?}", outcome),
    }
    Ok(Redirect::to("/").into_response())
}

pub async fn serve_edit_page(
    State(state): State<TodoState>,
    RoutePath(task_id): RoutePath<usize>,
) -> AppResult<Response> {
    let tasks = state.tasks.lock().await.load()?;
    // An index past the end renders an empty form
    let task = tasks.get(task_id).map(|t| escape(t)).unwrap_or_default();

    let html = state.templates.render(
        "edit_task.html",
        &[("task", &task), ("task_id", &task_id.to_string())],
    )?;
    Ok(html.into_response())
}

pub async fn edit_task(
    State(state): State<TodoState>,
    RoutePath(task_id): RoutePath<usize>,
    FormData(form): FormData<TaskForm>,
) -> AppResult<Response> {
    let outcome = state
        .tasks
        .lock()
        .await
        .edit(task_id, &form.task, form.expected.as_deref())?;

    match outcome {
        TaskOutcome::Applied => tracing::info!("Edited task {}", task_id),
        TaskOutcome::Blank => tracing::debug!("Ignored blank edit of task {}", task_id),
        TaskOutcome::OutOfRange => return Err(AppError::TaskNotFound(task_id)),
        TaskOutcome::Stale => {
            tracing::warn!("Refused edit of task {}, it changed since the form was loaded", task_id);
            return Err(AppError::StaleTask(task_id));
        }
    }
    Ok(Redirect::to("/").into_response())
}

pub async fn delete_task(
    State(state): State<TodoState>,
    RoutePath(task_id): RoutePath<usize>,
    form: Option<Form<TaskGuard>>,
) -> AppResult<Response> {
    let guard = form.map(|Form(guard)| guard).unwrap_or_default();
    let outcome = state
        .tasks
        .lock()
        .await
        .delete(task_id, guard.expected.as_deref())?;

    match outcome {
        TaskOutcome::Applied => tracing::info!("Deleted task {}", task_id),
        TaskOutcome::Stale => {
            tracing::warn!("Refused delete of task {}, it changed since the page was loaded", task_id);
            return Err(AppError::StaleTask(task_id));
        }
        TaskOutcome::OutOfRange | TaskOutcome::Blank => {
            tracing::debug!("Nothing to delete at index {}", task_id);
        }
    }
    Ok(Redirect::to("/").into_response())
}
