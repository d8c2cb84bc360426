use axum::{
    extract::State,
    response::{IntoResponse, Response, Redirect, Json},
};
use tower_sessions::Session;
use crate::errors::{AppError, AppResult};
use crate::models::{Employee, EmployeeUpdate, NewEmployee};
use crate::state::EmployeeState;
use crate::views::escape;
use super::auth::current_user;
use super::extract::{FormData, RoutePath};

pub async fn index(
    State(state): State<EmployeeState>,
    session: Session,
) -> AppResult<Response> {
    let username = current_user(&session).await?;
    let employees = state.employees.read().await.list();
    tracing::debug!("Listing {} employees for {}", employees.len(), username);

    let rows = employees.iter().map(|employee| {
        format!(
            r#"<tr>
                <td>{id}</td>
                <td>{name}</td>
                <td>{position}</td>
                <td>{salary}</td>
                <td class="action-cell">
                    <a href="/employees/{id}/edit" class="edit-btn">Edit</a>
                    <form action="/employees/{id}/delete" method="post" class="inline-form">
                        <button type="submit" class="delete-btn">Delete</button>
                    </form>
                </td>
            </tr>"#,
            id = employee.id,
            name = escape(&employee.name),
            position = escape(&employee.position),
            salary = escape(&employee.salary),
        )
    }).collect::<Vec<_>>().join("\n");

    let html = state.templates.render(
        "index.html",
        &[
            ("username", &escape(&username)),
            ("employees", &rows),
            ("employee_count", &employees.len().to_string()),
        ],
    )?;
    Ok(html.into_response())
}

pub async fn create_employee(
    State(state): State<EmployeeState>,
    FormData(form): FormData<NewEmployee>,
) -> AppResult<Response> {
    let employee = state.employees.write().await.add(form)?;
    tracing::info!("Added employee {} ({})", employee.id, employee.name);
    Ok(Redirect::to("/").into_response())
}

pub async fn list_employees(
    State(state): State<EmployeeState>,
) -> Json<Vec<Employee>> {
    let employees = state.employees.read().await.list();
    Json(employees)
}

pub async fn get_employee(
    State(state): State<EmployeeState>,
    RoutePath(employee_id): RoutePath<u64>,
) -> AppResult<Json<Employee>> {
    let employee = state.employees.read().await.get(employee_id).cloned();
    employee.map(Json).ok_or_else(|| {
        tracing::warn!("Employee not found: {}", employee_id);
        AppError::EmployeeNotFound(employee_id)
    })
}

pub async fn edit_employee(
    State(state): State<EmployeeState>,
    RoutePath(employee_id): RoutePath<u64>,
) -> AppResult<Response> {
    let Some(employee) = state.employees.read().await.get(employee_id).cloned() else {
        tracing::warn!("Edit requested for unknown employee {}", employee_id);
        return Ok(Redirect::to("/").into_response());
    };

    let html = state.templates.render(
        "update.html",
        &[
            ("id", &employee.id.to_string()),
            ("name", &escape(&employee.name)),
            ("position", &escape(&employee.position)),
            ("salary", &escape(&employee.salary)),
        ],
    )?;
    Ok(html.into_response())
}

pub async fn update_employee(
    State(state): State<EmployeeState>,
    RoutePath(employee_id): RoutePath<u64>,
    FormData(update): FormData<EmployeeUpdate>,
) -> AppResult<Response> {
    let updated = state
        .employees
        .write()
        .await
        .update(employee_id, update)?
        .ok_or(AppError::EmployeeNotFound(employee_id))?;

    tracing::info!("Updated employee {}", updated.id);
    Ok(Redirect::to("/").into_response())
}

pub async fn delete_employee(
    State(state): State<EmployeeState>,
    RoutePath(employee_id): RoutePath<u64>,
) -> AppResult<Response> {
    let removed = state
        .employees
        .write()
        .await
        .delete(employee_id)?
        .ok_or(AppError::EmployeeNotFound(employee_id))?;

    tracing::info!("Deleted employee {} ({})", removed.id, removed.name);
    Ok(Redirect::to("/").into_response())
}
