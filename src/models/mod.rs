mod user;
mod employee;
mod forms;
mod weather;

pub use user::User;
pub use employee::{Employee, NewEmployee, EmployeeUpdate};
pub use forms::{LoginForm, LoginQuery, TaskForm, TaskGuard, CityForm};
pub use weather::WeatherReport;
