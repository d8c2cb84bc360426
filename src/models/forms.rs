use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct LoginQuery {
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TaskForm {
    pub task: String,
    // Text the client saw at this index when the form was rendered
    pub expected: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct TaskGuard {
    pub expected: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CityForm {
    #[serde(default)]
    pub city: String,
}
