// Shared state for each of the three apps, built once per process from the configuration.
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use crate::config::Config;
use crate::errors::StoreResult;
use crate::services::{verifier_for, Authenticator, MockWeather, WeatherSource};
use crate::store::{EmployeeStore, TaskFile, UserStore};
use crate::views::Templates;

#[derive(Clone)]
pub struct EmployeeState {
    pub employees: Arc<RwLock<EmployeeStore>>,
    pub auth: Authenticator,
    pub templates: Templates,
}

impl EmployeeState {
    pub fn load(config: &Config) -> StoreResult<Self> {
        let users = UserStore::load(&config.storage.users_file)?;
        let employees = EmployeeStore::load(&config.storage.employees_file)?;
        Ok(Self {
            employees: Arc::new(RwLock::new(employees)),
            auth: Authenticator::new(users, verifier_for(config.auth.password_scheme)),
            templates: Templates::new(format!("{}/employees", config.server.template_dir)),
        })
    }
}

#[derive(Clone)]
pub struct TodoState {
    // Serializes read-modify-write cycles within this process
    pub tasks: Arc<Mutex<TaskFile>>,
    pub templates: Templates,
}

impl TodoState {
    pub fn new(config: &Config) -> Self {
        Self {
            tasks: Arc::new(Mutex::new(TaskFile::new(&config.storage.tasks_file))),
            templates: Templates::new(format!("{}/todo", config.server.template_dir)),
        }
    }
}

#[derive(Clone)]
pub struct WeatherState {
    pub mock: Arc<MockWeather>,
    pub source: WeatherSource,
    pub templates: Templates,
}

impl WeatherState {
    pub fn new(config: &Config) -> Self {
        let mock = Arc::new(MockWeather::builtin());
        Self {
            source: WeatherSource::from_config(&config.weather, mock.clone()),
            mock,
            templates: Templates::new(format!("{}/weather", config.server.template_dir)),
        }
    }
}
