//! Scriptable `SnapEnvironment` double.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use crate::domain::{AppError, SnapPaths};
use crate::ports::SnapEnvironment;

#[derive(Debug)]
pub struct FakeSnap {
    paths: SnapPaths,
    options: HashMap<String, String>,
    active: HashSet<String>,
    failing: HashSet<String>,
    status_queries: RefCell<Vec<String>>,
}

impl FakeSnap {
    pub fn new() -> Self {
        Self {
            paths: SnapPaths::new("/snap/ondemand/x1", "/var/snap/ondemand/common"),
            options: HashMap::new(),
            active: HashSet::new(),
            failing: HashSet::new(),
            status_queries: RefCell::new(Vec::new()),
        }
    }

    pub fn with_option(mut self, key: &str, value: &str) -> Self {
        self.options.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_active_service(mut self, service: &str) -> Self {
        self.active.insert(service.to_string());
        self
    }

    /// Make status queries for `service` fail like a broken `snapctl services`.
    pub fn with_failing_service(mut self, service: &str) -> Self {
        self.failing.insert(service.to_string());
        self
    }

    /// Services whose status has been queried, in order.
    pub fn status_queries(&self) -> Vec<String> {
        self.status_queries.borrow().clone()
    }
}

impl SnapEnvironment for FakeSnap {
    fn paths(&self) -> &SnapPaths {
        &self.paths
    }

    fn get_option(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.options.get(key).cloned())
    }

    fn service_is_active(&self, service: &str) -> Result<bool, AppError> {
        self.status_queries.borrow_mut().push(service.to_string());
        if self.failing.contains(service) {
            return Err(AppError::SnapCommand {
                command: format!("snapctl services ondemand.{}", service),
                details: "cannot communicate with server".into(),
            });
        }
        Ok(self.active.contains(service))
    }
}
