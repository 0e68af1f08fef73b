use std::{
    collections::VecDeque,
    io,
    sync::{Mutex, MutexGuard},
};

use async_trait::async_trait;

use crate::{
    domain::session::{AuthGrant, User},
    usecases::contracts::{AuthApi, AuthApiError, LineTerminal},
};

static ENV_LOCK: Mutex<()> = Mutex::new(());

pub fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Scripted account API. Each endpoint pops its next queued result; a call
/// with nothing queued panics so unexpected traffic fails the test.
#[derive(Default)]
pub struct FakeAuthApi {
    me: Mutex<VecDeque<Result<User, AuthApiError>>>,
    grants: Mutex<VecDeque<Result<AuthGrant, AuthApiError>>>,
    acks: Mutex<VecDeque<Result<(), AuthApiError>>>,
    calls: Mutex<Vec<String>>,
}

impl FakeAuthApi {
    pub fn with_me(self, result: Result<User, AuthApiError>) -> Self {
        self.me.lock().expect("fake lock").push_back(result);
        self
    }

    pub fn with_grant(self, result: Result<AuthGrant, AuthApiError>) -> Self {
        self.grants.lock().expect("fake lock").push_back(result);
        self
    }

    pub fn with_ack(self, result: Result<(), AuthApiError>) -> Self {
        self.acks.lock().expect("fake lock").push_back(result);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("fake lock").clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().expect("fake lock").push(call);
    }

    fn next_grant(&self) -> Result<AuthGrant, AuthApiError> {
        self.grants
            .lock()
            .expect("fake lock")
            .pop_front()
            .expect("missing scripted grant")
    }

    fn next_ack(&self) -> Result<(), AuthApiError> {
        self.acks
            .lock()
            .expect("fake lock")
            .pop_front()
            .expect("missing scripted ack")
    }
}

#[async_trait]
impl AuthApi for FakeAuthApi {
    async fn current_user(&self, token: Option<&str>) -> Result<User, AuthApiError> {
        self.record(format!("me:{}", token.unwrap_or("-")));
        self.me
            .lock()
            .expect("fake lock")
            .pop_front()
            .expect("missing scripted current user")
    }

    async fn login(&self, email: &str, _password: &str) -> Result<AuthGrant, AuthApiError> {
        self.record(format!("login:{email}"));
        self.next_grant()
    }

    async fn register(
        &self,
        email: &str,
        _password: &str,
        full_name: &str,
    ) -> Result<AuthGrant, AuthApiError> {
        self.record(format!("register:{email}:{full_name}"));
        self.next_grant()
    }

    async fn send_otp(&self, email: &str) -> Result<(), AuthApiError> {
        self.record(format!("send_otp:{email}"));
        self.next_ack()
    }

    async fn verify_otp(&self, email: &str, otp: &str) -> Result<(), AuthApiError> {
        self.record(format!("verify_otp:{email}:{otp}"));
        self.next_ack()
    }
}

/// Terminal fed from a fixed list of inputs; `None` simulates EOF.
pub struct FakeTerminal {
    inputs: VecDeque<Option<String>>,
    pub output: Vec<String>,
}

impl FakeTerminal {
    pub fn new(inputs: Vec<Option<&str>>) -> Self {
        Self {
            inputs: inputs
                .into_iter()
                .map(|item| item.map(|value| value.to_owned()))
                .collect(),
            output: Vec::new(),
        }
    }

    pub fn joined(&self) -> String {
        self.output.join("\n")
    }
}

impl LineTerminal for FakeTerminal {
    fn print_line(&mut self, line: &str) -> io::Result<()> {
        self.output.push(line.to_owned());
        Ok(())
    }

    fn prompt_line(&mut self, _prompt: &str) -> io::Result<Option<String>> {
        Ok(self.inputs.pop_front().flatten())
    }

    fn prompt_secret(&mut self, _prompt: &str) -> io::Result<Option<String>> {
        Ok(self.inputs.pop_front().flatten())
    }
}
