//! Scripted collaborators for driving submit cycles in unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use crate::net::api::AuthApi;
use crate::net::error::{AuthError, LOGIN_FAILED_MESSAGE, SIGNUP_FAILED_MESSAGE};
use crate::net::types::{LoginGrant, LoginRequest, SignupRequest};
use crate::state::session::{KeyValueStore, StorageError, UserProfile};
use crate::util::liveness::Liveness;
use crate::util::pause::Pause;

/// Something a fake observed, in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Paused(Duration),
    Login(LoginRequest),
    Signup(SignupRequest),
}

pub type Journal = Rc<RefCell<Vec<Event>>>;

pub fn journal() -> Journal {
    Rc::new(RefCell::new(Vec::new()))
}

/// Login refusal as the HTTP client builds it.
pub fn rejected(detail: &str) -> AuthError {
    AuthError::rejected(detail, LOGIN_FAILED_MESSAGE)
}

/// Signup refusal as the HTTP client builds it.
pub fn signup_rejected(detail: &str) -> AuthError {
    AuthError::rejected(detail, SIGNUP_FAILED_MESSAGE)
}

pub fn granted(token: &str, team: Option<&str>) -> LoginGrant {
    LoginGrant {
        token: token.to_owned(),
        profile: team.map(|t| UserProfile { favorite_team: Some(t.to_owned()) }),
    }
}

pub struct FakeAuthApi {
    journal: Journal,
    login_results: RefCell<VecDeque<Result<LoginGrant, AuthError>>>,
    signup_results: RefCell<VecDeque<Result<(), AuthError>>>,
    end_during_call: Option<Liveness>,
}

impl FakeAuthApi {
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
            login_results: RefCell::new(VecDeque::new()),
            signup_results: RefCell::new(VecDeque::new()),
            end_during_call: None,
        }
    }

    pub fn login_returns(self, result: Result<LoginGrant, AuthError>) -> Self {
        self.login_results.borrow_mut().push_back(result);
        self
    }

    pub fn signup_returns(self, result: Result<(), AuthError>) -> Self {
        self.signup_results.borrow_mut().push_back(result);
        self
    }

    /// Simulate the page unmounting while the request is in flight.
    pub fn unmount_during_call(mut self, liveness: &Liveness) -> Self {
        self.end_during_call = Some(liveness.clone());
        self
    }

    fn after_call(&self) {
        if let Some(liveness) = &self.end_during_call {
            liveness.end();
        }
    }
}

impl AuthApi for FakeAuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginGrant, AuthError> {
        self.journal.borrow_mut().push(Event::Login(request.clone()));
        self.after_call();
        self.login_results
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(AuthError::unreachable("no scripted login response")))
    }

    async fn signup(&self, request: &SignupRequest) -> Result<(), AuthError> {
        self.journal.borrow_mut().push(Event::Signup(request.clone()));
        self.after_call();
        self.signup_results
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(AuthError::unreachable("no scripted signup response")))
    }
}

/// Records pauses instead of sleeping.
pub struct FakePause {
    journal: Journal,
    end_during_pause: Option<Liveness>,
}

impl FakePause {
    pub fn new(journal: &Journal) -> Self {
        Self { journal: journal.clone(), end_during_pause: None }
    }

    /// Simulate the page unmounting while the timer runs.
    pub fn unmount_during_pause(mut self, liveness: &Liveness) -> Self {
        self.end_during_pause = Some(liveness.clone());
        self
    }
}

impl Pause for FakePause {
    async fn pause(&self, duration: Duration) {
        self.journal.borrow_mut().push(Event::Paused(duration));
        if let Some(liveness) = &self.end_during_pause {
            liveness.end();
        }
    }
}

/// Storage that refuses every write.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReadOnlyStorage;

impl KeyValueStore for ReadOnlyStorage {
    fn get_item(&self, _key: &str) -> Option<String> {
        None
    }

    fn set_item(&self, key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::WriteRejected { key: key.to_owned() })
    }

    fn remove_item(&self, _key: &str) {}
}
