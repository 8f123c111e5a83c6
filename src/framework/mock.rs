//! # Mock Framework
//!
//! Utilities for testing clients in isolation, without spawning a real
//! [`ResourceActor`](crate::framework::ResourceActor).
//!
//! Create a [`MockClient`], queue expectations with the `expect_*` builders,
//! hand [`MockClient::client`] to the code under test, and finish with
//! [`MockClient::verify`].

use crate::framework::{ActorEntity, FrameworkError, ResourceClient, ResourceRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request to the mock client paired with the scripted reply.
enum Expectation<T: ActorEntity> {
    Get(Result<Option<T>, FrameworkError>),
    Create(Result<T::Id, FrameworkError>),
    List(Result<Vec<T>, FrameworkError>),
    Delete(Result<(), FrameworkError>),
    Action(Result<T::ActionResult, FrameworkError>),
    Clear(Result<(), FrameworkError>),
}

/// A mock client with expectation tracking for fluent testing.
///
/// # Example
/// ```ignore
/// let mut mock = MockClient::<Order>::new();
/// mock.expect_create().return_err(FrameworkError::ActorClosed);
///
/// let client = OrderClient::new(mock.client());
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Arc<Mutex<VecDeque<Expectation<T>>>> =
            Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        // Background task matches each incoming request against the next
        // queued expectation, in order.
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone
                    .lock()
                    .expect("expectation queue poisoned")
                    .pop_front();

                match (request, expectation) {
                    (ResourceRequest::Get { respond_to, .. }, Some(Expectation::Get(response))) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Some(Expectation::Create(response)),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::List { respond_to }, Some(Expectation::List(response))) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Delete { respond_to, .. },
                        Some(Expectation::Delete(response)),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Action { respond_to, .. },
                        Some(Expectation::Action(response)),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Clear { respond_to }, Some(Expectation::Clear(response))) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    fn push(&self, expectation: Expectation<T>) {
        self.expectations
            .lock()
            .expect("expectation queue poisoned")
            .push_back(expectation);
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self) -> ExpectationBuilder<'_, T, Option<T>> {
        ExpectationBuilder {
            mock: self,
            wrap: Expectation::Get,
        }
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> ExpectationBuilder<'_, T, T::Id> {
        ExpectationBuilder {
            mock: self,
            wrap: Expectation::Create,
        }
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> ExpectationBuilder<'_, T, Vec<T>> {
        ExpectationBuilder {
            mock: self,
            wrap: Expectation::List,
        }
    }

    /// Expects a `delete` operation.
    pub fn expect_delete(&mut self) -> ExpectationBuilder<'_, T, ()> {
        ExpectationBuilder {
            mock: self,
            wrap: Expectation::Delete,
        }
    }

    /// Expects an `action` operation.
    pub fn expect_action(&mut self) -> ExpectationBuilder<'_, T, T::ActionResult> {
        ExpectationBuilder {
            mock: self,
            wrap: Expectation::Action,
        }
    }

    /// Expects a `clear` operation.
    pub fn expect_clear(&mut self) -> ExpectationBuilder<'_, T, ()> {
        ExpectationBuilder {
            mock: self,
            wrap: Expectation::Clear,
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self
            .expectations
            .lock()
            .expect("expectation queue poisoned");
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder returned by the `expect_*` methods; finish with [`return_ok`]
/// or [`return_err`].
///
/// [`return_ok`]: ExpectationBuilder::return_ok
/// [`return_err`]: ExpectationBuilder::return_err
pub struct ExpectationBuilder<'a, T: ActorEntity, R> {
    mock: &'a MockClient<T>,
    wrap: fn(Result<R, FrameworkError>) -> Expectation<T>,
}

impl<'a, T: ActorEntity, R> ExpectationBuilder<'a, T, R> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.mock.push((self.wrap)(Ok(value)));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.mock.push((self.wrap)(Err(error)));
    }
}
