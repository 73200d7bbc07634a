//! The remote data gateway: the five calls of the animales API.
//!
//! # Design
//! `Gateway` pairs an `AnimalClient` (pure build/parse) with a `Transport`
//! supplied by the host. Each operation issues exactly one request and
//! resolves once; there are no retries and no cancellation. Views never
//! hold a gateway: they emit `Call` values and receive `Outcome` values,
//! which `Gateway::dispatch` bridges.

use std::future::Future;

use crate::client::AnimalClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::Animal;

/// Moves one `HttpRequest` over the network.
///
/// Implementations return `Ok` for every response that arrived, whatever
/// its status; status interpretation belongs to `AnimalClient`. Only
/// failures to get a response at all become `ApiError::Transport`.
pub trait Transport {
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, ApiError>> + Send;
}

/// One gateway operation, as requested by a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListAll,
    GetById(String),
    Create(Animal),
    Update(String, Animal),
    DeleteById(String),
}

/// The result of a `Call`, variant for variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Listed(Result<Vec<Animal>, ApiError>),
    Fetched(Result<Animal, ApiError>),
    Created(Result<Animal, ApiError>),
    Updated(Result<Animal, ApiError>),
    Deleted(Result<Animal, ApiError>),
}

impl Outcome {
    pub fn is_ok(&self) -> bool {
        match self {
            Outcome::Listed(r) => r.is_ok(),
            Outcome::Fetched(r) | Outcome::Created(r) | Outcome::Updated(r) | Outcome::Deleted(r) => {
                r.is_ok()
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct Gateway<T> {
    client: AnimalClient,
    transport: T,
}

impl<T: Transport> Gateway<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            client: AnimalClient::new(base_url),
            transport,
        }
    }

    pub async fn list_all(&self) -> Result<Vec<Animal>, ApiError> {
        let response = self.transport.send(self.client.build_list_all()).await?;
        self.client.parse_list_all(response)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Animal, ApiError> {
        let response = self.transport.send(self.client.build_get_by_id(id)).await?;
        self.client.parse_get_by_id(response)
    }

    pub async fn create(&self, animal: &Animal) -> Result<Animal, ApiError> {
        let request = self.client.build_create(animal)?;
        let response = self.transport.send(request).await?;
        self.client.parse_create(response)
    }

    pub async fn update(&self, id: &str, animal: &Animal) -> Result<Animal, ApiError> {
        let request = self.client.build_update(id, animal)?;
        let response = self.transport.send(request).await?;
        self.client.parse_update(response)
    }

    pub async fn delete_by_id(&self, id: &str) -> Result<Animal, ApiError> {
        let response = self.transport.send(self.client.build_delete_by_id(id)).await?;
        self.client.parse_delete_by_id(response)
    }

    /// Execute a view's `Call` and wrap the result in the matching `Outcome`.
    pub async fn dispatch(&self, call: Call) -> Outcome {
        tracing::debug!(?call, "dispatching gateway call");
        let outcome = match call {
            Call::ListAll => Outcome::Listed(self.list_all().await),
            Call::GetById(id) => Outcome::Fetched(self.get_by_id(&id).await),
            Call::Create(animal) => Outcome::Created(self.create(&animal).await),
            Call::Update(id, animal) => Outcome::Updated(self.update(&id, &animal).await),
            Call::DeleteById(id) => Outcome::Deleted(self.delete_by_id(&id).await),
        };
        if !outcome.is_ok() {
            tracing::warn!(?outcome, "gateway call failed");
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use super::*;
    use crate::http::HttpMethod;

    /// Replays canned responses in order and records every request.
    #[derive(Default)]
    struct ScriptedTransport {
        responses: Mutex<VecDeque<Result<HttpResponse, ApiError>>>,
        sent: Mutex<Vec<HttpRequest>>,
    }

    impl ScriptedTransport {
        fn replying(responses: Vec<Result<HttpResponse, ApiError>>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                sent: Mutex::default(),
            }
        }
    }

    impl Transport for ScriptedTransport {
        fn send(
            &self,
            request: HttpRequest,
        ) -> impl Future<Output = Result<HttpResponse, ApiError>> + Send {
            self.sent.lock().unwrap().push(request);
            let next = self
                .responses
                .lock()
                .unwrap()
                .pop_front()
                .expect("unexpected request");
            async move { next }
        }
    }

    const WOLF: &str =
        r#"{"id":"5","nombre":"Wolf","especie":"Canis lupus","habitat":"Forest","dieta":"Carnivore"}"#;

    #[tokio::test]
    async fn list_all_issues_one_get() {
        let gateway = Gateway::new(
            "http://h/animales",
            ScriptedTransport::replying(vec![Ok(HttpResponse::new(200, "[]"))]),
        );
        assert!(gateway.list_all().await.unwrap().is_empty());

        let sent = gateway.transport.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, HttpMethod::Get);
        assert_eq!(sent[0].path, "http://h/animales");
    }

    #[tokio::test]
    async fn transport_failure_propagates() {
        let gateway = Gateway::new(
            "http://h/animales",
            ScriptedTransport::replying(vec![Err(ApiError::Transport("refused".into()))]),
        );
        let err = gateway.get_by_id("5").await.unwrap_err();
        assert_eq!(err, ApiError::Transport("refused".into()));
    }

    #[tokio::test]
    async fn dispatch_maps_calls_to_outcomes() {
        let gateway = Gateway::new(
            "http://h/animales",
            ScriptedTransport::replying(vec![
                Ok(HttpResponse::new(200, WOLF)),
                Ok(HttpResponse::new(201, WOLF)),
                Ok(HttpResponse::new(200, WOLF)),
                Ok(HttpResponse::new(500, "boom")),
            ]),
        );
        let wolf = Animal::new("Wolf", "Canis lupus", "Forest", "Carnivore");

        let outcome = gateway.dispatch(Call::GetById("5".into())).await;
        assert_eq!(outcome, Outcome::Fetched(Ok(wolf.clone().with_id("5"))));

        let outcome = gateway.dispatch(Call::Create(wolf.clone())).await;
        assert!(matches!(outcome, Outcome::Created(Ok(_))));

        let outcome = gateway
            .dispatch(Call::Update("5".into(), wolf.clone().with_id("5")))
            .await;
        assert!(matches!(outcome, Outcome::Updated(Ok(_))));

        let outcome = gateway.dispatch(Call::DeleteById("5".into())).await;
        assert!(!outcome.is_ok());
        assert!(matches!(
            outcome,
            Outcome::Deleted(Err(ApiError::Status { status: 500, .. }))
        ));

        let sent = gateway.transport.sent.lock().unwrap();
        let methods: Vec<_> = sent.iter().map(|r| r.method).collect();
        assert_eq!(
            methods,
            [HttpMethod::Get, HttpMethod::Post, HttpMethod::Put, HttpMethod::Delete]
        );
        assert_eq!(sent[2].path, "http://h/animales/5");
    }
}
