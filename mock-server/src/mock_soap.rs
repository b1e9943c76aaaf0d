use crate::replies;
use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use hyper::Request;
use hyper::body::Incoming;
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server;
use log::{error, trace};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tower_service::Service;

/// A request as the mock received it.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub soap_action: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

enum Behaviour {
    NewsPlatform,
    Fixed { status: StatusCode, body: String },
}

struct MockState {
    behaviour: Behaviour,
    requests: Mutex<Vec<RecordedRequest>>,
}

#[derive(Clone)]
pub struct MockSoap {
    state: Arc<MockState>,
}

impl MockSoap {
    /// Answers like the news platform: login, logout and the user operations.
    pub fn newsplatform() -> Self {
        Self::with_behaviour(Behaviour::NewsPlatform)
    }

    /// Answers every request with the same status and body.
    pub fn fixed(status: u16, body: impl Into<String>) -> Self {
        Self::with_behaviour(Behaviour::Fixed {
            status: StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            body: body.into(),
        })
    }

    fn with_behaviour(behaviour: Behaviour) -> Self {
        Self {
            state: Arc::new(MockState {
                behaviour,
                requests: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Everything received so far, oldest first.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        match self.state.requests.lock() {
            Ok(requests) => requests.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/soap", post(Self::soap))
            .with_state(self.state.clone())
    }

    /// Binds `address` and serves in the background. Returns the bound address,
    /// which tells the port when `address` asked for port 0.
    pub async fn spawn(&self, address: &str) -> std::io::Result<SocketAddr> {
        let listener = TcpListener::bind(address).await?;
        let local_address = listener.local_addr()?;

        tokio::spawn(self.clone().serve(listener));
        Ok(local_address)
    }

    pub async fn serve(self, listener: TcpListener) {
        let app = self.router();

        loop {
            let (socket, _remote_addr) = match listener.accept().await {
                Ok(l) => l,
                Err(error) => {
                    error!("Could not accept connection: {error}");
                    continue;
                }
            };

            let tower_service = app.clone();

            tokio::spawn(async move {
                let socket = TokioIo::new(socket);
                let hyper_service =
                    hyper::service::service_fn(move |request: Request<Incoming>| {
                        tower_service.clone().call(request)
                    });

                let mut builder = server::conn::auto::Builder::new(TokioExecutor::new());
                builder.http1().title_case_headers(true);

                if let Err(err) = builder
                    .serve_connection_with_upgrades(socket, hyper_service)
                    .await
                {
                    error!("Failed to serve connection: {err:#}");
                }
            });
        }
    }

    async fn soap(
        State(state): State<Arc<MockState>>,
        headers: HeaderMap,
        body: Bytes,
    ) -> Response {
        let header_text = |name: &str| {
            headers
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string)
        };

        let request = RecordedRequest {
            soap_action: header_text("SOAPAction"),
            content_type: header_text("content-type"),
            body: String::from_utf8_lossy(&body).into_owned(),
        };

        trace!("C: {} {}", request.soap_action.as_deref().unwrap_or_default(), request.body);

        let (status, reply) = match &state.behaviour {
            Behaviour::Fixed { status, body } => (*status, body.clone()),
            Behaviour::NewsPlatform => {
                replies::newsplatform(request.soap_action.as_deref(), &request.body)
            }
        };

        trace!("S: {status} {reply}");
        match state.requests.lock() {
            Ok(mut requests) => requests.push(request),
            Err(poisoned) => poisoned.into_inner().push(request),
        }

        (
            status,
            [(header::CONTENT_TYPE, "text/xml;charset=utf-8")],
            reply,
        )
            .into_response()
    }
}
