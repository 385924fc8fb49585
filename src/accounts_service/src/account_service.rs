use accounts_adapters::{
    config::{AllowedOrigins, BODY_LIMIT_BYTES},
    http::{
        require_bearer,
        routes::{delete_profile, get_profile, not_found, signin, signup, update_profile},
    },
};
use accounts_core::{AccountStore, PasswordHasher, TokenService};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderName, HeaderValue, Method, header, request},
    middleware,
    routing::{delete, get, patch, post},
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// The account HTTP service: every route under `/api`, wired to the given
/// store, hasher and token service.
pub struct AccountService {
    router: Router,
}

impl AccountService {
    /// Create a new AccountService
    ///
    /// # Arguments
    /// * `account_store` - Where accounts live (must be Clone)
    /// * `hasher` - Password hasher used at signup, signin and password change
    /// * `token_service` - Issues tokens at signin and guards the profile route
    ///
    /// # Note on Architecture
    /// Each route is given only the state it needs. The profile read is the
    /// only route behind the bearer-token middleware.
    pub fn new<A, H, T>(account_store: A, hasher: H, token_service: T) -> Self
    where
        A: AccountStore + Clone + 'static,
        H: PasswordHasher + Clone + 'static,
        T: TokenService + Clone + 'static,
    {
        let protected = Router::new()
            .route("/profile/{user_id}", get(get_profile::<A>))
            .with_state(account_store.clone())
            .route_layer(middleware::from_fn_with_state(
                token_service.clone(),
                require_bearer::<T>,
            ));

        let api = Router::new()
            .route("/signup", post(signup::<A, H>))
            .with_state((account_store.clone(), hasher.clone()))
            .route("/signin", post(signin::<A, H, T>))
            .with_state((account_store.clone(), hasher.clone(), token_service))
            .route("/profile/update/{user_id}", patch(update_profile::<A, H>))
            .with_state((account_store.clone(), hasher))
            .route("/profile/delete/{user_id}", delete(delete_profile::<A>))
            .with_state(account_store)
            .merge(protected)
            .method_not_allowed_fallback(not_found);

        let router = Router::new()
            .nest("/api", api)
            .fallback(not_found)
            .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES));

        Self { router }
    }

    fn with_security_headers(mut self) -> Self {
        self.router = self
            .router
            .layer(SetResponseHeaderLayer::overriding(
                header::X_CONTENT_TYPE_OPTIONS,
                HeaderValue::from_static("nosniff"),
            ))
            .layer(SetResponseHeaderLayer::overriding(
                header::X_FRAME_OPTIONS,
                HeaderValue::from_static("SAMEORIGIN"),
            ))
            .layer(SetResponseHeaderLayer::overriding(
                header::REFERRER_POLICY,
                HeaderValue::from_static("no-referrer"),
            ));
        self
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the AccountService into a router that can be served or mounted
    ///
    /// # Arguments
    /// * `allowed_origins` - Origins accepted by CORS; `None` leaves CORS off
    pub fn as_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        if let Some(allowed_origins) = allowed_origins {
            let cors = CorsLayer::new()
                .allow_methods([
                    Method::GET,
                    Method::HEAD,
                    Method::OPTIONS,
                    Method::PUT,
                    Method::PATCH,
                    Method::POST,
                    Method::DELETE,
                ])
                .allow_headers([
                    header::ORIGIN,
                    HeaderName::from_static("x-requested-with"),
                    header::CONTENT_TYPE,
                    header::ACCEPT,
                    HeaderName::from_static("x-access-token"),
                    header::AUTHORIZATION,
                ])
                .allow_credentials(true)
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        allowed_origins.contains(origin)
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_security_headers().with_trace_layer().router
    }

    /// Run the account service as a standalone server
    ///
    /// # Arguments
    /// * `listener` - TCP listener to bind the server to
    /// * `allowed_origins` - Origins accepted by CORS
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let router = self.as_router(allowed_origins);

        tracing::info!("Account service listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await
    }
}
