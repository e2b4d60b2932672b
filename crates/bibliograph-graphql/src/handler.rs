//! Axum HTTP binding for the GraphQL endpoint.
//!
//! One route carries the whole API: POST executes operations, GET
//! serves GraphiQL for interactive exploration. The handler's only job
//! beyond delegation is capturing the `Authorization` header into the
//! request's execution data, where the guard picks it up.

use async_graphql::http::GraphiQLSource;
use async_graphql::{EmptySubscription, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use axum::response::{Html, IntoResponse};

use crate::context::{AuthHeader, CatalogContext};
use crate::mutation::MutationRoot;
use crate::query::QueryRoot;

/// The executable catalog schema.
pub type CatalogSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Builds the schema around the shared services.
#[must_use]
pub fn build_schema(context: CatalogContext) -> CatalogSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(context)
        .finish()
}

/// Handles `POST /graphql`.
pub async fn graphql_handler(
    State(schema): State<CatalogSchema>,
    headers: HeaderMap,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let authorization = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);

    let request = req.into_inner().data(AuthHeader(authorization));
    schema.execute(request).await.into()
}

/// Handles `GET /graphql` with the GraphiQL playground.
pub async fn graphiql_handler() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}
