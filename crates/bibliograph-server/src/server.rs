//! Service construction and the HTTP router.

use std::sync::Arc;

use anyhow::Context as _;
use axum::Router;
use axum::routing::{get, post};
use bibliograph_auth::TokenVerifier;
use bibliograph_cache::{CacheBackend, ListingCache};
use bibliograph_graphql::{
    CatalogContext, CatalogSchema, build_schema, graphiql_handler, graphql_handler,
};
use bibliograph_storage::{CatalogStorage, NewAuthor};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::{AppConfig, CacheMode};

/// Builds the long-lived services from configuration: storage backend,
/// listing cache and token verifier. Constructed once; resolvers see
/// them only as injected context.
pub async fn build_context(cfg: &AppConfig) -> anyhow::Result<CatalogContext> {
    let storage = bibliograph_db_memory::create_memory_storage();

    let backend = match cfg.cache.mode {
        CacheMode::Memory => CacheBackend::new_memory(),
        CacheMode::Redis => {
            let url = cfg
                .cache
                .url
                .as_deref()
                .context("cache.url missing in redis mode")?;
            let pool = deadpool_redis::Config::from_url(url)
                .create_pool(Some(deadpool_redis::Runtime::Tokio1))
                .context("failed to create Redis pool")?;
            CacheBackend::new_redis(pool)
        }
    };
    let listings = ListingCache::new(backend, cfg.cache.ttl());

    let verifier = Arc::new(TokenVerifier::new(cfg.auth.secret.as_bytes()));

    tracing::info!(
        backend = storage.backend_name(),
        cache = ?cfg.cache.mode,
        ttl_secs = cfg.cache.ttl_secs,
        "services initialized"
    );
    Ok(CatalogContext::new(storage, listings, verifier))
}

/// Creates the configured seed authors. The schema has no author
/// mutation, so this is how a fresh deployment gets its authors.
pub async fn seed_authors(context: &CatalogContext, names: &[String]) -> anyhow::Result<()> {
    for name in names {
        let author = context
            .storage
            .create_author(NewAuthor::new(name))
            .await
            .with_context(|| format!("failed to seed author {name:?}"))?;
        tracing::info!(author_id = %author.id, name = %author.name, "author seeded");
    }
    Ok(())
}

async fn healthz() -> &'static str {
    "ok"
}

/// Builds the router: the GraphQL endpoint plus a liveness probe.
pub fn build_router(schema: CatalogSchema, playground: bool) -> Router {
    let graphql = if playground {
        post(graphql_handler).get(graphiql_handler)
    } else {
        post(graphql_handler)
    };

    Router::new()
        .route("/graphql", graphql)
        .route("/healthz", get(healthz))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(schema)
}

/// Runs the server until the listener fails.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let context = build_context(&cfg).await?;
    seed_authors(&context, &cfg.bootstrap.authors).await?;

    let schema = build_schema(context);
    let router = build_router(schema, cfg.graphql.playground);

    let addr = cfg.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "bibliograph listening");
    axum::serve(listener, router).await?;
    Ok(())
}
