use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use clap::Parser;
use textrank::TextRank;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use synopsis::{
    inference::InferenceClient, self_test, server::router, text::LengthGuard,
    tracing::init_tracing_subscriber, Abstractive, Extractive, SummarizationServiceBuilder,
    UnavailablePolicy,
};

#[derive(Parser)]
#[command(
    name = "synopsis-server",
    about = "Text summarization service with an extractive fallback"
)]
struct Cli {
    /// Address to listen on
    #[arg(long, env = "SYNOPSIS_BIND", default_value = "127.0.0.1:5000")]
    bind: SocketAddr,

    /// Base URL of the summarization inference endpoint
    #[arg(long, env = "INFERENCE_API_URL", default_value = InferenceClient::DEFAULT_BASE_URL)]
    inference_url: String,

    /// Bearer token for the inference endpoint
    #[arg(long, env = "INFERENCE_API_TOKEN")]
    inference_token: Option<String>,

    /// Abstractive summarization model
    #[arg(long, env = "SUMMARIZER_MODEL", default_value = InferenceClient::DEFAULT_MODEL)]
    model: String,

    /// Seconds before a primary summarization is abandoned for the fallback (0 disables)
    #[arg(long, env = "PRIMARY_TIMEOUT_SECS", default_value = "60")]
    primary_timeout_secs: u64,

    /// Serve extractive summaries instead of 503 when the model failed to load
    #[arg(long, env = "FALLBACK_ONLY_WHEN_UNAVAILABLE")]
    fallback_only_when_unavailable: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let _guard = sentry::init((
        std::env::var("SENTRY_DSN").unwrap_or_default(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    ));

    let cli = Cli::parse();
    init_tracing_subscriber()?;

    let mut client = InferenceClient::new(&cli.model).with_base_url(&cli.inference_url);
    if let Some(token) = cli.inference_token {
        client = client.with_api_token(token);
    }

    let guard = LengthGuard::new().context("Failed to load tokenizer")?;

    // a failed self-test leaves the service running in degraded mode
    let model_state = self_test(&client).await;
    tracing::info!(
        model = %cli.model,
        available = model_state.is_available(),
        "Model self-test finished"
    );

    let policy = if cli.fallback_only_when_unavailable {
        UnavailablePolicy::FallbackOnly
    } else {
        UnavailablePolicy::Reject
    };

    let mut builder = SummarizationServiceBuilder::new(model_state)
        .primary(Abstractive::new(client, guard))
        .fallback(Extractive::new(TextRank::default()))
        .unavailable_policy(policy);
    if cli.primary_timeout_secs > 0 {
        builder = builder.primary_timeout(Duration::from_secs(cli.primary_timeout_secs));
    }

    let app = router(builder.build());

    let listener = TcpListener::bind(cli.bind)
        .await
        .with_context(|| format!("Failed to bind {}", cli.bind))?;
    tracing::info!(addr = %cli.bind, "Listening");

    let shutdown = CancellationToken::new();
    tokio::spawn(watch_shutdown_signals(shutdown.clone()));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown.cancelled_owned())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn watch_shutdown_signals(token: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
    token.cancel();
}
