use musica_client::{ApiClient, ClientConfig, SearchCriteria};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod app;
mod render;
mod shell;

use app::{App, Flow};

enum Event {
    Line(std::io::Result<Option<String>>),
    Search(SearchCriteria),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so they don't interleave with the rendered screen.
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "musica_client=warn,musica_dashboard=info".into()),
        )
        .init();

    let config = ClientConfig::from_env();
    let client = ApiClient::new(&config).inspect_err(|e| {
        tracing::error!(error = %e, base_url = %config.base_url, "invalid API configuration");
    })?;
    tracing::info!(base_url = %client.base_url(), "starting dashboard");

    match client.health().await {
        Ok(health) if health.is_healthy() => tracing::info!("backend healthy"),
        Ok(health) => tracing::warn!(status = %health.status, "backend reports degraded health"),
        Err(e) => tracing::warn!(error = %e, "backend health check failed"),
    }

    let mut app = App::new(client, &config);
    app.start().await;

    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    app.note(shell::HELP);

    loop {
        stdout.write_all(app.render().as_bytes()).await?;
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        let event = tokio::select! {
            line = lines.next_line() => Event::Line(line),
            criteria = app.next_search() => Event::Search(criteria),
        };

        match event {
            Event::Line(Ok(Some(line))) => match shell::parse(&line) {
                Ok(Some(command)) => {
                    if app.handle(command).await == Flow::Quit {
                        break;
                    }
                }
                Ok(None) => {}
                Err(e) => app.note(e.to_string()),
            },
            Event::Line(Ok(None)) => break,
            Event::Line(Err(e)) => {
                tracing::error!(error = %e, "failed to read stdin");
                break;
            }
            Event::Search(criteria) => app.apply_search(&criteria).await,
        }
    }

    tracing::info!("dashboard closed");
    Ok(())
}
