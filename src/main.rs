use clap::Parser;
use quizfunnel::{
    clients::{BeehiivClient, WebhookIntakeClient},
    router,
    services::{intake::IntakeService, newsletter::NewsletterService},
    AppState,
};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// The address to bind to.
    #[arg(short, long, env, default_value = "127.0.0.1:1414")]
    address: String,

    /// Workflow webhook receiving leads once a visitor picks a path.
    /// Lead forwarding is skipped when unset.
    #[clap(long, env)]
    intake_webhook_url: Option<String>,

    /// Newsletter platform API key.
    #[clap(long, env)]
    beehiiv_api_key: Option<String>,

    /// Newsletter publication receiving subscriptions.
    #[clap(long, env)]
    beehiiv_publication_id: Option<String>,

    /// Mark cookies `Secure` (serve over HTTPS).
    #[arg(long, env)]
    secure_cookies: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "tracing=info,quizfunnel=debug".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let args = Args::parse();

    let intake = IntakeService::new(WebhookIntakeClient::new(args.intake_webhook_url));
    let newsletter = NewsletterService::new(BeehiivClient::new(
        args.beehiiv_api_key,
        args.beehiiv_publication_id,
    ));
    let app = router(AppState {
        intake,
        newsletter,
        secure_cookies: args.secure_cookies,
    });

    let address = args.address.parse::<std::net::SocketAddr>()?;
    let listener = tokio::net::TcpListener::bind(address).await?;
    tracing::info!("listening on {address}");
    axum::serve(listener, app).await?;

    Ok(())
}
