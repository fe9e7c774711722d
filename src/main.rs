use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;

use healthdesk::application::ports::ChatModel;
use healthdesk::application::services::{ChatModelIds, ChatService, PredictionService};
use healthdesk::domain::UploadPolicy;
use healthdesk::infrastructure::llm::{GeminiClient, UnconfiguredChatModel};
use healthdesk::infrastructure::ml::load_classifiers;
use healthdesk::infrastructure::observability::{TracingConfig, init_tracing};
use healthdesk::infrastructure::storage::LocalStagingStore;
use healthdesk::infrastructure::text_processing::{CompositeLoader, PdfAdapter, PlainTextAdapter};
use healthdesk::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    let settings = Settings::load(environment)?;

    init_tracing(
        TracingConfig::new(
            environment.to_string(),
            settings.logging.enable_json,
            settings.logging.level.clone(),
        ),
        settings.server.port,
    );

    let chat_model: Arc<dyn ChatModel> = if settings.gemini.api_key.is_empty() {
        tracing::warn!(
            "GEMINI_API_KEY not set, chat requests will receive an availability advisory"
        );
        Arc::new(UnconfiguredChatModel)
    } else {
        Arc::new(GeminiClient::new(
            settings.gemini.api_key.clone(),
            Duration::from_secs(settings.gemini.request_timeout_secs),
        )?)
    };

    let file_loader = Arc::new(CompositeLoader::new(
        Arc::new(PdfAdapter::new()),
        Arc::new(PlainTextAdapter),
    ));

    let chat_service = Arc::new(ChatService::new(
        chat_model,
        file_loader,
        ChatModelIds {
            chat: settings.gemini.chat_model.clone(),
            vision: settings.gemini.vision_model.clone(),
            document: settings.gemini.document_model.clone(),
        },
    ));

    let staging_store = Arc::new(LocalStagingStore::new(PathBuf::from(
        &settings.uploads.directory,
    ))?);

    let prediction_service = Arc::new(PredictionService::new(load_classifiers(Path::new(
        &settings.classifiers.model_dir,
    ))));

    let upload_policy = UploadPolicy::new(settings.uploads.max_content_length);

    let addr = SocketAddr::new(settings.server.host.parse()?, settings.server.port);

    let state = AppState {
        chat_service,
        staging_store,
        prediction_service,
        upload_policy,
        settings,
    };
    let router = create_router(state);

    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
