use std::path::Path;

use crate::{
    api::HttpAuthApi,
    infra::{
        self,
        config::FileConfigAdapter,
        contracts::ConfigAdapter,
        error::AppError,
        storage_layout::StorageLayout,
        token_store::FileTokenStore,
    },
    usecases::{
        context::AppContext,
        conversation::{ConversationOrchestrator, KeywordResponder},
        session::SessionGateway,
    },
};

pub type AppGateway = SessionGateway<HttpAuthApi, FileTokenStore>;

pub fn bootstrap(config_path: Option<&Path>) -> Result<AppContext, AppError> {
    let context = build_context(config_path)?;
    infra::logging::init(&context.config.logging)?;

    Ok(context)
}

pub fn compose_gateway(context: &AppContext) -> Result<AppGateway, AppError> {
    let api = HttpAuthApi::new(&context.config.api)?;
    let tokens = FileTokenStore::new(context.layout.clone());

    Ok(SessionGateway::new(api, tokens))
}

pub fn compose_conversation(context: &AppContext) -> ConversationOrchestrator<KeywordResponder> {
    if context.config.chat.greeting {
        ConversationOrchestrator::with_greeting(KeywordResponder)
    } else {
        ConversationOrchestrator::new(KeywordResponder)
    }
}

pub(crate) fn build_context(config_path: Option<&Path>) -> Result<AppContext, AppError> {
    let config_adapter = FileConfigAdapter::new(config_path);
    let config = config_adapter.load().map_err(AppError::Other)?;
    let layout = StorageLayout::resolve()?;

    Ok(AppContext::new(config, layout))
}
