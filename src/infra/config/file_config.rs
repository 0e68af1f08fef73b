use serde::Deserialize;

use crate::infra::config::{ApiConfig, AppConfig, ChatConfig, LogConfig};

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub logging: Option<FileLogConfig>,
    pub api: Option<FileApiConfig>,
    pub chat: Option<FileChatConfig>,
}

impl FileConfig {
    pub fn merge_into(self, config: &mut AppConfig) {
        if let Some(logging) = self.logging {
            logging.merge_into(&mut config.logging);
        }

        if let Some(api) = self.api {
            api.merge_into(&mut config.api);
        }

        if let Some(chat) = self.chat {
            chat.merge_into(&mut config.chat);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogConfig {
    pub level: Option<String>,
}

impl FileLogConfig {
    fn merge_into(self, config: &mut LogConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileApiConfig {
    pub base_url: Option<String>,
}

impl FileApiConfig {
    fn merge_into(self, config: &mut ApiConfig) {
        if let Some(base_url) = self.base_url {
            config.base_url = base_url.trim_end_matches('/').to_owned();
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileChatConfig {
    pub greeting: Option<bool>,
}

impl FileChatConfig {
    fn merge_into(self, config: &mut ChatConfig) {
        if let Some(greeting) = self.greeting {
            config.greeting = greeting;
        }
    }
}
