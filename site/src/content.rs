//! Page copy for the landing page.
//!
//! Every string the home page shows lives here as a typed static table,
//! so the components and the tests read the same source.

use serde::Serialize;

/// Main heading of the home page.
pub const HEADING: &str = "🤖 Telegram AI Bot";

/// Introductory paragraph under the heading.
pub const TAGLINE: &str = "AI-ассистент с памятью и доступом в интернет";

/// Title of the features list.
pub const FEATURES_TITLE: &str = "Возможности:";

/// Title of the commands list.
pub const COMMANDS_TITLE: &str = "Команды бота:";

/// One bullet of the features list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Feature {
    /// Emoji shown in front of the text
    pub icon: &'static str,
    /// Feature description
    pub text: &'static str,
}

impl Feature {
    /// The bullet text exactly as rendered: icon, a space, then the text.
    pub fn label(&self) -> String {
        format!("{} {}", self.icon, self.text)
    }
}

/// One bullet of the commands list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BotCommand {
    /// Slash command token, e.g. `/start`
    pub command: &'static str,
    /// What the command does
    pub description: &'static str,
}

/// Advertised bot features, in display order.
pub const FEATURES: [Feature; 7] = [
    Feature {
        icon: "🌐",
        text: "Поиск информации в интернете",
    },
    Feature {
        icon: "🤖",
        text: "Несколько AI моделей на выбор",
    },
    Feature {
        icon: "💾",
        text: "Память о предыдущих сообщениях",
    },
    Feature {
        icon: "💻",
        text: "Красивое форматирование кода",
    },
    Feature {
        icon: "📥",
        text: "Скачивание кода в файлы",
    },
    Feature {
        icon: "📸",
        text: "Анализ изображений",
    },
    Feature {
        icon: "📄",
        text: "Чтение файлов кода",
    },
];

/// Advertised bot commands, in display order.
pub const COMMANDS: [BotCommand; 6] = [
    BotCommand {
        command: "/start",
        description: "начать работу с ботом",
    },
    BotCommand {
        command: "/model",
        description: "выбрать AI модель",
    },
    BotCommand {
        command: "/web",
        description: "вкл/выкл интернет-поиск",
    },
    BotCommand {
        command: "/clear",
        description: "очистить историю",
    },
    BotCommand {
        command: "/history",
        description: "просмотр истории",
    },
    BotCommand {
        command: "/help",
        description: "справка",
    },
];

/// Everything the home page says, as one serializable value.
#[derive(Debug, Clone, Serialize)]
pub struct PageContent {
    /// Document title and description
    pub metadata: crate::metadata::Metadata,
    /// Main heading
    pub heading: &'static str,
    /// Introductory paragraph
    pub tagline: &'static str,
    /// Features list
    pub features: Vec<Feature>,
    /// Commands list
    pub commands: Vec<BotCommand>,
}

impl PageContent {
    /// Collect the home page copy.
    pub fn home() -> Self {
        Self {
            metadata: crate::metadata::METADATA,
            heading: HEADING,
            tagline: TAGLINE,
            features: FEATURES.to_vec(),
            commands: COMMANDS.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn feature_labels_join_icon_and_text() {
        let labels: Vec<String> = FEATURES.iter().map(Feature::label).collect();
        assert_eq!(
            labels,
            vec![
                "🌐 Поиск информации в интернете",
                "🤖 Несколько AI моделей на выбор",
                "💾 Память о предыдущих сообщениях",
                "💻 Красивое форматирование кода",
                "📥 Скачивание кода в файлы",
                "📸 Анализ изображений",
                "📄 Чтение файлов кода",
            ]
        );
    }

    #[test]
    fn command_tokens_are_slash_prefixed_and_unique() {
        let tokens: Vec<&str> = COMMANDS.iter().map(|c| c.command).collect();
        assert_eq!(
            tokens,
            vec!["/start", "/model", "/web", "/clear", "/history", "/help"]
        );

        let mut deduped = tokens.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), tokens.len());
    }

    #[test]
    fn home_content_serializes_lists_in_order() {
        let json = serde_json::to_value(PageContent::home()).unwrap();

        assert_eq!(json["heading"], "🤖 Telegram AI Bot");
        assert_eq!(json["metadata"]["title"], "Telegram AI Bot");
        assert_eq!(json["features"].as_array().unwrap().len(), 7);
        assert_eq!(json["commands"][2]["command"], "/web");
        assert_eq!(json["commands"][2]["description"], "вкл/выкл интернет-поиск");
    }
}
