use crate::config::{EndpointConfig, SessionConfig};
use colored::Colorize;

pub mod food_cmd;
mod system;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Continue,
    Exit,
}

/// Interactive session: holds the two API keys for as long as the prompt
/// loop runs and hands a fresh [`SessionConfig`] to every plan request.
pub struct CommandHandler {
    language_model_key: Option<String>,
    image_search_key: Option<String>,
    endpoints: EndpointConfig,
}

impl CommandHandler {
    pub fn new(
        language_model_key: Option<String>,
        image_search_key: Option<String>,
        endpoints: EndpointConfig,
    ) -> Self {
        Self {
            language_model_key,
            image_search_key,
            endpoints,
        }
    }

    pub async fn handle_command(&mut self, input: &str) -> Result<CommandOutcome, String> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(CommandOutcome::Continue);
        }

        let (command, args) = match input.split_once(char::is_whitespace) {
            Some((command, args)) => (command.to_lowercase(), args.trim()),
            None => (input.to_lowercase(), ""),
        };

        // Anything that is not a command is a plan request
        let request = match (command.as_str(), args.is_empty()) {
            ("help" | "exit" | "quit", true) => return system::handle_command(&command),
            ("keys", true) => {
                self.show_keys();
                return Ok(CommandOutcome::Continue);
            }
            ("key", _) => {
                self.set_key(args)?;
                return Ok(CommandOutcome::Continue);
            }
            ("plan", true) => return Err("Usage: plan <request>".to_string()),
            ("plan", false) => args,
            _ => input,
        };

        food_cmd::handle_command(self.session(request), &self.endpoints).await?;
        Ok(CommandOutcome::Continue)
    }

    pub fn session(&self, request: &str) -> SessionConfig {
        SessionConfig::new(
            self.language_model_key.clone(),
            self.image_search_key.clone(),
            request,
        )
    }

    fn set_key(&mut self, args: &str) -> Result<(), String> {
        let mut parts = args.splitn(2, char::is_whitespace);
        let provider = parts.next().unwrap_or_default().to_lowercase();
        let key = parts.next().map(str::trim).filter(|k| !k.is_empty());

        let Some(key) = key else {
            return Err("Usage: key <openai|serpapi> <api-key>".to_string());
        };

        match provider.as_str() {
            "openai" => self.language_model_key = Some(key.to_string()),
            "serpapi" => self.image_search_key = Some(key.to_string()),
            other => return Err(format!("Unknown key '{}'. Use 'openai' or 'serpapi'.", other)),
        }
        println!("{} {} key updated for this session", "✓".green(), provider);
        Ok(())
    }

    fn show_keys(&self) {
        println!("\n🔑 Session keys:");
        println!("  openai   {}", mask(self.language_model_key.as_deref()));
        println!("  serpapi  {}", mask(self.image_search_key.as_deref()));
    }
}

fn mask(key: Option<&str>) -> String {
    match key {
        Some(key) if key.chars().count() > 4 => {
            let tail: String = key.chars().skip(key.chars().count() - 4).collect();
            format!("****{}", tail)
        }
        Some(_) => "****".to_string(),
        None => "not set".red().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handler() -> CommandHandler {
        CommandHandler::new(None, None, EndpointConfig::default())
    }

    #[test]
    fn test_mask_shows_only_tail() {
        assert_eq!(mask(Some("sk-abcdef1234")), "****1234");
        assert_eq!(mask(Some("abc")), "****");
    }

    #[tokio::test]
    async fn test_key_command_sets_session_keys() {
        let mut handler = handler();
        handler.handle_command("key openai sk-test").await.unwrap();
        handler.handle_command("key serpapi serp-test").await.unwrap();

        let session = handler.session("다이어트");
        assert_eq!(session.language_model_key.as_deref(), Some("sk-test"));
        assert_eq!(session.image_search_key.as_deref(), Some("serp-test"));
        assert_eq!(session.user_request, "다이어트");
    }

    #[tokio::test]
    async fn test_key_command_rejects_bad_input() {
        let mut handler = handler();
        assert!(handler.handle_command("key openai").await.is_err());
        assert!(handler.handle_command("key google abc").await.is_err());
    }

    #[tokio::test]
    async fn test_key_command_is_case_insensitive() {
        let mut handler = handler();

        // A plan request would fail with a missing-credential error here
        assert_eq!(
            handler.handle_command("Key openai sk-x").await.unwrap(),
            CommandOutcome::Continue
        );
        assert_eq!(
            handler.handle_command("KEY SERPAPI serp-x").await.unwrap(),
            CommandOutcome::Continue
        );

        let session = handler.session("다이어트");
        assert_eq!(session.language_model_key.as_deref(), Some("sk-x"));
        assert_eq!(session.image_search_key.as_deref(), Some("serp-x"));
    }

    #[tokio::test]
    async fn test_bare_key_and_plan_are_usage_errors() {
        let mut handler = handler();
        assert_eq!(
            handler.handle_command("key").await.unwrap_err(),
            "Usage: key <openai|serpapi> <api-key>"
        );
        assert_eq!(handler.handle_command("Plan").await.unwrap_err(), "Usage: plan <request>");
        assert_eq!(handler.handle_command("plan   ").await.unwrap_err(), "Usage: plan <request>");
    }

    #[tokio::test]
    async fn test_plan_prefix_is_case_insensitive() {
        let mut handler = handler();
        let err = handler.handle_command("PLAN 다이어트 식단").await.unwrap_err();
        assert_eq!(err, "OpenAI API key is missing");
    }

    #[tokio::test]
    async fn test_plan_without_keys_reports_missing_credential() {
        let mut handler = handler();
        let err = handler.handle_command("plan 다이어트 식단").await.unwrap_err();
        assert_eq!(err, "OpenAI API key is missing");
    }

    #[tokio::test]
    async fn test_exit_and_blank_input() {
        let mut handler = handler();
        assert_eq!(handler.handle_command("   ").await.unwrap(), CommandOutcome::Continue);
        assert_eq!(handler.handle_command("quit").await.unwrap(), CommandOutcome::Exit);
    }
}
