use super::CommandOutcome;

pub fn handle_command(input: &str) -> Result<CommandOutcome, String> {
    match input.to_lowercase().as_str() {
        "help" => {
            println!("\n🥗 Plan M Commands:");
            println!("  Just type your conditions (days, budget, purpose, ...)");
            println!("  Examples:");
            println!("    - 다이어트 식단, 하루 만원");
            println!("    - plan 벌크업을 위한 고단백 식단");
            println!();

            println!("🔑 Key Commands:");
            println!("  keys                   - Show which API keys are set");
            println!("  key openai <api-key>   - Set the OpenAI key for this session");
            println!("  key serpapi <api-key>  - Set the SerpApi key for this session");
            println!();

            println!("⚙️ System Commands:");
            println!("  help  - Show this help menu");
            println!("  exit  - Exit the program");
            Ok(CommandOutcome::Continue)
        },
        "exit" | "quit" => {
            println!("👋 Goodbye!");
            Ok(CommandOutcome::Exit)
        },
        _ => Err("Unknown system command. Type 'help' for available commands.".to_string())
    }
}
