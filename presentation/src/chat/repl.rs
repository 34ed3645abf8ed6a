//! REPL (Read-Eval-Print Loop) for interactive chat

use medchat_application::SubmitQuestionUseCase;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};

/// Interactive chat REPL
///
/// Every non-command line is submitted as a question; the use case's view
/// renders the conversation, so the loop itself only reads input.
pub struct ChatRepl {
    use_case: SubmitQuestionUseCase,
    endpoint_label: String,
}

impl ChatRepl {
    /// Create a new ChatRepl. `endpoint_label` is only shown in the welcome
    /// banner (e.g. the endpoint URL, or "demo").
    pub fn new(use_case: SubmitQuestionUseCase, endpoint_label: impl Into<String>) -> Self {
        Self {
            use_case,
            endpoint_label: endpoint_label.into(),
        }
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        // Try to load history
        let history_path = dirs::data_dir().map(|p| p.join("medchat").join("history.txt"));

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            let readline = rl.readline(">>> ");

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    // Skip empty lines
                    if line.is_empty() {
                        continue;
                    }

                    // Handle commands
                    if line.starts_with('/') {
                        if self.handle_command(line) {
                            break;
                        }
                        continue;
                    }

                    // Add to history
                    let _ = rl.add_history_entry(line);

                    // The view renders everything, including errors
                    let _ = self.use_case.execute(line).await;
                    println!();
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Ciao!");
                    break;
                }
                Err(err) => {
                    eprintln!("Errore: {err:?}");
                    break;
                }
            }
        }

        // Save history
        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│         medchat - Agente Medico             │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Endpoint: {}", self.endpoint_label);
        println!();
        println!("Commands:");
        println!("  /help     - Show this help");
        println!("  /endpoint - Show the configured endpoint");
        println!("  /quit     - Exit chat");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    fn handle_command(&self, cmd: &str) -> bool {
        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Ciao!");
                true
            }
            "/help" | "/h" | "/?" => {
                println!();
                println!("Commands:");
                println!("  /help, /h, /?    - Show this help");
                println!("  /endpoint        - Show the configured endpoint");
                println!("  /quit, /exit, /q - Exit chat");
                println!();
                false
            }
            "/endpoint" => {
                println!();
                println!("Endpoint: {}", self.endpoint_label);
                println!();
                false
            }
            _ => {
                println!("Unknown command: {cmd}");
                println!("Type /help for available commands");
                false
            }
        }
    }
}
