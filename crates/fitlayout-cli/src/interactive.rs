//! Interactive CLI mode

use crate::commands::{CommandExecutor, ShellCli};
use anyhow::Result;
use clap::Parser;
use fitlayout_client::RepositoryClient;
use std::io::{self, Write};

/// Interactive repository session.
pub struct InteractiveSession {
    executor: CommandExecutor,
}

impl InteractiveSession {
    pub fn new(client: RepositoryClient) -> Self {
        Self {
            executor: CommandExecutor::new(client),
        }
    }

    /// Start interactive session
    pub fn run(&mut self) -> Result<()> {
        println!(
            "Connected to {} - type 'help' for available commands, 'quit' to exit",
            self.executor.client().base_url()
        );

        loop {
            print!("fitlayout> ");
            io::stdout().flush()?;

            let mut input = String::new();
            if io::stdin().read_line(&mut input)? == 0 {
                break;
            }
            let input = input.trim();

            if input.is_empty() {
                continue;
            }

            match input {
                "quit" | "exit" | "q" => break,
                "help" | "h" => self.show_help(),
                "clear" => {
                    // Clear screen (Unix-like systems)
                    print!("\x1B[2J\x1B[1;1H");
                }
                _ => {
                    if let Err(e) = self.execute_command(input) {
                        eprintln!("Error: {e:#}");
                    }
                }
            }
        }

        Ok(())
    }

    fn execute_command(&mut self, input: &str) -> Result<()> {
        let args = shell_words::split(input)?;
        let cli = match ShellCli::try_parse_from(args) {
            Ok(cli) => cli,
            Err(e) => {
                eprintln!("{e}");
                return Ok(());
            }
        };

        let result = self.executor.execute(cli.command)?;
        if !result.message.is_empty() {
            println!("{}", result.message);
        }

        Ok(())
    }

    fn show_help(&self) {
        println!("Available commands:");
        println!("  ping                     Check that the repository is reachable");
        println!("  list [TYPE_IRI]          List artifacts, optionally by exact type");
        println!("  dump FORMAT [--output F] Export the whole repository graph");
        println!("  import FILE FORMAT [--split N]");
        println!("                           Import serialized RDF, chunked by N lines");
        println!("  invoke SERVICE [--input IRI] [-p K=V]...");
        println!("                           Invoke a remote artifact service");
        println!("  render URL [--width N] [--height N]");
        println!("                           Render a URL into a new Page artifact");
        println!("  segment IRI [--preserve-aux]");
        println!("                           Segment a Page into a new AreaTree");
        println!("  get IRI [--format F]     Fetch an artifact graph");
        println!("  info IRI [--format F]    Fetch artifact metadata only");
        println!("  image IRI FILE           Save an artifact's rendered image");
        println!("  delete IRI               Delete an artifact");
        println!("  query SPARQL [--no-prefix]");
        println!("                           Run a SPARQL query");
        println!("  help                     Show this help");
        println!("  clear                    Clear screen");
        println!("  quit                     Exit");
        println!();
        println!("Use '<command> --help' for detailed help on each command");
    }
}

/// Connect, ping and enter the interactive loop.
pub fn start_interactive(client: RepositoryClient) -> Result<()> {
    let mut session = InteractiveSession::new(client);
    session.run()
}
