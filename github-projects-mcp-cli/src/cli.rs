use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "github-projects-mcp")]
#[command(version)]
#[command(about = "An MCP server for GitHub Projects v2")]
#[command(long_about = "
github-projects-mcp is an MCP (Model Context Protocol) server exposing
GitHub Projects v2 tools backed by the GitHub GraphQL API: list projects,
fetch project details and custom fields, resolve issue node IDs, and add
issues to project boards.

The server authenticates with the token in GITHUB_TOKEN and talks to
https://api.github.com/graphql unless GITHUB_GRAPHQL_URL points elsewhere.

Example usage:
  github-projects-mcp serve     # Run as MCP server on stdio
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Run as MCP server (default when invoked via stdio)
    #[command(long_about = "
Runs github-projects-mcp as an MCP server on stdio. This is the mode MCP
clients such as Claude Code use. The server will:

- Advertise the Projects v2 tools with their schemas and annotations
- Execute one GraphQL query or mutation per tool call
- Log to ~/.github-projects-mcp/mcp.log while stdio carries the protocol

Example:
  github-projects-mcp serve
  # Or configure in your MCP client's server settings
")]
    Serve,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_serve_subcommand_parses() {
        let cli = Cli::try_parse_from(["github-projects-mcp", "serve"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Serve)));
        assert!(!cli.verbose);
    }

    #[test]
    fn test_flags_parse() {
        let cli = Cli::try_parse_from(["github-projects-mcp", "--quiet", "serve"]).unwrap();
        assert!(cli.quiet);
    }
}
