// ABOUTME: Command-line interface definitions using clap
// ABOUTME: Defines all subcommands and global flags

use crate::config::{VALID_AUDIENCES as AUDIENCES, VALID_OUTPUT_FORMATS as OUTPUT_FORMATS};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "stackmark")]
#[command(about = "Publish Markdown files as Substack drafts and posts", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Override config directory (accounts.json, config.json)
    #[arg(long, global = true, env = "STACKMARK_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Manage publication accounts
    #[command(subcommand)]
    Auth(AuthCommand),

    /// Manage drafts
    #[command(subcommand)]
    Draft(DraftCommand),

    /// Manage posts
    #[command(subcommand)]
    Post(PostCommand),

    /// Manage default settings
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Convert a Markdown file and print title, frontmatter, and body as JSON
    Convert {
        /// Markdown file
        file: PathBuf,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum AuthCommand {
    /// Add or update an account and make it active
    Login,
    /// Show the active account
    Status,
    /// List all accounts
    List,
    /// Switch the active account
    Switch { name: String },
    /// Remove an account
    Remove { name: String },
}

#[derive(Subcommand, Debug, Clone)]
pub enum DraftCommand {
    /// List drafts
    List(FormatArgs),
    /// Show draft details
    Get { id: u64 },
    /// Delete a draft
    Delete { id: u64 },
    /// Publish a draft
    Publish {
        id: u64,
        /// Send email to subscribers (default from config)
        #[arg(long)]
        send_email: Option<Option<bool>>,
        /// Audience (default from config)
        #[arg(long, value_parser = AUDIENCES)]
        audience: Option<String>,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum PostCommand {
    /// Create a draft from a Markdown file
    Create(CreateArgs),
    /// List published posts
    List(FormatArgs),
    /// Show post details
    Get { id: u64 },
    /// Unpublish a post
    Unpublish { id: u64 },
    /// Update post metadata
    Update {
        id: u64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        subtitle: Option<String>,
        #[arg(long, value_parser = AUDIENCES)]
        audience: Option<String>,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommand {
    /// Show current config
    Show,
    /// Set a config value (send_email, audience, section, output_format)
    Set { key: String, value: String },
}

#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Output format (default from config)
    #[arg(long, value_parser = OUTPUT_FORMATS)]
    pub format: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct CreateArgs {
    /// Markdown file
    pub file: PathBuf,
    /// Post title (overrides frontmatter and H1)
    #[arg(long)]
    pub title: Option<String>,
    /// Post subtitle
    #[arg(long)]
    pub subtitle: Option<String>,
    /// Publish immediately
    #[arg(long)]
    pub publish: bool,
    /// Send email to subscribers when publishing
    #[arg(long)]
    pub send_email: bool,
    #[arg(long, value_parser = AUDIENCES)]
    pub audience: Option<String>,
    /// Section/category for the post
    #[arg(long)]
    pub section: Option<String>,
    /// Print the draft request instead of sending it
    #[arg(long)]
    pub dry_run: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_post_create() {
        let cli = Cli::try_parse_from([
            "stackmark",
            "post",
            "create",
            "post.md",
            "--title",
            "Hi",
            "--publish",
            "--audience",
            "only_paid",
        ])
        .unwrap();
        match cli.command {
            Commands::Post(PostCommand::Create(args)) => {
                assert_eq!(args.file, PathBuf::from("post.md"));
                assert_eq!(args.title.as_deref(), Some("Hi"));
                assert!(args.publish);
                assert!(!args.send_email);
                assert_eq!(args.audience.as_deref(), Some("only_paid"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_audience_rejected() {
        let result = Cli::try_parse_from(["stackmark", "draft", "publish", "1", "--audience", "friends"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_non_numeric_id_rejected() {
        assert!(Cli::try_parse_from(["stackmark", "draft", "get", "abc"]).is_err());
    }

    #[test]
    fn test_publish_send_email_flag_forms() {
        let parse = |args: &[&str]| match Cli::try_parse_from(args.iter().copied())
            .unwrap()
            .command
        {
            Commands::Draft(DraftCommand::Publish { send_email, .. }) => send_email,
            other => panic!("unexpected command: {:?}", other),
        };
        assert_eq!(parse(&["stackmark", "draft", "publish", "1"]), None);
        assert_eq!(
            parse(&["stackmark", "draft", "publish", "1", "--send-email"]),
            Some(None)
        );
        assert_eq!(
            parse(&["stackmark", "draft", "publish", "1", "--send-email=false"]),
            Some(Some(false))
        );
    }

    #[test]
    fn test_global_config_dir() {
        let cli = Cli::try_parse_from(["stackmark", "config", "show", "--config-dir", "/tmp/x"]).unwrap();
        assert_eq!(cli.config_dir, Some(PathBuf::from("/tmp/x")));
    }
}
