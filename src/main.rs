// ABOUTME: CLI entrypoint for stackmark command
// ABOUTME: Handles logging setup, error exit codes, and command dispatch

use clap::Parser;
use serde::Serialize;
use serde_json::{Map, Value};
use stackmark::{
    api::ApiClient,
    auth,
    cli::{AuthCommand, Cli, Commands, ConfigCommand, DraftCommand, FormatArgs, PostCommand},
    markdown,
    model::{Account, Config, PublishOptions},
    publish::{self, DraftOverrides},
    storage::Paths,
    Error, Result,
};
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("stackmark: [E{}] {}", e.exit_code(), e);
        std::process::exit(e.exit_code());
    }
}

fn init_logging(verbose: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn run(cli: Cli) -> Result<()> {
    let paths = Paths::new(cli.config_dir)?;

    match cli.command {
        Commands::Auth(command) => run_auth(&paths, command),
        Commands::Draft(command) => run_draft(&paths, command),
        Commands::Post(command) => run_post(&paths, command),
        Commands::Config(command) => run_config(&paths, command),
        Commands::Convert { file } => {
            let source = std::fs::read(&file)?;
            print_json(&markdown::convert(&source)?)
        }
    }
}

fn client(paths: &Paths) -> Result<ApiClient> {
    let store = auth::load_from(&paths.accounts_file)?;
    ApiClient::new(store.active()?)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn wants_json(paths: &Paths, args: &FormatArgs) -> Result<bool> {
    Ok(match &args.format {
        Some(format) => format == "json",
        None => Config::load(&paths.config_file)?.json_output(),
    })
}

fn prompt(input: &mut impl BufRead, label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn run_auth(paths: &Paths, command: AuthCommand) -> Result<()> {
    let mut store = auth::load_from(&paths.accounts_file)?;

    match command {
        AuthCommand::Login => {
            let mut input = io::stdin().lock();
            let account = Account {
                name: prompt(&mut input, "Account name (e.g. my-blog)")?,
                publication_url: prompt(
                    &mut input,
                    "Publication URL (e.g. https://you.substack.com)",
                )?,
                user_id: prompt(&mut input, "User ID")?,
                sid: prompt(&mut input, "SID (connect.sid cookie)")?,
                substack_sid: prompt(&mut input, "substack.sid cookie")?,
                substack_lli: prompt(&mut input, "substack.lli cookie")?,
            };
            if account.name.is_empty() {
                return Err(Error::Auth("account name must not be empty".into()));
            }

            let name = account.name.clone();
            store.add(account);
            store.switch(&name)?;
            auth::save_to(&store, &paths.accounts_file)?;
            println!("Logged in as {} (active)", name);
        }
        AuthCommand::Status => {
            let account = store.active()?;
            println!("Active: {} ({})", account.name, account.publication_url);
        }
        AuthCommand::List => {
            if store.accounts.is_empty() {
                println!("No accounts configured. Run 'stackmark auth login'.");
            }
            for account in &store.accounts {
                let marker = if account.name == store.active { "* " } else { "  " };
                println!("{}{} ({})", marker, account.name, account.publication_url);
            }
        }
        AuthCommand::Switch { name } => {
            store.switch(&name)?;
            auth::save_to(&store, &paths.accounts_file)?;
            println!("Switched to {}", name);
        }
        AuthCommand::Remove { name } => {
            store.remove(&name)?;
            auth::save_to(&store, &paths.accounts_file)?;
            println!("Removed {}", name);
        }
    }

    Ok(())
}

fn run_draft(paths: &Paths, command: DraftCommand) -> Result<()> {
    match command {
        DraftCommand::List(format) => {
            let json = wants_json(paths, &format)?;
            let drafts = client(paths)?.list_drafts()?;
            if json {
                return print_json(&drafts);
            }
            if drafts.is_empty() {
                println!("No drafts.");
            }
            for draft in &drafts {
                println!("{:<8} {}", draft.id, draft.title.as_deref().unwrap_or(""));
            }
        }
        DraftCommand::Get { id } => {
            let draft = client(paths)?.get_draft(id)?;
            println!("ID:       {}", draft.id);
            println!("Title:    {}", draft.title.as_deref().unwrap_or(""));
            println!("Subtitle: {}", draft.subtitle.as_deref().unwrap_or(""));
            println!("Slug:     {}", draft.slug.as_deref().unwrap_or(""));
            println!("Audience: {}", draft.audience.as_deref().unwrap_or(""));
        }
        DraftCommand::Delete { id } => {
            client(paths)?.delete_draft(id)?;
            println!("Draft {} deleted.", id);
        }
        DraftCommand::Publish {
            id,
            send_email,
            audience,
        } => {
            let config = Config::load(&paths.config_file)?;
            let options = PublishOptions {
                send_email: match send_email {
                    Some(value) => value.unwrap_or(true),
                    None => config.send_email,
                },
                audience: audience.unwrap_or(config.audience),
            };
            let post = client(paths)?.publish_draft(id, &options)?;
            println!(
                "Published: id={} slug={:?}",
                post.id,
                post.slug.as_deref().unwrap_or("")
            );
        }
    }

    Ok(())
}

fn run_post(paths: &Paths, command: PostCommand) -> Result<()> {
    match command {
        PostCommand::Create(args) => {
            let config = Config::load(&paths.config_file)?;
            let overrides = DraftOverrides {
                title: args.title,
                subtitle: args.subtitle,
                audience: args.audience,
                section: args.section,
            };
            let draft = publish::prepare_draft(&args.file, &config, &overrides)?;

            if args.dry_run {
                return print_json(&draft);
            }

            let publish = args.publish.then_some(args.send_email);
            let (created, post) = publish::create_post(&client(paths)?, draft, publish)?;
            println!(
                "Draft created: id={} title={:?}",
                created.id,
                created.title.as_deref().unwrap_or("")
            );
            if let Some(post) = post {
                println!(
                    "Published: id={} slug={:?}",
                    post.id,
                    post.slug.as_deref().unwrap_or("")
                );
            }
        }
        PostCommand::List(format) => {
            let json = wants_json(paths, &format)?;
            let posts = client(paths)?.list_posts()?;
            if json {
                return print_json(&posts);
            }
            if posts.is_empty() {
                println!("No published posts.");
            }
            for post in &posts {
                println!(
                    "{:<8} {}  {}",
                    post.id,
                    post.post_date.as_deref().unwrap_or(""),
                    post.title.as_deref().unwrap_or("")
                );
            }
        }
        PostCommand::Get { id } => {
            let post = client(paths)?.get_post(id)?;
            println!("ID:       {}", post.id);
            println!("Title:    {}", post.title.as_deref().unwrap_or(""));
            println!("Subtitle: {}", post.subtitle.as_deref().unwrap_or(""));
            println!("Slug:     {}", post.slug.as_deref().unwrap_or(""));
            println!("Audience: {}", post.audience.as_deref().unwrap_or(""));
            println!("Date:     {}", post.post_date.as_deref().unwrap_or(""));
        }
        PostCommand::Unpublish { id } => {
            client(paths)?.unpublish_post(id)?;
            println!("Post {} unpublished.", id);
        }
        PostCommand::Update {
            id,
            title,
            subtitle,
            audience,
        } => {
            let mut updates = Map::new();
            for (key, value) in [("title", title), ("subtitle", subtitle), ("audience", audience)] {
                if let Some(value) = value.filter(|v| !v.is_empty()) {
                    updates.insert(key.to_string(), Value::String(value));
                }
            }
            if updates.is_empty() {
                return Err(Error::Config("no updates specified".into()));
            }

            let post = client(paths)?.update_post(id, updates)?;
            println!(
                "Updated: id={} title={:?}",
                post.id,
                post.title.as_deref().unwrap_or("")
            );
        }
    }

    Ok(())
}

fn run_config(paths: &Paths, command: ConfigCommand) -> Result<()> {
    let mut config = Config::load(&paths.config_file)?;

    match command {
        ConfigCommand::Show => {
            println!("send_email:    {}", config.send_email);
            println!("audience:      {}", config.audience);
            println!("section:       {}", config.section);
            println!("output_format: {}", config.output_format);
        }
        ConfigCommand::Set { key, value } => {
            config.set(&key, &value)?;
            config.save(&paths.config_file)?;
            println!("Set {} = {}", key, value);
        }
    }

    Ok(())
}
