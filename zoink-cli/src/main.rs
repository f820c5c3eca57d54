use clap::Parser;
use tracing_subscriber::EnvFilter;
use zoink_client::{Draft, PostStore, SupabaseStore, validate};

mod config;

use config::AppConfig;

#[derive(Parser, Debug)]
#[command(about = "Campus post board over a hosted posts collection")]
struct Cli {
    /// Service endpoint; overrides SUPABASE_URL from the environment.
    #[clap(short, long)]
    server: Option<String>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Parser, Debug)]
enum Command {
    /// Create a post.
    Create {
        #[clap(long)]
        title: String,
        #[clap(long, default_value = "")]
        body: String,
        /// One of: sproul, "memorial glade", rsf, other.
        #[clap(long, default_value = "")]
        location: String,
    },
    /// List all posts, newest first.
    List,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info,zoink_client=debug"))
        .unwrap();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let args = Cli::parse();
    let config = AppConfig::from_env()?;
    let endpoint = args.server.as_deref().unwrap_or(&config.url);
    let store = SupabaseStore::new(endpoint, &config.key);

    match args.command {
        Command::Create {
            title,
            body,
            location,
        } => {
            let draft = Draft {
                title,
                body,
                location,
            };
            match validate(&draft) {
                Ok(record) => {
                    let post = store.create(&record).await?;
                    println!("Post created! ID: {}", post.id);
                }
                Err(errors) => {
                    for (field, message) in errors.iter() {
                        eprintln!("{field}: {message}");
                    }
                    std::process::exit(1);
                }
            }
        }
        Command::List => {
            let posts = store.list().await?;
            println!("Posts ({})", posts.len());
            for post in posts {
                let location = post.location.map(|l| l.to_string());
                println!(
                    "- [{}] {} ({})",
                    post.created_at.format("%Y-%m-%d %H:%M"),
                    post.title,
                    location.as_deref().unwrap_or("no location"),
                );
            }
        }
    }

    Ok(())
}
