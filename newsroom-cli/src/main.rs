use clap::Parser;
use newsroom_client::{DateFilter, NewsroomApi, NewsroomHttpClient};
use uuid::Uuid;

#[derive(Parser, Debug)]
struct Cli {
    #[clap(short, long)]
    server: Option<String>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Parser, Debug)]
enum Command {
    ListAuthors,
    GetAuthor {
        id: Uuid,
    },
    CreateAuthor {
        #[clap(long)]
        name: String,
        #[clap(long)]
        hometown: String,
    },
    UpdateAuthor {
        id: Uuid,
        #[clap(long)]
        name: String,
        #[clap(long)]
        hometown: String,
    },
    ListPosts {
        #[clap(long)]
        author: Option<Uuid>,
        #[clap(long)]
        date: Option<DateFilter>,
    },
    GetPost {
        id: Uuid,
    },
    CreatePost {
        #[clap(long)]
        author_id: Uuid,
        #[clap(long)]
        title: String,
        #[clap(long)]
        description: String,
    },
    UpdatePost {
        id: Uuid,
        #[clap(long)]
        title: String,
        #[clap(long)]
        description: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();

    let endpoint = args.server.as_deref().unwrap_or("http://127.0.0.1:8080");
    let client = NewsroomHttpClient::connect(endpoint)?;

    match args.command {
        Command::ListAuthors => {
            let authors = client.list_authors().await?;
            println!("{}", serde_json::to_string_pretty(&authors)?);
        }
        Command::GetAuthor { id } => {
            let author = client.get_author(id).await?;
            println!("{}", serde_json::to_string_pretty(&author)?);
        }
        Command::CreateAuthor { name, hometown } => {
            let author = client.create_author(name, hometown).await?;
            println!("{}", serde_json::to_string_pretty(&author)?);
        }
        Command::UpdateAuthor { id, name, hometown } => {
            let author = client.update_author(id, name, hometown).await?;
            println!("{}", serde_json::to_string_pretty(&author)?);
        }
        Command::ListPosts { author, date } => {
            let posts = client.list_posts(author, date).await?;
            println!("{}", serde_json::to_string_pretty(&posts)?);
        }
        Command::GetPost { id } => {
            let detail = client.get_post(id).await?;
            println!("{}", serde_json::to_string_pretty(&detail)?);
        }
        Command::CreatePost {
            author_id,
            title,
            description,
        } => {
            let post = client.create_post(author_id, title, description).await?;
            println!("{}", serde_json::to_string_pretty(&post)?);
        }
        Command::UpdatePost {
            id,
            title,
            description,
        } => {
            let post = client.update_post(id, title, description).await?;
            println!("{}", serde_json::to_string_pretty(&post)?);
        }
    }

    Ok(())
}
