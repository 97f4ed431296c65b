use clap::{Args, Parser, Subcommand};
use std::net::IpAddr;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "taxisite",
    about = "Taxisite - taxi company site server and editor",
    version = env!("CARGO_PKG_VERSION"),
    author,
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(flatten)]
    pub serve: ServeArgs,
}

#[derive(Args, Clone)]
pub struct GlobalArgs {
    #[arg(long, global = true, env = "TAXISITE_DATA_DIR", help = "Data directory (default ~/.taxisite)")]
    pub data_dir: Option<PathBuf>,

    #[arg(short, long, global = true, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    #[arg(long, global = true, env = "TAXISITE_SUPABASE_URL", help = "Seed cloud backend URL")]
    pub supabase_url: Option<String>,

    #[arg(
        long,
        global = true,
        env = "TAXISITE_SUPABASE_KEY",
        hide_env_values = true,
        help = "Seed cloud backend key"
    )]
    pub supabase_key: Option<String>,
}

#[derive(Args, Clone)]
pub struct ServeArgs {
    #[arg(short, long, global = true, env = "TAXISITE_PORT", default_value = "8080")]
    pub port: u16,

    #[arg(long, global = true, env = "TAXISITE_BIND", default_value = "127.0.0.1")]
    pub bind: IpAddr,

    #[arg(
        long,
        global = true,
        env = "TAXISITE_ADMIN_SECRET",
        hide_env_values = true,
        default_value = "",
        help = "Admin password; empty disables the admin API"
    )]
    pub admin_secret: String,

    #[arg(long, global = true, env = "TAXISITE_STATIC_DIR", help = "Directory with the built site frontend")]
    pub static_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Start the HTTP server (default if no command specified)")]
    Serve,

    #[command(subcommand, about = "Inspect or reset the locally cached site")]
    Site(SiteCommands),

    #[command(subcommand, about = "View and change cloud backend settings")]
    Cloud(CloudCommands),

    #[command(about = "Fetch the published site into the local cache")]
    Pull,

    #[command(about = "Publish the locally cached site to the cloud backend")]
    Publish,
}

#[derive(Subcommand)]
pub enum SiteCommands {
    #[command(about = "Show the cached site configuration")]
    Show {
        #[arg(short, long, help = "Output as JSON")]
        json: bool,
    },

    #[command(about = "Report fields that will render badly")]
    Validate,

    #[command(about = "Overwrite the local cache with the built-in defaults")]
    Reset {
        #[arg(long, help = "Do not ask for confirmation")]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum CloudCommands {
    #[command(about = "Show cloud settings (key masked)")]
    Show,

    #[command(about = "Store cloud settings")]
    Set {
        #[arg(long, help = "Project base URL, e.g. https://xyz.supabase.co")]
        url: String,

        #[arg(long, help = "Anon API key")]
        key: String,
    },
}
