//! catalog-cli - operate the storefront catalog from a terminal
//!
//! ## Commands
//!
//! - `catalog goods list|show|add|replace|remove`
//! - `catalog posters list|upload|remove`
//! - `catalog url <link>`
//!
//! Connection settings come from flags or `CATALOG_*` environment variables.

pub mod commands;

use catalog_client::ClientConfig;
use clap::{Parser, Subcommand, ValueEnum};
use shared::PosterKind;
use std::path::PathBuf;

/// Storefront catalog command-line interface
#[derive(Debug, Parser)]
#[command(name = "catalog", version, about, long_about = None)]
pub struct Cli {
    /// Document store URL
    #[arg(long, env = "CATALOG_BASE_URL", default_value = "http://localhost:3100")]
    pub base_url: String,

    /// Bearer token
    #[arg(long, env = "CATALOG_TOKEN")]
    pub token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "CATALOG_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout: u64,

    /// Documents per page when listing
    #[arg(long, env = "CATALOG_PAGE_SIZE", default_value_t = catalog_client::config::DEFAULT_PAGE_SIZE)]
    pub page_size: u64,

    /// Public domain for storage links
    #[arg(long, env = "CATALOG_DOMAIN_SUFFIX", default_value = shared::link::DEFAULT_DOMAIN_SUFFIX)]
    pub domain_suffix: String,

    /// Print raw JSON instead of one line per record
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn config(&self) -> ClientConfig {
        let mut config = ClientConfig::new(self.base_url.clone())
            .with_timeout(self.timeout)
            .with_page_size(self.page_size)
            .with_domain_suffix(self.domain_suffix.clone());
        if let Some(token) = &self.token {
            config = config.with_token(token.clone());
        }
        config
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Goods listing and maintenance
    #[command(subcommand)]
    Goods(GoodsCommand),
    /// Promotional posters
    #[command(subcommand)]
    Posters(PostersCommand),
    /// Rewrite a cloud:// storage link to its public URL
    Url { link: String },
}

#[derive(Debug, Subcommand)]
pub enum GoodsCommand {
    /// Every item in display order
    List,
    /// One item by id
    Show { id: String },
    /// Create an item from a JSON document
    Add {
        #[arg(value_name = "JSON")]
        document: String,
    },
    /// Overwrite an item from a JSON document carrying its `_id`
    Replace {
        #[arg(value_name = "JSON")]
        document: String,
    },
    /// Hide or unhide a beer, delete anything else
    Remove { id: String },
}

#[derive(Debug, Subcommand)]
pub enum PostersCommand {
    /// Posters, optionally of one kind
    List {
        #[arg(long, value_enum)]
        kind: Option<PosterKindArg>,
    },
    /// Upload an image as a poster
    Upload {
        #[arg(long, value_enum)]
        kind: PosterKindArg,
        file: PathBuf,
    },
    /// Clear the movie poster, or delete an activity poster by id
    Remove {
        #[arg(long, value_enum)]
        kind: PosterKindArg,
        id: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PosterKindArg {
    Movie,
    Activity,
}

impl From<PosterKindArg> for PosterKind {
    fn from(kind: PosterKindArg) -> Self {
        match kind {
            PosterKindArg::Movie => PosterKind::Movie,
            PosterKindArg::Activity => PosterKind::Activity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_config_from_flags() {
        let cli = Cli::parse_from([
            "catalog",
            "--base-url",
            "http://store:9000",
            "--token",
            "abc",
            "--page-size",
            "0",
            "goods",
            "list",
        ]);
        let config = cli.config();
        assert_eq!(config.base_url, "http://store:9000");
        assert_eq!(config.token.as_deref(), Some("abc"));
        assert_eq!(config.page_size, 1);
        assert!(matches!(cli.command, Commands::Goods(GoodsCommand::List)));
    }

    #[test]
    fn test_poster_kind_argument() {
        let cli = Cli::parse_from([
            "catalog", "posters", "upload", "--kind", "activity", "a.png",
        ]);
        let Commands::Posters(PostersCommand::Upload { kind, file }) = cli.command else {
            panic!("expected posters upload");
        };
        assert_eq!(PosterKind::from(kind), PosterKind::Activity);
        assert_eq!(file, PathBuf::from("a.png"));
    }

    #[test]
    fn test_goods_documents_parse() {
        let doc = r#"{"category":"food"}"#;
        let cli = Cli::try_parse_from(["catalog", "goods", "add", doc]).unwrap();
        assert!(!cli.json);
        let Commands::Goods(GoodsCommand::Add { document }) = cli.command else {
            panic!("expected goods add");
        };
        assert_eq!(document, doc);

        let cli = Cli::try_parse_from(["catalog", "--json", "goods", "replace", doc]).unwrap();
        assert!(cli.json);
        let Commands::Goods(GoodsCommand::Replace { document }) = cli.command else {
            panic!("expected goods replace");
        };
        assert_eq!(document, doc);
    }

    #[test]
    fn test_goods_id_commands_parse() {
        let cli = Cli::try_parse_from(["catalog", "goods", "show", "g1", "--json"]).unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Commands::Goods(GoodsCommand::Show { id }) if id == "g1"));

        let cli = Cli::try_parse_from(["catalog", "goods", "remove", "g2"]).unwrap();
        assert!(matches!(cli.command, Commands::Goods(GoodsCommand::Remove { id }) if id == "g2"));
    }

    #[test]
    fn test_posters_commands_parse() {
        let cli = Cli::try_parse_from(["catalog", "posters", "list"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Posters(PostersCommand::List { kind: None })
        ));

        let cli = Cli::try_parse_from(["catalog", "posters", "list", "--kind", "movie"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Posters(PostersCommand::List {
                kind: Some(PosterKindArg::Movie)
            })
        ));

        let cli = Cli::try_parse_from(["catalog", "posters", "remove", "--kind", "movie"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Posters(PostersCommand::Remove {
                kind: PosterKindArg::Movie,
                id: None
            })
        ));

        let cli = Cli::try_parse_from([
            "catalog", "posters", "remove", "--kind", "activity", "p7",
        ])
        .unwrap();
        let Commands::Posters(PostersCommand::Remove { kind, id }) = cli.command else {
            panic!("expected posters remove");
        };
        assert_eq!(kind, PosterKindArg::Activity);
        assert_eq!(id.as_deref(), Some("p7"));

        assert!(Cli::try_parse_from(["catalog", "posters", "upload", "a.png"]).is_err());
    }

    #[test]
    fn test_url_command_parse() {
        let cli = Cli::try_parse_from(["catalog", "url", "cloud://env.1/a.png"]).unwrap();
        assert!(matches!(cli.command, Commands::Url { link } if link == "cloud://env.1/a.png"));
    }
}
