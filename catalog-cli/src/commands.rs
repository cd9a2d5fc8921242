//! Command execution

use crate::{Cli, Commands, GoodsCommand, PostersCommand};
use anyhow::{Context, Result, anyhow};
use catalog_client::{
    AnnotatedItem, CatalogAccessor, Item, LocalFilePicker, Poster, PosterAccessor, PosterKind,
    RemoveOutcome,
};
use std::sync::Arc;

pub async fn execute(cli: Cli) -> Result<()> {
    let config = cli.config();
    let store = Arc::new(config.build_http_store()?);

    match cli.command {
        Commands::Goods(command) => {
            let catalog = CatalogAccessor::new(store, &config);
            goods(&catalog, command, cli.json).await
        }
        Commands::Posters(command) => {
            let picker = match &command {
                PostersCommand::Upload { file, .. } => LocalFilePicker::new([file.clone()]),
                _ => LocalFilePicker::default(),
            };
            let posters = PosterAccessor::new(store.clone(), store, Arc::new(picker), &config);
            posters_command(&posters, command, cli.json).await
        }
        Commands::Url { link } => {
            let catalog = CatalogAccessor::new(store, &config);
            println!("{}", catalog.get_url(&link));
            Ok(())
        }
    }
}

async fn goods(catalog: &CatalogAccessor, command: GoodsCommand, json: bool) -> Result<()> {
    match command {
        GoodsCommand::List => {
            let items = catalog.get_all().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&items)?);
            } else {
                items.iter().for_each(print_item);
            }
        }
        GoodsCommand::Show { id } => {
            let item = catalog.get_detail(&id).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&item)?);
            } else {
                print_item(&item);
            }
        }
        GoodsCommand::Add { document } => {
            let item = parse_item(&document)?;
            let result = catalog.add_item(&item).await?;
            println!("{}", result.id);
        }
        GoodsCommand::Replace { document } => {
            let item = parse_item(&document)?;
            let result = catalog.replace_item(&item).await?;
            println!("updated {}", result.updated);
        }
        GoodsCommand::Remove { id } => {
            let item = catalog.get_detail(&id).await?.item;
            match catalog.remove_item(&item).await? {
                RemoveOutcome::Toggled { hide: true, .. } => println!("hidden {}", id),
                RemoveOutcome::Toggled { hide: false, .. } => println!("shown {}", id),
                RemoveOutcome::Deleted(result) => println!("removed {}", result.removed),
            }
        }
    }
    Ok(())
}

async fn posters_command(
    posters: &PosterAccessor,
    command: PostersCommand,
    json: bool,
) -> Result<()> {
    match command {
        PostersCommand::List { kind } => {
            let list = posters.get_posters(kind.map(PosterKind::from)).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&list)?);
            } else {
                list.iter().for_each(print_poster);
            }
        }
        PostersCommand::Upload { kind, .. } => {
            let url = posters.upload_poster(kind.into()).await?;
            println!("{}", url);
        }
        PostersCommand::Remove { kind, id } => {
            let kind = PosterKind::from(kind);
            let candidates = posters.get_posters(Some(kind)).await?;
            let poster = match (kind, id) {
                (PosterKind::Movie, _) => candidates.into_iter().next(),
                (PosterKind::Activity, Some(id)) => candidates
                    .into_iter()
                    .find(|p| p.id.as_deref() == Some(id.as_str())),
                (PosterKind::Activity, None) => {
                    return Err(anyhow!("an activity poster id is required"));
                }
            }
            .ok_or_else(|| anyhow!("no matching {} poster", kind))?;

            let affected = posters.remove_poster(kind, &poster).await?;
            println!("affected {}", affected);
        }
    }
    Ok(())
}

fn parse_item(document: &str) -> Result<Item> {
    serde_json::from_str(document).context("item must be a JSON object")
}

fn print_item(item: &AnnotatedItem) {
    let tags: Vec<&str> = item.tag_list.iter().map(|t| t.label.as_str()).collect();
    println!(
        "{:<34} {:<6} {}{}  [{}]",
        item.item.id.as_deref().unwrap_or("-"),
        item.item.category,
        item.show_name,
        if item.item.is_hidden() { " (hidden)" } else { "" },
        tags.join(", ")
    );
}

fn print_poster(poster: &Poster) {
    println!(
        "{:<34} {:<8} {}",
        poster.id.as_deref().unwrap_or("-"),
        poster.kind,
        poster.img
    );
}
