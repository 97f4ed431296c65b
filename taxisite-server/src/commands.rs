use anyhow::Result;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use std::path::Path;
use std::sync::Arc;

use taxisite_core::{ConfigStore, FileStore, KeyValueStore};
use taxisite_types::{CloudSettings, SiteConfig};

use crate::cli::{CloudCommands, GlobalArgs, SiteCommands};

/// Local store rooted at `data_dir`, with cached state and cloud settings applied.
pub fn open_store(data_dir: &Path, global: &GlobalArgs) -> Result<(Arc<ConfigStore>, Arc<dyn KeyValueStore>)> {
    let storage: Arc<dyn KeyValueStore> = Arc::new(FileStore::open(data_dir)?);
    let store = Arc::new(ConfigStore::new(storage.clone(), None));
    store.load_local();
    seed_cloud_settings(&store, global)?;
    store.connect_saved_cloud()?;
    Ok((store, storage))
}

/// Settings given on the command line or in the environment replace the saved ones.
fn seed_cloud_settings(store: &ConfigStore, global: &GlobalArgs) -> Result<()> {
    if let (Some(url), Some(key)) = (&global.supabase_url, &global.supabase_key) {
        let seeded = CloudSettings::new(url.trim(), key.trim());
        if seeded.is_configured() && seeded != store.cloud_settings() {
            store.set_cloud_settings(seeded)?;
            tracing::info!("☁️ Cloud settings seeded from command line/environment");
        }
    }
    Ok(())
}

pub async fn handle_site_command(cmd: SiteCommands, store: &ConfigStore) -> Result<()> {
    match cmd {
        SiteCommands::Show { json } => show_site(&store.get(), json),
        SiteCommands::Validate => validate_site(&store.get()),
        SiteCommands::Reset { yes } => {
            if !yes {
                anyhow::bail!("This overwrites the local site with the defaults; rerun with --yes");
            }
            store.save(SiteConfig::default())?;
            println!("{} Local site reset to defaults", "✓".green());
            Ok(())
        }
    }
}

fn show_site(config: &SiteConfig, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(config)?);
        return Ok(());
    }

    println!("{}", config.hero.title.cyan().bold());
    println!("  {}", config.hero.subtitle);
    println!("  Phones: {}", config.phones.join(", "));
    if let Some(secondary) = &config.secondary_phone {
        println!("  Secondary: {}", secondary);
    }
    println!("  Emails: {}", config.emails.join(", "));
    println!("  Address: {}", config.address);
    println!("  Service areas: {}", config.service_areas.join(", "));
    println!(
        "  Gallery: {} images, Reviews: {}, FAQs: {}",
        config.gallery.len(),
        config.reviews.len(),
        config.faqs.len()
    );

    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "ID", "Vehicle", "Seats", "Base", "Per km", "Per hour", "Full day",
    ]);
    for v in &config.vehicles {
        table.add_row(vec![
            Cell::new(&v.id),
            Cell::new(&v.name),
            Cell::new(v.capacity),
            Cell::new(v.base),
            Cell::new(v.km),
            Cell::new(v.hour),
            Cell::new(v.full_day),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn validate_site(config: &SiteConfig) -> Result<()> {
    let report = config.validation_report();
    if report.is_clean() {
        println!("{} No issues found", "✓".green());
        return Ok(());
    }

    println!("{} {} issue(s):", "!".yellow().bold(), report.issues.len());
    for issue in &report.issues {
        println!("  {} {}", issue.field.yellow(), issue.message);
    }
    Ok(())
}

pub fn handle_cloud_command(cmd: CloudCommands, store: &ConfigStore) -> Result<()> {
    match cmd {
        CloudCommands::Show => {
            let settings = store.cloud_settings();
            println!("{}", "Cloud Settings:".cyan().bold());
            if !settings.is_configured() {
                println!("  {}", "not configured".dimmed());
                return Ok(());
            }
            let masked = settings.masked();
            println!("  URL: {}", masked.url);
            println!("  Key: {}", masked.key);
            Ok(())
        }
        CloudCommands::Set { url, key } => {
            store.set_cloud_settings(CloudSettings::new(url.trim(), key.trim()))?;
            println!("{} Cloud keys saved!", "✓".green());
            Ok(())
        }
    }
}

pub async fn handle_pull(store: &ConfigStore) -> Result<()> {
    match store.try_refresh_from_remote().await {
        Ok(config) => {
            println!(
                "{} Pulled published site ({} vehicles, {} gallery images)",
                "✓".green(),
                config.vehicles.len(),
                config.gallery.len()
            );
            Ok(())
        }
        Err(e) => {
            println!("{} Pull failed, local site unchanged: {}", "✗".red(), e);
            Err(anyhow::anyhow!("Pull failed: {}", e))
        }
    }
}

pub async fn handle_publish(store: &ConfigStore) -> Result<()> {
    let local = store.get();
    let report = local.validation_report();
    if !report.is_clean() {
        println!("{} Publishing with {} validation issue(s)", "!".yellow(), report.issues.len());
    }
    store.publish(local).await?;
    println!("{} Published LIVE! Changes are now visible on all devices.", "✓".green());
    Ok(())
}
