use anyhow::Context;
use awsfind_config::AccountStore;
use colored::Colorize;

pub fn handle(store: &AccountStore) -> anyhow::Result<()> {
    let accounts = store.load().context("Failed to read configuration")?;

    if accounts.is_empty() {
        println!("{}", "No accounts configured".yellow());
        return Ok(());
    }

    for account in &accounts {
        println!(
            "{}  {}  {}",
            account.name.cyan().bold(),
            account.masked_access_key().dimmed(),
            account.regions.join(",")
        );
    }
    Ok(())
}
