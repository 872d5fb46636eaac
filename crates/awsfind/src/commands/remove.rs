use anyhow::Context;
use awsfind_config::AccountStore;
use colored::Colorize;

pub fn handle(store: &AccountStore, name: &str) -> anyhow::Result<()> {
    store
        .remove(name)
        .with_context(|| format!("Failed to remove account {}", name))?;

    println!("{}", format!("Account {} removed successfully", name).green());
    Ok(())
}
