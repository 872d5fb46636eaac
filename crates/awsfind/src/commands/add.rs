use anyhow::Context;
use awsfind_config::{AccountRecord, AccountStore, parse_regions};
use colored::Colorize;

pub fn handle(
    store: &AccountStore,
    name: String,
    access_key: String,
    secret_key: String,
    regions: &str,
) -> anyhow::Result<()> {
    let regions = parse_regions(regions);
    if regions.is_empty() {
        anyhow::bail!("--regions must name at least one region");
    }

    let record = AccountRecord::new(name, access_key, secret_key, regions);
    let name = record.name.clone();
    store
        .add(record)
        .with_context(|| format!("Failed to add account {}", name))?;

    println!("{}", format!("Account {} added successfully", name).green());
    Ok(())
}
