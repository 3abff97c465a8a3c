use anyhow::{Context, Result};
use surrealdb::{Surreal, engine::any::Any};

use crate::planets::{self, Planet};
use crate::setup::run_setup;

/// Ensure the planets table exists, then append the full fixture set.
/// Plain insert, never upsert: every run creates fresh records with
/// engine-assigned ids, so running twice doubles the table.
pub async fn seed(db: &Surreal<Any>, verbose: bool) -> Result<()> {
	run_setup(db).await?;

	let records = planets::fixtures();
	let created: Vec<Planet> = db
		.insert(planets::TABLE)
		.content(records)
		.await
		.context("bulk insert into planets failed")?;

	if verbose {
		for planet in &created {
			println!("created {}", planet.name);
		}
	}

	println!("seeded {} planets", created.len());
	Ok(())
}
