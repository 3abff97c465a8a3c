use anyhow::Result;
use surrealdb::{Surreal, engine::any::Any};

use crate::planets::Planet;

pub async fn status(db: &Surreal<Any>) -> Result<()> {
	let mut resp = db.query("SELECT * FROM planets ORDER BY name;").await?;
	let rows: Vec<Planet> = resp.take(0)?;

	if rows.is_empty() {
		println!("No planets recorded");
	} else {
		println!("{} planets recorded:", rows.len());
		for p in rows {
			println!("{} films={} climate={}", p.name, p.films, p.climate);
		}
	}
	Ok(())
}
