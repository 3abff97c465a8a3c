use anyhow::{Context, Result};
use rust_dotenv::dotenv::DotEnv;
use surrealdb::{
	Surreal,
	engine::any::{Any, connect},
	opt::auth::Root,
};

/// Connection settings for the target SurrealDB instance.
#[derive(Debug, Clone)]
pub struct DbCfg {
	host: String,
	ns: String,
	db: String,
	user: String,
	pass: String,
}

impl DbCfg {
	/// Every setting has a default, so the seeder runs with no flags and
	/// no environment against a local engine.
	pub fn from_env(_env: &DotEnv) -> Result<Self> {
		let dotenv = DotEnv::new("");

		// DotEnv has already populated std::env; pull from there.
		Ok(Self {
			host: env_or(&dotenv, "DATABASE_HOST", "http://localhost:8000"),
			ns: env_or(&dotenv, "DATABASE_NAMESPACE", "starwars"),
			db: env_or(&dotenv, "DATABASE_NAME", "starwars"),
			user: env_or(&dotenv, "DATABASE_USER", "root"),
			pass: env_or(&dotenv, "DATABASE_PASSWORD", "root"),
		})
	}

	/// Open a client, sign in as root and select namespace/database.
	pub async fn connect(&self) -> Result<Surreal<Any>> {
		let db = connect(self.host.as_str())
			.await
			.with_context(|| format!("Failed connecting to {}", self.host))?;

		db.signin(Root {
			username: self.user.to_string(),
			password: self.pass.to_string(),
		})
		.await
		.context("signin failed")?;

		db.use_ns(&self.ns)
			.use_db(&self.db)
			.await
			.with_context(|| format!("use_ns/use_db failed for ns={} db={}", self.ns, self.db))?;

		Ok(db)
	}
}

fn env_or(dotenv: &DotEnv, key: &str, default: &str) -> String {
	dotenv
		.get_var(key.to_string())
		.unwrap_or_else(|| String::from(default))
}

pub async fn exec_surql(db: &Surreal<Any>, sql: &str) -> Result<()> {
	db.query(sql).await?.check()?;
	Ok(())
}
