use anyhow::Result;
use surrealdb::{Surreal, engine::any::Any};

use crate::db::exec_surql;

pub async fn run_setup(db: &Surreal<Any>) -> Result<()> {
	exec_surql(db, SETUP).await
}

// OVERWRITE makes re-runs harmless; existing records survive a redefine.
const SETUP: &str = r#"
DEFINE TABLE OVERWRITE planets SCHEMALESS;
"#;
