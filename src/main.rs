use clap::{Parser, Subcommand};
use rust_dotenv::dotenv::DotEnv;
use surrealdb::{Surreal, engine::any::Any};

mod db;
mod planets;
mod seed;
mod setup;
mod status;

use db::DbCfg;
use setup::run_setup;
use status::status;

#[derive(Parser, Debug)]
#[command(version, about = "StarSeed CLI")]
pub struct Cli {
	/// Increase output
	#[arg(short, long, global = true)]
	verbose: bool,

	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
	Setup,
	Seed,
	Status,
}

fn load_env() -> DotEnv {
	// Load .env in CWD if present, ignore missing
	DotEnv::new("")
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	let args = Cli::parse();
	let env = load_env();

	match args.command {
		Commands::Setup => {
			let db = connect_from_env(&env).await?;
			run_setup(&db).await?;
		}
		Commands::Seed => {
			let db = connect_from_env(&env).await?;
			seed::seed(&db, args.verbose).await?;
		}
		Commands::Status => {
			let db = connect_from_env(&env).await?;
			status(&db).await?;
		}
	}

	Ok(())
}

async fn connect_from_env(env: &DotEnv) -> anyhow::Result<Surreal<Any>> {
	let cfg = DbCfg::from_env(env)?;
	cfg.connect().await
}
