// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod cli;
mod run;

use clap::Parser;
use color_eyre::eyre::{Result, eyre};
use shiftdesk_api::ShiftDesk;
use shiftdesk_audit::Actor;
use shiftdesk_domain::SystemClock;
use shiftdesk_persistence::SqliteKeyValueStore;
use tracing::{error, info};

use crate::cli::Args;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Opening roster at: {}", args.database);
    let backend: SqliteKeyValueStore = SqliteKeyValueStore::open(&args.database)?;
    let mut desk: ShiftDesk<SqliteKeyValueStore, SystemClock> =
        ShiftDesk::open(backend, SystemClock)?;

    let (Some(id), Some(password), Some(portal)) = (args.id, args.password, args.portal) else {
        return Err(eyre!("--id, --password and --portal are required"));
    };
    let actor: Actor = desk.login(&id, &password, portal.into())?;

    match run::run(&mut desk, &actor, args.command) {
        Ok(output) => {
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        }
        Err(err) => {
            error!("{err}");
            Err(err.into())
        }
    }
}
