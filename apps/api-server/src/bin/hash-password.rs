//! Print the Argon2 hash of a password, for use as ADMIN_PASSWORD_HASH.
//!
//! Usage: `hash-password <password>`

use anyhow::{Context, bail};

use inkpress_core::ports::PasswordService;
use inkpress_infra::Argon2PasswordService;

fn main() -> anyhow::Result<()> {
    let password = std::env::args()
        .nth(1)
        .context("usage: hash-password <password>")?;

    if password.is_empty() {
        bail!("password must not be empty");
    }

    let hash = Argon2PasswordService::new()
        .hash(&password)
        .context("failed to hash password")?;

    println!("{hash}");
    Ok(())
}
