use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(
    name = "edhd",
    about = "SLIP-0010 ed25519 hierarchical deterministic key derivation",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format; overrides the config file.
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// TOML config file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the built-in SLIP-0010 ed25519 test vectors
    Vector(VectorArgs),
    /// Derive every depth of a path from a hex seed
    Derive(DeriveArgs),
    /// Fingerprint a hex-encoded public key
    Fingerprint(FingerprintArgs),
}

#[derive(Args)]
pub struct VectorArgs {
    /// Vector number or name ("1", "2"); all vectors when omitted.
    #[arg(long)]
    pub name: Option<String>,
}

#[derive(Args)]
pub struct DeriveArgs {
    /// Root seed as hex.
    #[arg(long)]
    pub seed: String,
    /// Derivation path such as m/0'/1'; config default when omitted.
    #[arg(long)]
    pub path: Option<String>,
    /// Treat every segment as hardened, marked or not.
    #[arg(long)]
    pub harden: bool,
}

#[derive(Args)]
pub struct FingerprintArgs {
    /// Public key as hex.
    pub public_key: String,
    /// Prefix the key with 0x00 before hashing (SLIP-0010 serialized form).
    #[arg(long)]
    pub serialize: bool,
}
