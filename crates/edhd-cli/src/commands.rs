use anyhow::{bail, Context};
use colored::Colorize;
use edhd_crypto::vectors::{self, TestVector};
use edhd_crypto::{
    attach_public_keys, fingerprint, serialize_public_key, walk, DerivedNode, Ed25519KeySource,
    NodeReport, PublicKeySource,
};
use edhd_types::DerivationPath;
use serde_json::json;
use zeroize::Zeroizing;

use crate::cli::*;
use crate::config::CliConfig;

const CURVE_NAME: &str = "ed25519";

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = CliConfig::load_or_default(cli.config.as_deref())?;
    let format = cli.format.unwrap_or(config.format);
    match cli.command {
        Command::Vector(args) => cmd_vector(args, format, &config).await,
        Command::Derive(args) => cmd_derive(args, format, &config).await,
        Command::Fingerprint(args) => cmd_fingerprint(args, format),
    }
}

async fn cmd_vector(args: VectorArgs, format: OutputFormat, config: &CliConfig) -> anyhow::Result<()> {
    let selected: Vec<TestVector> = match &args.name {
        Some(name) => match vectors::find(name) {
            Some(v) => vec![v],
            None => bail!("unknown test vector {name:?}"),
        },
        None => vectors::ALL.to_vec(),
    };

    let mut outputs = Vec::with_capacity(selected.len());
    for vector in selected {
        let seed = vector.seed()?;
        let path = vector.path()?;
        let nodes = walk(&seed, &path).with_context(|| format!("walking {}", vector.name))?;
        let reports = resolve_reports(&nodes).await?;
        match format {
            OutputFormat::Text => print_walk(vector.name, vector.seed_hex, &reports, config.show_private),
            OutputFormat::Json => outputs.push(walk_json(vector.name, vector.seed_hex, &reports, config.show_private)),
        }
    }
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&outputs)?);
    }
    Ok(())
}

async fn cmd_derive(args: DeriveArgs, format: OutputFormat, config: &CliConfig) -> anyhow::Result<()> {
    let seed_hex = args.seed.trim_start_matches("0x").to_lowercase();
    let seed = Zeroizing::new(hex::decode(&seed_hex).context("seed is not valid hex")?);
    let path_str = args.path.as_deref().unwrap_or(&config.default_path);
    let mut path: DerivationPath = path_str
        .parse()
        .with_context(|| format!("parsing derivation path {path_str:?}"))?;
    if args.harden {
        path = path.hardened();
    }

    let nodes = walk(&seed, &path)?;
    let reports = resolve_reports(&nodes).await?;
    match format {
        OutputFormat::Text => print_walk("Derived keys", &seed_hex, &reports, config.show_private),
        OutputFormat::Json => {
            let output = walk_json("Derived keys", &seed_hex, &reports, config.show_private);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

fn cmd_fingerprint(args: FingerprintArgs, format: OutputFormat) -> anyhow::Result<()> {
    let mut key = hex::decode(args.public_key.trim_start_matches("0x"))
        .context("public key is not valid hex")?;
    if args.serialize {
        let raw: [u8; 32] = key
            .as_slice()
            .try_into()
            .with_context(|| format!("--serialize expects a 32-byte key, got {} bytes", key.len()))?;
        key = serialize_public_key(&raw).to_vec();
    }

    let fpr = fingerprint(&key);
    match format {
        OutputFormat::Text => println!("{}", fpr.to_string().cyan()),
        OutputFormat::Json => println!("{}", json!({ "fingerprint": fpr })),
    }
    Ok(())
}

/// Computes each depth's public key on the blocking pool, then joins them in
/// depth order to build the reports.
async fn resolve_reports(nodes: &[DerivedNode]) -> anyhow::Result<Vec<NodeReport>> {
    let mut tasks = Vec::with_capacity(nodes.len());
    for node in nodes {
        let private_key = Zeroizing::new(*node.key.private_key());
        tasks.push(tokio::task::spawn_blocking(move || {
            Ed25519KeySource.public_key(&private_key)
        }));
    }

    let mut public_keys = Vec::with_capacity(tasks.len());
    for (depth, task) in tasks.into_iter().enumerate() {
        let public_key = task
            .await
            .with_context(|| format!("public key task for depth {depth} failed"))?;
        public_keys.push(public_key);
    }
    tracing::debug!(depths = public_keys.len(), "resolved public keys");
    Ok(attach_public_keys(nodes, &public_keys)?)
}

fn print_walk(name: &str, seed_hex: &str, reports: &[NodeReport], show_private: bool) {
    println!("{} for {}", name.bold(), CURVE_NAME);
    println!("Seed(hex): {}", seed_hex);
    for report in reports {
        let label = if report.depth == 0 {
            "master key".to_string()
        } else {
            format!("depth {}", report.depth)
        };
        println!("* {} Chain {}", label, report.path.to_string().yellow());
        println!("** fingerprint: {}", report.parent_fingerprint.to_string().cyan());
        println!("** chain code: {}", report.chain_code);
        if show_private {
            println!("** private: {}", report.private_key.red());
        }
        println!("** public: {}", report.public_key.green());
    }
    println!();
}

fn walk_json(name: &str, seed_hex: &str, reports: &[NodeReport], show_private: bool) -> serde_json::Value {
    let chains: Vec<serde_json::Value> = reports
        .iter()
        .map(|r| {
            let mut chain = json!({
                "depth": r.depth,
                "path": r.path,
                "fingerprint": r.parent_fingerprint,
                "chain_code": r.chain_code,
                "public_key": r.public_key,
            });
            if show_private {
                chain["private_key"] = json!(r.private_key);
            }
            chain
        })
        .collect();
    json!({
        "name": name,
        "curve": CURVE_NAME,
        "seed": seed_hex,
        "chains": chains,
    })
}
