//! Nanopub CLI — `np` command.
//!
//! Sets up an identity profile, provisions the RSA key pair, and builds
//! introduction nanopublications from the command line.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};

use nanopub::{IntroBuilder, Nanopub, Profile};

// ── Path helpers ──────────────────────────────────────────────────────────────

fn resolve_profile_path(path: Option<PathBuf>) -> Result<PathBuf> {
    match path {
        Some(p) => Ok(p),
        None => Profile::default_path()
            .ok_or_else(|| anyhow!("could not determine the home directory; pass --path")),
    }
}

fn resolve_profile_dir(dir: Option<PathBuf>) -> Result<PathBuf> {
    match dir {
        Some(d) => Ok(d),
        None => Profile::default_dir()
            .ok_or_else(|| anyhow!("could not determine the home directory; pass --dir")),
    }
}

// ── CLI structure ─────────────────────────────────────────────────────────────

/// Nanopub CLI — manage a nanopublication identity profile and build
/// introduction documents binding an RSA key to an ORCID.
#[derive(Parser, Debug)]
#[command(
    name = "np",
    about = "Nanopub CLI",
    version,
    long_about = "np — Nanopub CLI\n\nSet up an identity profile, provision RSA keys, and build\nintroduction nanopublications for an ORCID."
)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create a profile, provision an RSA key pair, and build the introduction
    Setup {
        /// ORCID URI, e.g. https://orcid.org/0000-0000-0000-0001
        #[arg(long)]
        orcid_id: String,

        /// Display name to declare for the ORCID
        #[arg(long)]
        name: String,

        /// Directory for the profile and key files (default: ~/.nanopub)
        #[arg(long)]
        dir: Option<PathBuf>,
    },

    /// Display the stored profile
    Profile {
        /// Profile file (default: ~/.nanopub/profile.yml)
        #[arg(long)]
        path: Option<PathBuf>,
    },

    /// Build an introduction document for the stored profile
    Intro {
        /// Profile file (default: ~/.nanopub/profile.yml)
        #[arg(long)]
        path: Option<PathBuf>,

        /// Use an existing public-key PEM file instead of generating a
        /// new key pair (generation overwrites the profile's key files)
        #[arg(long)]
        public_key_file: Option<PathBuf>,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let verbose = cli.verbose;

    let result = match cli.command {
        Commands::Setup {
            orcid_id,
            name,
            dir,
        } => cmd_setup(&orcid_id, &name, dir, verbose),
        Commands::Profile { path } => cmd_profile(path),
        Commands::Intro {
            path,
            public_key_file,
        } => cmd_intro(path, public_key_file.as_deref(), verbose),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

// ── Commands ──────────────────────────────────────────────────────────────────

fn cmd_setup(orcid_id: &str, name: &str, dir: Option<PathBuf>, verbose: bool) -> Result<()> {
    let dir = resolve_profile_dir(dir)?;
    let profile_path = dir.join("profile.yml");

    if profile_path.exists() {
        return Err(anyhow!(
            "a profile already exists at {}; re-running setup would overwrite its keys \
             and invalidate any published introduction",
            profile_path.display()
        ));
    }

    std::fs::create_dir_all(&dir).context("failed to create the profile directory")?;

    let profile = Profile::new(orcid_id, name, &dir);
    profile.to_file(&profile_path).context("failed to write the profile")?;

    let np = IntroBuilder::new(&profile)
        .build()
        .context("failed to build the introduction")?;

    println!("Created profile for {orcid_id}");
    println!("  Profile:     {}", profile_path.display());
    println!("  Private key: {}", profile.private_key.display());
    println!("  Public key:  {}", profile.public_key.display());
    print_summary(&np, verbose);

    Ok(())
}

fn cmd_profile(path: Option<PathBuf>) -> Result<()> {
    let path = resolve_profile_path(path)?;
    let profile = Profile::from_file(&path)
        .with_context(|| format!("failed to load the profile from {}", path.display()))?;

    println!("Profile at {}", path.display());
    println!("  ORCID:       {}", profile.orcid_id);
    println!("  Name:        {}", profile.name);
    println!("  Private key: {}", profile.private_key.display());
    println!("  Public key:  {}", profile.public_key.display());
    if let Some(uri) = &profile.introduction_nanopub_uri {
        println!("  Introduction: {uri}");
    }

    Ok(())
}

fn cmd_intro(
    path: Option<PathBuf>,
    public_key_file: Option<&std::path::Path>,
    verbose: bool,
) -> Result<()> {
    let path = resolve_profile_path(path)?;
    let profile = Profile::from_file(&path)
        .with_context(|| format!("failed to load the profile from {}", path.display()))?;

    let mut builder = IntroBuilder::new(&profile);
    match public_key_file {
        Some(key_path) => {
            let pem = std::fs::read_to_string(key_path)
                .with_context(|| format!("failed to read {}", key_path.display()))?;
            builder = builder.public_key(pem);
        }
        None => {
            log::warn!(
                "no public key supplied; a new key pair will replace {}",
                profile.private_key.display()
            );
        }
    }

    let np = builder.build().context("failed to build the introduction")?;

    println!("Built introduction for {}", profile.orcid_id);
    print_summary(&np, verbose);

    Ok(())
}

fn print_summary(np: &Nanopub, verbose: bool) {
    println!(
        "  Statements:  {} (assertion {}, provenance {}, pubinfo {})",
        np.statement_count(),
        np.assertion().len(),
        np.provenance().len(),
        np.pubinfo().len()
    );
    if verbose {
        println!("  Assertion graph:");
        for stmt in np.assertion().iter() {
            println!("    {} {} {}", stmt.subject, stmt.predicate, stmt.object);
        }
    }
}
