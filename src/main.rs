//! Command-line front end for the textbook RSA demo.

use std::process;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing_subscriber::EnvFilter;

use rsa_demo::rsa::{
    check_message, check_primes, derive_keypair, is_prime, suggest_primes, RsaBigInt, RsaKeyPair,
};
use rsa_demo::util::DemoConfig;

/// Textbook RSA demo CLI.
#[derive(Parser)]
#[command(name = "rsa-demo", version, about = "Textbook RSA, one step at a time")]
struct Cli {
    #[command(flatten)]
    output: OutputArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct OutputArgs {
    /// Print only results, without the narrated steps.
    #[arg(long, global = true, default_value_t = false)]
    quiet: bool,
    /// Show and read ciphertext values as hex.
    #[arg(long, global = true, default_value_t = false)]
    hex: bool,
}

#[derive(Args)]
struct PrimeArgs {
    /// First prime.
    #[arg(short, long)]
    p: RsaBigInt,
    /// Second prime, distinct from p.
    #[arg(short, long)]
    q: RsaBigInt,
}

#[derive(Subcommand)]
enum Commands {
    /// Report whether a number is prime.
    CheckPrime {
        /// Number to test.
        n: RsaBigInt,
    },
    /// Derive a keypair from two primes.
    Keygen {
        #[command(flatten)]
        primes: PrimeArgs,
    },
    /// Encrypt a message under the keypair derived from p and q.
    Encrypt {
        #[command(flatten)]
        primes: PrimeArgs,
        /// Message to encrypt.
        #[arg(short, long)]
        message: String,
    },
    /// Decrypt comma-separated ciphertext values under the keypair derived from p and q.
    Decrypt {
        #[command(flatten)]
        primes: PrimeArgs,
        /// Ciphertext values, comma separated.
        #[arg(short, long, value_delimiter = ',', required = true)]
        ciphertext: Vec<String>,
    },
    /// Pick two primes, derive a keypair, encrypt and decrypt a message.
    Demo {
        /// Message to run through the pipeline.
        #[arg(short, long, default_value = "Hi")]
        message: String,
        /// Optional RNG seed for reproducible prime suggestions.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() {
    let cli = Cli::parse();
    let config = DemoConfig::from_env();
    let config = DemoConfig {
        hex_ciphertext: config.hex_ciphertext || cli.output.hex,
        ..config
    }
    .with_steps(!cli.output.quiet);

    init_logging(&config);

    if let Err(e) = run(cli.command, &config) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn init_logging(config: &DemoConfig) {
    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(command: Commands, config: &DemoConfig) -> Result<()> {
    match command {
        Commands::CheckPrime { n } => {
            let verdict = if is_prime(&n) { "prime" } else { "not prime" };
            println!("{} is {}", n, verdict);
            Ok(())
        }
        Commands::Keygen { primes } => {
            let keypair = keypair_from(&primes.p, &primes.q, config)?;
            print_keypair(&keypair);
            Ok(())
        }
        Commands::Encrypt { primes, message } => {
            let keypair = keypair_from(&primes.p, &primes.q, config)?;
            cmd_encrypt(&keypair, &message, config).map(|_| ())
        }
        Commands::Decrypt { primes, ciphertext } => {
            let keypair = keypair_from(&primes.p, &primes.q, config)?;
            let values = ciphertext
                .iter()
                .map(|value| parse_value(value, config.hex_ciphertext))
                .collect::<Result<Vec<_>>>()?;
            cmd_decrypt(&keypair, &values, config);
            Ok(())
        }
        Commands::Demo { message, seed } => cmd_demo(&message, seed, config),
    }
}

fn keypair_from(p: &RsaBigInt, q: &RsaBigInt, config: &DemoConfig) -> Result<RsaKeyPair> {
    check_primes(p, q).context("invalid primes")?;
    match derive_keypair(p, q) {
        Ok(keypair) => {
            print_steps("Key derivation", &keypair.steps, config);
            Ok(keypair)
        }
        Err(err) => {
            print_steps("Key derivation", &err.steps, config);
            bail!("{}; pick different primes", err)
        }
    }
}

fn cmd_encrypt(keypair: &RsaKeyPair, message: &str, config: &DemoConfig) -> Result<Vec<RsaBigInt>> {
    check_message(message, &keypair.n).context("message cannot be encrypted with this key")?;
    let encrypted = keypair.public_key().encrypt(message);
    print_steps("Encryption", &encrypted.steps, config);
    println!("Ciphertext: {}", format_values(&encrypted.ciphertext, config.hex_ciphertext));
    Ok(encrypted.ciphertext)
}

fn cmd_decrypt(keypair: &RsaKeyPair, ciphertext: &[RsaBigInt], config: &DemoConfig) -> String {
    let decrypted = keypair.private_key().decrypt(ciphertext);
    print_steps("Decryption", &decrypted.steps, config);
    println!("Plaintext: {}", decrypted.plaintext);
    decrypted.plaintext
}

fn cmd_demo(message: &str, seed: Option<u64>, config: &DemoConfig) -> Result<()> {
    let (p, q) = match seed {
        Some(seed) => suggest_primes(&mut ChaCha20Rng::seed_from_u64(seed)),
        None => suggest_primes(&mut rand::thread_rng()),
    };
    println!("Suggested primes: p = {}, q = {}", p, q);

    let keypair = keypair_from(&p, &q, config)?;
    print_keypair(&keypair);
    let ciphertext = cmd_encrypt(&keypair, message, config)?;
    let plaintext = cmd_decrypt(&keypair, &ciphertext, config);

    if plaintext != message {
        bail!("round trip mismatch: got {:?}, expected {:?}", plaintext, message);
    }
    Ok(())
}

fn print_keypair(keypair: &RsaKeyPair) {
    println!("Public key:  (e = {}, n = {})", keypair.e, keypair.n);
    println!("Private key: (d = {}, n = {})", keypair.d, keypair.n);
    println!("Modulus size: {} bits", keypair.bit_length());
}

fn print_steps(title: &str, steps: &[String], config: &DemoConfig) {
    if !config.show_steps {
        return;
    }
    println!("{}:", title);
    for step in steps {
        println!("  {}", step);
    }
}

fn format_values(values: &[RsaBigInt], as_hex: bool) -> String {
    values
        .iter()
        .map(|value| {
            if as_hex {
                hex::encode(value.to_bytes_be())
            } else {
                value.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}

fn parse_value(value: &str, as_hex: bool) -> Result<RsaBigInt> {
    let value = value.trim();
    if as_hex {
        let bytes = hex::decode(value).with_context(|| format!("invalid hex value {:?}", value))?;
        Ok(RsaBigInt::from_bytes_be(&bytes))
    } else {
        value
            .parse::<RsaBigInt>()
            .with_context(|| format!("invalid ciphertext value {:?}", value))
    }
}
