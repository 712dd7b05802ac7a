// src/bin/generate-asn.rs
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs;
use std::path::PathBuf;

use asn_dashboard::errors::AsnError;
use asn_dashboard::export::{write_json, write_xlsx};
use asn_dashboard::generator::{DEFAULT_JUMLAH, DEFAULT_SEED, default_file_stem, generate_with};

/// Pembuat dataset ASN dummy (JSON + Excel)
#[derive(Parser, Debug)]
#[command(name = "generate-asn", version, about)]
struct Cli {
    /// Jumlah data ASN yang dibuat
    #[arg(short = 'n', long, default_value_t = DEFAULT_JUMLAH, allow_negative_numbers = true)]
    jumlah: i64,

    /// Folder tujuan file keluaran
    #[arg(short, long, default_value = ".", env = "ASN_OUTPUT_DIR")]
    output_dir: PathBuf,

    /// Seed untuk kolom berdistribusi normal (masa kerja, nilai SKP)
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,
}

fn run(cli: &Cli) -> Result<(PathBuf, PathBuf), AsnError> {
    let mut normal_rng = StdRng::seed_from_u64(cli.seed);
    let mut pick_rng = rand::rng();
    let data = generate_with(cli.jumlah, &mut normal_rng, &mut pick_rng)?;

    fs::create_dir_all(&cli.output_dir)?;
    let stem = default_file_stem(cli.jumlah);
    let xlsx_file = cli.output_dir.join(format!("{}.xlsx", stem));
    let json_file = cli.output_dir.join(format!("{}.json", stem));

    write_xlsx(&data, &xlsx_file)?;
    write_json(&data, &json_file)?;
    Ok((xlsx_file, json_file))
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok((xlsx_file, json_file)) => {
            println!(
                "✅ Dataset berhasil dibuat: {} & {}",
                xlsx_file.display(),
                json_file.display()
            );
        }
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    }
}
