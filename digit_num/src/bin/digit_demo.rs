use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use digit_num::{mod_n, mult, plus, DigitList, DEMO_BASE, DEMO_LIST, DEMO_MAX_MULTIPLIER};

#[derive(Clone, Parser)]
#[command(name = "digit_demo", version, about = "Add and multiply linked-list digit numbers")]
pub struct DigitDemoArgs {
    /// Base the raw digits are reduced to.
    #[clap(long, env = "DIGIT_DEMO_BASE", default_value_t = DEMO_BASE)]
    pub base: i64,
    /// Multiply by every i in 0..max_multiplier.
    #[clap(long, env = "DIGIT_DEMO_MAX_MULTIPLIER", default_value_t = DEMO_MAX_MULTIPLIER)]
    pub max_multiplier: i64,
    /// Comma-separated raw digits, most significant first. Defaults to the built-in demo number.
    #[clap(long, env = "DIGIT_DEMO_DIGITS", value_delimiter = ',')]
    pub digits: Option<Vec<i64>>,
    #[clap(short, long)]
    pub verbose: bool,
}

fn main() -> Result<()> {
    let args = DigitDemoArgs::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    run(&args)
}

fn run(args: &DigitDemoArgs) -> Result<()> {
    let base = args.base;
    if args.max_multiplier < 0 {
        bail!("--max-multiplier must not be negative, got {}", args.max_multiplier);
    }

    let raw = match &args.digits {
        Some(digits) => DigitList::from_raw_msd_first(digits.iter().copied()),
        None => DEMO_LIST.clone(),
    };
    info!(len = raw.length(), base, "after read");

    let l = mod_n(&raw, base).context("reducing the raw digits")?;
    info!("after mod");
    println!("{}", l);

    let l2 = plus(&l, &l, base)?;
    info!("after plus");
    let l4 = plus(&l2, &l2, base)?;
    println!("{}", l);
    println!("{}", l2);
    println!("{}", l4);

    for i in 0..args.max_multiplier {
        println!(" x {}", i);
        let l5 = mult(&l4, i, base).with_context(|| format!("multiplying by {}", i))?;
        println!("{}", l5);
    }
    Ok(())
}
