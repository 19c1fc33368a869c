//! RNG calculator CLI.
//!
//! Usage:
//!   catch-odds [OPTIONS]
//!
//! Examples:
//!   catch-odds --fish Swordfish                 # Odds from the built-in catalog
//!   catch-odds --odds "1 in 1,000" --luck 2     # Odds typed as text
//!   catch-odds --manual 5000 --rate 450 --json  # Manual denominator, JSON out

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use catch_odds::logging::{init_tracing, LogLevel};
use catch_odds::{
    evaluate, parse, CalcError, Catalog, CalculatorConfig, OddsSource, Report,
};
use tracing::{error, info};

#[derive(Debug, Default)]
struct CliArgs {
    fish: Option<String>,
    odds: Option<String>,
    manual: Option<String>,
    luck: Option<String>,
    rate: Option<String>,
    config: Option<PathBuf>,
    catalog: Option<PathBuf>,
    list: bool,
    json: bool,
    save: bool,
    verbosity: u8,
    help: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(message) => {
            eprintln!("error: {}", message);
            eprintln!("Run with --help for usage.");
            return ExitCode::from(2);
        }
    };

    if cli.help {
        print_help();
        return ExitCode::SUCCESS;
    }

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            error!("{}", err);
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &CliArgs) -> Result<ExitCode, CalcError> {
    let mut config = match &cli.config {
        Some(path) => CalculatorConfig::load(path)?,
        None => CalculatorConfig::load_or_default()?,
    };
    if cli.verbosity > 0 {
        config.log.default_level = LogLevel::from_verbosity(cli.verbosity);
    }
    init_tracing(&config.log);

    let catalog = match &cli.catalog {
        Some(path) => Catalog::load(path)?,
        None => Catalog::builtin(),
    };
    info!(entries = catalog.len(), "catalog ready");

    if cli.list {
        print_catalog(&catalog);
        return Ok(ExitCode::SUCCESS);
    }

    let fish = cli
        .fish
        .as_deref()
        .map(|name| catalog.require(name).cloned())
        .transpose()?;

    // manual text that doesn't parse as a number is rejected like a bad value
    let manual = cli.manual.as_deref().map(|text| parse_number(text).unwrap_or(f64::NAN));
    let listed = match (&fish, &cli.odds) {
        (Some(fish), _) => Some(fish.odds_spec()),
        (None, Some(text)) => Some(parse(text)),
        (None, None) => None,
    };

    let mut input = config.input_for(OddsSource::prefer(manual, listed));
    if let Some(luck) = &cli.luck {
        input.luck = parse_number(luck).unwrap_or(f64::NAN);
    }
    if let Some(rate) = &cli.rate {
        input.throughput = parse_number(rate).unwrap_or(f64::NAN);
    }

    let outcome = evaluate(&input);
    let ready = outcome.is_ready();

    let mut report = Report::new(outcome, config.duration.clone());
    if let Some(fish) = fish {
        report = report.with_fish(fish);
    } else if let Some(text) = &cli.odds {
        report = report.with_odds_text(text.clone());
    }

    if cli.json {
        println!("{}", report.to_json());
    } else {
        println!("{}", report.to_text());
    }

    if cli.save {
        let filename = Report::file_name();
        std::fs::write(&filename, report.to_json()).map_err(|e| CalcError::io(&filename, e))?;
        println!("JSON report saved to: {}", filename);
    }

    Ok(if ready { ExitCode::SUCCESS } else { ExitCode::from(3) })
}

fn parse_number(text: &str) -> Option<f64> {
    text.trim().replace([',', '_'], "").parse().ok()
}

fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut cli = CliArgs::default();

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        let mut value = || -> Result<String, String> {
            i += 1;
            args.get(i)
                .cloned()
                .ok_or_else(|| format!("{} needs a value", flag))
        };
        match flag {
            "-f" | "--fish" => cli.fish = Some(value()?),
            "-o" | "--odds" => cli.odds = Some(value()?),
            "-m" | "--manual" => cli.manual = Some(value()?),
            "-l" | "--luck" => cli.luck = Some(value()?),
            "-r" | "--rate" => cli.rate = Some(value()?),
            "-c" | "--config" => cli.config = Some(PathBuf::from(value()?)),
            "--catalog" => cli.catalog = Some(PathBuf::from(value()?)),
            "--list" => cli.list = true,
            "--json" => cli.json = true,
            "--save" => cli.save = true,
            "-v" | "--verbose" => cli.verbosity = cli.verbosity.saturating_add(1),
            "-h" | "--help" => cli.help = true,
            other => return Err(format!("unknown option '{}'", other)),
        }
        i += 1;
    }

    Ok(cli)
}

fn print_catalog(catalog: &Catalog) {
    println!("{:<20} {:<10} {:<18} {:<24} {}", "FISH", "RARITY", "ODDS", "LOCATION", "VALUE");
    for fish in catalog.fish() {
        println!(
            "{:<20} {:<10} {:<18} {:<24} {}",
            fish.name,
            fish.rarity.as_str(),
            fish.odds,
            fish.location,
            fish.value
        );
    }
}

fn print_help() {
    println!("Catch Odds - RNG Calculator");
    println!();
    println!("USAGE:");
    println!("    catch-odds [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -f, --fish <NAME>     Take odds from a catalog fish");
    println!("    -o, --odds <TEXT>     Odds as text, e.g. \"1 in 1,000\"");
    println!("    -m, --manual <N>      Manual denominator (overrides --fish/--odds)");
    println!("    -l, --luck <X>        Luck multiplier (default: 1.0)");
    println!("    -r, --rate <N>        Casts per hour (default: 300)");
    println!("    -c, --config <PATH>   Config file (JSON)");
    println!("    --catalog <PATH>      Fish catalog file (JSON) instead of the built-in one");
    println!("    --list                List catalog fish and exit");
    println!("    --json                Print the report as JSON");
    println!("    --save                Also save the JSON report to a file");
    println!("    -v, --verbose         More logging on stderr (repeatable)");
    println!("    -h, --help            Show this help");
    println!();
    println!("EXIT CODES:");
    println!("    0  estimate printed");
    println!("    2  bad command line");
    println!("    3  no estimate (unknown odds or invalid input)");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("catch-odds")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_parse_args_collects_values() {
        let cli = parse_args(&args(&["--fish", "Pike", "-l", "2", "--json", "-v", "-v"])).unwrap();
        assert_eq!(cli.fish.as_deref(), Some("Pike"));
        assert_eq!(cli.luck.as_deref(), Some("2"));
        assert!(cli.json);
        assert_eq!(cli.verbosity, 2);
    }

    #[test]
    fn test_parse_args_missing_value() {
        assert!(parse_args(&args(&["--luck"])).is_err());
    }

    #[test]
    fn test_parse_args_unknown_flag() {
        assert!(parse_args(&args(&["--bogus"])).is_err());
    }

    #[test]
    fn test_parse_number_strips_delimiters() {
        assert_eq!(parse_number("1,000"), Some(1000.0));
        assert_eq!(parse_number(" 2.5 "), Some(2.5));
        assert_eq!(parse_number("lots"), None);
    }
}
