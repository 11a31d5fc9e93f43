//! Startup configuration from the command line or an interactive prompt.

use reef_core::{Error, Result, RunConfig, UpdatePolicy, WorldConfig};
use std::io::{BufRead, Write};
use std::path::PathBuf;

pub const USAGE: &str = "\
Usage: reef [OPTIONS] [WIDTH HEIGHT ROCK_CHANCE CREATURE_CHANCE TICK_SECONDS]

Values may also be separated by commas. Without values or --config, they are
read from an interactive prompt.

Options:
  --config <FILE>   Load the run configuration from a JSON file
  --seed <N>        Seed the world generator for a reproducible run
  --ticks <N>       Stop after N generations
  --in-place        Let changes made during a pass affect later cells of that pass
  -h, --help        Print this message";

const PROMPT: &str = "Enter values separated by commas:\n\
Width, Height, ChanceToGenRock, ChanceToGenCreature, SecondsPerTick";

const VALUE_COUNT: usize = 5;

/// Parsed command line, before the configuration source is resolved
#[derive(Debug, Default, PartialEq)]
pub struct CliArgs {
    pub help: bool,
    pub config_path: Option<PathBuf>,
    pub values: Vec<String>,
    pub seed: Option<u64>,
    pub max_ticks: Option<u64>,
    pub in_place: bool,
}

pub fn parse_args<I>(args: I) -> Result<CliArgs>
where
    I: IntoIterator<Item = String>,
{
    let mut cli = CliArgs::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => cli.help = true,
            "--in-place" => cli.in_place = true,
            "--config" => cli.config_path = Some(PathBuf::from(flag_value(&mut args, "--config")?)),
            "--seed" => cli.seed = Some(parse_number(&flag_value(&mut args, "--seed")?, "--seed")?),
            "--ticks" => {
                cli.max_ticks = Some(parse_number(&flag_value(&mut args, "--ticks")?, "--ticks")?)
            }
            flag if flag.starts_with("--") => {
                return Err(Error::InvalidArgument(format!("unknown option {}", flag)));
            }
            _ => cli.values.extend(split_values(&arg)),
        }
    }

    if cli.config_path.is_some() && !cli.values.is_empty() {
        return Err(Error::InvalidArgument(
            "positional values cannot be combined with --config".to_string(),
        ));
    }

    Ok(cli)
}

impl CliArgs {
    /// Resolve the run configuration. Falls back to prompting on `input` when
    /// neither a config file nor values were given.
    pub fn into_config<R: BufRead, W: Write>(self, input: R, output: W) -> Result<RunConfig> {
        let mut config = if let Some(path) = &self.config_path {
            RunConfig::from_json_file(path)?
        } else if !self.values.is_empty() {
            parse_values(&self.values)?
        } else {
            prompt(input, output)?
        };

        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.max_ticks.is_some() {
            config.max_ticks = self.max_ticks;
        }
        if self.in_place {
            config.update_policy = UpdatePolicy::InPlace;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Build a configuration from exactly five values:
/// width, height, rock chance, creature chance and seconds per tick
pub fn parse_values<S: AsRef<str>>(values: &[S]) -> Result<RunConfig> {
    if values.len() != VALUE_COUNT {
        return Err(Error::InvalidArgument(format!(
            "expected {} values, got {}",
            VALUE_COUNT,
            values.len()
        )));
    }

    let config = RunConfig {
        world: WorldConfig {
            width: parse_number(values[0].as_ref(), "width")?,
            height: parse_number(values[1].as_ref(), "height")?,
            rock_chance: parse_number(values[2].as_ref(), "rock chance")?,
            creature_chance: parse_number(values[3].as_ref(), "creature chance")?,
        },
        tick_interval_secs: parse_number(values[4].as_ref(), "seconds per tick")?,
        ..Default::default()
    };

    config.validate()?;
    Ok(config)
}

/// Ask for the five values on `output` and read one comma-separated line from `input`
pub fn prompt<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<RunConfig> {
    writeln!(output, "{}", PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(Error::InvalidArgument("no configuration entered".to_string()));
    }

    let values: Vec<String> = split_values(&line).collect();
    parse_values(&values)
}

fn split_values(raw: &str) -> impl Iterator<Item = String> + '_ {
    raw.split(',')
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

fn flag_value<I: Iterator<Item = String>>(args: &mut I, flag: &str) -> Result<String> {
    args.next()
        .ok_or_else(|| Error::InvalidArgument(format!("{} requires a value", flag)))
}

fn parse_number<T: std::str::FromStr>(raw: &str, name: &str) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| Error::InvalidArgument(format!("{} must be a number, got {:?}", name, raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_positional_values() {
        let cli = parse_args(args(&["30", "15", "10", "40", "1"])).unwrap();
        let config = cli.into_config(Cursor::new(""), Vec::new()).unwrap();
        assert_eq!(config.world.width, 30);
        assert_eq!(config.world.height, 15);
        assert_eq!(config.world.rock_chance, 10);
        assert_eq!(config.world.creature_chance, 40);
        assert_eq!(config.tick_interval_secs, 1.0);
        assert_eq!(config.update_policy, UpdatePolicy::Snapshot);
    }

    #[test]
    fn test_comma_separated_arguments() {
        let cli = parse_args(args(&["30,", "15,", "10,", "40,", "0.25"])).unwrap();
        assert_eq!(cli.values, args(&["30", "15", "10", "40", "0.25"]));
        let config = cli.into_config(Cursor::new(""), Vec::new()).unwrap();
        assert_eq!(config.tick_interval_secs, 0.25);
    }

    #[test]
    fn test_flags() {
        let cli = parse_args(args(&[
            "--seed", "7", "--ticks", "100", "--in-place", "5", "5", "0", "50", "0",
        ]))
        .unwrap();
        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.max_ticks, Some(100));
        assert!(cli.in_place);

        let config = cli.into_config(Cursor::new(""), Vec::new()).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.max_ticks, Some(100));
        assert_eq!(config.update_policy, UpdatePolicy::InPlace);
    }

    #[test]
    fn test_help() {
        assert!(parse_args(args(&["--help"])).unwrap().help);
        assert!(parse_args(args(&["-h"])).unwrap().help);
    }

    #[test]
    fn test_wrong_value_count() {
        let cli = parse_args(args(&["30", "15", "10", "40"])).unwrap();
        let result = cli.into_config(Cursor::new(""), Vec::new());
        assert!(matches!(result, Err(Error::InvalidArgument(_))));

        let result = parse_values(&["1", "2", "3", "4", "5", "6"]);
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_unparseable_values() {
        for values in [
            ["wide", "15", "10", "40", "1"],
            ["30", "15", "-5", "40", "1"],
            ["30", "15", "10", "40", "soon"],
        ] {
            assert!(matches!(parse_values(&values), Err(Error::InvalidArgument(_))));
        }
    }

    #[test]
    fn test_out_of_range_values() {
        assert!(matches!(
            parse_values(&["0", "15", "10", "40", "1"]),
            Err(Error::InvalidDimensions { .. })
        ));
        assert!(matches!(
            parse_values(&["30", "15", "110", "40", "1"]),
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            parse_values(&["30", "15", "10", "40", "-1"]),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn test_bad_flags() {
        assert!(matches!(parse_args(args(&["--seed"])), Err(Error::InvalidArgument(_))));
        assert!(matches!(parse_args(args(&["--seed", "x"])), Err(Error::InvalidArgument(_))));
        assert!(matches!(parse_args(args(&["--speed", "3"])), Err(Error::InvalidArgument(_))));
        assert!(matches!(
            parse_args(args(&["--config", "reef.json", "1", "2", "3", "4", "5"])),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_prompt() {
        let mut output = Vec::new();
        let config = prompt(Cursor::new("20, 10, 5, 30, 2\n"), &mut output).unwrap();
        assert_eq!(config.world.width, 20);
        assert_eq!(config.world.height, 10);
        assert_eq!(config.tick_interval_secs, 2.0);
        assert!(String::from_utf8(output).unwrap().starts_with("Enter values"));
    }

    #[test]
    fn test_prompt_used_without_arguments() {
        let cli = parse_args(Vec::new()).unwrap();
        let config = cli.into_config(Cursor::new("4,4,0,0,0\n"), Vec::new()).unwrap();
        assert_eq!(config.world.width, 4);
        assert_eq!(config.world.creature_chance, 0);
    }

    #[test]
    fn test_prompt_rejects_bad_input() {
        assert!(matches!(prompt(Cursor::new(""), Vec::new()), Err(Error::InvalidArgument(_))));
        assert!(matches!(
            prompt(Cursor::new("20 10 5 30 2\n"), Vec::new()),
            Err(Error::InvalidArgument(_))
        ));
    }
}
