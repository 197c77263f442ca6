use std::{path::PathBuf, str::FromStr};

/// `NAME=VALUE` with both sides non-empty.
fn split_key_value(s: &str) -> Result<(&str, &str), String> {
    let (key, value) =
        s.split_once('=').ok_or_else(|| format!("Expected NAME=VALUE, got '{s}'"))?;
    let (key, value) = (key.trim(), value.trim());
    if key.is_empty() || value.is_empty() {
        return Err(format!("Expected NAME=VALUE, got '{s}'"));
    }
    Ok((key, value))
}

/// `--setting NAME=PATH`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingArg {
    pub name: String,
    pub path: PathBuf,
}

impl FromStr for SettingArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, path) = split_key_value(s)?;
        Ok(Self { name: name.to_owned(), path: PathBuf::from(path) })
    }
}

/// `--momentum NAME=P` (GeV)
#[derive(Debug, Clone, PartialEq)]
pub struct MomentumArg {
    pub name: String,
    pub momentum: f64,
}

impl FromStr for MomentumArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, value) = split_key_value(s)?;
        let momentum: f64 =
            value.parse().map_err(|_| format!("Invalid momentum for '{name}': {value}"))?;
        if !momentum.is_finite() {
            return Err(format!("Invalid momentum for '{name}': {value}"));
        }
        Ok(Self { name: name.to_owned(), momentum })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setting_splits_on_first_equals() {
        let arg: SettingArg = "l1=data/lumi=1.csv".parse().unwrap();
        assert_eq!(arg.name, "l1");
        assert_eq!(arg.path, PathBuf::from("data/lumi=1.csv"));
    }

    #[test]
    fn momentum_must_be_numeric() {
        let arg: MomentumArg = "l1=3.3".parse().unwrap();
        assert!((arg.momentum - 3.3).abs() < f64::EPSILON);
        assert!("l1=fast".parse::<MomentumArg>().is_err());
        assert!("l1=inf".parse::<MomentumArg>().is_err());
        assert!("=3.3".parse::<MomentumArg>().is_err());
        assert!("l1".parse::<SettingArg>().is_err());
    }
}
