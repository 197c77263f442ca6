// src/app.rs
use std::io::{self, Write};

use anyhow::Result;
use cut_check_infra::{DelimitedTableReader, FsTextSource};
use cut_check_shared_kernel::PresentationError;
use cut_check_usecase::{CutResolver, LuminosityAnalysis, SettingInput};

use crate::{
    cli::{Args, Command, MomentumArg, SettingArg},
    config::ResolverConfig,
    presentation,
    session::Session,
};

/// Dispatch the parsed command line. No subcommand means `interactive`.
pub fn run(args: &Args) -> Result<()> {
    let mut out = io::stdout().lock();

    match &args.command {
        Some(Command::List) => with_resolver(args, |resolver| {
            Ok(presentation::write_registry(&mut out, resolver.registry())?)
        })?,
        Some(Command::Show { run_type }) => with_resolver(args, |resolver| {
            let lines = resolver.load_run_type(run_type)?;
            Ok(presentation::write_lines(&mut out, &lines)?)
        })?,
        Some(Command::Grab { run_type, cuts, run, format }) => with_resolver(args, |resolver| {
            let report = resolver.grab(run_type, cuts, *run)?;
            Ok(presentation::write_report(&mut out, &report, (*format).into())?)
        })?,
        Some(Command::Interactive) | None => with_resolver(args, |resolver| {
            Ok(Session::new(resolver, io::stdin().lock(), &mut out).run()?)
        })?,
        Some(Command::Lumi { settings, momenta, columns, format }) => {
            let inputs = setting_inputs(settings, momenta)?;
            let reader = DelimitedTableReader;
            let report = LuminosityAnalysis::new(&reader, columns.into()).run(&inputs)?;
            presentation::write_luminosity(&mut out, &report, (*format).into())?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Build the table registry from `args` and hand a resolver over it to `f`.
fn with_resolver<T>(args: &Args, f: impl FnOnce(&CutResolver<'_>) -> Result<T>) -> Result<T> {
    let config = ResolverConfig::from_args(args)?;
    let (text, tables) = (FsTextSource, DelimitedTableReader);
    f(&CutResolver::new(&text, &tables, &config.registry, config.options))
}

/// Pair each `--setting` with its `--momentum`, if any.
fn setting_inputs(settings: &[SettingArg], momenta: &[MomentumArg]) -> Result<Vec<SettingInput>> {
    if let Some(orphan) = momenta.iter().find(|m| !settings.iter().any(|s| s.name == m.name)) {
        return Err(PresentationError::InvalidValue {
            flag: "--momentum".to_string(),
            value: orphan.name.clone(),
            reason: "no --setting with this name".to_string(),
        }
        .into());
    }

    Ok(settings
        .iter()
        .map(|s| SettingInput {
            name: s.name.clone(),
            path: s.path.clone(),
            momentum: momenta.iter().find(|m| m.name == s.name).map(|m| m.momentum),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn setting(name: &str) -> SettingArg {
        SettingArg { name: name.into(), path: PathBuf::from(format!("{name}.csv")) }
    }

    #[test]
    fn momenta_attach_by_name() {
        let momenta = [MomentumArg { name: "l2".into(), momentum: 5.0 }];
        let inputs = setting_inputs(&[setting("l1"), setting("l2")], &momenta).unwrap();
        assert_eq!(inputs[0].momentum, None);
        assert_eq!(inputs[1].momentum, Some(5.0));
    }

    #[test]
    fn orphan_momentum_is_rejected() {
        let momenta = [MomentumArg { name: "l9".into(), momentum: 5.0 }];
        let err = setting_inputs(&[setting("l1")], &momenta).unwrap_err();
        assert!(err.to_string().contains("--momentum"));
    }
}
