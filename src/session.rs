// src/session.rs
//! Prompt-driven cut lookup over any line reader and writer.

use std::io::{BufRead, Write};

use cut_check_shared_kernel::{ApplicationError, Result, RunNumber};
use cut_check_usecase::CutResolver;

const RUN_TYPE_PROMPT: &str = "\nPlease enter a run type cut...";
const CUT_PROMPT: &str = "\nPlease enter a specific cut (type exit to end)...";
const CHECK_PROMPT: &str = "\nWould you like to check cuts for specific run number? (yes or no)...";
const RUN_PROMPT: &str = "\nPlease enter run number (type exit to end)...";

/// Inputs starting with `bye` or `exit` end the current prompt loop.
pub fn is_exit(input: &str) -> bool {
    let input = input.trim_start();
    input.starts_with("bye") || input.starts_with("exit")
}

pub struct Session<'s, 'a, R, W> {
    resolver: &'s CutResolver<'a>,
    input: R,
    output: W,
}

impl<'s, 'a, R: BufRead, W: Write> Session<'s, 'a, R, W> {
    pub fn new(resolver: &'s CutResolver<'a>, input: R, output: W) -> Self {
        Self { resolver, input, output }
    }

    /// Run until an exit word at the cut prompt or end of input.
    pub fn run(mut self) -> Result<()> {
        for (name, path) in &self.resolver.registry().run_types {
            writeln!(self.output, "{name} -> {}", path.display())?;
        }

        let Some(lines) = self.choose_run_type()? else {
            return Ok(());
        };

        while let Some(cut) = self.prompt(CUT_PROMPT)? {
            if is_exit(&cut) {
                break;
            }
            if !self.check_cut(&lines, cut.trim())? {
                break;
            }
        }
        self.output.flush()?;
        Ok(())
    }

    /// Re-prompts until a run type loads; `None` on end of input or an exit word.
    fn choose_run_type(&mut self) -> Result<Option<Vec<String>>> {
        while let Some(name) = self.prompt(RUN_TYPE_PROMPT)? {
            if is_exit(&name) {
                return Ok(None);
            }
            match self.resolver.load_run_type(name.trim()) {
                Ok(lines) => {
                    writeln!(self.output, "{}", lines.join(" "))?;
                    return Ok(Some(lines));
                }
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
        Ok(None)
    }

    /// The yes/no loop for one cut. Returns `false` once input is exhausted.
    fn check_cut(&mut self, lines: &[String], cut: &str) -> Result<bool> {
        loop {
            let Some(answer) = self.prompt(CHECK_PROMPT)? else {
                return Ok(false);
            };
            if answer.contains('y') {
                let Some(run) = self.prompt(RUN_PROMPT)? else {
                    return Ok(false);
                };
                if is_exit(&run) {
                    return Ok(true);
                }
                let Ok(run) = run.trim().parse::<u32>() else {
                    writeln!(self.output, "Need a proper run number...")?;
                    continue;
                };
                self.print_resolved(lines, cut, Some(RunNumber::new(run)))?;
            } else if answer.contains('n') {
                self.print_resolved(lines, cut, None)?;
                return Ok(true);
            } else {
                writeln!(self.output, "Please answer yes or no...")?;
            }
        }
    }

    fn print_resolved(&mut self, lines: &[String], cut: &str, run: Option<RunNumber>) -> Result<()> {
        match self.resolver.resolve_lines(lines, cut, run) {
            Ok(resolved) if resolved.is_empty() => {
                writeln!(self.output, "No cut named '{cut}' in this run type")?;
            }
            Ok(resolved) => {
                for resolution in resolved {
                    writeln!(self.output, "{}", resolution.cut)?;
                    for diagnostic in &resolution.diagnostics {
                        writeln!(self.output, "  ! {diagnostic}")?;
                    }
                }
            }
            Err(err) => writeln!(self.output, "{err}")?,
        }
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| ApplicationError::SessionFailed { reason: e.to_string() })?;
        writeln!(self.output)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned()))
    }
}
