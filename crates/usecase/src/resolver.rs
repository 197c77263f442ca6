// crates/usecase/src/resolver.rs
use std::{
    collections::{HashMap, hash_map::Entry},
    path::{Path, PathBuf},
};

use cut_check_domain::{
    CutLine, CutReference, Diagnostic, DiagnosticKind, MalformedLinePolicy, ParameterLookup,
    ParameterTable, ReferenceScanner, ResolvedCut, ResolverOptions, TableRegistry,
    UnknownCategoryPolicy, UnmatchedRunPolicy,
    model::{definition_lines, is_comment},
};
use cut_check_ports::{tabular::TabularSource, text::TextSource};
use cut_check_shared_kernel::{
    ApplicationError, DomainError, ErrorContext, Result, RunNumber, TableKind,
};

use crate::dto::{CutReport, Resolution};

/// Resolves run-type cuts against the general-cut files and parameter tables
/// of one [`TableRegistry`].
///
/// The resolver holds no state between calls; every call re-reads the files
/// it needs.
pub struct CutResolver<'a> {
    text: &'a dyn TextSource,
    tables: &'a dyn TabularSource,
    registry: &'a TableRegistry,
    options: ResolverOptions,
}

impl<'a> CutResolver<'a> {
    pub fn new(
        text: &'a dyn TextSource,
        tables: &'a dyn TabularSource,
        registry: &'a TableRegistry,
        options: ResolverOptions,
    ) -> Self {
        Self { text, tables, registry, options }
    }

    pub fn registry(&self) -> &TableRegistry {
        self.registry
    }

    pub fn options(&self) -> ResolverOptions {
        self.options
    }

    /// Non-comment, non-blank lines of the run type's cut file, in file order.
    ///
    /// # Errors
    /// Fails when `run_type` is not registered or its file cannot be read;
    /// both a missing key and a missing file satisfy
    /// [`is_not_found`](cut_check_shared_kernel::CutCheckError::is_not_found).
    pub fn load_run_type(&self, run_type: &str) -> Result<Vec<String>> {
        let path = self.registry.lookup(TableKind::RunType, run_type)?;
        let text = self
            .text
            .read_text(path)
            .with_context(|| format!("run type '{run_type}'"))?;
        let lines = definition_lines(&text);
        log::debug!("run type {run_type}: {} lines from {}", lines.len(), path.display());
        Ok(lines)
    }

    /// Cut names defined by `lines`, in order of first definition.
    pub fn cut_names(lines: &[String]) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for definition in lines.iter().filter_map(|line| CutLine::parse(line).ok()) {
            if !names.contains(&definition.name) {
                names.push(definition.name);
            }
        }
        names
    }

    /// Expand one run-type line if it defines `target`.
    ///
    /// Returns `Ok(None)` when the line defines some other cut. Each
    /// `category.field` term contributes the trimmed right-hand side of every
    /// line in the category file whose name is `field`, so repeated
    /// definitions all appear.
    ///
    /// # Errors
    /// Only under the `fail` policies; otherwise problems are recorded as
    /// diagnostics on the returned [`Resolution`].
    pub fn grab_cut(&self, line: &str, target: &str) -> Result<Option<Resolution>> {
        if is_comment(line) || line.trim().is_empty() {
            return Ok(None);
        }
        let definition = match CutLine::parse(line) {
            Ok(definition) => definition,
            Err(err) if self.options.malformed_line == MalformedLinePolicy::Fail => {
                return Err(err.into());
            }
            Err(err) => {
                log::warn!("skipping run-type line: {err}");
                return Ok(None);
            }
        };
        if !definition.defines(target) {
            return Ok(None);
        }

        self.expand(&definition)
            .map(Some)
            .with_context(|| format!("cut '{}'", definition.name))
    }

    fn expand(&self, definition: &CutLine) -> Result<Resolution> {
        let mut resolution = Resolution::new(ResolvedCut::new(definition.name.clone(), Vec::new()));
        let mut categories: HashMap<PathBuf, std::result::Result<Vec<CutLine>, Diagnostic>> =
            HashMap::new();

        for term in definition.terms() {
            let reference = match CutReference::parse(term) {
                Ok(reference) => reference,
                Err(err) => {
                    self.on_malformed(term, err, &mut resolution.diagnostics)?;
                    continue;
                }
            };
            let Ok(path) = self.registry.lookup(TableKind::GeneralCut, &reference.category) else {
                self.on_unknown_category(term, &reference.category, &mut resolution.diagnostics)?;
                continue;
            };

            let cached = match categories.entry(path.to_path_buf()) {
                Entry::Occupied(entry) => entry.into_mut(),
                Entry::Vacant(entry) => {
                    entry.insert(self.read_category(path, &mut resolution.diagnostics)?)
                }
            };
            let lines = match cached {
                Ok(lines) => lines,
                Err(cause) => {
                    let message = format!(
                        "{} not found in {} ({})",
                        reference.field,
                        path.display(),
                        cause.message
                    );
                    note(&mut resolution.diagnostics, Diagnostic::new(cause.kind, term, message));
                    continue;
                }
            };

            let before = resolution.cut.values.len();
            resolution.cut.values.extend(
                lines
                    .iter()
                    .filter(|line| line.defines(&reference.field))
                    .map(|line| line.expression.clone()),
            );
            if resolution.cut.values.len() == before {
                let err = DomainError::FieldNotFound {
                    table: TableKind::GeneralCut,
                    category: reference.category.clone(),
                    field: reference.field.clone(),
                };
                note(&mut resolution.diagnostics, Diagnostic::from_domain(term, &err));
            }
        }

        log::debug!("{}", resolution.cut);
        Ok(resolution)
    }

    fn read_category(
        &self,
        path: &Path,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<std::result::Result<Vec<CutLine>, Diagnostic>> {
        let text = match self.text.read_text(path) {
            Ok(text) => text,
            Err(err) => {
                let subject = path.display().to_string();
                return Ok(Err(Diagnostic::new(DiagnosticKind::FileAccess, subject, err.to_string())));
            }
        };

        let mut lines = Vec::new();
        for line in definition_lines(&text) {
            match CutLine::parse(&line) {
                Ok(definition) => lines.push(definition),
                Err(err) => self.on_malformed(&line, err, diagnostics)?,
            }
        }
        Ok(Ok(lines))
    }

    fn on_malformed(
        &self,
        subject: &str,
        err: DomainError,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<()> {
        match self.options.malformed_line {
            MalformedLinePolicy::Fail => Err(err.into()),
            MalformedLinePolicy::Skip => {
                note(diagnostics, Diagnostic::from_domain(subject.trim(), &err));
                Ok(())
            }
        }
    }

    fn on_unknown_category(
        &self,
        term: &str,
        category: &str,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<()> {
        let err = DomainError::UnknownCategory { category: category.to_owned() };
        match self.options.unknown_category {
            UnknownCategoryPolicy::Fail => Err(err.into()),
            UnknownCategoryPolicy::Ignore => {
                note(diagnostics, Diagnostic::from_domain(term, &err));
                Ok(())
            }
        }
    }

    /// Replace parameter references in every value with the cell of the first
    /// row whose run interval contains `run`.
    ///
    /// References whose category is not a parameter table are left alone.
    ///
    /// # Errors
    /// Only when `run` matches no interval under [`UnmatchedRunPolicy::Fail`].
    pub fn substitute_parameters(&self, cut: &ResolvedCut, run: RunNumber) -> Result<Resolution> {
        let scanner = ReferenceScanner::new(self.registry.parameters.keys())?;
        let mut tables: HashMap<String, std::result::Result<ParameterTable, Diagnostic>> =
            HashMap::new();
        let mut diagnostics = Vec::new();
        let mut failure: Option<DomainError> = None;
        let mut values = Vec::with_capacity(cut.values.len());

        for value in &cut.values {
            let substituted = scanner.replace_with(value, |reference| {
                if failure.is_some() {
                    return None;
                }
                let path = self.registry.parameters.get(reference.category)?;
                let subject = format!("{}.{}", reference.category, reference.field);
                let table = tables
                    .entry(reference.category.to_owned())
                    .or_insert_with(|| self.read_parameter_table(path));

                let table = match table {
                    Ok(table) => table,
                    Err(cause) => {
                        let message = format!(
                            "{} not found in {} ({})",
                            reference.field,
                            path.display(),
                            cause.message
                        );
                        note(&mut diagnostics, Diagnostic::new(cause.kind, subject, message));
                        return None;
                    }
                };

                match table.lookup(run, reference.field) {
                    ParameterLookup::Found(cell) => {
                        log::debug!("{subject} @ {run} -> {cell}");
                        Some(cell.to_owned())
                    }
                    ParameterLookup::UnknownField => {
                        let err = DomainError::FieldNotFound {
                            table: TableKind::Parameter,
                            category: reference.category.to_owned(),
                            field: reference.field.to_owned(),
                        };
                        note(&mut diagnostics, Diagnostic::from_domain(subject, &err));
                        None
                    }
                    ParameterLookup::NoMatchingRow => {
                        let err = DomainError::UnresolvedReference { reference: subject.clone(), run };
                        match self.options.unmatched_run {
                            UnmatchedRunPolicy::Pass => log::debug!("{err}"),
                            UnmatchedRunPolicy::Warn => {
                                note(&mut diagnostics, Diagnostic::from_domain(subject, &err));
                            }
                            UnmatchedRunPolicy::Fail => failure = Some(err),
                        }
                        None
                    }
                }
            });
            if failure.is_some() {
                break;
            }
            values.push(substituted);
        }

        if let Some(err) = failure {
            return Err(err).with_context(|| format!("cut '{}' at run {run}", cut.name));
        }
        Ok(Resolution { cut: ResolvedCut::new(cut.name.clone(), values), diagnostics })
    }

    fn read_parameter_table(&self, path: &Path) -> std::result::Result<ParameterTable, Diagnostic> {
        let subject = || path.display().to_string();
        let dto = self
            .tables
            .read_table(path)
            .map_err(|e| Diagnostic::new(DiagnosticKind::FileAccess, subject(), e.to_string()))?;
        let table = ParameterTable::from_records(dto.header, dto.records)
            .map_err(|e| Diagnostic::new(DiagnosticKind::InvalidTable, subject(), e.to_string()))?;
        for skipped in table.skipped() {
            log::warn!("{}: row {} skipped: {}", path.display(), skipped.row, skipped.reason);
        }
        log::debug!("{}: {} parameter rows", path.display(), table.rows().len());
        Ok(table)
    }

    /// Every definition of `cut_name` in `lines`, substituted for `run` when given.
    pub fn resolve_lines(
        &self,
        lines: &[String],
        cut_name: &str,
        run: Option<RunNumber>,
    ) -> Result<Vec<Resolution>> {
        let mut resolved = Vec::new();
        for line in lines {
            let Some(mut resolution) = self.grab_cut(line, cut_name)? else {
                continue;
            };
            if let Some(run) = run {
                let substituted = self.substitute_parameters(&resolution.cut, run)?;
                resolution.cut = substituted.cut;
                resolution.diagnostics.extend(substituted.diagnostics);
            }
            resolved.push(resolution);
        }
        Ok(resolved)
    }

    /// Load `run_type` and resolve `cut_name` from it.
    pub fn resolve(
        &self,
        run_type: &str,
        cut_name: &str,
        run: Option<RunNumber>,
    ) -> Result<Vec<Resolution>> {
        let lines = self.load_run_type(run_type)?;
        self.resolve_lines(&lines, cut_name, run)
    }

    /// Resolve the named cuts of `run_type`, or all of them when `names` is empty.
    ///
    /// # Errors
    /// A named cut that the run type does not define is an error.
    pub fn grab(&self, run_type: &str, names: &[String], run: Option<RunNumber>) -> Result<CutReport> {
        let lines = self.load_run_type(run_type)?;
        let names = if names.is_empty() { Self::cut_names(&lines) } else { names.to_vec() };

        let mut cuts = Vec::new();
        for name in &names {
            let resolved = self.resolve_lines(&lines, name, run)?;
            if resolved.is_empty() {
                return Err(ApplicationError::ResolutionFailed {
                    cut: name.clone(),
                    reason: format!("not defined by run type '{run_type}'"),
                    source: None,
                }
                .into());
            }
            cuts.extend(resolved);
        }
        Ok(CutReport { run_type: run_type.to_owned(), run, cuts })
    }
}

fn note(diagnostics: &mut Vec<Diagnostic>, diagnostic: Diagnostic) {
    log::warn!("{diagnostic}");
    diagnostics.push(diagnostic);
}
