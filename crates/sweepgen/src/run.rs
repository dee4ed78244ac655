//! A single sweep run from template file to written configurations.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use color_eyre::eyre::{WrapErr, bail};
use sweepgen_core::{Expansion, StrategyKind, Template, properties};

use crate::writer::ConfigWriter;

/// What to do with the expansion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Write one file per configuration
    #[default]
    Write,
    /// Print identifiers only
    DryRun,
    /// Print the number of configurations only
    Count,
}

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub template: PathBuf,
    /// Directory for generated files; `None` means next to the template
    pub output_dir: Option<PathBuf>,
    pub mode: Mode,
    /// Refuse to run when the sweep is larger than this
    pub limit: Option<u64>,
    pub manifest: bool,
}

impl RunOptions {
    pub fn new(template: impl Into<PathBuf>) -> Self {
        Self {
            template: template.into(),
            output_dir: None,
            mode: Mode::default(),
            limit: None,
            manifest: false,
        }
    }

    fn resolved_output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(|| {
            self.template
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from("."))
        })
    }

    fn base_name(&self) -> String {
        self.template
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "config".to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub strategy: StrategyKind,
    /// Exact size of the sweep, `None` if it overflows a `u64`
    pub combinations: Option<u64>,
    /// Configurations produced (written, or listed in a dry run)
    pub generated: usize,
    pub files: Vec<PathBuf>,
}

/// Read and parse a property-file template
pub fn load_template(path: &Path) -> color_eyre::Result<Template> {
    let content = fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read template {}", path.display()))?;
    let template = properties::parse(&content)
        .wrap_err_with(|| format!("failed to parse template {}", path.display()))?;
    tracing::info!(
        template = %path.display(),
        properties = template.len(),
        "loaded template"
    );
    Ok(template)
}

/// Expand the template named in `options`.
///
/// Identifiers (dry run) and counts are printed to `out`.
pub fn run(options: &RunOptions, out: &mut impl Write) -> color_eyre::Result<RunSummary> {
    let template = load_template(&options.template)?;
    let expansion = Expansion::new(&template)
        .wrap_err_with(|| format!("invalid range in {}", options.template.display()))?;

    let strategy = expansion.strategy();
    let combinations = expansion.combination_count();
    tracing::info!(
        strategy = %strategy,
        ranges = expansion.table().range_count(),
        combinations = ?combinations,
        "prepared sweep"
    );

    if options.mode == Mode::Count {
        match combinations {
            Some(n) => writeln!(out, "{n}")?,
            None => writeln!(out, "more than {}", u64::MAX)?,
        }
        return Ok(RunSummary {
            strategy,
            combinations,
            generated: 0,
            files: Vec::new(),
        });
    }

    if let Some(limit) = options.limit {
        match combinations {
            Some(n) if n <= limit => {}
            Some(n) => bail!("sweep has {n} configurations, above the limit of {limit}"),
            None => bail!(
                "sweep has more than {} configurations, above the limit of {limit}",
                u64::MAX
            ),
        }
    }

    if options.mode == Mode::DryRun {
        let mut generated = 0;
        for item in expansion {
            writeln!(out, "{}", item.identifier)?;
            generated += 1;
        }
        return Ok(RunSummary {
            strategy,
            combinations,
            generated,
            files: Vec::new(),
        });
    }

    let output_dir = options.resolved_output_dir();
    fs::create_dir_all(&output_dir)
        .wrap_err_with(|| format!("failed to create {}", output_dir.display()))?;

    let swept = expansion
        .table()
        .iter()
        .map(|(name, _)| name.to_string())
        .collect();
    let mut writer = ConfigWriter::new(&output_dir, &options.base_name(), swept);

    let mut files = Vec::new();
    for item in expansion {
        files.push(writer.write(&item.identifier, &item.configuration)?);
    }

    if options.manifest {
        let manifest = writer.write_manifest()?;
        tracing::info!(manifest = %manifest.display(), "wrote manifest");
    }

    tracing::info!(
        written = writer.written(),
        output_dir = %output_dir.display(),
        "sweep complete"
    );

    Ok(RunSummary {
        strategy,
        combinations,
        generated: writer.written(),
        files,
    })
}
