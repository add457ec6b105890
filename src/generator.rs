//! Run orchestration: symbols in, component files out
//!
//! A run renders every file in memory first, in input order, and only then
//! touches the output directory. Files whose content is already on disk are
//! left alone, files no longer produced are removed.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use log::{debug, info, warn};
use thiserror::Error;

use crate::codegen::{resolve, ColorSet, MarkupError, MarkupGenerator};
use crate::config::Config;
use crate::output::{FileSink, OutputError};
use crate::sprite::SymbolNode;
use crate::template::{
    cases_list, cases_union, exports_list, imports_list, Bindings, Placeholder, Template,
    TemplateError, TemplateKind, TemplateProvider,
};

/// Extension of generated icon components
pub const COMPONENT_EXTENSION: &str = "vue";

/// File name of the type declaration
pub const TYPES_FILE: &str = "index.d.ts";

/// Indentation of the icon root element inside its template
const ICON_INDENT: usize = 2;

/// Errors that abort a run
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Markup(#[from] MarkupError),

    #[error("icon id \"{id}\" does not produce a component name")]
    EmptyComponentName { id: String },

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

/// Everything generated from one symbol
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIcon {
    /// Raw id the name was derived from
    pub id: String,
    pub name: String,
    pub markup: String,
    pub colors: ColorSet,
}

/// What happened to one output file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteStatus {
    Written,
    /// Existing content was identical, nothing was written
    Unchanged,
    /// A later icon with the same component name owns the file
    Superseded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub status: WriteStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconReport {
    pub id: String,
    pub name: String,
    pub file: FileReport,
}

/// Two icons resolved to the same component name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameCollision {
    pub name: String,
    pub first_id: String,
    pub second_id: String,
}

/// Outcome of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub save_dir: PathBuf,
    /// One entry per symbol, in input order
    pub icons: Vec<IconReport>,
    pub aggregate: FileReport,
    pub types: Option<FileReport>,
    pub collisions: Vec<NameCollision>,
}

impl RunSummary {
    /// Component names in input order, duplicates included
    pub fn names(&self) -> Vec<&str> {
        self.icons.iter().map(|icon| icon.name.as_str()).collect()
    }

    /// Icons whose file was (re)written
    pub fn written_icons(&self) -> impl Iterator<Item = &IconReport> {
        self.icons
            .iter()
            .filter(|icon| icon.file.status == WriteStatus::Written)
    }

    pub fn unchanged_icons(&self) -> usize {
        self.icons
            .iter()
            .filter(|icon| icon.file.status == WriteStatus::Unchanged)
            .count()
    }
}

struct PendingFile {
    path: PathBuf,
    content: String,
}

/// Drives name resolution, markup generation and file emission
pub struct Generator<'a, T: TemplateProvider + ?Sized> {
    config: &'a Config,
    templates: &'a T,
    markup: MarkupGenerator,
}

impl<'a, T: TemplateProvider + ?Sized> Generator<'a, T> {
    pub fn new(config: &'a Config, templates: &'a T) -> Self {
        Self {
            config,
            templates,
            markup: MarkupGenerator::new().with_collapse_single_color(config.collapse_single_color),
        }
    }

    /// Resolve the name and markup of one symbol
    pub fn generate_icon(&self, symbol: &SymbolNode) -> Result<GeneratedIcon, GenerateError> {
        let name = resolve(&symbol.id, self.config.trim_icon_prefix.as_deref());
        if name.is_empty() {
            return Err(GenerateError::EmptyComponentName {
                id: symbol.id.clone(),
            });
        }

        let generated = self.markup.generate(symbol, ICON_INDENT)?;
        Ok(GeneratedIcon {
            id: symbol.id.clone(),
            name,
            markup: generated.markup,
            colors: generated.colors,
        })
    }

    /// Render one icon into the single-icon template
    pub fn render_icon(&self, template: &Template, icon: &GeneratedIcon) -> String {
        let bindings = Bindings::new()
            .set(Placeholder::Size, self.config.default_icon_size.to_string())
            .set(Placeholder::ComponentName, icon.name.as_str())
            .set(Placeholder::IconContent, icon.markup.as_str())
            .set(Placeholder::SvgColors, icon.colors.to_json())
            .set(Placeholder::Unit, self.config.unit.as_str());
        template.render(&bindings)
    }

    /// Render the aggregate file for `names`
    pub fn render_aggregate(&self, template: &Template, names: &[String]) -> String {
        let bindings = Bindings::new()
            .set(Placeholder::Size, self.config.default_icon_size.to_string())
            .set(Placeholder::Cases, cases_list(names))
            .set(Placeholder::Imports, imports_list(names, COMPONENT_EXTENSION))
            .set(Placeholder::Exports, exports_list(names));
        template.render(&bindings)
    }

    /// Render the type declaration for `names`
    pub fn render_types(&self, template: &Template, names: &[String]) -> String {
        template.render(&Bindings::new().set(Placeholder::Cases, cases_union(names)))
    }

    /// Generate all files for `symbols` into the configured directory
    pub fn run(
        &self,
        symbols: &[SymbolNode],
        sink: &mut dyn FileSink,
    ) -> Result<RunSummary, GenerateError> {
        let save_dir = self.config.save_dir.clone();
        let single = self.templates.load(TemplateKind::SingleIcon)?;
        let aggregate = self.templates.load(self.config.aggregate.template())?;
        let types = if self.config.emit_types {
            Some(self.templates.load(TemplateKind::TypeDeclaration)?)
        } else {
            None
        };

        let mut icons = Vec::with_capacity(symbols.len());
        let mut files = Vec::with_capacity(symbols.len() + 2);
        let mut names = Vec::with_capacity(symbols.len());
        let mut seen: HashMap<String, String> = HashMap::new();
        let mut collisions = Vec::new();

        for symbol in symbols {
            let icon = self.generate_icon(symbol)?;
            debug!(
                id = icon.id.as_str(),
                name = icon.name.as_str(),
                colors = icon.colors.len();
                "Resolved icon"
            );

            if let Some(first_id) = seen.get(&icon.name) {
                warn!(
                    name = icon.name.as_str(),
                    first = first_id.as_str(),
                    second = icon.id.as_str();
                    "Icons share a component name, the later one overwrites the earlier"
                );
                collisions.push(NameCollision {
                    name: icon.name.clone(),
                    first_id: first_id.clone(),
                    second_id: icon.id.clone(),
                });
            } else {
                seen.insert(icon.name.clone(), icon.id.clone());
            }

            let path = save_dir.join(format!("{}.{}", icon.name, COMPONENT_EXTENSION));
            files.push(PendingFile {
                path,
                content: self.render_icon(&single, &icon),
            });
            names.push(icon.name.clone());
            icons.push(icon);
        }

        let aggregate_path = save_dir.join(self.config.aggregate.file_name());
        let aggregate_content = self.render_aggregate(&aggregate, &names);
        let types_file = types.map(|template| PendingFile {
            path: save_dir.join(TYPES_FILE),
            content: self.render_types(&template, &names),
        });

        let keep: HashSet<PathBuf> = files
            .iter()
            .map(|f| f.path.clone())
            .chain(std::iter::once(aggregate_path.clone()))
            .chain(types_file.iter().map(|f| f.path.clone()))
            .collect();
        sink.prepare_dir(&save_dir, &keep)?;

        // Only the last file per path is compared and written
        let mut owner: HashMap<PathBuf, usize> = HashMap::new();
        for (index, file) in files.iter().enumerate() {
            owner.insert(file.path.clone(), index);
        }

        let mut reports = Vec::with_capacity(icons.len());
        for (index, (icon, file)) in icons.into_iter().zip(files).enumerate() {
            let report = if owner.get(&file.path) == Some(&index) {
                write_if_changed(sink, file)?
            } else {
                debug!(id = icon.id.as_str(), path:? = file.path; "Superseded by a later icon");
                FileReport {
                    path: file.path,
                    status: WriteStatus::Superseded,
                }
            };
            if report.status == WriteStatus::Written {
                info!(id = icon.id.as_str(), path:? = report.path; "Generated icon");
            }
            reports.push(IconReport {
                id: icon.id,
                name: icon.name,
                file: report,
            });
        }

        let aggregate = write_if_changed(
            sink,
            PendingFile {
                path: aggregate_path,
                content: aggregate_content,
            },
        )?;
        let types = types_file
            .map(|file| write_if_changed(sink, file))
            .transpose()?;

        info!(
            icons = reports.len(),
            collisions = collisions.len(),
            dir:? = save_dir;
            "Generation finished"
        );

        Ok(RunSummary {
            save_dir,
            icons: reports,
            aggregate,
            types,
            collisions,
        })
    }
}

fn write_if_changed(sink: &mut dyn FileSink, file: PendingFile) -> Result<FileReport, GenerateError> {
    if sink.read(&file.path).as_deref() == Some(file.content.as_str()) {
        debug!(path:? = file.path; "Unchanged, skipping write");
        return Ok(FileReport {
            path: file.path,
            status: WriteStatus::Unchanged,
        });
    }

    sink.write(&file.path, &file.content)?;
    Ok(FileReport {
        path: file.path,
        status: WriteStatus::Written,
    })
}
