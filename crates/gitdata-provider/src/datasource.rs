//! The four data sources and their record encoding
//!
//! A read validates the caller's arguments against the data source schema,
//! runs one inspector call, and encodes the result as a JSON object holding
//! every schema attribute. Arguments the caller left out and record fields
//! that are absent come back as `null`.

use std::path::Path;

use gitdata_core::{
    Backend, BranchRecord, FileStatusRecord, Inspector, RemoteRecord, StatusOptions,
};
use serde::Serialize;
use serde_json::{Map, Value, json};

use crate::config::ProviderConfig;
use crate::diagnostic::Diagnostic;
use crate::schema::{Arguments, Attribute, AttributeMode, AttributeType, Schema};

/// A named read-only query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DataSource {
    #[serde(rename = "git_branch")]
    Branch,
    #[serde(rename = "git_branches")]
    Branches,
    #[serde(rename = "git_remotes")]
    Remotes,
    #[serde(rename = "git_statuses")]
    Statuses,
}

const DIRECTORY: Attribute = Attribute::required("directory", "Path of the repository root");
const ID: Attribute = Attribute::computed(
    "id",
    AttributeType::String,
    "Record identity: the branch name or the queried directory",
);

impl DataSource {
    pub const ALL: [DataSource; 4] = [
        DataSource::Branch,
        DataSource::Branches,
        DataSource::Remotes,
        DataSource::Statuses,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Branch => "git_branch",
            Self::Branches => "git_branches",
            Self::Remotes => "git_remotes",
            Self::Statuses => "git_statuses",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ds| ds.name() == name)
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Branch => "A single local branch: head commit and tracking configuration",
            Self::Branches => "Every local branch, keyed by name",
            Self::Remotes => "Every configured remote and its URLs, keyed by name",
            Self::Statuses => "Working tree and index status, keyed by path",
        }
    }

    pub fn schema(self) -> Schema {
        let attributes = match self {
            Self::Branch => vec![
                DIRECTORY,
                Attribute::required("name", "Short name of the local branch"),
                ID,
                Attribute::computed(
                    "remote",
                    AttributeType::String,
                    "branch.<name>.remote, null when not configured",
                ),
                Attribute::computed(
                    "rebase",
                    AttributeType::String,
                    "branch.<name>.rebase, null when not configured",
                ),
                Attribute::computed(
                    "head_sha1",
                    AttributeType::String,
                    "Commit the branch points at, 40 lowercase hex characters",
                ),
            ],
            Self::Branches => vec![
                DIRECTORY,
                ID,
                Attribute::computed(
                    "branches",
                    AttributeType::ObjectMap,
                    "Branch name to {remote, rebase, head_sha1}",
                ),
            ],
            Self::Remotes => vec![
                DIRECTORY,
                ID,
                Attribute::computed(
                    "remotes",
                    AttributeType::ObjectMap,
                    "Remote name to {urls}",
                ),
            ],
            Self::Statuses => vec![
                DIRECTORY,
                Attribute::optional(
                    "include_untracked",
                    AttributeType::Bool,
                    "Report files not in the index (provider default: true)",
                ),
                Attribute::optional(
                    "include_ignored",
                    AttributeType::Bool,
                    "Report files excluded by ignore rules (provider default: false)",
                ),
                ID,
                Attribute::computed(
                    "is_clean",
                    AttributeType::Bool,
                    "Whether no path has a staged or worktree change",
                ),
                Attribute::computed(
                    "files",
                    AttributeType::ObjectMap,
                    "Path to {staged_state, worktree_state}",
                ),
            ],
        };
        Schema { attributes }
    }

    /// Validate `arguments` and run the read.
    pub fn read<B: Backend>(
        self,
        inspector: &Inspector<B>,
        arguments: &Value,
        config: &ProviderConfig,
    ) -> Result<Value, Vec<Diagnostic>> {
        let schema = self.schema();
        let args = schema.validate(arguments)?;
        let directory = args.required(DIRECTORY.name).map_err(|d| vec![d])?;

        tracing::debug!(data_source = self.name(), %directory, "Reading data source");

        let computed = match self {
            Self::Branch => {
                let name = args.required("name").map_err(|d| vec![d])?;
                let record = inspector
                    .branch(directory, name)
                    .map_err(|err| vec![Diagnostic::from(err)])?;
                let mut object = branch_attributes(&record);
                object.insert("id".into(), json!(record.name));
                object
            }
            Self::Branches => {
                let view = inspector
                    .branches(directory)
                    .map_err(|err| vec![Diagnostic::from(err)])?;
                let branches: Map<String, Value> = view
                    .by_name()
                    .into_iter()
                    .map(|(name, record)| {
                        (name.to_string(), Value::Object(branch_attributes(record)))
                    })
                    .collect();
                let mut object = identity(&view.directory);
                object.insert("branches".into(), Value::Object(branches));
                object
            }
            Self::Remotes => {
                let view = inspector
                    .remotes(directory)
                    .map_err(|err| vec![Diagnostic::from(err)])?;
                let remotes: Map<String, Value> = view
                    .remotes
                    .values()
                    .map(|record| (record.name.clone(), remote_attributes(record)))
                    .collect();
                let mut object = identity(&view.directory);
                object.insert("remotes".into(), Value::Object(remotes));
                object
            }
            Self::Statuses => {
                let options = status_options(&args, config);
                let view = inspector
                    .status_with(directory, &options)
                    .map_err(|err| vec![Diagnostic::from(err)])?;
                let files: Map<String, Value> = view
                    .snapshot
                    .files()
                    .values()
                    .map(|record| (record.path.clone(), file_attributes(record)))
                    .collect();
                let mut object = identity(&view.directory);
                object.insert("is_clean".into(), json!(view.snapshot.is_clean()));
                object.insert("files".into(), Value::Object(files));
                object
            }
        };

        Ok(Value::Object(assemble(&schema, args, computed)))
    }
}

fn status_options(args: &Arguments, config: &ProviderConfig) -> StatusOptions {
    let defaults = config.status_options();
    StatusOptions {
        include_untracked: args
            .get_bool("include_untracked")
            .unwrap_or(defaults.include_untracked),
        include_ignored: args
            .get_bool("include_ignored")
            .unwrap_or(defaults.include_ignored),
    }
}

/// Arguments plus computed attributes, with every caller-side attribute of
/// the schema present.
fn assemble(schema: &Schema, args: Arguments, computed: Map<String, Value>) -> Map<String, Value> {
    let mut object = args.into_object();
    for attr in &schema.attributes {
        if attr.mode != AttributeMode::Computed {
            object.entry(attr.name).or_insert(Value::Null);
        }
    }
    object.extend(computed);
    object
}

fn identity(directory: &Path) -> Map<String, Value> {
    let mut object = Map::new();
    object.insert("id".into(), json!(directory.to_string_lossy()));
    object
}

fn branch_attributes(record: &BranchRecord) -> Map<String, Value> {
    let mut object = Map::new();
    object.insert("remote".into(), json!(record.remote));
    object.insert("rebase".into(), json!(record.rebase));
    object.insert("head_sha1".into(), json!(record.head_sha1));
    object
}

fn remote_attributes(record: &RemoteRecord) -> Value {
    json!({ "urls": record.urls })
}

fn file_attributes(record: &FileStatusRecord) -> Value {
    json!({
        "staged_state": record.staged_state,
        "worktree_state": record.worktree_state,
    })
}
