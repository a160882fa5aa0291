use std::fmt;
use std::path::PathBuf;

pub use clap::{Parser, ValueEnum};

/// Create a React component from the remote cookiecutter template.
///
/// Every declared option lands in exactly one of two groups after parsing:
/// the scaffolder options consumed by the invocation itself, or the template
/// variables forwarded verbatim to the engine. See [`Args::split`].
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[clap(version, about)]
pub struct Args {
    /// Name of the component
    pub component_name: String,

    /// Kind of component to generate
    #[clap(value_enum, default_value_t = ComponentType::Function)]
    pub component_type: ComponentType,

    /// Stylesheet flavor for the component styles
    #[clap(short, long, value_enum, default_value_t = StyleType::Scss)]
    pub style_type: StyleType,

    /// Generate a test file next to the component
    #[clap(short = 't', long, value_enum, default_value_t = Switch::No)]
    pub include_test_file: Switch,

    /// Generate an index file re-exporting the component
    #[clap(short, long, value_enum, default_value_t = Switch::Yes)]
    pub include_index_file: Switch,

    /// Declare prop-types for the component
    #[clap(short = 'p', long, value_enum, default_value_t = Switch::Yes)]
    pub use_proptypes: Switch,

    /// Directory the component folder is created in
    #[clap(short, long, default_value = "src/components")]
    pub output_dir: PathBuf,

    /// Overwrite the contents of the output directory if it already exists
    #[clap(short = 'f', long)]
    pub overwrite_if_exists: bool,

    /// Skip the files in the output directory that already exist
    #[clap(long)]
    pub skip_if_file_exists: bool,

    /// Detailed output while the scaffolder runs
    #[clap(short, long)]
    pub verbose: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentType {
    Function,
    Class,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleType {
    Css,
    Scss,
    #[value(name = "module.css")]
    ModuleCss,
    #[value(name = "module.scss")]
    ModuleScss,
}

/// A `y`/`n` choice, kept textual because the template expects the letters
/// as substitution values.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Switch {
    #[value(name = "y")]
    Yes,
    #[value(name = "n")]
    No,
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ComponentType::Function => "function",
            ComponentType::Class => "class",
        })
    }
}

impl fmt::Display for StyleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StyleType::Css => "css",
            StyleType::Scss => "scss",
            StyleType::ModuleCss => "module.css",
            StyleType::ModuleScss => "module.scss",
        })
    }
}

impl fmt::Display for Switch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Switch::Yes => "y",
            Switch::No => "n",
        })
    }
}

/// Options consumed by the scaffold invocation itself, never forwarded as
/// template variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldOptions {
    pub output_dir: PathBuf,
    pub overwrite_if_exists: bool,
    pub skip_if_file_exists: bool,
    pub verbose: bool,
}

impl ScaffoldOptions {
    /// Argument ids belonging to this group.
    pub const ARG_NAMES: [&'static str; 4] = [
        "output_dir",
        "overwrite_if_exists",
        "skip_if_file_exists",
        "verbose",
    ];

    #[must_use]
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("output_dir", self.output_dir.display().to_string()),
            ("overwrite_if_exists", self.overwrite_if_exists.to_string()),
            ("skip_if_file_exists", self.skip_if_file_exists.to_string()),
            ("verbose", self.verbose.to_string()),
        ]
    }
}

/// Substitution context handed to the scaffolding engine, in declaration
/// order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TemplateContext {
    pairs: Vec<(String, String)>,
}

impl TemplateContext {
    fn push(&mut self, key: &str, value: impl fmt::Display) {
        self.pairs.push((key.to_string(), value.to_string()));
    }

    #[must_use]
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// `key=value` tokens in the form the engine CLI takes extra context.
    #[must_use]
    pub fn defines(&self) -> Vec<String> {
        self.pairs
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect()
    }
}

impl Args {
    /// Splits the resolved options into the scaffolder group and the
    /// template variable group.
    ///
    /// The split is exhaustive and exclusive: the destructuring below fails
    /// to compile if a declared option is left out of both groups.
    #[must_use]
    pub fn split(self) -> (ScaffoldOptions, TemplateContext) {
        let Args {
            component_name,
            component_type,
            style_type,
            include_test_file,
            include_index_file,
            use_proptypes,
            output_dir,
            overwrite_if_exists,
            skip_if_file_exists,
            verbose,
        } = self;

        let mut context = TemplateContext::default();
        context.push("component_name", component_name);
        context.push("component_type", component_type);
        context.push("style_type", style_type);
        context.push("include_test_file", include_test_file);
        context.push("include_index_file", include_index_file);
        context.push("use_proptypes", use_proptypes);

        let options = ScaffoldOptions {
            output_dir,
            overwrite_if_exists,
            skip_if_file_exists,
            verbose,
        };

        (options, context)
    }
}
