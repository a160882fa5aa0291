use std::ffi::OsString;
use std::process::Command;

use anyhow::{bail, Context, Result};

use crate::args::{ScaffoldOptions, TemplateContext};
use crate::trace;

/// Remote template package the engine renders.
pub const TEMPLATE_URI: &str = "gh:janluke/cookiecutter-react-component";

/// Environment variable naming the engine executable, for virtualenv
/// installations and tests. Defaults to `cookiecutter` on the PATH.
pub const ENGINE_ENV: &str = "CREATE_COMPONENT_COOKIECUTTER";

/// One scaffold invocation: where the files go and what fills the
/// placeholders. Confirmation already happened by the time one of these is
/// built, so engines run without prompting.
pub struct ScaffoldRequest<'a> {
    pub template: &'a str,
    pub options: &'a ScaffoldOptions,
    pub context: &'a TemplateContext,
}

/// The external collaborator that fetches a template package and renders it
/// into a file tree. Callers decide what a failure means for the exit code.
pub trait ScaffoldEngine {
    fn generate(&self, request: &ScaffoldRequest) -> Result<()>;
}

/// Production engine: the `cookiecutter` command line tool, run as a
/// subprocess.
pub struct CookiecutterCli {
    program: OsString,
}

impl CookiecutterCli {
    #[must_use]
    pub fn new(program: impl Into<OsString>) -> Self {
        CookiecutterCli {
            program: program.into(),
        }
    }

    /// Resolves the executable from [`ENGINE_ENV`], falling back to
    /// `cookiecutter`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(std::env::var_os(ENGINE_ENV).unwrap_or_else(|| OsString::from("cookiecutter")))
    }

    fn arguments(request: &ScaffoldRequest) -> Vec<OsString> {
        let mut args = vec![
            OsString::from("--no-input"),
            OsString::from("--output-dir"),
            request.options.output_dir.clone().into_os_string(),
        ];

        if request.options.overwrite_if_exists {
            args.push(OsString::from("--overwrite-if-exists"));
        }
        if request.options.skip_if_file_exists {
            args.push(OsString::from("--skip-if-file-exists"));
        }
        if request.options.verbose {
            args.push(OsString::from("--verbose"));
        }

        args.push(OsString::from(request.template));
        args.extend(request.context.defines().into_iter().map(OsString::from));

        args
    }
}

impl ScaffoldEngine for CookiecutterCli {
    fn generate(&self, request: &ScaffoldRequest) -> Result<()> {
        let arguments = Self::arguments(request);

        trace!(
            "Running {} {}",
            self.program.to_string_lossy(),
            arguments
                .iter()
                .map(|a| a.to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join(" ")
        );

        let output = Command::new(&self.program)
            .args(&arguments)
            .output()
            .with_context(|| format!("Failed to launch {}", self.program.to_string_lossy()))?;

        // cookiecutter talks to the user on stdout; pass it through.
        let stdout = String::from_utf8_lossy(&output.stdout);
        if !stdout.trim().is_empty() {
            print!("{stdout}");
        }

        let stderr = String::from_utf8_lossy(&output.stderr);

        if !output.status.success() {
            let message = stderr.trim();

            if message.is_empty() {
                bail!(
                    "{} exited with {}",
                    self.program.to_string_lossy(),
                    output.status
                );
            }
            bail!("{message}");
        }

        // Logging detail (DEBUG under --verbose) arrives on stderr.
        if !stderr.trim().is_empty() {
            trace!("{}", stderr.trim_end());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn options(overwrite: bool, skip: bool) -> ScaffoldOptions {
        ScaffoldOptions {
            output_dir: PathBuf::from("src/components"),
            overwrite_if_exists: overwrite,
            skip_if_file_exists: skip,
            verbose: false,
        }
    }

    fn as_strings(args: Vec<OsString>) -> Vec<String> {
        args.into_iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn minimal_request_disables_prompting_and_names_the_template() {
        let options = options(false, false);
        let context = TemplateContext::default();
        let request = ScaffoldRequest {
            template: TEMPLATE_URI,
            options: &options,
            context: &context,
        };

        assert_eq!(
            as_strings(CookiecutterCli::arguments(&request)),
            vec![
                "--no-input",
                "--output-dir",
                "src/components",
                "gh:janluke/cookiecutter-react-component",
            ]
        );
    }

    #[test]
    fn policies_and_context_are_forwarded() {
        use clap::Parser;

        let options = options(true, true);
        let (_, context) = crate::args::Args::parse_from(["create-component", "Button"]).split();
        let request = ScaffoldRequest {
            template: TEMPLATE_URI,
            options: &options,
            context: &context,
        };

        let args = as_strings(CookiecutterCli::arguments(&request));
        assert!(args.contains(&"--overwrite-if-exists".to_string()));
        assert!(args.contains(&"--skip-if-file-exists".to_string()));
        assert_eq!(args.last().unwrap(), "use_proptypes=y");
        assert!(args.contains(&"component_name=Button".to_string()));
    }

    #[test]
    fn verbose_forwards_debug_logging_to_the_engine() {
        let mut opts = options(false, false);
        let context = TemplateContext::default();

        let request = ScaffoldRequest {
            template: TEMPLATE_URI,
            options: &opts,
            context: &context,
        };
        let args = as_strings(CookiecutterCli::arguments(&request));
        assert!(!args.contains(&"--verbose".to_string()));

        opts.verbose = true;
        let request = ScaffoldRequest {
            template: TEMPLATE_URI,
            options: &opts,
            context: &context,
        };
        let args = as_strings(CookiecutterCli::arguments(&request));
        assert!(args.contains(&"--verbose".to_string()));
    }
}
