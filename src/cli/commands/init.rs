//! Initialize a workflow project from a template

use anyhow::anyhow;
use log::debug;

use flow::templates::{self, InitError};

/// Initialize a workflow project from one of the registered templates.
///
/// Filesystem-level failures are wrapped with a top-level message that
/// keeps the original error text; everything else propagates unchanged.
pub fn init(alias: Option<&str>, template: &str) -> anyhow::Result<()> {
    debug!("init alias={alias:?} template={template}");

    match templates::init(alias, template) {
        Ok(path) => {
            println!(
                "Initialized project '{}' from template '{template}'.",
                path.display()
            );
            Ok(())
        },
        Err(err @ (InitError::Io(_) | InitError::AlreadyExists(_))) => Err(anyhow!(
            "Error occurred while trying to initialize a flow project: {err}"
        )),
        Err(err) => Err(err.into()),
    }
}
