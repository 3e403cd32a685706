//! Example-usage snippets for installed agents.

use std::env;
use std::path::Path;

/// Dotted import path of `target` relative to `base`, extension stripped.
///
/// `None` when `target` is not below `base`.
pub fn import_path(target: &Path, base: &Path) -> Option<String> {
    let relative = target.strip_prefix(base).ok()?.with_extension("");
    let segments: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();

    (!segments.is_empty()).then(|| segments.join("."))
}

/// Snippet showing how to import and run the agent installed at `target`.
pub fn example_usage(target: &Path, project_root: &Path, name: &str) -> String {
    let module = import_path(target, project_root)
        .or_else(|| {
            let cwd = env::current_dir().ok()?;
            import_path(target, &cwd)
        })
        .unwrap_or_else(|| {
            target
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| name.to_string())
        });

    format!(
        "from {module} import {name}\n\
         \n\
         # Run the agent\n\
         result = Runner.run({name}, \"Your prompt here\")\n\
         print(result.final_output)"
    )
}
