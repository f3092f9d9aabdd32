use std::fs;
use std::path::Path;

use refit_core::config::RefitConfig;

use crate::gemini::GeminiClient;
use crate::roles::Role;

/// Run `refit guide <context> <output> [--role <role>]` — generate a
/// role-specific Markdown guide for the project described by the context
/// document.
pub fn run(verbose: bool, context_path: &str, output_path: &str, role: Option<Role>) -> i32 {
    let role = match role {
        Some(r) => r,
        None => match select_role() {
            Some(r) => r,
            None => return 2,
        },
    };

    let context = match fs::read_to_string(context_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("refit guide: cannot read context {}: {}", context_path, e);
            return 2;
        }
    };

    let config = RefitConfig::load(Path::new(".refit"));
    let client = match GeminiClient::from_env(&config.api.model, config.api.timeout_seconds) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("refit guide: {}", e);
            return 2;
        }
    };

    if verbose {
        eprintln!(
            "refit guide: generating {} guide from {} bytes of context",
            role,
            context.len()
        );
    }
    eprintln!("generating a guide as {role}, this can take a while...");

    // The task prompt rides through the same analyze call the fix path
    // uses; it takes the file slot.
    let guide = match client.analyze(&context, &task_prompt(role)) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("refit guide: {}", e);
            return 2;
        }
    };

    if let Err(e) = fs::write(output_path, guide) {
        eprintln!("refit guide: failed to write {}: {}", output_path, e);
        return 2;
    }

    println!("guide written to {output_path}");
    0
}

/// Role-framed instruction for the Markdown report.
fn task_prompt(role: Role) -> String {
    format!(
        "As a {role}, analyze the provided project context. Your goal is to generate a \
         learning guide or a detailed report in **Markdown format** for this project. The \
         report must focus on the best practices, key responsibilities, and recommendations \
         specific to your role. Your reply must be ONLY the content of the report/guide, \
         with no additional explanations outside the report. Use the context to make \
         recommendations specific to the project."
    )
}

/// Interactive role menu for when `--role` is omitted.
fn select_role() -> Option<Role> {
    let labels: Vec<&str> = Role::ALL.iter().map(|r| r.label()).collect();
    match dialoguer::Select::new()
        .with_prompt("Generate a guide for which role?")
        .items(&labels)
        .default(0)
        .interact()
    {
        Ok(index) => Some(Role::ALL[index]),
        Err(e) => {
            eprintln!("refit guide: role selection failed: {}", e);
            None
        }
    }
}
