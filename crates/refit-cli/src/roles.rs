use clap::ValueEnum;

/// Specialist role a guide is generated for.
///
/// One enum value replaces the earlier one-wrapper-per-title pattern: the
/// role only parameterizes prompt text, so a single label threads through
/// prompt construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum Role {
    Database,
    Qa,
    Backend,
    Frontend,
    Devops,
    Generic,
}

impl Role {
    pub const ALL: [Role; 6] = [
        Role::Database,
        Role::Qa,
        Role::Backend,
        Role::Frontend,
        Role::Devops,
        Role::Generic,
    ];

    /// Human label used in prompts and progress output.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Database => "Database Administrator (DBA)",
            Role::Qa => "QA Engineer",
            Role::Backend => "Backend Engineer",
            Role::Frontend => "Frontend Engineer",
            Role::Devops => "DevOps Engineer (CI/CD)",
            Role::Generic => "Software Architect (SOLID)",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
