//! The fixed Makefile template.
//!
//! The template is a static constant: an ordered list of build targets whose
//! command bodies reference the [`PROJECT_TOKEN`] substitution point. Tool
//! invocations (formatter, type checker, linter, badge generator, TODO
//! lister, documentation generator) are opaque collaborators; only their
//! command lines live here.

/// File name of the generated artifact, relative to the project root.
pub const MAKEFILE_NAME: &str = "Makefile";

/// The single substitution point replaced by the project name at render time.
pub const PROJECT_TOKEN: &str = "$PROJECT";

const HEADER: &str = "# This Makefile is regenerated by mkmk. Do not edit it by hand.";

/// One named build target: prerequisites first, then tab-indented commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub name: &'static str,
    pub deps: &'static [&'static str],
    pub commands: &'static [&'static str],
}

/// The nine targets, in the order they appear in the generated file.
///
/// `lint` carries Make's `-` prefix so findings never fail the build, and
/// `todo` escapes `$$` so the `grep` substitution happens in the shell, not
/// at render time.
pub const TARGETS: [Target; 9] = [
    Target {
        name: "install",
        deps: &[],
        commands: &["pip3 install -e ."],
    },
    Target {
        name: "all",
        deps: &["install", "edit", "docs"],
        commands: &[],
    },
    Target {
        name: "edit",
        deps: &["format", "lint", "typecheck", "badge"],
        commands: &[],
    },
    Target {
        name: "format",
        deps: &[],
        commands: &["black $PROJECT"],
    },
    Target {
        name: "typecheck",
        deps: &[],
        commands: &["mypy $PROJECT --ignore-missing-imports"],
    },
    Target {
        name: "badge",
        deps: &[],
        commands: &["mkbadge \"flake8 $PROJECT --ignore=E203\""],
    },
    Target {
        name: "lint",
        deps: &[],
        commands: &["-flake8 $PROJECT --ignore=E203"],
    },
    Target {
        name: "todo",
        deps: &[],
        commands: &["todor $$(grep -rl TODO $PROJECT)"],
    },
    Target {
        name: "docs",
        deps: &[],
        commands: &["pdoc --docformat google -o docs $PROJECT"],
    },
];

/// Render the full Makefile text for `project_name`.
///
/// Purely deterministic: identical input yields byte-identical output.
pub fn render(project_name: &str) -> String {
    let mut rendered = String::new();
    rendered.push_str(HEADER);
    rendered.push('\n');

    for target in &TARGETS {
        rendered.push('\n');
        rendered.push_str(target.name);
        rendered.push(':');
        for dep in target.deps {
            rendered.push(' ');
            rendered.push_str(dep);
        }
        rendered.push('\n');

        for command in target.commands {
            let command = command.replace(PROJECT_TOKEN, project_name);
            rendered.push('\t');
            rendered.push_str(&command);
            rendered.push('\n');
        }
    }

    rendered
}

#[cfg(test)]
mod tests;
