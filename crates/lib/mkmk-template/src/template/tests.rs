use super::*;

// Helper to pull the target names out of rendered text, in file order.
fn target_names(rendered: &str) -> Vec<&str> {
    rendered
        .lines()
        .filter(|line| !line.starts_with('#') && !line.starts_with('\t') && line.contains(':'))
        .map(|line| line.split(':').next().unwrap())
        .collect()
}

// Helper to find the command block of a single target.
fn commands_of<'a>(rendered: &'a str, target: &str) -> Vec<&'a str> {
    let mut commands = Vec::new();
    let mut in_target = false;

    for line in rendered.lines() {
        if let Some(stripped) = line.strip_prefix('\t') {
            if in_target {
                commands.push(stripped);
            }
        } else {
            in_target = line.split(':').next() == Some(target);
        }
    }

    commands
}

#[test]
fn test_render_contains_all_targets_in_order() {
    let rendered = render("teahaz");
    let names = target_names(&rendered);

    assert_eq!(
        names,
        vec![
            "install",
            "all",
            "edit",
            "format",
            "typecheck",
            "badge",
            "lint",
            "todo",
            "docs"
        ],
        "targets must appear exactly once, in template order"
    );
}

#[test]
fn test_render_substitutes_every_token() {
    let rendered = render("teahaz");

    assert!(
        !rendered.contains(PROJECT_TOKEN),
        "no substitution point may survive rendering"
    );
    assert!(rendered.contains("black teahaz"), "format should target the project");
    assert!(
        rendered.contains("mypy teahaz --ignore-missing-imports"),
        "typecheck should target the project"
    );
    assert!(
        rendered.contains("mkbadge \"flake8 teahaz --ignore=E203\""),
        "badge should embed the literal lint invocation"
    );
}

#[test]
fn test_docs_target_body_is_pinned() {
    let rendered = render("teahaz");
    let commands = commands_of(&rendered, "docs");

    assert_eq!(commands, vec!["pdoc --docformat google -o docs teahaz"]);
}

#[test]
fn test_lint_never_fails_the_build() {
    let rendered = render("teahaz");
    let commands = commands_of(&rendered, "lint");

    assert_eq!(commands.len(), 1, "lint has a single command");
    assert!(
        commands[0].starts_with('-'),
        "lint must carry Make's ignore-errors prefix"
    );
}

#[test]
fn test_todo_defers_shell_substitution() {
    let rendered = render("teahaz");
    let commands = commands_of(&rendered, "todo");

    assert_eq!(commands, vec!["todor $$(grep -rl TODO teahaz)"]);
}

#[test]
fn test_aggregate_targets_have_no_commands() {
    let rendered = render("teahaz");

    assert!(rendered.contains("\nall: install edit docs\n"));
    assert!(rendered.contains("\nedit: format lint typecheck badge\n"));
    assert!(commands_of(&rendered, "all").is_empty());
    assert!(commands_of(&rendered, "edit").is_empty());
}

#[test]
fn test_render_is_idempotent() {
    assert_eq!(render("teahaz"), render("teahaz"));
}

#[test]
fn test_header_warns_against_hand_edits() {
    let rendered = render("teahaz");
    let first_line = rendered.lines().next().unwrap();

    assert!(first_line.starts_with('#'), "header must be a comment");
    assert!(
        first_line.contains("regenerated") && first_line.contains("Do not edit"),
        "header must state the file is regenerated and not hand-edited"
    );
    assert!(rendered.ends_with('\n'), "rendered file ends with a newline");
}
