//! Idempotent textual patches for generated TypeScript sources.
//!
//! Each operation is a pure text-in/text-out function over the narrow,
//! self-generated source shapes this tool emits — regular-expression
//! matching, not a syntax tree. The contract is match-or-no-op: when the
//! expected pattern is absent the input comes back unchanged, because a miss
//! means a template/version mismatch rather than a recoverable runtime
//! error. Every patcher also checks that its edit is not already present, so
//! re-running a command never duplicates text.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

// ─────────────────────────────────────────────────────────────────────────────
// Regex Patterns
// ─────────────────────────────────────────────────────────────────────────────

/// Matches the first constructor parameter list, non-greedy up to the first
/// closing parenthesis.
static CONSTRUCTOR_PARAMS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)constructor\s*\((.*?)\)").expect("invalid CONSTRUCTOR_PARAMS_REGEX")
});

/// Matches a constructor with an *empty* body: `constructor(...) { }`.
/// A constructor that already contains statements does not match.
static EMPTY_CONSTRUCTOR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"constructor\s*\([^)]*\)\s*\{\s*\}").expect("invalid EMPTY_CONSTRUCTOR_REGEX")
});

/// Matches an NgModule `declarations: [...]` array up to its first closing
/// bracket.
static DECLARATIONS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"declarations:\s*\[[^\]]*\]").expect("invalid DECLARATIONS_REGEX")
});

// ─────────────────────────────────────────────────────────────────────────────
// Outcome
// ─────────────────────────────────────────────────────────────────────────────

/// Outcome of a patch operation.
///
/// The text is always present; `applied` distinguishes "matched and edited"
/// from a no-op passthrough so callers and tests never have to diff strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patched {
    /// Resulting source text (identical to the input when `applied` is false).
    pub text: String,

    /// Whether the edit matched and modified the input.
    pub applied: bool,
}

impl Patched {
    fn applied(text: String) -> Self {
        Self {
            text,
            applied: true,
        }
    }

    fn unchanged(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            applied: false,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operations
// ─────────────────────────────────────────────────────────────────────────────

/// Ensure `members` appear in the named import of `module_specifier`.
///
/// When the file already imports from the specifier, the missing members are
/// appended to its brace list, preserving the original specifier and quote
/// style. When it does not, a fresh import line is prepended. Members that
/// are already present are never duplicated.
pub fn add_import_members(text: &str, module_specifier: &str, members: &[&str]) -> Patched {
    let import_re = Regex::new(&format!(
        r#"import\s*\{{([^}}]*)\}}\s*from\s*(['"]){}['"]"#,
        regex::escape(module_specifier)
    ))
    .expect("invalid named-import regex");

    let Some(caps) = import_re.captures(text) else {
        // No named import for this specifier yet: prepend a fresh one with
        // whatever the file does not already mention.
        let missing: Vec<&str> = members
            .iter()
            .copied()
            .filter(|member| !text.contains(member))
            .collect();
        if missing.is_empty() {
            debug!(module = module_specifier, "import members already present");
            return Patched::unchanged(text);
        }
        let line = format!(
            "import {{ {} }} from '{}';\n",
            missing.join(", "),
            module_specifier
        );
        return Patched::applied(format!("{line}{text}"));
    };

    let whole = caps.get(0).expect("whole match");
    let existing = caps.get(1).map_or("", |m| m.as_str());
    let quote = caps.get(2).map_or("'", |m| m.as_str());

    let mut names: Vec<String> = existing
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect();

    let before = names.len();
    for member in members {
        if !names.iter().any(|name| name == member) {
            names.push((*member).to_string());
        }
    }
    if names.len() == before {
        debug!(module = module_specifier, "import members already present");
        return Patched::unchanged(text);
    }

    let statement = format!(
        "import {{ {} }} from {quote}{module_specifier}{quote}",
        names.join(", ")
    );
    let mut out = String::with_capacity(text.len() + statement.len());
    out.push_str(&text[..whole.start()]);
    out.push_str(&statement);
    out.push_str(&text[whole.end()..]);
    Patched::applied(out)
}

/// Append `parameter` to the first constructor's parameter list.
///
/// Existing parameters are split on newlines, trimmed, and stripped of
/// trailing commas; the rebuilt signature puts one parameter per line with a
/// trailing comma before the closing parenthesis. Returns the input
/// unchanged when no constructor signature is found or the parameter is
/// already declared.
pub fn add_constructor_parameter(text: &str, parameter: &str) -> Patched {
    let Some(caps) = CONSTRUCTOR_PARAMS_REGEX.captures(text) else {
        debug!("no constructor parameter list found");
        return Patched::unchanged(text);
    };
    let whole = caps.get(0).expect("whole match");
    let existing = caps.get(1).map_or("", |m| m.as_str());

    let mut params: Vec<String> = existing
        .split('\n')
        .map(|line| line.trim().trim_end_matches(',').trim_end().to_string())
        .filter(|line| !line.is_empty())
        .collect();

    let parameter = parameter.trim();
    if params.iter().any(|p| p == parameter) {
        debug!("constructor parameter already present");
        return Patched::unchanged(text);
    }
    params.push(parameter.to_string());

    let signature = format!("constructor(\n  {},\n)", params.join(",\n  "));
    let mut out = String::with_capacity(text.len() + signature.len());
    out.push_str(&text[..whole.start()]);
    out.push_str(&signature);
    out.push_str(&text[whole.end()..]);
    Patched::applied(out)
}

/// Insert `field_declaration` immediately after an *empty* constructor.
///
/// Only `constructor(...) { }` bodies match; a constructor that already has
/// statements is left untouched, which makes the operation safe to run
/// unconditionally against freshly generated components. Unchanged when the
/// declaration is already present.
pub fn add_field_after_constructor(text: &str, field_declaration: &str) -> Patched {
    let field = field_declaration.trim();
    if text.contains(field) {
        debug!("field declaration already present");
        return Patched::unchanged(text);
    }

    let Some(found) = EMPTY_CONSTRUCTOR_REGEX.find(text) else {
        debug!("no empty constructor body found");
        return Patched::unchanged(text);
    };

    let mut out = String::with_capacity(text.len() + field.len() + 4);
    out.push_str(&text[..found.end()]);
    out.push_str("\n\n  ");
    out.push_str(field);
    out.push_str(&text[found.end()..]);
    Patched::applied(out)
}

/// Register `class_name` in the module's `declarations: [...]` array and
/// prepend its import statement at the top of the file.
///
/// Unchanged when the class is already referenced anywhere in the file (in
/// which case no import is prepended either) or when no declarations array
/// exists.
pub fn register_in_declarations(text: &str, class_name: &str, import_path: &str) -> Patched {
    if text.contains(class_name) {
        debug!(class = class_name, "class already referenced in module");
        return Patched::unchanged(text);
    }

    let Some(found) = DECLARATIONS_REGEX.find(text) else {
        debug!("no declarations array found");
        return Patched::unchanged(text);
    };

    let block = found.as_str();
    let inner = &block[..block.len() - 1];
    let updated = if inner.trim_end().ends_with('[') {
        format!("{inner}{class_name}]")
    } else {
        format!("{inner}, {class_name}]")
    };

    let import_line = format!("import {{ {class_name} }} from '{import_path}';\n");
    let mut out = String::with_capacity(text.len() + updated.len() + import_line.len());
    out.push_str(&import_line);
    out.push_str(&text[..found.start()]);
    out.push_str(&updated);
    out.push_str(&text[found.end()..]);
    Patched::applied(out)
}
