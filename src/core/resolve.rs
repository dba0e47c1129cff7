//! Path resolution against the virtual filesystem.
//!
//! Turns a user-typed path token plus the current directory into a canonical
//! path. Resolution is pure: it never touches navigation state, and apart
//! from the `..` walk it does not check that the result exists. Callers
//! validate existence and kind.
//!
//! Rules, applied in order:
//!
//! 1. `""` resolves to the current directory.
//! 2. A leading `/` (or `~/`) on a longer token is stripped and the rest is
//!    resolved relative to the root. Repeats while the prefix is present.
//! 3. `/` alone is the root.
//! 4. A token with any `..` segment is walked segment by segment from the
//!    base directory. `..` never climbs above the root, and every named
//!    segment must be an existing directory.
//! 5. The current directory itself or `.` resolve to the current directory,
//!    `~` to the root.
//! 6. A token naming an existing directory at or below the root, as written,
//!    is accepted as is; anything else is joined onto the current directory.

use crate::config::{ROOT_ALIAS, SEPARATOR};
use crate::core::VirtualFs;
use crate::core::error::ResolveError;

/// Resolve `token` relative to `current` into a canonical path.
pub fn resolve(fs: &VirtualFs, current: &str, token: &str) -> Result<String, ResolveError> {
    let token = token.replace('\\', "/");
    let mut token = token.as_str();
    let mut base = current;

    loop {
        if token.len() > 1
            && let Some(rest) = token.strip_prefix(SEPARATOR)
        {
            token = rest;
            base = fs.root();
        } else if let Some(rest) = token.strip_prefix("~/") {
            token = rest;
            base = fs.root();
        } else {
            break;
        }
    }

    if token.is_empty() {
        return Ok(base.to_string());
    }

    if token.len() == 1 && token.starts_with(SEPARATOR) {
        return Ok(fs.root().to_string());
    }

    if token.split(SEPARATOR).any(|segment| segment == "..") {
        return walk(fs, base, token);
    }

    if token == base || token == "." {
        return Ok(base.to_string());
    }
    if token == ROOT_ALIAS {
        return Ok(fs.root().to_string());
    }

    let normalized = normalize(token);
    if normalized.is_empty() {
        return Ok(base.to_string());
    }
    if fs.is_directory(&normalized) && fs.is_within_root(&normalized) {
        return Ok(normalized);
    }
    Ok(join_path(base, &normalized))
}

/// Fold the token's segments over a stack seeded with `base`.
fn walk(fs: &VirtualFs, base: &str, token: &str) -> Result<String, ResolveError> {
    let floor = depth(fs.root());
    let mut stack: Vec<&str> = base.split(SEPARATOR).filter(|s| !s.is_empty()).collect();

    for segment in token.split(SEPARATOR) {
        match segment {
            "" | "." => {}
            ".." => {
                if stack.len() > floor {
                    stack.pop();
                }
            }
            name => {
                stack.push(name);
                let prefix = stack.join("/");
                if !fs.is_directory(&prefix) {
                    return Err(ResolveError::MissingIntermediate(prefix));
                }
            }
        }
    }

    Ok(stack.join("/"))
}

/// Join a relative path onto a canonical directory path.
pub fn join_path(base: &str, rest: &str) -> String {
    if base.is_empty() {
        rest.to_string()
    } else if rest.is_empty() {
        base.to_string()
    } else {
        format!("{}{}{}", base, SEPARATOR, rest)
    }
}

/// Drop empty and `.` segments.
fn normalize(token: &str) -> String {
    token
        .split(SEPARATOR)
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .collect::<Vec<_>>()
        .join("/")
}

/// Number of segments in a canonical path.
fn depth(path: &str) -> usize {
    path.split(SEPARATOR).filter(|s| !s.is_empty()).count()
}
