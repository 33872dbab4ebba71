//! requirements.txt parser
//!
//! Only package names are extracted. Everything from the first `=` on is
//! dropped, so pins like `requests==2.31.0` yield `requests`.
//!
//! Format examples:
//! ```text
//! # web stack
//! requests==2.31.0
//! flask
//! ```

/// Extracts package names from requirements file content, in file order
pub fn parse_requirements(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let name = line.split('=').next()?.trim();
            (!name.is_empty()).then(|| name.to_string())
        })
        .collect()
}
