use std::path::Path;

/// Formats the single result line for the selected counts.
///
/// With a file path the values are space-joined and followed by the path.
/// Without one (stdin), every value carries its own leading tab and values
/// are joined by a single space, e.g. `\t0 \t3 \t13`. Existing scripts
/// parse that exact byte layout, so it is preserved as-is.
pub fn result_line(values: &[usize], path: Option<&Path>) -> String {
    match path {
        Some(path) => {
            let joined = values
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            format!("{joined} {}", path.display())
        }
        None => values
            .iter()
            .map(|value| format!("\t{value}"))
            .collect::<Vec<_>>()
            .join(" "),
    }
}
