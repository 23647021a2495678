//! Diff rendering for fixture comparison.

/// Render a diff between expected and actual output.
///
/// Outputs are usually single-line, so each differing line also reports the
/// column of the first diverging character.
#[must_use]
pub fn render_diff(expected: &str, actual: &str) -> String {
    if expected == actual {
        return String::from("[identical]");
    }

    let mut out = String::from("--- expected\n+++ actual\n");
    let exp: Vec<&str> = expected.lines().collect();
    let act: Vec<&str> = actual.lines().collect();
    for i in 0..exp.len().max(act.len()) {
        match (exp.get(i), act.get(i)) {
            (Some(e), Some(a)) if e == a => {}
            (Some(e), Some(a)) => {
                let col = first_divergence(e, a) + 1;
                out.push_str(&format!("@@ line {}, col {col} @@\n-{e}\n+{a}\n", i + 1));
            }
            (Some(e), None) => out.push_str(&format!("@@ line {} @@\n-{e}\n", i + 1)),
            (None, Some(a)) => out.push_str(&format!("@@ line {} @@\n+{a}\n", i + 1)),
            (None, None) => {}
        }
    }
    out
}

fn first_divergence(a: &str, b: &str) -> usize {
    a.chars()
        .zip(b.chars())
        .take_while(|(x, y)| x == y)
        .count()
}
