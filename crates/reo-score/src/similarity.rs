/// Levenshtein edit distance over Unicode scalar values, so accented and
/// ʻokina characters count as single edits.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut dp = vec![vec![0; b.len() + 1]; a.len() + 1];

    for i in 0..=a.len() {
        dp[i][0] = i;
    }
    for j in 0..=b.len() {
        dp[0][j] = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            dp[i][j] = (dp[i - 1][j] + 1)
                .min(dp[i][j - 1] + 1)
                .min(dp[i - 1][j - 1] + cost);
        }
    }
    dp[a.len()][b.len()]
}

/// Normalized similarity `(max_len - distance) / max_len` in [0, 1].
///
/// Two empty strings are a vacuous perfect match. Inputs are compared as
/// given; callers normalize with [`normalize`] first.
pub fn similarity(spoken: &str, target: &str) -> f64 {
    let max_len = spoken.chars().count().max(target.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    let distance = levenshtein(spoken, target);
    (max_len - distance) as f64 / max_len as f64
}

/// Similarity as a rounded integer percent in [0, 100].
pub fn accuracy(spoken: &str, target: &str) -> u8 {
    (similarity(spoken, target) * 100.0).round() as u8
}

/// Canonical form for comparison: trimmed and lowercased.
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}
