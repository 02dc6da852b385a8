use copo_classifier::ClassificationResult;

/// Plain-text score sheet: one line per CO in rule order, then the prediction.
pub fn format_score_report(result: &ClassificationResult) -> String {
    let mut out = String::new();
    for (co, score) in result.scores.iter() {
        let matched = result
            .matched_keywords
            .get(co)
            .map(Vec::as_slice)
            .unwrap_or(&[]);
        if *score == 0 || matched.is_empty() {
            out.push_str(&format!("{co}: {score} (no match)\n"));
        } else {
            let keywords: Vec<&str> = matched.iter().map(|hit| hit.keyword.as_str()).collect();
            out.push_str(&format!("{co}: {score} ({})\n", keywords.join(", ")));
        }
    }
    out.push_str(&format!(
        "Predicted: {}\n",
        result.best_co.as_deref().unwrap_or("none")
    ));
    out.push_str(&format!("POs: {}\n", result.pos.join(", ")));
    out
}
